pub mod error;
pub mod percent;
pub mod profile;
pub mod series;
pub mod table;

pub use error::{ComputeError, Result};
pub use percent::{is_gain, parse_signed_percent};
pub use profile::profile_table;
pub use series::{demand_overview, store_trend, swap_axes};
pub use table::{ParsedTable, format_csv, parse_csv};
