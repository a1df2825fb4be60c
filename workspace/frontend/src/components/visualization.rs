mod payments_chart;
mod product_card;
mod view;
mod weekly_chart;

pub use view::Visualization;
