mod overview_chart;
mod summary;
mod term_tabs;
mod trend_chart;
mod view;

pub use view::Predictions;
