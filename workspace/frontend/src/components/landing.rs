mod call_to_action;
mod footer;
mod header;
mod hero;
mod showcase;
mod testimonials;
mod view;

pub use view::Landing;
