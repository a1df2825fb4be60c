mod history;
mod preview;
mod view;

pub use view::UploadCsv;
