pub mod landing;
pub mod layout;
pub mod predictions;
pub mod upload;
pub mod visualization;
