pub mod error;
pub mod header;
pub mod image;
pub mod imgproc;

pub use error::LoadError;
