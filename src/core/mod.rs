pub mod catalog;
pub mod error;
pub mod image_format;
pub mod image_resolver;
