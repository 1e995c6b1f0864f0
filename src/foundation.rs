pub mod buffer;
pub mod error;
pub mod paths;
pub mod pixel;
