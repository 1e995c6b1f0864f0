pub mod placement;
pub mod render;
