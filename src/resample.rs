pub mod kernels;
pub mod mapping;
pub mod resampler;
