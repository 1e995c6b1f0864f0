pub type BrickscaleResult<T> = Result<T, BrickscaleError>;

#[derive(thiserror::Error, Debug)]
pub enum BrickscaleError {
    /// A zero source/target dimension, or a pixel count that does not match `width * height`.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// A hex matrix that cannot be turned back into a full buffer.
    #[error("incomplete sample: {0}")]
    IncompleteSample(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("tiler error: {0}")]
    Tiler(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrickscaleError {
    pub fn invalid_dimension(msg: impl Into<String>) -> Self {
        Self::InvalidDimension(msg.into())
    }

    pub fn incomplete_sample(msg: impl Into<String>) -> Self {
        Self::IncompleteSample(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn tiler(msg: impl Into<String>) -> Self {
        Self::Tiler(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
