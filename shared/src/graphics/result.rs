use super::error::GraphicsError;

pub type GraphicsResult<T> = Result<T, GraphicsError>;
