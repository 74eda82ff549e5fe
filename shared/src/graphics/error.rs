use std::fmt;

#[derive(Debug)]
pub enum GraphicsError {
    Window(winit::error::OsError),
    Surface(pixels::Error),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::Window(_) => write!(f, "failed to create the window"),
            GraphicsError::Surface(_) => write!(f, "failed to acquire the rendering surface"),
        }
    }
}

impl std::error::Error for GraphicsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GraphicsError::Window(e) => Some(e),
            GraphicsError::Surface(e) => Some(e),
        }
    }
}

impl From<winit::error::OsError> for GraphicsError {
    fn from(e: winit::error::OsError) -> Self {
        GraphicsError::Window(e)
    }
}

impl From<pixels::Error> for GraphicsError {
    fn from(e: pixels::Error) -> Self {
        GraphicsError::Surface(e)
    }
}
