// Every variant states *where* things went wrong.
// Pointer handling never produces one of these; only setup and presentation do.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Creating the window failed.
    #[error("window init error: {0}")]
    WindowInit(String),

    /// Updating the window buffer failed.
    #[error("window update error: {0}")]
    WindowUpdate(String),

    /// Loading or decoding the backdrop image failed.
    #[error("backdrop error: {0}")]
    Backdrop(String),

    /// A configuration value is unusable.
    #[error("config error: {0}")]
    Config(String),

    /// Two buffers that must match in size do not.
    #[error("size mismatch: expected {expected_w}x{expected_h}, got {got_w}x{got_h}")]
    SizeMismatch {
        expected_w: usize,
        expected_h: usize,
        got_w: usize,
        got_h: usize,
    },
}

impl Error {
    pub fn window_init(msg: impl Into<String>) -> Self {
        Self::WindowInit(msg.into())
    }

    pub fn window_update(msg: impl Into<String>) -> Self {
        Self::WindowUpdate(msg.into())
    }

    pub fn backdrop(msg: impl Into<String>) -> Self {
        Self::Backdrop(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
