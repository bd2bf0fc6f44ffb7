pub type MenuResult<T> = Result<T, MenuError>;

#[derive(thiserror::Error, Debug)]
pub enum MenuError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("font error: {0}")]
    FontNotFound(String),

    #[error("render error: {0}")]
    Render(String),

    #[error("encode error: {0}")]
    Encode(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MenuError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn font_not_found(msg: impl Into<String>) -> Self {
        Self::FontNotFound(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// True when the error poisons the whole run rather than one scheme.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::FontNotFound(_) | Self::Validation(_))
    }
}
