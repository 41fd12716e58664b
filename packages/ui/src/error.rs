use thiserror::Error;

use crate::Lang;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("dictionary `{}` could not be loaded: {reason}", .lang.code())]
    Dictionary { lang: Lang, reason: String },

    #[error("browser call failed: {0}")]
    Eval(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl From<dioxus::document::EvalError> for SiteError {
    fn from(err: dioxus::document::EvalError) -> Self {
        SiteError::Eval(err.to_string())
    }
}

pub type Result<T, E = SiteError> = std::result::Result<T, E>;
