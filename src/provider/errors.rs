use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("invalid api url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("http error {0}")]
    Http(reqwest::StatusCode),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl ProviderError {
    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Http(status)
        } else {
            Self::Transport(err.to_string())
        }
    }
}
