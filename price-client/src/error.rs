use price_core::DecodeError;
use reqwest::StatusCode;
use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Ошибки одного вызова `data/price`. Любая из них означает "цен нет".
#[derive(Debug, Error)]
pub(crate) enum ClientError {
    /// Сеть/HTTP, как есть от reqwest
    #[error("http transport error")]
    Transport(#[source] reqwest::Error),

    #[error("server responded with {status} for {url}")]
    Status { status: StatusCode, url: String },

    #[error("invalid request url")]
    InvalidUrl(#[from] url::ParseError),

    #[error("api key is not a valid header value")]
    InvalidApiKey(#[source] InvalidHeaderValue),

    /// Ошибка API в теле ответа или нечисловое значение
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub(crate) type Result<T> = std::result::Result<T, ClientError>;
