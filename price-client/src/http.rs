use log::debug;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde_json::Value;
use url::Url;

use crate::config::{HTTP_TIMEOUT, USER_AGENT};
use crate::error::{ClientError, Result};

/// Метаданные HTTP-ответа, которые отдаём наверх вместе с ценами
#[derive(Debug, Clone)]
pub(crate) struct ResponseMeta {
    pub(crate) status: StatusCode,
    pub(crate) headers: HeaderMap,
}

/// Разобранное JSON-тело + метаданные
#[derive(Debug, Clone)]
pub(crate) struct Reply {
    pub(crate) body: Value,
    pub(crate) meta: ResponseMeta,
}

/// GET по пути относительно корня API, тело разбирается как JSON
pub(crate) trait Transport {
    fn get_json(&self, path: &str) -> Result<Reply>;
}

pub(crate) struct HttpTransport {
    client: Client,
    api_root: Url,
}

impl HttpTransport {
    /// `api_root` должен быть абсолютным и заканчиваться на `/`,
    /// иначе последний сегмент потеряется при join
    pub(crate) fn new(api_root: &str, api_key: Option<&str>) -> Result<Self> {
        let api_root = Url::parse(api_root)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(key) = api_key {
            let mut value = HeaderValue::from_str(&format!("Apikey {key}"))
                .map_err(ClientError::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { client, api_root })
    }
}

impl Transport for HttpTransport {
    fn get_json(&self, path: &str) -> Result<Reply> {
        let url = self.api_root.join(path)?;
        debug!("GET {url}");

        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(ClientError::Transport)?;

        let status = resp.status();
        let headers = resp.headers().clone();
        debug!("{url} -> {status}");

        if !status.is_success() {
            return Err(ClientError::Status {
                status,
                url: url.to_string(),
            });
        }

        let body: Value = resp.json().map_err(ClientError::Transport)?;

        Ok(Reply {
            body,
            meta: ResponseMeta { status, headers },
        })
    }
}
