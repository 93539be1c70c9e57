use std::time::Duration;

pub(crate) use price_core::{DEFAULT_API_ROOT, DEFAULT_EXCHANGE, PRICE_BASE_PATH};

/// Таймаут на весь HTTP-запрос (connect + чтение тела)
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Переменная окружения с API-ключом
pub(crate) const API_KEY_ENV: &str = "CRYPTOCOMPARE_API_KEY";

pub(crate) const USER_AGENT: &str = concat!("price-client/", env!("CARGO_PKG_VERSION"));
