//! # price-core
//!
//! Базовые типы для клиента CryptoCompare `data/price`.
//!
//! Этот крейт содержит:
//!
//! - [`query`] — сборка query-строки из [`PriceRequest`]
//! - [`response`] — разбор JSON-ответа в отсортированный список [`Price`]
//! - [`symbols`] — чтение и нормализация списка символов из текста/файла
//! - [`types`] — доменные типы
//! - [`error`] — ошибки разбора ответа
//!
//! ## Быстрый пример: query-строка
//!
//! ```rust
//! use price_core::{PriceRequest, PRICE_BASE_PATH};
//!
//! let req = PriceRequest::new("BTC", vec!["ETH".to_string(), "USD".to_string()]);
//! assert_eq!(
//!     req.query_string(PRICE_BASE_PATH),
//!     "data/price?fsym=BTC&tsyms=ETH,USD&e=CCCAGG&sign=false&tryConversion=true",
//! );
//! ```
//!
//! ## Пример: разбор ответа
//!
//! ```rust
//! use price_core::response::decode_prices;
//! use price_core::{DecodeError, Price};
//!
//! let body = serde_json::json!({"USD": 50000.0, "ETH": 16.5});
//! let prices = decode_prices(&body).unwrap();
//! assert_eq!(prices, vec![Price::new("ETH", 16.5), Price::new("USD", 50000.0)]);
//!
//! let body = serde_json::json!({"Response": "Error", "Message": "fsym is a required param."});
//! assert_eq!(
//!     decode_prices(&body),
//!     Err(DecodeError::Api("fsym is a required param.".to_string())),
//! );
//! ```
//!
//! ## Пример: чтение символов
//!
//! ```rust
//! use price_core::symbols::read_symbols;
//! use std::io::Cursor;
//!
//! let input = "usd\n# comment\n eth \nUSD\n";
//! let symbols = read_symbols(Cursor::new(input)).unwrap();
//! assert_eq!(symbols, vec!["USD".to_string(), "ETH".to_string()]);
//! ```
//!
//! ## Дизайн
//!
//! Здесь нет сети и runtime: только чистые функции над типами.
//! HTTP-транспорт живёт в `price-client`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Сборка query-строки для `data/price`.
pub mod query;

/// Разбор ответа и сортировка цен.
pub mod response;

/// Чтение/нормализация списка символов из текста и файлов.
pub mod symbols;

/// Доменные типы (запрос, цена).
pub mod types;

/// Ошибки `price-core`.
pub mod error;

/// Общие константы
mod constants;
pub use constants::{DEFAULT_API_ROOT, DEFAULT_EXCHANGE, PRICE_BASE_PATH};

// --- Re-exports (публичный фасад API) ---

pub use crate::error::DecodeError;
pub use crate::response::decode_prices;
pub use crate::types::{Price, PriceRequest};
