//! Разбор ответа `data/price`.
//!
//! Успешный ответ: `{"ETH": 3000.0, "USD": 50000.0}`.
//! Ошибка приходит в том же объекте: `{"Response": "Error", "Message": "..."}`.

use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::types::Price;

const RESPONSE_KEY: &str = "Response";
const MESSAGE_KEY: &str = "Message";
const ERROR_TAG: &str = "Error";

/// Текст ошибки, если API не прислал `Message`
pub const MISSING_MESSAGE: &str = "API reported an error without a message";

/// Одно JSON-значение ответа, разобранное по типу
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Число (цена)
    Number(f64),
    /// Строка (служебные поля `Response`/`Message`)
    Text(&'a str),
    /// Всё остальное, с названием JSON-типа
    Other(&'static str),
}

impl<'a> From<&'a Value> for RawValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(v) => RawValue::Number(v),
                None => RawValue::Other("number"),
            },
            Value::String(s) => RawValue::Text(s),
            other => RawValue::Other(json_kind(other)),
        }
    }
}

impl RawValue<'_> {
    fn kind(&self) -> &'static str {
        match self {
            RawValue::Number(_) => "number",
            RawValue::Text(_) => "string",
            RawValue::Other(kind) => kind,
        }
    }
}

/// Что лежит в объекте: ошибка API или данные
#[derive(Debug, PartialEq)]
pub enum ResponseKind<'a> {
    /// `"Response": "Error"` и текст ошибки
    Error(String),
    /// Обычный объект с ценами
    Data(&'a Map<String, Value>),
}

/// Проверяет служебный тег ошибки
pub fn classify(root: &Map<String, Value>) -> ResponseKind<'_> {
    let tagged = matches!(
        root.get(RESPONSE_KEY).map(RawValue::from),
        Some(RawValue::Text(ERROR_TAG))
    );

    if !tagged {
        return ResponseKind::Data(root);
    }

    let message = match root.get(MESSAGE_KEY).map(RawValue::from) {
        Some(RawValue::Text(msg)) => msg.to_string(),
        _ => MISSING_MESSAGE.to_string(),
    };

    ResponseKind::Error(message)
}

/// Разбирает тело ответа в список цен, отсортированный по символу.
///
/// Пустой объект даёт пустой список. Любая ошибка прерывает разбор целиком,
/// частичный результат не возвращается.
pub fn decode_prices(body: &Value) -> Result<Vec<Price>, DecodeError> {
    let root = body
        .as_object()
        .ok_or_else(|| DecodeError::NotAnObject(json_kind(body)))?;

    let data = match classify(root) {
        ResponseKind::Error(message) => return Err(DecodeError::Api(message)),
        ResponseKind::Data(data) => data,
    };

    let mut prices = Vec::with_capacity(data.len());

    for (key, value) in data {
        match RawValue::from(value) {
            RawValue::Number(v) => prices.push(Price::new(key.as_str(), v)),
            // "Response": "Success" и подобное: служебные строки, не данные
            RawValue::Text(_) if is_reserved(key) => continue,
            other => {
                return Err(DecodeError::NonNumeric {
                    key: key.clone(),
                    found: other.kind(),
                });
            }
        }
    }

    sort_by_name(&mut prices);

    Ok(prices)
}

/// Стабильная сортировка по символу (обычное сравнение строк)
pub fn sort_by_name(prices: &mut [Price]) {
    prices.sort_by(|a, b| a.name.cmp(&b.name));
}

fn is_reserved(key: &str) -> bool {
    key == RESPONSE_KEY || key == MESSAGE_KEY
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
