use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_EXCHANGE;

/// Цена одного целевого символа
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// Символ валюты, например `ETH`
    pub name: String,
    /// Цена одной единицы `fsym` в этой валюте
    pub value: f64,
}

impl Price {
    /// Создаёт пару (символ, цена)
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Параметры запроса к `data/price`.
///
/// Собирается один раз через [`PriceRequest::new`] и `with_*`,
/// дальше только читается.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Базовый символ (`fsym`)
    pub fsym: String,
    /// Целевые символы (`tsyms`), порядок сохраняется как есть
    pub tsyms: Vec<String>,
    /// Идентификатор биржи (`e`)
    pub exchange: String,
    /// Имя приложения (`extraParams`)
    pub extra_params: String,
    /// Флаг `sign`
    pub sign: bool,
    /// Флаг `tryConversion`
    pub try_conversion: bool,
}

impl PriceRequest {
    /// Запрос с дефолтами: `e=CCCAGG`, `sign=false`, `tryConversion=true`
    pub fn new(fsym: impl Into<String>, tsyms: Vec<String>) -> Self {
        Self {
            fsym: fsym.into(),
            tsyms,
            exchange: DEFAULT_EXCHANGE.to_string(),
            extra_params: String::new(),
            sign: false,
            try_conversion: true,
        }
    }

    /// Другая биржа; пустая строка убирает `e` из запроса
    pub fn with_exchange(mut self, exchange: impl Into<String>) -> Self {
        self.exchange = exchange.into();
        self
    }

    /// Значение `extraParams`
    pub fn with_extra_params(mut self, extra_params: impl Into<String>) -> Self {
        self.extra_params = extra_params.into();
        self
    }

    /// Флаг `sign`
    pub fn with_sign(mut self, sign: bool) -> Self {
        self.sign = sign;
        self
    }

    /// Флаг `tryConversion`
    pub fn with_try_conversion(mut self, try_conversion: bool) -> Self {
        self.try_conversion = try_conversion;
        self
    }
}
