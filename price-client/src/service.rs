use log::{debug, info, warn};
use price_core::{DecodeError, Price, PriceRequest, decode_prices};

use crate::config::PRICE_BASE_PATH;
use crate::error::Result;
use crate::http::{ResponseMeta, Transport};

/// Клиент эндпоинта `data/price` поверх любого [`Transport`]
pub(crate) struct PriceService<T> {
    transport: T,
}

impl<T: Transport> PriceService<T> {
    pub(crate) fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Запрос → транспорт → разбор → сортировка.
    /// Без запроса уходит голый `data/price`.
    pub(crate) fn list(&self, request: Option<&PriceRequest>) -> Result<(Vec<Price>, ResponseMeta)> {
        let path = match request {
            Some(req) => req.query_string(PRICE_BASE_PATH),
            None => PRICE_BASE_PATH.to_string(),
        };
        debug!("price request path: {path}");

        let reply = self.transport.get_json(&path)?;

        let prices = decode_prices(&reply.body).inspect_err(|e| {
            if let DecodeError::Api(msg) = e {
                warn!("api reported an error: {msg}");
            }
        })?;

        info!("received {} prices (status {})", prices.len(), reply.meta.status);

        Ok((prices, reply.meta))
    }
}
