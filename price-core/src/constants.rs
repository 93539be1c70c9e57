/// Маршрут эндпоинта одиночной цены относительно корня API
pub const PRICE_BASE_PATH: &str = "data/price";

/// Агрегированная "биржа" CryptoCompare, используется по умолчанию
pub const DEFAULT_EXCHANGE: &str = "CCCAGG";

/// Корень публичного API (обязательно со слешем в конце)
pub const DEFAULT_API_ROOT: &str = "https://min-api.cryptocompare.com/";
