use crate::types::PriceRequest;

impl PriceRequest {
    /// Собирает путь с query-строкой:
    /// "data/price?fsym=BTC&tsyms=ETH,USD&e=CCCAGG&sign=false&tryConversion=true"
    ///
    /// Порядок сегментов фиксирован: fsym, tsyms, e, extraParams, sign, tryConversion.
    /// Пустые необязательные поля пропускаются, значения не экранируются.
    pub fn query_string(&self, base_path: &str) -> String {
        let mut segments: Vec<String> = Vec::new();

        if !self.fsym.is_empty() {
            segments.push(format!("fsym={}", self.fsym));
        }

        if !self.tsyms.is_empty() {
            segments.push(format!("tsyms={}", self.tsyms.join(",")));
        }

        if !self.exchange.is_empty() {
            segments.push(format!("e={}", self.exchange));
        }

        if !self.extra_params.is_empty() {
            segments.push(format!("extraParams={}", self.extra_params));
        }

        segments.push(format!("sign={}", self.sign));
        segments.push(format!("tryConversion={}", self.try_conversion));

        if segments.is_empty() {
            return base_path.to_string();
        }

        format!("{}?{}", base_path, segments.join("&"))
    }
}
