use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgGroup, Parser};
use price_core::PriceRequest;
use price_core::symbols::{parse_symbols_csv, read_symbols_from_path};
use url::Url;

use crate::config;

/// Price Client - текущие цены CryptoCompare (эндпоинт data/price).
///
/// Один GET-запрос: fsym в одну или несколько валют tsyms.
/// Результат печатается отсортированным по символу.
#[derive(Parser, Debug, Clone)]
#[command(name = "price-client", version, about)]
#[command(
    group(
        ArgGroup::new("tsyms_source")
            .required(false)
            .multiple(false)
            .args(["tsyms_file", "tsyms"])
    )
)]
pub(crate) struct Args {
    /// Базовый символ, например BTC
    #[arg(long)]
    pub(crate) fsym: String,

    /// Целевые символы строкой, например: "USD,EUR" или "usd, eur, eth".
    /// Нельзя вместе с --tsyms-file
    #[arg(long, conflicts_with = "tsyms_file")]
    pub(crate) tsyms: Option<String>,

    /// Файл целевых символов (по одному на строку, поддержка # комментариев).
    /// Нельзя вместе с --tsyms
    #[arg(long, conflicts_with = "tsyms")]
    pub(crate) tsyms_file: Option<PathBuf>,

    /// Биржа (параметр `e`); пустая строка убирает его из запроса
    #[arg(long, default_value = config::DEFAULT_EXCHANGE)]
    pub(crate) exchange: String,

    /// Имя приложения (параметр `extraParams`)
    #[arg(long, default_value = "")]
    pub(crate) extra_params: String,

    /// Запросить подписанный ответ (`sign=true`)
    #[arg(long)]
    pub(crate) sign: bool,

    /// Не конвертировать через BTC, если прямой пары нет (`tryConversion=false`)
    #[arg(long)]
    pub(crate) no_try_conversion: bool,

    /// Корень API, обязательно со слешем в конце
    #[arg(long, default_value = config::DEFAULT_API_ROOT)]
    pub(crate) api_root: String,

    /// API-ключ, уходит в заголовок `authorization: Apikey <key>`
    #[arg(long, env = config::API_KEY_ENV, hide_env_values = true)]
    pub(crate) api_key: Option<String>,

    /// Печатать результат как JSON-массив
    #[arg(long)]
    pub(crate) json: bool,
}

impl Args {
    /// Валидация аргументов (fsym не пустой, api-root абсолютный и т.д.)
    pub(crate) fn validate(&self) -> Result<()> {
        if self.fsym.trim().is_empty() {
            bail!("--fsym is empty");
        }

        let root = Url::parse(&self.api_root)
            .with_context(|| format!("--api-root is not a valid url: {}", self.api_root))?;
        if !matches!(root.scheme(), "http" | "https") {
            bail!("--api-root must be an http(s) url (got: {})", self.api_root);
        }
        // "https://host" парсится в "https://host/", а "https://host/api" потерял бы "api" при join
        if !root.path().ends_with('/') {
            bail!("--api-root path must end with '/' (got: {})", self.api_root);
        }

        if let Some(path) = &self.tsyms_file {
            let md = std::fs::metadata(path)
                .with_context(|| format!("tsyms file not found: {:?}", path))?;
            if !md.is_file() {
                bail!("--tsyms-file must point to a file: {:?}", path);
            }
        }

        Ok(())
    }

    /// Целевые символы из `--tsyms` или `--tsyms-file`.
    ///
    /// Без обоих флагов список пустой: `tsyms` просто не попадёт в запрос.
    /// Явно указанный, но пустой источник считается ошибкой пользователя.
    pub(crate) fn tsyms(&self) -> Result<Vec<String>> {
        let (tsyms, source) = match (&self.tsyms, &self.tsyms_file) {
            (Some(raw), _) => (parse_symbols_csv(raw), format!("--tsyms {raw:?}")),
            (None, Some(path)) => {
                let tsyms = read_symbols_from_path(path)
                    .with_context(|| format!("failed to read --tsyms-file {:?}", path))?;
                (tsyms, format!("--tsyms-file {:?}", path))
            }
            (None, None) => return Ok(Vec::new()),
        };

        if tsyms.is_empty() {
            bail!("{source} contains no symbols");
        }

        Ok(tsyms)
    }

    pub(crate) fn price_request(&self, tsyms: Vec<String>) -> PriceRequest {
        PriceRequest::new(self.fsym.trim().to_ascii_uppercase(), tsyms)
            .with_exchange(self.exchange.trim())
            .with_extra_params(self.extra_params.trim())
            .with_sign(self.sign)
            .with_try_conversion(!self.no_try_conversion)
    }
}
