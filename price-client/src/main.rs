//! Точка входа `price-client`.
//!
//! Жизненный цикл:
//! - парсинг CLI и загрузка списка целевых символов
//! - сборка запроса и одноразовый GET `data/price`
//! - проверка ошибки API в теле ответа и разбор цен
//! - печать цен, отсортированных по символу

mod cli;
mod config;
mod error;
mod http;
mod output;
mod service;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use crate::http::HttpTransport;
use crate::service::PriceService;

fn main() -> anyhow::Result<()> {
    // Логи через RUST_LOG=info/debug
    env_logger::init();

    let args = cli::Args::parse();
    args.validate()?;

    let tsyms = args.tsyms()?;
    let request = args.price_request(tsyms);

    info!(
        "Starting price-client: api_root={}, fsym={}, tsyms={}, exchange={}, api_key={}",
        args.api_root,
        request.fsym,
        request.tsyms.join(","),
        request.exchange,
        if args.api_key.is_some() { "set" } else { "none" },
    );

    let transport = HttpTransport::new(&args.api_root, args.api_key.as_deref())
        .context("failed to set up http transport")?;
    let service = PriceService::new(transport);

    let (prices, meta) = service
        .list(Some(&request))
        .with_context(|| format!("failed to fetch prices for {}", request.fsym))?;
    debug!("response status {}, {} headers", meta.status, meta.headers.len());

    let stdout = std::io::stdout().lock();
    if args.json {
        output::write_json(stdout, &prices)?;
    } else {
        output::write_plain(stdout, &prices)?;
    }

    Ok(())
}
