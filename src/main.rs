//! Entry point. Wires config -> quote -> engine -> report.

use anyhow::Context;
use chrono::Local;
use dotenvy::dotenv;
use serde_json::json;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use options_income::chain::{self, OptionContract};
use options_income::config::{AppConfig, OutputFormat, Strategy, CONFIG_ENV};
use options_income::market::current_market_status;
use options_income::quote::{QuoteSource, StaticQuotes};
use options_income::report::{covered_call_report, put_report, MetricEvaluation};
use options_income::types::OptionKind;
use options_income::{compute_covered_call, compute_put};

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    // Load config
    let path = AppConfig::resolve_path(std::env::var(CONFIG_ENV).ok(), std::env::args().nth(1));
    let cfg = AppConfig::load(&path).with_context(|| format!("loading {}", path.display()))?;

    let quotes = StaticQuotes::new([cfg.quote.clone()]);
    let quote = quotes.require(&cfg.quote.symbol)?;
    let today = cfg.output.today.unwrap_or_else(|| Local::now().date_naive());
    info!(
        "Quote {} @ {:.2}, today={}, market {}",
        quote.symbol,
        quote.current_price,
        today,
        current_market_status()
    );

    let (results, rows) = match cfg.strategy {
        Strategy::Put => {
            let Some(inputs) = cfg.put_inputs(&quote, today)? else {
                warn!("Enter required inputs to see calculations.");
                return Ok(());
            };
            let r = compute_put(&inputs, today);
            (json!(r), put_report(&r, &cfg.targets.put))
        }
        Strategy::CoveredCall => {
            let computed = cfg
                .call_inputs(&quote, today)?
                .and_then(|inputs| compute_covered_call(&inputs, today));
            let Some(r) = computed else {
                warn!("Enter required inputs to see calculations.");
                return Ok(());
            };
            if r.options_contracts == 0 {
                warn!("Fewer than 100 shares: no contracts to write yet");
            }
            (json!(r), covered_call_report(&r, &cfg.targets.covered_call))
        }
    };

    let kind = match cfg.strategy {
        Strategy::Put => OptionKind::Put,
        Strategy::CoveredCall => OptionKind::Call,
    };
    let chain_summary = match &cfg.chain {
        Some(p) => {
            let raw = std::fs::read_to_string(p).with_context(|| format!("reading chain {}", p.display()))?;
            let contracts: Vec<OptionContract> = serde_json::from_str(&raw)?;
            let summary = chain::summarize(&contracts, kind, quote.current_price, today);
            if summary.is_none() {
                warn!("Chain {} has no {:?} contracts", p.display(), kind);
            }
            summary
        }
        None => None,
    };

    let met = rows.iter().filter(|r| r.is_met).count();
    info!("{} of {} metrics meet their targets", met, rows.len());

    match cfg.output.format {
        OutputFormat::Json => {
            let out = json!({
                "strategy": cfg.strategy.name(),
                "quote": quote,
                "results": results,
                "metrics": rows,
                "chain": chain_summary,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => print_text(&quote.symbol, cfg.strategy, &rows, chain_summary.as_ref()),
    }
    Ok(())
}

fn print_text(symbol: &str, strategy: Strategy, rows: &[MetricEvaluation], summary: Option<&chain::ChainSummary>) {
    println!("{} {}", symbol, strategy.name());
    for row in rows {
        println!("{row}");
    }
    if let Some(s) = summary {
        println!();
        println!("ATM strike: {}", s.at_the_money_strike);
        let strikes: Vec<String> = s.closest_strike_prices.iter().map(|k| k.to_string()).collect();
        println!("Strikes:    {}", strikes.join(", "));
        let dates: Vec<String> = s.next_expiration_dates.iter().map(|d| d.to_string()).collect();
        println!("Expiries:   {}", dates.join(", "));
    }
}
