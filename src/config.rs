//! Load and validate runtime configuration.

use chrono::NaiveDate;
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::chain::default_strike;
use crate::dates::default_expiration;
use crate::error::InputError;
use crate::parser::{parse_ticket, Ticket};
use crate::targets::{CallMetric, PutMetric, TargetSet};
use crate::types::{CallInputs, OptionKind, PutInputs, Quote, SHARES_PER_CONTRACT};
use crate::utils::sanitize_symbol;

pub const CONFIG_ENV: &str = "OPTIONS_INCOME_CONFIG";
const DEFAULT_FILE: &str = "config.yaml";

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Put,
    CoveredCall,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Put => "put",
            Strategy::CoveredCall => "covered_call",
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PutCfg {
    pub strike: Option<f64>,
    pub premium: Option<f64>,
    pub expiration: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CoveredCallCfg {
    pub shares: Option<u32>,
    pub strike: Option<f64>,
    pub premium: Option<f64>,
    pub expiration: Option<NaiveDate>,
    #[serde(default)]
    pub owns_shares: bool,
    pub purchase_price: Option<f64>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct TargetsCfg {
    #[serde(default)]
    pub put: TargetSet<PutMetric>,
    #[serde(default)]
    pub covered_call: TargetSet<CallMetric>,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct OutputCfg {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pins the day count; defaults to the local date.
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub quote: Quote,
    pub strategy: Strategy,
    pub ticket: Option<String>,
    #[serde(default)]
    pub put: Option<PutCfg>,
    #[serde(default)]
    pub covered_call: Option<CoveredCallCfg>,
    #[serde(default)]
    pub targets: TargetsCfg,
    #[serde(default)]
    pub output: OutputCfg,
    /// JSON contract listing to summarize alongside the report.
    pub chain: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg: Self = serde_yaml::from_str(&s)?;
        Ok(cfg)
    }

    /// Env override, then the first CLI argument, then `config.yaml` in the
    /// working directory, then the user config dir.
    pub fn resolve_path(env_value: Option<String>, arg: Option<String>) -> PathBuf {
        if let Some(p) = env_value.or(arg) {
            return PathBuf::from(p);
        }
        let local = PathBuf::from(DEFAULT_FILE);
        if local.exists() {
            return local;
        }
        ProjectDirs::from("", "", "options-income")
            .map(|d| d.config_dir().join(DEFAULT_FILE))
            .unwrap_or(local)
    }

    fn ticket_for(&self, quote: &Quote, kind: OptionKind) -> Result<Option<Ticket>, InputError> {
        let Some(raw) = self.ticket.as_deref() else {
            return Ok(None);
        };
        let t = parse_ticket(raw).ok_or_else(|| InputError::BadTicket(raw.to_string()))?;
        let quote_sym = sanitize_symbol(&quote.symbol);
        if t.symbol != quote_sym {
            return Err(InputError::SymbolMismatch {
                quote: quote_sym,
                ticket: t.symbol,
            });
        }
        if t.kind != kind {
            return Err(InputError::WrongSide {
                ticket: t.kind.as_char(),
                strategy: self.strategy.name(),
            });
        }
        Ok(Some(t))
    }

    /// Put inputs with the form defaults applied: strike = floor(quote),
    /// expiration = a week out. `None` while the premium is unknown.
    pub fn put_inputs(&self, quote: &Quote, today: NaiveDate) -> Result<Option<PutInputs>, InputError> {
        let price = quote.current_price;
        if let Some(t) = self.ticket_for(quote, OptionKind::Put)? {
            return Ok(Some(t.put_inputs(price)));
        }
        let cfg = self.put.as_ref().ok_or(InputError::MissingSection("put"))?;
        Ok(PutInputs::ready(
            Some(price),
            Some(cfg.strike.unwrap_or_else(|| default_strike(price))),
            cfg.premium,
            Some(cfg.expiration.unwrap_or_else(|| default_expiration(today))),
        ))
    }

    /// Covered-call inputs; shares default to one contract's worth.
    pub fn call_inputs(&self, quote: &Quote, today: NaiveDate) -> Result<Option<CallInputs>, InputError> {
        let price = quote.current_price;
        let cfg = self.covered_call.clone().unwrap_or_default();
        if cfg.owns_shares && cfg.purchase_price.is_none() {
            return Err(InputError::MissingPurchasePrice);
        }
        if let Some(t) = self.ticket_for(quote, OptionKind::Call)? {
            return Ok(Some(t.call_inputs(price, cfg.owns_shares, cfg.purchase_price)));
        }
        if self.covered_call.is_none() {
            return Err(InputError::MissingSection("covered_call"));
        }
        Ok(CallInputs::ready(
            Some(price),
            Some(cfg.shares.unwrap_or(SHARES_PER_CONTRACT)),
            Some(cfg.strike.unwrap_or_else(|| default_strike(price))),
            cfg.premium,
            Some(cfg.expiration.unwrap_or_else(|| default_expiration(today))),
            cfg.owns_shares,
            cfg.purchase_price,
        ))
    }
}
