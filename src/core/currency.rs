//! Currency display configuration: a persisted config record and the
//! amount formatter driven by it.

use crate::store::KeyValueStore;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, RwLock};
use tracing::{debug, warn};

/// Storage key for the persisted configuration blob.
pub const CURRENCY_CONFIG_KEY: &str = "currency-config";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

/// How monetary amounts are rendered. Inputs are trusted: separators may
/// be any string and the decimal count is not validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub symbol: String,
    pub position: SymbolPosition,
    pub thousand_separator: String,
    pub decimal_separator: String,
    pub decimals: u8,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        CurrencyConfig {
            symbol: "GH₵".to_string(),
            position: SymbolPosition::Before,
            thousand_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 0,
        }
    }
}

impl CurrencyConfig {
    /// Renders an amount using this configuration.
    ///
    /// Rounds half away from zero to `decimals` places, groups the
    /// integer digits in threes with `thousand_separator`, and attaches
    /// the symbol per `position`. A negative amount keeps its minus sign
    /// in front of the digits.
    pub fn format(&self, amount: f64) -> String {
        let decimals = usize::from(self.decimals);

        // Pre-round half away from zero; the formatter alone would round
        // ties to even.
        let scale = 10f64.powi(i32::from(self.decimals));
        let rounded = (amount * scale).round() / scale;
        let fixed = format!("{rounded:.decimals$}");

        let (sign, unsigned) = match fixed.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", fixed.as_str()),
        };
        let (int_digits, frac_digits) = match unsigned.split_once('.') {
            Some((int, frac)) => (int, frac),
            None => (unsigned, ""),
        };

        let mut body = String::with_capacity(fixed.len() + 8);
        body.push_str(sign);
        body.push_str(&group_thousands(int_digits, &self.thousand_separator));
        if self.decimals > 0 {
            body.push_str(&self.decimal_separator);
            body.push_str(frac_digits);
        }

        match self.position {
            SymbolPosition::Before => format!("{}{body}", self.symbol),
            SymbolPosition::After => format!("{body} {}", self.symbol),
        }
    }

    /// Fails closed: a missing amount renders as an empty string.
    pub fn format_optional(&self, amount: Option<f64>) -> String {
        amount.map(|a| self.format(a)).unwrap_or_default()
    }
}

/// Inserts `separator` every three digits, counting from the right.
fn group_thousands(digits: &str, separator: &str) -> String {
    let len = digits.chars().count();
    let mut grouped = String::with_capacity(len + separator.len() * (len / 3));
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }
    grouped
}

type Listener = Box<dyn Fn(&CurrencyConfig) + Send + Sync>;

/// Single source of truth for the currency display configuration,
/// backed by an injected key-value store.
pub struct CurrencySettings {
    store: Arc<dyn KeyValueStore>,
    listeners: RwLock<Vec<Listener>>,
}

impl CurrencySettings {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            listeners: RwLock::new(Vec::new()),
        }
    }

    /// Reads the persisted configuration, falling back to the built-in
    /// default when nothing is stored or the stored blob does not parse.
    pub fn load(&self) -> CurrencyConfig {
        let Some(raw) = self.store.get(CURRENCY_CONFIG_KEY) else {
            debug!("No stored currency config, using default");
            return CurrencyConfig::default();
        };
        match serde_json::from_str(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("Stored currency config is unreadable, using default: {e}");
                CurrencyConfig::default()
            }
        }
    }

    /// Persists the full configuration, overwriting any prior value, and
    /// notifies registered listeners.
    pub fn save(&self, config: &CurrencyConfig) -> Result<()> {
        let raw = serde_json::to_string(config).context("Failed to serialize currency config")?;
        self.store
            .set(CURRENCY_CONFIG_KEY, &raw)
            .context("Failed to persist currency config")?;
        debug!("Saved currency config: {config:?}");

        let listeners = self.listeners.read().unwrap();
        for listener in listeners.iter() {
            listener(config);
        }
        Ok(())
    }

    /// Registers a callback invoked with the new value on every save.
    /// Already-rendered output is not re-formatted; callers re-render.
    pub fn subscribe(&self, listener: Listener) {
        self.listeners.write().unwrap().push(listener);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn settings() -> CurrencySettings {
        CurrencySettings::new(Arc::new(MemoryStore::new()))
    }

    fn config(symbol: &str, position: SymbolPosition, decimals: u8) -> CurrencyConfig {
        CurrencyConfig {
            symbol: symbol.to_string(),
            position,
            decimals,
            ..CurrencyConfig::default()
        }
    }

    #[test]
    fn test_format_groups_thousands_with_default_config() {
        let config = CurrencyConfig::default();
        assert_eq!(config.format(1_234_567.0), "GH₵1,234,567");
        assert_eq!(config.format(999.0), "GH₵999");
        assert_eq!(config.format(0.0), "GH₵0");
    }

    #[test]
    fn test_format_with_decimals_pads_fraction() {
        let config = config("GH₵", SymbolPosition::Before, 2);
        assert_eq!(config.format(1234.5), "GH₵1,234.50");
        assert_eq!(config.format(0.5), "GH₵0.50");
    }

    #[test]
    fn test_format_rounds_half_away_from_zero() {
        let config = CurrencyConfig::default();
        assert_eq!(config.format(1234.5), "GH₵1,235");
        assert_eq!(config.format(1233.5), "GH₵1,234");
    }

    #[test]
    fn test_format_suffix_position_inserts_space() {
        let config = config("$", SymbolPosition::After, 0);
        assert_eq!(config.format(100.0), "100 $");
    }

    #[test]
    fn test_format_negative_keeps_minus_on_digits() {
        let suffixed = config("$", SymbolPosition::After, 2);

        let config = CurrencyConfig::default();
        assert_eq!(config.format(-1234.5), "GH₵-1,235");

        assert_eq!(suffixed.format(-1_000_000.0), "-1,000,000.00 $");
    }

    #[test]
    fn test_format_optional_fails_closed() {
        let config = CurrencyConfig::default();
        assert_eq!(config.format_optional(None), "");
        assert_eq!(config.format_optional(Some(5.0)), "GH₵5");
    }

    #[test]
    fn test_format_respects_custom_separators() {
        let config = CurrencyConfig {
            symbol: "€".to_string(),
            position: SymbolPosition::After,
            thousand_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimals: 2,
        };
        assert_eq!(config.format(1_234_567.891), "1.234.567,89 €");
    }

    #[test]
    fn test_format_is_idempotent() {
        let config = config("GH₵", SymbolPosition::Before, 2);
        let first = config.format(98_765.432);
        let second = config.format(98_765.432);
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_returns_default_when_nothing_stored() {
        assert_eq!(settings().load(), CurrencyConfig::default());
    }

    #[test]
    fn test_save_load_round_trip() {
        let settings = settings();
        let config = CurrencyConfig {
            symbol: "$".to_string(),
            position: SymbolPosition::After,
            thousand_separator: " ".to_string(),
            decimal_separator: ".".to_string(),
            decimals: 2,
        };
        settings.save(&config).unwrap();
        assert_eq!(settings.load(), config);
    }

    #[test]
    fn test_save_overwrites_prior_value() {
        let settings = settings();
        settings.save(&config("$", SymbolPosition::After, 2)).unwrap();
        settings.save(&config("£", SymbolPosition::Before, 1)).unwrap();
        assert_eq!(settings.load(), config("£", SymbolPosition::Before, 1));
    }

    #[test]
    fn test_load_falls_back_to_default_on_corrupt_blob() {
        let store = Arc::new(MemoryStore::new());
        store.set(CURRENCY_CONFIG_KEY, "{not json").unwrap();
        let settings = CurrencySettings::new(store);
        assert_eq!(settings.load(), CurrencyConfig::default());
    }

    #[test]
    fn test_save_notifies_subscribers() {
        let settings = settings();
        static CALLS: AtomicUsize = AtomicUsize::new(0);
        settings.subscribe(Box::new(|config| {
            assert_eq!(config.symbol, "$");
            CALLS.fetch_add(1, Ordering::SeqCst);
        }));
        settings.save(&config("$", SymbolPosition::After, 0)).unwrap();
        assert_eq!(CALLS.load(Ordering::SeqCst), 1);
    }
}
