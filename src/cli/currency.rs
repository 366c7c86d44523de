use super::ui;
use crate::core::currency::{CurrencyConfig, CurrencySettings, SymbolPosition};
use anyhow::Result;

#[derive(Debug, Clone)]
pub enum CurrencyAction {
    /// Print the active configuration with a formatting preview.
    Show,
    /// Persist a new configuration. Unset fields keep their current
    /// value; provided values are written as-is, without validation.
    Set(SetOptions),
}

#[derive(Debug, Default, Clone)]
pub struct SetOptions {
    pub symbol: Option<String>,
    pub position: Option<SymbolPosition>,
    pub thousand_separator: Option<String>,
    pub decimal_separator: Option<String>,
    pub decimals: Option<u8>,
}

pub fn run(settings: &CurrencySettings, action: &CurrencyAction) -> Result<()> {
    match action {
        CurrencyAction::Show => show(settings),
        CurrencyAction::Set(options) => set(settings, options),
    }
}

fn show(settings: &CurrencySettings) -> Result<()> {
    let config = settings.load();
    print_config(&config);
    Ok(())
}

fn set(settings: &CurrencySettings, options: &SetOptions) -> Result<()> {
    let current = settings.load();
    let config = CurrencyConfig {
        symbol: options.symbol.clone().unwrap_or(current.symbol),
        position: options.position.unwrap_or(current.position),
        thousand_separator: options
            .thousand_separator
            .clone()
            .unwrap_or(current.thousand_separator),
        decimal_separator: options
            .decimal_separator
            .clone()
            .unwrap_or(current.decimal_separator),
        decimals: options.decimals.unwrap_or(current.decimals),
    };

    settings.save(&config)?;
    println!("{}", ui::style_text("Currency settings saved.", ui::StyleType::TotalValue));
    print_config(&config);
    Ok(())
}

fn print_config(config: &CurrencyConfig) {
    let position = match config.position {
        SymbolPosition::Before => "before",
        SymbolPosition::After => "after",
    };

    println!("{}", ui::style_text("Currency display", ui::StyleType::Title));
    println!("  Symbol:             {}", config.symbol);
    println!("  Position:           {position}");
    println!("  Thousand separator: {:?}", config.thousand_separator);
    println!("  Decimal separator:  {:?}", config.decimal_separator);
    println!("  Decimals:           {}", config.decimals);
    println!(
        "\n  Preview: {}",
        ui::style_text(&config.format(1_234_567.89), ui::StyleType::TotalValue)
    );
}
