use super::ui;
use crate::core::catalog::Catalog;
use crate::core::compare::ComparisonSet;
use crate::core::currency::CurrencySettings;
use anyhow::{Result, bail};
use comfy_table::Cell;

#[derive(Debug, Default, Clone)]
pub struct CompareOptions {
    /// Listing ids to compare, in the order given.
    pub ids: Vec<u32>,
    /// Top the set up with the first listings not already selected.
    pub fill: bool,
}

pub fn run(catalog: &Catalog, settings: &CurrencySettings, options: &CompareOptions) -> Result<()> {
    let mut set = ComparisonSet::new();
    for id in &options.ids {
        let Some(property) = catalog.by_id(*id) else {
            bail!("No listing with id {id}");
        };
        set.add(property)?;
    }
    if options.fill {
        set.fill_from(catalog);
    }

    if set.is_empty() {
        println!(
            "{}",
            ui::style_text("Nothing to compare. Pass --id or --fill.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let currency = settings.load();
    let properties = set.properties();

    let mut table = ui::new_styled_table();
    let mut header = vec![ui::header_cell("")];
    header.extend(properties.iter().map(|p| ui::header_cell(&p.name)));
    table.set_header(header);

    let mut add_row = |label: &str, cells: Vec<Cell>| {
        let mut row = vec![Cell::new(ui::style_text(label, ui::StyleType::TotalLabel))];
        row.extend(cells);
        table.add_row(row);
    };

    add_row(
        "Status",
        properties.iter().map(|p| Cell::new(p.status.to_string())).collect(),
    );
    add_row(
        "Type",
        properties.iter().map(|p| Cell::new(&p.property_type)).collect(),
    );
    add_row(
        "Price",
        properties
            .iter()
            .map(|p| ui::price_cell(&currency.format(p.price_ghs as f64)))
            .collect(),
    );
    add_row(
        "Bedrooms",
        properties
            .iter()
            .map(|p| ui::format_optional_cell((p.bedrooms > 0).then_some(p.bedrooms), |b| b.to_string()))
            .collect(),
    );
    add_row(
        "Bathrooms",
        properties
            .iter()
            .map(|p| ui::format_optional_cell((p.bathrooms > 0).then_some(p.bathrooms), |b| b.to_string()))
            .collect(),
    );
    add_row(
        "Garages",
        properties.iter().map(|p| Cell::new(p.garages)).collect(),
    );
    add_row(
        "Area (m²)",
        properties.iter().map(|p| Cell::new(p.area_sqm)).collect(),
    );
    add_row(
        "Listed (days)",
        properties.iter().map(|p| Cell::new(p.days_listed)).collect(),
    );
    add_row(
        "Premium",
        properties
            .iter()
            .map(|p| Cell::new(if p.premium { "Yes" } else { "No" }))
            .collect(),
    );
    add_row(
        "Photos",
        properties.iter().map(|p| Cell::new(p.images.len())).collect(),
    );

    println!("{table}");
    Ok(())
}
