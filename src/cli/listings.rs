use super::ui;
use crate::core::catalog::Catalog;
use crate::core::currency::CurrencySettings;
use crate::core::filter::{BedroomFilter, ListingQuery, ListingView, parse_price};
use anyhow::Result;
use comfy_table::Cell;
use tracing::debug;

/// Raw filter input as typed by the user. Numeric fields are kept as
/// text here; unusable values relax the corresponding constraint.
#[derive(Debug, Default, Clone)]
pub struct ListingOptions {
    pub keyword: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub bedrooms: Option<String>,
    pub view: ListingView,
}

impl ListingOptions {
    fn to_query(&self) -> ListingQuery {
        ListingQuery {
            keyword: self.keyword.clone(),
            property_type: self.property_type.clone(),
            min_price: self.min_price.as_deref().and_then(parse_price),
            max_price: self.max_price.as_deref().and_then(parse_price),
            bedrooms: self.bedrooms.as_deref().and_then(BedroomFilter::parse),
            view: self.view,
        }
    }
}

pub fn run(catalog: &Catalog, settings: &CurrencySettings, options: &ListingOptions) -> Result<()> {
    let query = options.to_query();
    debug!("Applying listing query: {query:?}");

    let matches = query.apply(catalog.properties());
    if matches.is_empty() {
        println!(
            "{}",
            ui::style_text("No listings match the current filters.", ui::StyleType::Subtle)
        );
        return Ok(());
    }

    let currency = settings.load();

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Name"),
        ui::header_cell("Type"),
        ui::header_cell("Status"),
        ui::header_cell("Beds"),
        ui::header_cell("Baths"),
        ui::header_cell("Area (m²)"),
        ui::header_cell("Price"),
        ui::header_cell("Listed (days)"),
    ]);

    for property in &matches {
        let name = if property.premium {
            format!("★ {}", property.name)
        } else {
            property.name.clone()
        };
        let beds = ui::format_optional_cell((property.bedrooms > 0).then_some(property.bedrooms), |b| {
            b.to_string()
        });
        let baths = ui::format_optional_cell(
            (property.bathrooms > 0).then_some(property.bathrooms),
            |b| b.to_string(),
        );

        table.add_row(vec![
            Cell::new(property.id),
            Cell::new(name),
            Cell::new(&property.property_type),
            Cell::new(property.status.to_string()),
            beds,
            baths,
            Cell::new(property.area_sqm),
            ui::price_cell(&currency.format(property.price_ghs as f64)),
            Cell::new(property.days_listed),
        ]);
    }

    println!("{table}");
    ui::print_separator();
    println!(
        "{} {}",
        ui::style_text(&matches.len().to_string(), ui::StyleType::TotalValue),
        ui::style_text("listings shown", ui::StyleType::TotalLabel)
    );

    Ok(())
}
