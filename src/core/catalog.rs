//! Property records and the in-memory listing catalog.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Listing lifecycle state as advertised to buyers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStatus {
    ForSale,
    ForRent,
    Sold,
    Land,
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
            PropertyStatus::Sold => "Sold",
            PropertyStatus::Land => "Land",
        };
        f.write_str(label)
    }
}

/// A single listing record. Records are immutable once generated; views
/// derive filtered subsets without touching the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: u32,
    pub name: String,
    pub property_type: String,
    pub status: PropertyStatus,
    pub images: Vec<String>,
    pub days_listed: u32,
    pub premium: bool,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub garages: u8,
    pub area_sqm: u32,
    pub price_ghs: u64,
    pub price_usd: u64,
}

const PROPERTY_TYPES: &[&str] = &["House", "Apartment", "Office", "Townhouse", "Land"];

const NAME_PREFIXES: &[&str] = &[
    "Luxury",
    "Modern",
    "Executive",
    "Family",
    "Classic",
    "Garden",
    "Serviced",
];

const LOCATIONS: &[&str] = &[
    "East Legon",
    "Airport Residential",
    "Cantonments",
    "Labone",
    "Spintex",
    "Tema Community 25",
    "Kumasi Ahodwo",
    "Takoradi Beach Road",
];

// Fixed conversion used by the mock data, not a live rate.
const GHS_PER_USD: u64 = 15;

/// Read-only repository over the generated listing records.
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Generates `size` listings from `seed`. The same seed and size
    /// always produce the same catalog.
    pub fn generate(seed: u64, size: usize) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let properties = (1..=size as u32).map(|id| random_property(&mut rng, id)).collect();
        Self { properties }
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn by_id(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

fn random_property(rng: &mut StdRng, id: u32) -> Property {
    let property_type = PROPERTY_TYPES[rng.gen_range(0..PROPERTY_TYPES.len())];
    let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];

    // Land parcels have no rooms and always carry the Land status.
    let (status, bedrooms, bathrooms, garages, area_sqm) = match property_type {
        "Land" => (PropertyStatus::Land, 0, 0, 0, rng.gen_range(300..2000)),
        "Office" => (
            random_status(rng),
            0,
            rng.gen_range(1..=4),
            rng.gen_range(0..=3),
            rng.gen_range(80..600),
        ),
        _ => {
            let bedrooms = rng.gen_range(1..=6);
            (
                random_status(rng),
                bedrooms,
                rng.gen_range(1..=bedrooms),
                rng.gen_range(0..=3),
                rng.gen_range(60..450),
            )
        }
    };

    let name = if property_type == "Land" {
        format!("Plot at {location}")
    } else {
        let prefix = NAME_PREFIXES[rng.gen_range(0..NAME_PREFIXES.len())];
        format!("{prefix} {property_type} in {location}")
    };

    let price_ghs: u64 = match status {
        PropertyStatus::ForRent => rng.gen_range(1_500..60_000),
        _ => rng.gen_range(150_000..6_000_000),
    };

    let image_count = rng.gen_range(1..=5);
    let images = (1..=image_count)
        .map(|n| format!("https://photos.proply.dev/{id}/{n}.jpg"))
        .collect();

    Property {
        id,
        name,
        property_type: property_type.to_string(),
        status,
        images,
        days_listed: rng.gen_range(1..=180),
        premium: rng.gen_bool(0.2),
        bedrooms,
        bathrooms,
        garages,
        area_sqm,
        price_ghs,
        price_usd: price_ghs / GHS_PER_USD,
    }
}

fn random_status(rng: &mut StdRng) -> PropertyStatus {
    // Sales dominate the inventory, mirroring the seeded demo data.
    match rng.gen_range(0..10) {
        0..=5 => PropertyStatus::ForSale,
        6..=8 => PropertyStatus::ForRent,
        _ => PropertyStatus::Sold,
    }
}
