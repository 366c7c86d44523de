//! Pure filter predicates over the listing catalog.

use crate::core::catalog::{Property, PropertyStatus};

/// Sentinel type value that disables the type predicate.
pub const TYPE_ALL: &str = "All";

/// Bedroom constraint. The `"4+"` choice in the search form maps to
/// "four or more"; every other choice is an exact count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BedroomFilter {
    Exactly(u8),
    FourPlus,
}

impl BedroomFilter {
    /// Permissive parse: unusable input means "no constraint", never an
    /// error.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw == "4+" {
            return Some(BedroomFilter::FourPlus);
        }
        raw.parse().ok().map(BedroomFilter::Exactly)
    }

    fn matches(self, bedrooms: u8) -> bool {
        match self {
            BedroomFilter::Exactly(n) => bedrooms == n,
            BedroomFilter::FourPlus => bedrooms >= 4,
        }
    }
}

/// Named status sets backing the page-level listing views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingView {
    #[default]
    All,
    Sale,
    Rent,
    Land,
}

impl ListingView {
    /// Statuses accepted by this view; `None` accepts everything.
    /// The rent view also lists sold inventory.
    pub fn statuses(self) -> Option<&'static [PropertyStatus]> {
        match self {
            ListingView::All => None,
            ListingView::Sale => Some(&[PropertyStatus::ForSale]),
            ListingView::Rent => Some(&[PropertyStatus::ForRent, PropertyStatus::Sold]),
            ListingView::Land => Some(&[PropertyStatus::Land]),
        }
    }
}

/// Permissive price parse used for user-supplied bounds: strips digit
/// grouping, treats anything non-numeric as "no constraint".
pub fn parse_price(raw: &str) -> Option<u64> {
    raw.trim().replace(',', "").parse().ok()
}

/// A conjunction of optional predicates. Absent fields are
/// unconstrained; all present fields must match.
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    pub keyword: Option<String>,
    pub property_type: Option<String>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<BedroomFilter>,
    pub view: ListingView,
}

impl ListingQuery {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(statuses) = self.view.statuses() {
            if !statuses.contains(&property.status) {
                return false;
            }
        }

        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            let in_name = property.name.to_lowercase().contains(&keyword);
            let in_type = property.property_type.to_lowercase().contains(&keyword);
            if !in_name && !in_type {
                return false;
            }
        }

        // Exact, case-sensitive; "All" disables the predicate.
        if let Some(property_type) = &self.property_type {
            if property_type != TYPE_ALL && *property_type != property.property_type {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if property.price_ghs < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if property.price_ghs > max {
                return false;
            }
        }

        if let Some(bedrooms) = self.bedrooms {
            if !bedrooms.matches(property.bedrooms) {
                return false;
            }
        }

        true
    }

    /// Selects matching properties in source order. The source list is
    /// never mutated; an empty result is a valid outcome, not an error.
    pub fn apply<'a>(&self, properties: &'a [Property]) -> Vec<&'a Property> {
        properties.iter().filter(|p| self.matches(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn property(id: u32, name: &str, property_type: &str, status: PropertyStatus) -> Property {
        Property {
            id,
            name: name.to_string(),
            property_type: property_type.to_string(),
            status,
            images: Vec::new(),
            days_listed: 10,
            premium: false,
            bedrooms: 3,
            bathrooms: 2,
            garages: 1,
            area_sqm: 120,
            price_ghs: 400_000,
            price_usd: 26_666,
        }
    }

    fn sample() -> Vec<Property> {
        vec![
            Property {
                price_ghs: 750_000,
                bedrooms: 4,
                ..property(1, "Luxury House in East Legon", "House", PropertyStatus::ForSale)
            },
            Property {
                price_ghs: 300_000,
                ..property(2, "Modern Apartment in Labone", "Apartment", PropertyStatus::ForRent)
            },
            Property {
                price_ghs: 600_000,
                bedrooms: 5,
                ..property(3, "Family House in Spintex", "House", PropertyStatus::Sold)
            },
            Property {
                bedrooms: 0,
                ..property(4, "Plot at Tema Community 25", "Land", PropertyStatus::Land)
            },
        ]
    }

    #[test]
    fn test_empty_query_matches_everything_in_order() {
        let properties = sample();
        let result = ListingQuery::default().apply(&properties);
        let ids: Vec<u32> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_conjunction_of_type_and_min_price_preserves_order() {
        let properties = sample();
        let query = ListingQuery {
            property_type: Some("House".to_string()),
            min_price: Some(500_000),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_type_all_sentinel_disables_predicate() {
        let properties = sample();
        let query = ListingQuery {
            property_type: Some(TYPE_ALL.to_string()),
            ..ListingQuery::default()
        };
        assert_eq!(query.apply(&properties).len(), properties.len());
    }

    #[test]
    fn test_type_match_is_case_sensitive() {
        let properties = sample();
        let query = ListingQuery {
            property_type: Some("house".to_string()),
            ..ListingQuery::default()
        };
        assert!(query.apply(&properties).is_empty());
    }

    #[test]
    fn test_keyword_matches_name_or_type_case_insensitive() {
        let properties = sample();
        let by_name = ListingQuery {
            keyword: Some("LABONE".to_string()),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = by_name.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);

        let by_type = ListingQuery {
            keyword: Some("apart".to_string()),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = by_type.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let properties = sample();
        let query = ListingQuery {
            min_price: Some(300_000),
            max_price: Some(600_000),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn test_bedroom_four_plus() {
        let properties = sample();
        let query = ListingQuery {
            bedrooms: Some(BedroomFilter::FourPlus),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_bedroom_exact() {
        let properties = sample();
        let query = ListingQuery {
            bedrooms: Some(BedroomFilter::Exactly(3)),
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_rent_view_includes_sold_inventory() {
        let properties = sample();
        let query = ListingQuery {
            view: ListingView::Rent,
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn test_sale_view_excludes_everything_else() {
        let properties = sample();
        let query = ListingQuery {
            view: ListingView::Sale,
            ..ListingQuery::default()
        };
        let ids: Vec<u32> = query.apply(&properties).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1]);
    }

    #[test]
    fn test_no_match_is_a_valid_empty_result() {
        let properties = sample();
        let query = ListingQuery {
            min_price: Some(10_000_000),
            ..ListingQuery::default()
        };
        assert!(query.apply(&properties).is_empty());
    }

    #[test]
    fn test_parse_price_is_permissive() {
        assert_eq!(parse_price("500000"), Some(500_000));
        assert_eq!(parse_price(" 1,250,000 "), Some(1_250_000));
        assert_eq!(parse_price("cheap"), None);
        assert_eq!(parse_price(""), None);
    }

    #[test]
    fn test_bedroom_parse_is_permissive() {
        assert_eq!(BedroomFilter::parse("2"), Some(BedroomFilter::Exactly(2)));
        assert_eq!(BedroomFilter::parse("4+"), Some(BedroomFilter::FourPlus));
        assert_eq!(BedroomFilter::parse("many"), None);
    }
}
