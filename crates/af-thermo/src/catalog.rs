//! Tabulated Antoine constants (mmHg, °C) for common solvents.

use crate::antoine::AntoineConstants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentCatalogEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub antoine: AntoineConstants,
}

impl ComponentCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = normalize(query);
        if query.is_empty() {
            return true;
        }

        normalize(self.canonical_id).contains(&query)
            || normalize(self.display_name).contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| normalize(alias).contains(&query))
    }

    fn is_named(&self, query: &str) -> bool {
        let query = normalize(query);
        normalize(self.canonical_id) == query
            || normalize(self.display_name) == query
            || self.aliases.iter().any(|alias| normalize(alias) == query)
    }
}

/// Lowercase, with spaces and underscores folded into hyphens.
fn normalize(text: &str) -> String {
    text.trim()
        .to_ascii_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .collect()
}

const fn antoine(a: f64, b: f64, c: f64) -> AntoineConstants {
    AntoineConstants { a, b, c }
}

const ANTOINE_CATALOG: [ComponentCatalogEntry; 11] = [
    ComponentCatalogEntry {
        canonical_id: "ethyl-acetate",
        display_name: "Ethyl Acetate",
        aliases: &["etoac", "ethyl ethanoate"],
        antoine: antoine(7.10179, 1244.951, 217.881),
    },
    ComponentCatalogEntry {
        canonical_id: "cyclohexane",
        display_name: "Cyclohexane",
        aliases: &["c6h12"],
        antoine: antoine(6.84941, 1206.001, 223.148),
    },
    ComponentCatalogEntry {
        canonical_id: "hexane",
        display_name: "Hexane",
        aliases: &["n-hexane"],
        antoine: antoine(6.88555, 1175.817, 224.867),
    },
    ComponentCatalogEntry {
        canonical_id: "1-propanol",
        display_name: "1-Propanol",
        aliases: &["n-propanol", "propan-1-ol"],
        antoine: antoine(7.74416, 1437.686, 198.463),
    },
    ComponentCatalogEntry {
        canonical_id: "water",
        display_name: "Water",
        aliases: &["h2o"],
        antoine: antoine(8.07131, 1730.63, 233.426),
    },
    ComponentCatalogEntry {
        canonical_id: "ethanol",
        display_name: "Ethanol",
        aliases: &["ethyl alcohol", "etoh"],
        antoine: antoine(8.20417, 1642.89, 230.3),
    },
    ComponentCatalogEntry {
        canonical_id: "methanol",
        display_name: "Methanol",
        aliases: &["methyl alcohol", "meoh"],
        antoine: antoine(8.08097, 1582.271, 239.726),
    },
    ComponentCatalogEntry {
        canonical_id: "benzene",
        display_name: "Benzene",
        aliases: &["c6h6"],
        antoine: antoine(6.90565, 1211.033, 220.79),
    },
    ComponentCatalogEntry {
        canonical_id: "toluene",
        display_name: "Toluene",
        aliases: &["methylbenzene"],
        antoine: antoine(6.95464, 1344.8, 219.482),
    },
    ComponentCatalogEntry {
        canonical_id: "acetone",
        display_name: "Acetone",
        aliases: &["propanone"],
        antoine: antoine(7.02447, 1161.0, 224.0),
    },
    ComponentCatalogEntry {
        canonical_id: "chloroform",
        display_name: "Chloroform",
        aliases: &["trichloromethane"],
        antoine: antoine(6.95465, 1170.966, 226.232),
    },
];

pub fn antoine_catalog() -> &'static [ComponentCatalogEntry] {
    &ANTOINE_CATALOG
}

pub fn filter_antoine_catalog(query: &str) -> Vec<ComponentCatalogEntry> {
    ANTOINE_CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Exact lookup by id, display name or alias (case, space and underscore insensitive).
pub fn lookup(name: &str) -> Option<&'static ComponentCatalogEntry> {
    ANTOINE_CATALOG.iter().find(|entry| entry.is_named(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in antoine_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate id {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn catalog_constants_pass_validation() {
        for entry in antoine_catalog() {
            let c = entry.antoine;
            assert!(
                AntoineConstants::new(c.a, c.b, c.c).is_ok(),
                "{} has invalid constants",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn lookup_is_forgiving_about_spelling() {
        let by_id = lookup("ethyl-acetate").unwrap();
        assert_eq!(lookup("Ethyl Acetate").unwrap(), by_id);
        assert_eq!(lookup("ethyl_acetate").unwrap(), by_id);
        assert_eq!(lookup("EtOAc").unwrap(), by_id);
        assert!(lookup("unobtainium").is_none());
    }

    #[test]
    fn search_matches_substrings() {
        let hits = filter_antoine_catalog("hex");
        let ids: Vec<_> = hits.iter().map(|e| e.canonical_id).collect();
        assert!(ids.contains(&"cyclohexane"));
        assert!(ids.contains(&"hexane"));
        assert_eq!(filter_antoine_catalog("").len(), antoine_catalog().len());
    }

    #[test]
    fn water_boils_near_100c() {
        let water = lookup("water").unwrap();
        let t = water.antoine.boiling_temperature(760.0).unwrap();
        assert!((t - 100.0).abs() < 0.1, "water: {t}");
    }
}
