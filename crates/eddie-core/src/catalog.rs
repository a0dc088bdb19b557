//! Systems catalog shown in the Systems Index section.
//!
//! The catalog is an explicit read-only value handed to page composition.
//! [`Catalog::builtin`] returns the compiled-in listing; alternate catalogs
//! can be loaded from TOML for tests or via `--catalog`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::load::LoadRating;

/// A named system with a description and load rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub name: String,
    #[serde(alias = "desc")]
    pub description: String,
    pub load: LoadRating,
}

/// An ordered group of catalog items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCategory {
    pub category: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

/// The whole systems listing, in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "category")]
    categories: Vec<ContentCategory>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in data
// ─────────────────────────────────────────────────────────────────────────────

struct StaticItem {
    name: &'static str,
    description: &'static str,
    load: LoadRating,
}

struct StaticCategory {
    category: &'static str,
    items: &'static [StaticItem],
}

const fn item(name: &'static str, description: &'static str, load: u8) -> StaticItem {
    StaticItem {
        name,
        description,
        load: LoadRating::checked(load),
    }
}

static BUILTIN: &[StaticCategory] = &[
    StaticCategory {
        category: "CORE COGNITION",
        items: &[
            item(
                "DREAMFORGE SPINE",
                "Core recursive reasoning & identity-binding engine. Persists state across environments.",
                5,
            ),
            item(
                "H.E.R. SOVEREIGN CORE",
                "Self-evolving AI OS. Handles memory, orchestration, and controlled mutation.",
                5,
            ),
            item(
                "NEURAL RELAY",
                "Inter-system signal routing. Decouples intelligent components for observable flow.",
                3,
            ),
            item(
                "DO U BUDDY",
                "Persistent AI companion layer. Designed for long-term interaction cycles.",
                2,
            ),
        ],
    },
    StaticCategory {
        category: "OBSERVABILITY",
        items: &[
            item(
                "VISUAL TELEMETRY LAYER",
                "Event visualization & state inspection for monitoring autonomous systems.",
                4,
            ),
            item(
                "LOCUS CONTROL",
                "Governance logic. Determines authority, overrides, and synchronization.",
                2,
            ),
            item(
                "NYX CONTROL NODE",
                "Anonymity and visibility boundary monitoring infrastructure.",
                1,
            ),
        ],
    },
    StaticCategory {
        category: "FINANCIAL EXECUTION",
        items: &[
            item(
                "RED QUEEN AI",
                "Vision-based trading analysis and control interface.",
                4,
            ),
            item(
                "GOLD TERMINAL",
                "Execution cockpit for monitoring and managing live trading.",
                3,
            ),
            item(
                "OMNI-ASSET SCALPER",
                "Automated execution system for speed and multi-asset strategy testing.",
                3,
            ),
        ],
    },
    StaticCategory {
        category: "INFRASTRUCTURE",
        items: &[
            item(
                "PING INFRASTRUCTURE",
                "Backend routing & reliability backbone for SMS-based communication.",
                4,
            ),
            item(
                "SMS MONEY PROTOCOL",
                "Low-bandwidth financial rails with governance tooling.",
                3,
            ),
        ],
    },
    StaticCategory {
        category: "CIVICS AND CHAIN",
        items: &[
            item(
                "PIXELVAULT DREAMFORGE",
                "Gamified civic engagement & contribution systems layered on infrastructure.",
                4,
            ),
            item(
                "PVX CHAIN",
                "Economic physics, progression systems, and persistent state modeling.",
                3,
            ),
        ],
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Catalog
// ─────────────────────────────────────────────────────────────────────────────

impl Catalog {
    pub fn new(categories: Vec<ContentCategory>) -> Self {
        Self { categories }
    }

    /// The compiled-in systems listing
    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|cat| ContentCategory {
                category: cat.category.to_string(),
                items: cat
                    .items
                    .iter()
                    .map(|item| CatalogItem {
                        name: item.name.to_string(),
                        description: item.description.to_string(),
                        load: item.load,
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// Parse a catalog from TOML (`[[category]]` tables with `[[category.items]]`)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::CatalogNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded catalog from {:?}: {} categories, {} items",
            path,
            catalog.categories.len(),
            catalog.item_count()
        );
        Ok(catalog)
    }

    /// Structural checks beyond load ranges (those are enforced by [`LoadRating`])
    pub fn validate(&self) -> Result<()> {
        for (idx, category) in self.categories.iter().enumerate() {
            if category.category.trim().is_empty() {
                return Err(Error::catalog_invalid(format!(
                    "category #{} has an empty name",
                    idx + 1
                )));
            }
            if category.items.is_empty() {
                return Err(Error::catalog_invalid(format!(
                    "category '{}' has no items",
                    category.category
                )));
            }
            if let Some(pos) = category
                .items
                .iter()
                .position(|item| item.name.trim().is_empty())
            {
                return Err(Error::catalog_invalid(format!(
                    "item #{} in '{}' has an empty name",
                    pos + 1,
                    category.category
                )));
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[ContentCategory] {
        &self.categories
    }

    pub fn item_count(&self) -> usize {
        self.categories.iter().map(|c| c.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SMALL_CATALOG: &str = r#"
[[category]]
category = "LAB"

[[category.items]]
name = "PROBE"
description = "Bench instrument."
load = 1

[[category.items]]
name = "RIG"
desc = "Test rig."
load = 4
"#;

    #[test]
    fn test_builtin_catalog_shape() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.item_count(), 17);
        assert_eq!(catalog.categories()[0].category, "CORE COGNITION");
        assert_eq!(catalog.categories()[0].items[0].name, "DREAMFORGE SPINE");
        assert_eq!(catalog.categories()[0].items[0].load.value(), 5);
        assert_eq!(catalog.categories()[4].items[1].name, "PVX CHAIN");
    }

    #[test]
    fn test_builtin_catalog_validates() {
        Catalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = Catalog::from_toml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.item_count(), 2);
        assert_eq!(catalog.categories()[0].items[1].description, "Test rig.");
        assert_eq!(catalog.categories()[0].items[1].load.value(), 4);
    }

    #[test]
    fn test_from_toml_rejects_out_of_range_load() {
        let content = SMALL_CATALOG.replace("load = 4", "load = 6");
        let err = Catalog::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_validate_rejects_empty_category() {
        let catalog = Catalog::new(vec![ContentCategory {
            category: "EMPTY".to_string(),
            items: vec![],
        }]);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, Error::CatalogInvalid { .. }));
        assert!(err.to_string().contains("EMPTY"));
    }

    #[test]
    fn test_validate_rejects_blank_item_name() {
        let catalog = Catalog::new(vec![ContentCategory {
            category: "LAB".to_string(),
            items: vec![CatalogItem {
                name: "  ".to_string(),
                description: "nothing".to_string(),
                load: LoadRating::checked(1),
            }],
        }]);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("catalog.toml");
        std::fs::write(&path, SMALL_CATALOG).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.categories()[0].category, "LAB");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = tempdir().unwrap();
        let err = Catalog::load(&temp.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, Error::CatalogNotFound { .. }));
    }
}
