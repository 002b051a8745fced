//! Static spell/rune catalog used by the demo page.

use anyhow::Context;
use serde::{Deserialize, Serialize};

const DEMO_CATALOG_JSON: &str = include_str!("catalog.json");

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub school: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rune {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub spells: Vec<Spell>,
    #[serde(default)]
    pub runes: Vec<Rune>,
}

impl Catalog {
    /// Parses a catalog and orders both lists by name.
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let mut catalog: Catalog =
            serde_json::from_str(raw).context("invalid catalog JSON")?;
        catalog.spells.sort_by(|a, b| a.name.cmp(&b.name));
        catalog.runes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(catalog)
    }

    pub fn demo() -> anyhow::Result<Self> {
        Self::from_json(DEMO_CATALOG_JSON)
    }
}
