//! Style catalog
//!
//! The ordered list of known style labels. Position `i` in the catalog is
//! feature dimension `2 + i`, so a catalog is versioned configuration: any
//! change to its contents or order invalidates previously encoded vectors.

use crate::{FeatureError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Styles offered during onboarding, in dimension order
pub const DEFAULT_STYLES: [&str; 20] = [
    "Streetwear",
    "Minimalist",
    "Vintage",
    "Sporty",
    "Techwear",
    "Bohemian",
    "Classic",
    "Casual",
    "Formal",
    "Preppy",
    "Grunge",
    "Y2K",
    "Coastal",
    "Urban",
    "High Fashion",
    "Athleisure",
    "Romantic",
    "Edgy",
    "Artsy",
    "Sustainable",
];

fn default_version() -> u32 {
    1
}

/// Wire shape of a catalog before validation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSpec {
    #[serde(default = "default_version")]
    pub version: u32,
    pub styles: Vec<String>,
}

/// Ordered, validated set of style names
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "CatalogSpec", into = "CatalogSpec")]
pub struct StyleCatalog {
    version: u32,
    styles: Vec<String>,
    // lowercase name -> position
    lookup: AHashMap<String, usize>,
}

impl StyleCatalog {
    /// Create a catalog. Names are trimmed; empty names and names equal
    /// ignoring case are rejected.
    pub fn new<S: Into<String>>(version: u32, styles: impl IntoIterator<Item = S>) -> Result<Self> {
        let mut names = Vec::new();
        let mut lookup = AHashMap::new();

        for (pos, style) in styles.into_iter().enumerate() {
            let name = style.into().trim().to_string();
            if name.is_empty() {
                return Err(FeatureError::EmptyStyle(pos));
            }
            if lookup.insert(name.to_lowercase(), pos).is_some() {
                return Err(FeatureError::DuplicateStyle(name));
            }
            names.push(name);
        }

        Ok(Self {
            version,
            styles: names,
            lookup,
        })
    }

    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    pub fn styles(&self) -> &[String] {
        &self.styles
    }

    /// Catalog position of a preference, matched case-insensitively after
    /// trimming. Unknown preferences have no position.
    pub fn position(&self, preference: &str) -> Option<usize> {
        self.lookup.get(&preference.trim().to_lowercase()).copied()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        Self {
            version: 1,
            styles: DEFAULT_STYLES.iter().map(|s| s.to_string()).collect(),
            lookup: DEFAULT_STYLES
                .iter()
                .enumerate()
                .map(|(i, s)| (s.to_lowercase(), i))
                .collect(),
        }
    }
}

impl PartialEq for StyleCatalog {
    fn eq(&self, other: &Self) -> bool {
        self.version == other.version && self.styles == other.styles
    }
}

impl TryFrom<CatalogSpec> for StyleCatalog {
    type Error = FeatureError;

    fn try_from(spec: CatalogSpec) -> Result<Self> {
        StyleCatalog::new(spec.version, spec.styles)
    }
}

impl From<StyleCatalog> for CatalogSpec {
    fn from(catalog: StyleCatalog) -> Self {
        CatalogSpec {
            version: catalog.version,
            styles: catalog.styles,
        }
    }
}
