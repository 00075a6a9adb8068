use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

/// Filter labels shown above the gallery. A place's own category stays free
/// text, so anything outside this set is only reachable through `All`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    All,
    Beach,
    Viewpoint,
    Park,
    Temple,
    Hotspot,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::All,
        Category::Beach,
        Category::Viewpoint,
        Category::Park,
        Category::Temple,
        Category::Hotspot,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Beach => "Beach",
            Self::Viewpoint => "Viewpoint",
            Self::Park => "Park",
            Self::Temple => "Temple",
            Self::Hotspot => "Hotspot",
        }
    }

    /// Exact, case-sensitive comparison against a parsed place category.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            other => other.label() == category,
        }
    }
}

impl Default for Category {
    fn default() -> Self {
        Self::All
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| invalid_input_error())
    }
}
