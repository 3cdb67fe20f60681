//! Categories are read-only reference data

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category identifier
///
/// Serializes as a bare integer, and as a string key inside JSON objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub i32);

impl CategoryId {
    /// Quiz selector value meaning "every category".
    pub const ALL: CategoryId = CategoryId(0);

    pub fn is_all(self) -> bool {
        self == Self::ALL
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A question category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    #[serde(rename = "type")]
    pub kind: String,
}

/// `{id: type}` projection returned by the category endpoints
pub type CategoryMap = BTreeMap<CategoryId, String>;

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id: CategoryId(id),
            kind: kind.into(),
        }
    }

    /// Collapse a category list into the id -> type mapping.
    pub fn into_map(categories: impl IntoIterator<Item = Category>) -> CategoryMap {
        categories.into_iter().map(|c| (c.id, c.kind)).collect()
    }
}
