//! API response types for the rating backend.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Employee identifier as issued by the backend (or the local allocator).
pub type EmployeeId = u64;

/// An employee record, also the shape of each suggested adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rating: String,
}

/// A rating tier and the share of the workforce expected in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCategory {
    pub category: String,
    pub standard_percentage: f64,
}

/// Category name to number mapping, kept in the order the server sent it.
///
/// Used for both `/actual-percentages` and `/deviation`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryFigures(Vec<(String, f64)>);

impl CategoryFigures {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| *v)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for CategoryFigures {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for CategoryFigures {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FiguresVisitor;

        impl<'de> Visitor<'de> for FiguresVisitor {
            type Value = CategoryFigures;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of category name to number")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((category, value)) = map.next_entry::<String, f64>()? {
                    // Duplicate keys: last one wins, position of the first is kept
                    if let Some(slot) = entries.iter_mut().find(|(k, _)| *k == category) {
                        slot.1 = value;
                    } else {
                        entries.push((category, value));
                    }
                }
                Ok(CategoryFigures(entries))
            }
        }

        deserializer.deserialize_map(FiguresVisitor)
    }
}

impl Serialize for CategoryFigures {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (category, value) in &self.0 {
            map.serialize_entry(category, value)?;
        }
        map.end()
    }
}
