//! Points of interest (planning destinations).

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{PoiId, Vector3};

/// Broad category of a point of interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoiCategory {
    Restroom,
    Exit,
    Shop,
    Office,
    Service,
    Dining,
    Other,
}

impl PoiCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoiCategory::Restroom => "restroom",
            PoiCategory::Exit => "exit",
            PoiCategory::Shop => "shop",
            PoiCategory::Office => "office",
            PoiCategory::Service => "service",
            PoiCategory::Dining => "dining",
            PoiCategory::Other => "other",
        }
    }
}

impl fmt::Display for PoiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A destination the user can navigate to.
///
/// Two POIs are equal when their identifiers are equal, whatever the rest
/// of their data says.
#[derive(Debug, Clone)]
pub struct PointOfInterest {
    pub id: PoiId,
    pub name: String,
    pub category: PoiCategory,
    pub floor: i32,
    pub description: String,
    pub position: Vector3,
}

impl PointOfInterest {
    /// Creates a POI with an empty description.
    pub fn new(
        id: PoiId,
        name: impl Into<String>,
        category: PoiCategory,
        floor: i32,
        position: Vector3,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            floor,
            description: String::new(),
            position,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl PartialEq for PointOfInterest {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PointOfInterest {}

impl Hash for PointOfInterest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn poi(id: &str, name: &str) -> PointOfInterest {
        PointOfInterest::new(
            PoiId::parse(id).unwrap(),
            name,
            PoiCategory::Dining,
            0,
            Vector3::ZERO,
        )
    }

    #[test]
    fn equality_is_by_identifier() {
        let a = poi("cafe", "Cafe");
        let renamed = poi("cafe", "Coffee Bar").with_description("moved");
        let other = poi("shop", "Cafe");

        assert_eq!(a, renamed);
        assert_ne!(a, other);
    }

    #[test]
    fn hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(poi("cafe", "Cafe"));
        assert!(set.contains(&poi("cafe", "Something else")));
        assert!(!set.contains(&poi("shop", "Cafe")));
    }

    #[test]
    fn category_display() {
        assert_eq!(PoiCategory::Restroom.to_string(), "restroom");
        assert_eq!(PoiCategory::Other.as_str(), "other");
    }
}
