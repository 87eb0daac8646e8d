//! Identifier types for graph nodes and points of interest.

use std::fmt;

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid identifier: {reason}")]
pub struct InvalidId {
    reason: &'static str,
}

fn check_id(s: &str) -> Result<(), InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            reason: "identifier cannot be empty",
        });
    }
    if s.chars().any(char::is_whitespace) {
        return Err(InvalidId {
            reason: "identifier cannot contain whitespace",
        });
    }
    Ok(())
}

/// Identifier of a navigation node.
///
/// Node identifiers are opaque strings supplied by the building data. They
/// must be non-empty and contain no whitespace. Ordering is lexicographic and
/// is what the planner uses to break f-score ties.
///
/// # Examples
///
/// ```
/// use wayfinder_server::domain::NodeId;
///
/// let id = NodeId::parse("lobby-1").unwrap();
/// assert_eq!(id.as_str(), "lobby-1");
///
/// assert!(NodeId::parse("").is_err());
/// assert!(NodeId::parse("main lobby").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    /// Parse a node identifier.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        check_id(s)?;
        Ok(NodeId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a point of interest.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PoiId(String);

impl PoiId {
    /// Parse a POI identifier. Same rules as [`NodeId::parse`].
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        check_id(s)?;
        Ok(PoiId(s.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PoiId({})", self.0)
    }
}

impl fmt::Display for PoiId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
