//! Core type definitions used throughout the codebase

use serde::Serialize;
use std::fmt;

/// Number of troops stationed on a territory
pub type Troops = u32;

/// A string that keeps at most a fixed number of characters
///
/// Longer input is truncated on a character boundary when the value is
/// built, mirroring how registration input was always clipped to the
/// field size. Used for territory names and army colors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct BoundedName(String);

impl BoundedName {
    /// Build a name from raw input, trimming surrounding whitespace and
    /// keeping at most `capacity` characters
    pub fn new(raw: &str, capacity: usize) -> Self {
        let trimmed = raw.trim();
        let end = trimmed
            .char_indices()
            .nth(capacity)
            .map(|(idx, _)| idx)
            .unwrap_or(trimmed.len());
        Self(trimmed[..end].to_string())
    }

    /// An empty value (used for unowned territories)
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of characters held
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for BoundedName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BoundedName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// The human player. Only the army color matters to the rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub color: BoundedName,
}

impl Player {
    pub fn new(color: &str, capacity: usize) -> Self {
        Self {
            color: BoundedName::new(color, capacity),
        }
    }
}
