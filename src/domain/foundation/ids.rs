//! Strongly-typed identifier value objects.

use std::fmt;

use super::ValidationError;

/// Identifier of a puzzle row, assigned by the seeding process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId(i64);

impl PuzzleId {
    /// Creates a PuzzleId from a stored row id.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the inner value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Index of a round within a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoundIndex(u32);

impl RoundIndex {
    pub fn new(index: u32) -> Self {
        Self(index)
    }

    /// Converts a stored column value, rejecting negative indexes.
    pub fn try_from_i32(index: i32) -> Result<Self, ValidationError> {
        u32::try_from(index)
            .map(Self)
            .map_err(|_| ValidationError::invalid_format("round_index", "must be non-negative"))
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for RoundIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque key naming an object in the image store.
///
/// Keys may contain `/` separators (e.g. `2026-01-16/r1_1.png`). They are
/// never public URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates a new ImageKey, returning error if empty.
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("image_key"));
        }
        Ok(Self(key))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
