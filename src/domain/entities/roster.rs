//! Player roster entity.

use serde::{Deserialize, Serialize};

use crate::domain::errors::GameError;

/// Smallest supported group.
pub const MIN_PLAYERS: usize = 3;

/// Largest supported group (one palette colour per player).
pub const MAX_PLAYERS: usize = 10;

/// Inclusive bounds on how many players a game accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterBounds {
    min: usize,
    max: usize,
}

impl RosterBounds {
    /// The full 3 to 10 player range.
    pub const STANDARD: Self = Self {
        min: MIN_PLAYERS,
        max: MAX_PLAYERS,
    };

    /// Creates bounds, rejecting anything outside 3..=10 or with `min > max`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBounds`] for an unsupported range.
    pub fn new(min: usize, max: usize) -> Result<Self, GameError> {
        if min < MIN_PLAYERS || max > MAX_PLAYERS || min > max {
            return Err(GameError::InvalidBounds { min, max });
        }
        Ok(Self { min, max })
    }

    /// Builds bounds from loose configuration values, clamping into range.
    #[must_use]
    pub fn clamped(min: usize, max: usize) -> Self {
        let min = min.clamp(MIN_PLAYERS, MAX_PLAYERS);
        let max = max.clamp(min, MAX_PLAYERS);
        Self { min, max }
    }

    /// Minimum player count.
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    /// Maximum player count.
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }

    /// Returns whether `count` lies within the bounds.
    #[must_use]
    pub const fn contains(self, count: usize) -> bool {
        count >= self.min && count <= self.max
    }
}

impl Default for RosterBounds {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Ordered list of player display names.
///
/// Slots may be blank while the group is still being set up; a roster is
/// compacted (blank slots dropped, names trimmed) when a game starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Creates a roster from names.
    #[must_use]
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Creates a roster of `count` blank slots.
    #[must_use]
    pub fn blank(count: usize) -> Self {
        Self {
            names: vec![String::new(); count],
        }
    }

    /// Creates the starting roster for the given bounds.
    #[must_use]
    pub fn default_for(bounds: RosterBounds) -> Self {
        Self::blank(bounds.min())
    }

    /// Pads or truncates a restored roster so its length fits `bounds`.
    #[must_use]
    pub fn fitted(mut self, bounds: RosterBounds) -> Self {
        if self.names.len() < bounds.min() {
            self.names.resize(bounds.min(), String::new());
        }
        self.names.truncate(bounds.max());
        self
    }

    /// Returns all names, including blank slots.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns the name at `index`.
    #[must_use]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns whether the roster has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of slots holding a non-blank name.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.names.iter().filter(|n| !n.trim().is_empty()).count()
    }

    /// Returns whether a game can start with this roster.
    #[must_use]
    pub fn is_ready(&self, bounds: RosterBounds) -> bool {
        bounds.contains(self.filled_count())
    }

    /// Returns whether another slot may be added.
    #[must_use]
    pub fn can_add(&self, bounds: RosterBounds) -> bool {
        self.names.len() < bounds.max()
    }

    /// Returns whether a slot may be removed.
    #[must_use]
    pub fn can_remove(&self, bounds: RosterBounds) -> bool {
        self.names.len() > bounds.min()
    }

    /// Sets the name at `index`. Returns `false` for an out-of-range index.
    pub fn set(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.names.get_mut(index) {
            Some(slot) => {
                *slot = name.into();
                true
            }
            None => false,
        }
    }

    /// Appends a blank slot unless the roster is already at `max`.
    pub fn push_blank(&mut self, bounds: RosterBounds) -> bool {
        if !self.can_add(bounds) {
            return false;
        }
        self.names.push(String::new());
        true
    }

    /// Removes the slot at `index` unless the roster is already at `min`.
    pub fn remove(&mut self, index: usize, bounds: RosterBounds) -> bool {
        if !self.can_remove(bounds) || index >= self.names.len() {
            return false;
        }
        self.names.remove(index);
        true
    }

    /// Returns a copy with blank slots dropped and names trimmed.
    #[must_use]
    pub fn compacted(&self) -> Self {
        Self {
            names: self
                .names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .map(ToString::to_string)
                .collect(),
        }
    }
}

impl From<Vec<&str>> for Roster {
    fn from(names: Vec<&str>) -> Self {
        Self::new(names.into_iter().map(ToString::to_string).collect())
    }
}
