//! Territory store
//!
//! The map is an ordered, fixed-size collection of territories. Indices are
//! stable for the whole session: 0-based here, 1-based wherever the player
//! sees them.

pub mod standings;

pub use standings::{standings, FactionStanding, Standings};

use serde::Serialize;

use crate::core::config::GameConfig;
use crate::core::error::{ConquestError, Result, SelectionError};
use crate::core::types::{BoundedName, Troops};

/// A named unit of map ownership
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Territory {
    pub name: BoundedName,
    /// Controlling army color. Empty means unowned.
    pub owner_color: BoundedName,
    pub troop_count: Troops,
}

impl Territory {
    pub fn new(name: &str, owner_color: &str, troop_count: Troops) -> Self {
        let config = GameConfig::default();
        Self {
            name: BoundedName::new(name, config.name_capacity),
            owner_color: BoundedName::new(owner_color, config.color_capacity),
            troop_count,
        }
    }

    pub fn is_owned(&self) -> bool {
        !self.owner_color.is_empty()
    }

    /// True if both territories are owned by the same (non-empty) color
    pub fn same_faction(&self, other: &Territory) -> bool {
        self.is_owned() && other.is_owned() && self.owner_color == other.owner_color
    }

    /// True if this territory is owned by `color`. An empty color owns nothing.
    pub fn owned_by(&self, color: &str) -> bool {
        !color.is_empty() && self.owner_color == color
    }
}

/// Raw registration input for one territory, before bounds are applied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TerritoryDraft {
    pub name: String,
    pub color: String,
    /// `None` when the troop input could not be read as a number
    pub troops: Option<i64>,
}

impl TerritoryDraft {
    pub fn new(name: impl Into<String>, color: impl Into<String>, troops: Option<i64>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            troops,
        }
    }

    /// Apply registration rules: truncate name and color, default an empty
    /// name from its 1-based position, and lift troop counts below 1 to the
    /// configured default
    pub fn register(&self, position: usize, config: &GameConfig) -> Territory {
        let mut name = BoundedName::new(&self.name, config.name_capacity);
        if name.is_empty() {
            name = BoundedName::new(&format!("Territory {}", position + 1), config.name_capacity);
        }

        let troop_count = match self.troops {
            Some(n) if n >= 1 => Troops::try_from(n).unwrap_or(Troops::MAX),
            _ => config.default_troops,
        };

        Territory {
            name,
            owner_color: BoundedName::new(&self.color, config.color_capacity),
            troop_count,
        }
    }
}

/// The fixed-size territory collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerritoryMap {
    territories: Vec<Territory>,
}

impl TerritoryMap {
    /// Check a requested map size against the configured bounds
    pub fn check_size(count: i64, config: &GameConfig) -> Result<usize> {
        usize::try_from(count)
            .ok()
            .filter(|&n| n >= 1 && n <= config.max_territories)
            .ok_or(ConquestError::InvalidTerritoryCount(count))
    }

    /// Build a map from registration drafts
    ///
    /// A failed reservation surfaces as `ConquestError::Allocation`.
    pub fn register(drafts: &[TerritoryDraft], config: &GameConfig) -> Result<Self> {
        let size = Self::check_size(i64::try_from(drafts.len()).unwrap_or(i64::MAX), config)?;

        let mut territories = Vec::new();
        territories
            .try_reserve_exact(size)
            .map_err(|_| ConquestError::Allocation(size))?;
        territories.extend(
            drafts
                .iter()
                .enumerate()
                .map(|(position, draft)| draft.register(position, config)),
        );

        tracing::debug!("Registered {} territories", territories.len());
        Ok(Self { territories })
    }

    /// Wrap already-built territories. Fails on an empty list.
    pub fn from_territories(territories: Vec<Territory>) -> Result<Self> {
        if territories.is_empty() {
            return Err(ConquestError::InvalidTerritoryCount(0));
        }
        Ok(Self { territories })
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Territory> {
        self.territories.iter()
    }

    pub fn as_slice(&self) -> &[Territory] {
        &self.territories
    }

    /// Convert a 1-based number typed by the player into a 0-based index
    pub fn index_from_display(&self, number: i64) -> std::result::Result<usize, SelectionError> {
        let len = self.len();
        usize::try_from(number)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .filter(|&idx| idx < len)
            .ok_or(SelectionError::NoSuchTerritory { number, len })
    }

    /// Check that two 0-based indices name distinct, existing territories
    pub fn validate_pair(&self, attacker: usize, defender: usize) -> std::result::Result<(), SelectionError> {
        let len = self.len();
        if len < 2 {
            return Err(SelectionError::NotEnoughTerritories(len));
        }
        for index in [attacker, defender] {
            if index >= len {
                return Err(SelectionError::OutOfRange { index, len });
            }
        }
        if attacker == defender {
            return Err(SelectionError::SelfAttack(attacker));
        }
        Ok(())
    }

    /// Borrow two distinct territories mutably at once
    pub fn pair_mut(
        &mut self,
        attacker: usize,
        defender: usize,
    ) -> std::result::Result<(&mut Territory, &mut Territory), SelectionError> {
        self.validate_pair(attacker, defender)?;

        if attacker < defender {
            let (low, high) = self.territories.split_at_mut(defender);
            Ok((&mut low[attacker], &mut high[0]))
        } else {
            let (low, high) = self.territories.split_at_mut(attacker);
            Ok((&mut high[0], &mut low[defender]))
        }
    }
}

impl<'a> IntoIterator for &'a TerritoryMap {
    type Item = &'a Territory;
    type IntoIter = std::slice::Iter<'a, Territory>;

    fn into_iter(self) -> Self::IntoIter {
        self.territories.iter()
    }
}
