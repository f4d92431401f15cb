/*!
 * Placement Policy
 * Free-list ordering and block selection rules
 */

use super::list::BlockList;
use super::types::Block;
use crate::core::errors::SimError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Placement policy for a simulation run
///
/// The allocator always takes the first sufficiently large free block; the
/// policy decides the free-list order that makes "first" mean earliest,
/// smallest or largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlacementPolicy {
    /// Free list in arrival order
    #[default]
    Fifo,
    /// Free list ascending by size
    BestFit,
    /// Free list descending by size
    WorstFit,
}

impl PlacementPolicy {
    pub const ALL: [PlacementPolicy; 3] = [Self::Fifo, Self::BestFit, Self::WorstFit];

    /// Insert a free block where this policy keeps it
    pub fn insert(&self, free_list: &mut BlockList, block: Block) {
        match self {
            Self::Fifo => free_list.insert_back(block),
            Self::BestFit => free_list.insert_ordered_by_size_ascending(block),
            Self::WorstFit => free_list.insert_ordered_by_size_descending(block),
        }
    }

    /// Whether `free_list` satisfies this policy's ordering
    ///
    /// Arrival order leaves no trace in the blocks, so FIFO lists always pass.
    pub fn is_ordered(&self, free_list: &BlockList) -> bool {
        let sizes: Vec<usize> = free_list.iter().map(Block::size).collect();
        match self {
            Self::Fifo => true,
            Self::BestFit => sizes.windows(2).all(|w| w[0] <= w[1]),
            Self::WorstFit => sizes.windows(2).all(|w| w[0] >= w[1]),
        }
    }

    /// Parse a command-line flag, case-insensitive
    ///
    /// Accepts `-F`/`-FIFO`, `-B`/`-BESTFIT`, `-W`/`-WORSTFIT` and the bare
    /// policy names with or without the leading dash.
    pub fn from_flag(flag: &str) -> Result<Self, SimError> {
        let normalized = flag.trim().trim_start_matches('-').to_uppercase();
        match normalized.as_str() {
            "F" | "FIFO" | "FIRST_FIT" | "FIRSTFIT" => Ok(Self::Fifo),
            "B" | "BESTFIT" | "BEST_FIT" | "BEST-FIT" => Ok(Self::BestFit),
            "W" | "WORSTFIT" | "WORST_FIT" | "WORST-FIT" => Ok(Self::WorstFit),
            _ => Err(SimError::InvalidPolicy(flag.to_string())),
        }
    }

    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::BestFit => "BEST_FIT",
            Self::WorstFit => "WORST_FIT",
        }
    }
}

impl FromStr for PlacementPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_flag(s)
    }
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for PlacementPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PlacementPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_flag(&s).map_err(serde::de::Error::custom)
    }
}
