//! Strongly typed pursuer identifier.
//!
//! `PursuerId` is `Copy + Ord + Hash` so it can be used as a map key and a
//! sorted-collection element without ceremony.  The inner integer is `pub`
//! to allow direct indexing into per-pursuer `Vec`s via `id.0 as usize`,
//! but callers should prefer the `.index()` helper for clarity.

use std::fmt;

/// Index of a pursuer in the coordinator's roster (insertion order).
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PursuerId(pub u32);

impl PursuerId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: PursuerId = PursuerId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for PursuerId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for PursuerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PursuerId({})", self.0)
    }
}

impl From<PursuerId> for usize {
    #[inline(always)]
    fn from(id: PursuerId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for PursuerId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<PursuerId, Self::Error> {
        u32::try_from(n).map(PursuerId)
    }
}
