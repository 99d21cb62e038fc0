//! Pursuer behavioral modes.
//!
//! The transition rules between modes live in `pursuit-policy`; this enum is
//! only the shared vocabulary.  Pursuers start in `Scatter`.

/// The behavioral state of one pursuer.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PursuerMode {
    /// Seek the player (or the variant's offset of the player).
    Chase,
    /// Retreat toward the variant's assigned corner.
    #[default]
    Scatter,
    /// Move at random; vulnerable to the player.
    Frightened,
    /// Defeated; returning to the home position to respawn.
    Eaten,
}

impl PursuerMode {
    /// Human-readable label, useful for logging and presentation overlays.
    pub fn as_str(self) -> &'static str {
        match self {
            PursuerMode::Chase => "chase",
            PursuerMode::Scatter => "scatter",
            PursuerMode::Frightened => "frightened",
            PursuerMode::Eaten => "eaten",
        }
    }
}

impl std::fmt::Display for PursuerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
