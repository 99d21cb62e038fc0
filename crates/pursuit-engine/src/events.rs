//! The outbound event boundary.
//!
//! The engine never touches scores, lives, or pixels; it reports discrete
//! transitions through this trait and lets the collaborators decide what
//! they mean.  Every event fires exactly once per qualifying transition.

use pursuit_core::{Position, PursuerId};

/// Callbacks invoked by the movement tasks at their event points.
///
/// All methods have default no-op implementations so implementors only
/// override what they care about.  Receivers are `&self`: one observer
/// instance is shared by the player task and the coordinator task, so
/// implementations must be internally synchronized (an `AtomicUsize`
/// counter, a channel sender, a mutexed score — whatever fits).
///
/// # Example — life counter
///
/// ```rust,ignore
/// struct Lives(AtomicUsize);
///
/// impl GameObserver for Lives {
///     fn on_player_hit(&self) {
///         self.0.fetch_sub(1, Ordering::Relaxed);
///     }
/// }
/// ```
pub trait GameObserver: Send + Sync {
    /// A hunting (Chase or Scatter) pursuer caught the player.  Fires once
    /// per distinct overlap event, not once per tick while overlapping.
    fn on_player_hit(&self) {}

    /// A frightened pursuer was caught and is now Eaten.
    fn on_pursuer_eaten(&self, _pursuer: PursuerId) {}

    /// The player picked up the pellet at `pos`.
    fn on_point_collected(&self, _pos: Position) {}

    /// Some agent state changed; pull-based presentation should refresh.
    /// Fired by the coordinator every tick and by the player task after a
    /// committed move.
    fn on_state_changed(&self) {}
}

/// A [`GameObserver`] that does nothing.  Use when you need a session but
/// don't care about its events.
pub struct NoopObserver;

impl GameObserver for NoopObserver {}
