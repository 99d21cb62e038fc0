//! The pursuers' shared periodic decision task.
//!
//! One task drives every pursuer: mode-switch timing, per-pursuer steering
//! and movement, stuck recovery, and collision resolution against the
//! player all happen inside a single tick, in a fixed order.  Pursuers are
//! never scheduled independently of each other — determinism within a tick
//! comes from iterating the roster in insertion order.
//!
//! # Tick structure
//!
//! ```text
//! ① Signals   — apply externally requested frighten / frightened-elapsed
//!               transitions (request flags keep this task the only mode
//!               writer).
//! ② Timer     — if the mode-switch interval elapsed, toggle every
//!               Chase/Scatter pursuer.  Happens before any movement
//!               decision so a toggle is visible to the whole roster in
//!               the tick it occurs.
//! ③ Movement  — per pursuer: home-respawn check, target selection,
//!               direction selection (random when Frightened), move
//!               attempt, one random stuck-recovery retry, frame advance.
//! ④ Collision — per pursuer against the re-read player position, with
//!               rising-edge de-duplication per pursuer.
//! ⑤ Notify    — observer's state-changed callback.
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use pursuit_core::{PursuerMode, PursuerRng};
use pursuit_agent::{Movable, PlayerAgent, PursuerAgent};
use pursuit_grid::GridMap;
use pursuit_policy::{
    PlayerView, choose_direction, on_frightened, on_frightened_elapsed, on_reached_home,
    random_direction, select_target, timer_toggle,
};

use crate::collision::{ContactOutcome, contact, resolve_contact};
use crate::events::GameObserver;
use crate::movement::attempt_move;

pub(crate) struct PursuitCoordinator {
    pub(crate) grid: Arc<GridMap>,
    pub(crate) player: Arc<PlayerAgent>,
    pub(crate) pursuers: Vec<Arc<PursuerAgent>>,

    /// Per-pursuer deterministic RNGs, parallel to `pursuers`.
    pub(crate) rngs: Vec<PursuerRng>,

    /// Previous tick's contact state per pursuer — the rising-edge filter
    /// that keeps collision events to one per distinct overlap.
    pub(crate) overlapped: Vec<bool>,

    /// When the last Chase↔Scatter toggle happened.  `None` until the
    /// first tick, which establishes the session's t0.
    pub(crate) last_switch: Option<Instant>,
    pub(crate) mode_switch_interval: Duration,

    /// Set by `Session::frighten_pursuers` from any thread; drained here.
    pub(crate) frighten_request: Arc<AtomicBool>,
    /// Set by `Session::end_frightened` from any thread; drained here.
    pub(crate) calm_request: Arc<AtomicBool>,

    pub(crate) observer: Arc<dyn GameObserver>,
    pub(crate) period: Duration,
    pub(crate) stop: Arc<AtomicBool>,
}

impl PursuitCoordinator {
    /// The task body: tick, sleep, repeat until the stop flag flips.
    pub(crate) fn run(mut self) {
        while !self.stop.load(Ordering::Acquire) {
            self.tick(Instant::now());
            thread::sleep(self.period);
        }
        log::debug!("pursuit coordinator stopped");
    }

    /// One full pass over the roster.  `now` is injected so tests can step
    /// simulated time without sleeping.
    pub(crate) fn tick(&mut self, now: Instant) {
        self.apply_external_signals();
        self.apply_mode_timer(now);

        // One snapshot per tick: every pursuer decides against the same
        // observed player, even while the real one moves concurrently.
        let player = PlayerView {
            position: self.player.position(),
            facing: self.player.current_direction(),
        };

        let grid = &self.grid;
        let rngs = &mut self.rngs;
        for (i, pursuer) in self.pursuers.iter().enumerate() {
            step_pursuer(grid, pursuer, &mut rngs[i], player);
        }

        self.resolve_collisions();
        self.observer.on_state_changed();
    }

    // ── Phase ①: external mode signals ────────────────────────────────────

    fn apply_external_signals(&mut self) {
        if self.frighten_request.swap(false, Ordering::AcqRel) {
            log::debug!("frighten signal: pack enters frightened mode");
            for pursuer in &self.pursuers {
                pursuer.set_mode(on_frightened(pursuer.mode()));
            }
        }
        if self.calm_request.swap(false, Ordering::AcqRel) {
            log::debug!("frightened duration elapsed: pack resumes chase");
            for pursuer in &self.pursuers {
                pursuer.set_mode(on_frightened_elapsed(pursuer.mode()));
            }
        }
    }

    // ── Phase ②: the Chase↔Scatter timer ──────────────────────────────────

    fn apply_mode_timer(&mut self, now: Instant) {
        let Some(last) = self.last_switch else {
            // First tick establishes t0; the initial Scatter phase runs a
            // full interval from here.
            self.last_switch = Some(now);
            return;
        };

        if now.duration_since(last) >= self.mode_switch_interval {
            for pursuer in &self.pursuers {
                let next = timer_toggle(pursuer.mode());
                if next != pursuer.mode() {
                    log::debug!("pursuer {} toggles to {next}", pursuer.id());
                }
                pursuer.set_mode(next);
            }
            self.last_switch = Some(now);
        }
    }

    // ── Phase ④: collision resolution ─────────────────────────────────────

    fn resolve_collisions(&mut self) {
        // Re-read rather than reuse the decision snapshot: the player may
        // have stepped while the roster moved, and a stale read here would
        // miss a contact the next tick can't see either (both agents gone).
        let player_pos = self.player.position();

        for (i, pursuer) in self.pursuers.iter().enumerate() {
            let touching = contact(pursuer.position(), player_pos);

            if touching && !self.overlapped[i] {
                match resolve_contact(pursuer.mode()) {
                    ContactOutcome::PlayerHit => {
                        log::debug!("pursuer {} caught the player", pursuer.id());
                        self.observer.on_player_hit();
                    }
                    ContactOutcome::PursuerEaten => {
                        log::debug!("pursuer {} eaten", pursuer.id());
                        pursuer.set_mode(PursuerMode::Eaten);
                        self.observer.on_pursuer_eaten(pursuer.id());
                    }
                    ContactOutcome::Ignored => {}
                }
            }

            self.overlapped[i] = touching;
        }
    }
}

// ── Phase ③ body: one pursuer's decision and move ─────────────────────────────

/// Decide and execute one pursuer's move for this tick.
///
/// Free function (not a method) so the borrow on the RNG vector stays
/// disjoint from the roster iteration.
fn step_pursuer(
    grid: &GridMap,
    pursuer: &PursuerAgent,
    rng: &mut PursuerRng,
    player: PlayerView,
) {
    // An Eaten pursuer standing on home respawns before it decides, so the
    // respawn is visible to its own steering this tick.
    try_respawn(pursuer);

    let dir = match select_target(
        pursuer.mode(),
        pursuer.kind(),
        pursuer.scatter_corner(),
        pursuer.home(),
        player,
    ) {
        Some(target) => choose_direction(
            grid,
            pursuer.position(),
            pursuer.speed(),
            pursuer.current_direction(),
            target,
        ),
        // Frightened: erratic, non-greedy motion.
        None => random_direction(grid, pursuer.position(), pursuer.speed(), rng),
    };

    if dir.is_moving() && !attempt_move(grid, pursuer, dir) {
        // Stuck recovery: the chosen move failed despite passing validity
        // (possible only under a selection/commit race).  One random retry;
        // if that fails too the pursuer just skips this tick.
        let retry = random_direction(grid, pursuer.position(), pursuer.speed(), rng);
        if retry.is_moving() && !attempt_move(grid, pursuer, retry) {
            log::trace!("pursuer {} stuck at {}", pursuer.id(), pursuer.position());
        }
    }

    // Arriving on home completes the Eaten round trip in the same tick.
    try_respawn(pursuer);

    pursuer.advance_frame();
}

fn try_respawn(pursuer: &PursuerAgent) {
    if pursuer.mode() == PursuerMode::Eaten && pursuer.position() == pursuer.home() {
        log::debug!("pursuer {} reached home, respawning", pursuer.id());
        pursuer.set_mode(on_reached_home(PursuerMode::Eaten));
    }
}
