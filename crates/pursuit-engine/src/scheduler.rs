//! The player's periodic movement task.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use pursuit_agent::{Movable, PlayerAgent};
use pursuit_grid::GridMap;

use crate::collectibles::Collectibles;
use crate::events::GameObserver;
use crate::movement::attempt_move;

/// The player movement task: one bounded unit of work per fixed period.
///
/// Each tick re-reads the player's *desired* direction — the persisted
/// intent mailbox — and attempts one move.  A blocked intent stays put and
/// stays persisted, so holding a direction against a wall turns the player
/// the moment the wall ends.  The task owns all writes to the player's
/// position and facing.
pub(crate) struct PlayerScheduler {
    grid: Arc<GridMap>,
    player: Arc<PlayerAgent>,
    collectibles: Arc<Collectibles>,
    observer: Arc<dyn GameObserver>,
    period: Duration,
    stop: Arc<AtomicBool>,
}

impl PlayerScheduler {
    pub(crate) fn new(
        grid: Arc<GridMap>,
        player: Arc<PlayerAgent>,
        collectibles: Arc<Collectibles>,
        observer: Arc<dyn GameObserver>,
        period: Duration,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self {
            grid,
            player,
            collectibles,
            observer,
            period,
            stop,
        }
    }

    /// The task body: tick, sleep, repeat until the stop flag flips.
    ///
    /// The flag is checked at the sleep boundary only — a tick in progress
    /// always completes, per the cooperative-cancellation contract.
    pub(crate) fn run(self) {
        while !self.stop.load(Ordering::Acquire) {
            self.tick();
            thread::sleep(self.period);
        }
        log::debug!("player scheduler stopped");
    }

    /// One unit of work.  Separated from [`run`](Self::run) so tests can
    /// drive ticks synchronously without threads or timers.
    pub(crate) fn tick(&self) {
        let desired = self.player.desired_direction();
        if !desired.is_moving() {
            return;
        }

        if attempt_move(&self.grid, &*self.player, desired) {
            self.player.advance_frame();

            let pos = self.player.position();
            if self.collectibles.try_collect(pos) {
                log::debug!("pellet collected at {pos}");
                self.observer.on_point_collected(pos);
            }

            self.observer.on_state_changed();
        }
        // A rejected move leaves both position and intent untouched; the
        // same intent is simply re-attempted next tick.
    }
}
