//! Session assembly and lifecycle.
//!
//! `SessionBuilder` validates the pieces and wires them together;
//! `Session` owns the two movement tasks and the handles the collaborators
//! use: direction input, mode signals, and pull-based state reads.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use pursuit_core::{Direction, EngineConfig, Position, PursuerId, PursuerRng};
use pursuit_agent::{PlayerAgent, PursuerAgent, PursuerKind, PursuerSpec};
use pursuit_grid::{GridMap, MapLayout};

use crate::collectibles::Collectibles;
use crate::coordinator::PursuitCoordinator;
use crate::error::{EngineError, EngineResult};
use crate::events::{GameObserver, NoopObserver};
use crate::scheduler::PlayerScheduler;

// ── SessionBuilder ────────────────────────────────────────────────────────────

/// Fluent builder for [`Session`].
///
/// # Required inputs
///
/// - a [`GridMap`] (via [`new`](Self::new) or [`from_layout`](Self::from_layout))
/// - a player start cell
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                          |
/// |-------------------|----------------------------------|
/// | `.config(c)`      | [`EngineConfig::default()`]      |
/// | `.pursuer(spec)`  | empty roster                     |
/// | `.collectibles(v)`| no pellets                       |
/// | `.observer(o)`    | [`NoopObserver`]                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut session = SessionBuilder::new(grid)
///     .player_start(Position::new(8, 10))
///     .pursuer(PursuerSpec { kind: PursuerKind::Direct, start, scatter_corner, home })
///     .observer(Arc::new(MyScoreboard::default()))
///     .build()?;
/// session.start()?;
/// ```
pub struct SessionBuilder {
    grid: GridMap,
    config: EngineConfig,
    player_start: Option<Position>,
    pursuer_specs: Vec<PursuerSpec>,
    collectibles: Vec<Position>,
    observer: Option<Arc<dyn GameObserver>>,
}

impl SessionBuilder {
    /// Start from a bare grid.
    pub fn new(grid: GridMap) -> Self {
        Self {
            grid,
            config: EngineConfig::default(),
            player_start: None,
            pursuer_specs: Vec::new(),
            collectibles: Vec::new(),
            observer: None,
        }
    }

    /// Start from a parsed [`MapLayout`]: the player start, pursuer roster,
    /// and pellet set all come from the layout's marked cells.
    ///
    /// Roster derivation: pursuers alternate `Direct`/`Flanker` in reading
    /// order, each homes on its own start cell, and scatter corners cycle
    /// through the four map corners so the pack spreads out.  (A scatter
    /// corner is a steering target, not a destination — it may be a wall.)
    pub fn from_layout(layout: MapLayout) -> Self {
        let rows = layout.grid.rows() as i32;
        let cols = layout.grid.cols() as i32;
        let corners = [
            Position::new(0, cols - 1),
            Position::new(0, 0),
            Position::new(rows - 1, cols - 1),
            Position::new(rows - 1, 0),
        ];

        let pursuer_specs = layout
            .pursuer_starts
            .iter()
            .enumerate()
            .map(|(i, &start)| PursuerSpec {
                kind: if i % 2 == 0 {
                    PursuerKind::Direct
                } else {
                    PursuerKind::Flanker
                },
                start,
                scatter_corner: corners[i % corners.len()],
                home: start,
            })
            .collect();

        let mut collectibles = layout.pellets;
        collectibles.extend(layout.power_pellets);

        Self {
            grid: layout.grid,
            config: EngineConfig::default(),
            player_start: layout.player_start,
            pursuer_specs,
            collectibles,
            observer: None,
        }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_start(mut self, start: Position) -> Self {
        self.player_start = Some(start);
        self
    }

    /// Append one pursuer to the roster.  Roster order is decision order.
    pub fn pursuer(mut self, spec: PursuerSpec) -> Self {
        self.pursuer_specs.push(spec);
        self
    }

    pub fn collectibles<I: IntoIterator<Item = Position>>(mut self, cells: I) -> Self {
        self.collectibles = cells.into_iter().collect();
        self
    }

    pub fn observer(mut self, observer: Arc<dyn GameObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Validate and assemble a ready-to-start [`Session`].
    ///
    /// # Errors
    ///
    /// - [`EngineError::MissingPlayerStart`] without a player start.
    /// - [`EngineError::BlockedCell`] if the player start or any pursuer
    ///   start/home cell is out of bounds or walled.  Scatter corners are
    ///   exempt — they are steering targets, not destinations.
    pub fn build(self) -> EngineResult<Session> {
        let player_start = self.player_start.ok_or(EngineError::MissingPlayerStart)?;
        check_walkable(&self.grid, "player start", player_start)?;
        for spec in &self.pursuer_specs {
            check_walkable(&self.grid, "pursuer start", spec.start)?;
            check_walkable(&self.grid, "pursuer home", spec.home)?;
        }

        let pursuers = self
            .pursuer_specs
            .iter()
            .enumerate()
            .map(|(i, &spec)| Arc::new(PursuerAgent::new(PursuerId(i as u32), spec)))
            .collect();

        Ok(Session {
            grid: Arc::new(self.grid),
            config: self.config,
            player: Arc::new(PlayerAgent::new(player_start)),
            pursuers,
            collectibles: Arc::new(Collectibles::new(self.collectibles)),
            observer: self.observer.unwrap_or_else(|| Arc::new(NoopObserver)),
            stop: Arc::new(AtomicBool::new(false)),
            frighten_request: Arc::new(AtomicBool::new(false)),
            calm_request: Arc::new(AtomicBool::new(false)),
            handles: Vec::new(),
        })
    }
}

fn check_walkable(grid: &GridMap, what: &'static str, at: Position) -> EngineResult<()> {
    if grid.is_walkable_at(at) {
        Ok(())
    } else {
        Err(EngineError::BlockedCell { what, at })
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

/// A running (or ready-to-run) pursuit session.
///
/// Owns the two movement threads.  Dropping a session stops them: teardown
/// can never leak a task still holding the shared state.
pub struct Session {
    grid: Arc<GridMap>,
    config: EngineConfig,
    player: Arc<PlayerAgent>,
    pursuers: Vec<Arc<PursuerAgent>>,
    collectibles: Arc<Collectibles>,
    observer: Arc<dyn GameObserver>,

    /// The shared cooperative stop flag; both tasks exit at their next
    /// sleep boundary once it flips.
    stop: Arc<AtomicBool>,
    frighten_request: Arc<AtomicBool>,
    calm_request: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl Session {
    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Spawn the player and coordinator tasks.  A no-op while already
    /// running.  A stopped session can be started again; pursuer RNGs are
    /// re-seeded from the config so a restarted run replays the same draws.
    pub fn start(&mut self) -> EngineResult<()> {
        if self.is_running() {
            log::warn!("session already running, start ignored");
            return Ok(());
        }
        self.stop.store(false, Ordering::Release);

        let scheduler = PlayerScheduler::new(
            Arc::clone(&self.grid),
            Arc::clone(&self.player),
            Arc::clone(&self.collectibles),
            Arc::clone(&self.observer),
            self.config.player_period,
            Arc::clone(&self.stop),
        );

        let coordinator = PursuitCoordinator {
            grid: Arc::clone(&self.grid),
            player: Arc::clone(&self.player),
            pursuers: self.pursuers.iter().map(Arc::clone).collect(),
            rngs: self
                .pursuers
                .iter()
                .map(|p| PursuerRng::new(self.config.seed, p.id()))
                .collect(),
            overlapped: vec![false; self.pursuers.len()],
            last_switch: None,
            mode_switch_interval: self.config.mode_switch_interval,
            frighten_request: Arc::clone(&self.frighten_request),
            calm_request: Arc::clone(&self.calm_request),
            observer: Arc::clone(&self.observer),
            period: self.config.pursuer_period,
            stop: Arc::clone(&self.stop),
        };

        let player_handle = thread::Builder::new()
            .name("player-scheduler".into())
            .spawn(move || scheduler.run())?;

        match thread::Builder::new()
            .name("pursuit-coordinator".into())
            .spawn(move || coordinator.run())
        {
            Ok(handle) => {
                self.handles.push(player_handle);
                self.handles.push(handle);
            }
            Err(e) => {
                // Don't leave a half-started session behind.
                self.stop.store(true, Ordering::Release);
                let _ = player_handle.join();
                return Err(e.into());
            }
        }

        log::info!(
            "session started: {} pursuers on a {}x{} grid",
            self.pursuers.len(),
            self.grid.rows(),
            self.grid.cols()
        );
        Ok(())
    }

    /// Signal both tasks to stop and wait for them to exit.  Idempotent;
    /// stopping a never-started session does nothing.
    pub fn stop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        self.stop.store(true, Ordering::Release);
        for handle in self.handles.drain(..) {
            // A task can only terminate by returning; a join error would
            // mean it panicked, which is a bug worth surfacing in the log.
            if handle.join().is_err() {
                log::error!("movement task panicked during shutdown");
            }
        }
        log::info!("session stopped");
    }

    /// `true` while the movement tasks are alive.
    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }

    // ── Input collaborator ────────────────────────────────────────────────

    /// Record the player's movement intent.  Last write wins, applied on
    /// the player task's next tick.
    pub fn set_desired_direction(&self, dir: Direction) {
        self.player.set_desired_direction(dir);
    }

    // ── Game-state collaborator signals ───────────────────────────────────

    /// Power-pellet event: every hunting pursuer turns Frightened at the
    /// start of the coordinator's next tick.
    pub fn frighten_pursuers(&self) {
        self.frighten_request.store(true, Ordering::Release);
    }

    /// Frightened duration elapsed: every Frightened pursuer resumes Chase
    /// at the start of the coordinator's next tick.
    pub fn end_frightened(&self) {
        self.calm_request.store(true, Ordering::Release);
    }

    // ── Presentation reads ────────────────────────────────────────────────

    pub fn grid(&self) -> &GridMap {
        &self.grid
    }

    pub fn player(&self) -> &Arc<PlayerAgent> {
        &self.player
    }

    pub fn pursuers(&self) -> &[Arc<PursuerAgent>] {
        &self.pursuers
    }

    pub fn pellets_remaining(&self) -> usize {
        self.collectibles.remaining()
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.stop();
    }
}
