//! chase — smallest end-to-end demo of the pursuit engine.
//!
//! Loads an embedded text layout, runs a session for a few seconds while
//! steering the player through a scripted tour, fires the power-pellet
//! signal halfway, and prints an ASCII snapshot plus the event tally at
//! the end.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use pursuit_core::{Direction, EngineConfig, Position, PursuerId, PursuerMode};
use pursuit_agent::Movable;
use pursuit_engine::{GameObserver, Session, SessionBuilder};
use pursuit_grid::parse_layout;

// ── Constants ─────────────────────────────────────────────────────────────────

const PLAYER_PERIOD_MS: u64 = 120;
const PURSUER_PERIOD_MS: u64 = 150;
const MODE_SWITCH_MS: u64 = 4_000;
const SEED: u64 = 42;
const RUN_SECS: u64 = 8;

// 12x20 maze: walls, pellets, one power pellet, player start, two pursuers.
const LAYOUT: &str = "\
####################
#oooooooo  oooooooo#
#o###o###  ###o###o#
#o#      G       #o#
#o# ###  ##  ### #o#
#    #        #   O#
#o# ###  ##  ### #o#
#o#      G       #o#
#o###o###  ###o###o#
#oooooooo Poooooooo#
#                  #
####################";

// ── Event tally ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct Tally {
    hits: AtomicUsize,
    eaten: AtomicUsize,
    points: AtomicUsize,
}

impl GameObserver for Tally {
    fn on_player_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        println!("  !! player hit");
    }
    fn on_pursuer_eaten(&self, pursuer: PursuerId) {
        self.eaten.fetch_add(1, Ordering::Relaxed);
        println!("  ** {pursuer} eaten");
    }
    fn on_point_collected(&self, pos: Position) {
        self.points.fetch_add(1, Ordering::Relaxed);
        println!("  .. pellet at {pos}");
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let layout = parse_layout(LAYOUT)?;
    let tally = Arc::new(Tally::default());

    let mut session = SessionBuilder::from_layout(layout)
        .config(EngineConfig {
            player_period: Duration::from_millis(PLAYER_PERIOD_MS),
            pursuer_period: Duration::from_millis(PURSUER_PERIOD_MS),
            mode_switch_interval: Duration::from_millis(MODE_SWITCH_MS),
            seed: SEED,
        })
        .observer(Arc::clone(&tally) as Arc<dyn GameObserver>)
        .build()?;

    println!(
        "{}x{} grid, {} pursuers, {} pellets",
        session.grid().rows(),
        session.grid().cols(),
        session.pursuers().len(),
        session.pellets_remaining()
    );

    session.start()?;

    // Scripted tour: a lap of the lower corridor, then up the middle.
    let tour = [
        (Direction::Left, 1_000),
        (Direction::Down, 400),
        (Direction::Right, 1_500),
        (Direction::Up, 400),
        (Direction::Right, 1_000),
    ];
    for (dir, ms) in tour {
        session.set_desired_direction(dir);
        thread::sleep(Duration::from_millis(ms));
    }

    // Power pellet: the pack scatters in fear for two seconds.
    println!("-- power pellet!");
    session.frighten_pursuers();
    thread::sleep(Duration::from_millis(2_000));
    session.end_frightened();

    let spent = 4_300 + 2_000;
    thread::sleep(Duration::from_millis(RUN_SECS * 1_000 - spent));
    session.stop();

    print_snapshot(&session);
    println!(
        "events: {} hits, {} eaten, {} pellets collected, {} pellets left",
        tally.hits.load(Ordering::Relaxed),
        tally.eaten.load(Ordering::Relaxed),
        tally.points.load(Ordering::Relaxed),
        session.pellets_remaining()
    );
    Ok(())
}

/// ASCII view: `@` player, `A`-`Z` pursuers (lowercase while frightened or
/// eaten), `#` walls.
fn print_snapshot(session: &Session) {
    let grid = session.grid();
    for r in 0..grid.rows() as i32 {
        let mut line = String::with_capacity(grid.cols());
        'cell: for c in 0..grid.cols() as i32 {
            let here = Position::new(r, c);
            if session.player().position() == here {
                line.push('@');
                continue;
            }
            for pursuer in session.pursuers() {
                if pursuer.position() == here {
                    let tag = (b'A' + (pursuer.id().0 % 26) as u8) as char;
                    let hunting = matches!(
                        pursuer.mode(),
                        PursuerMode::Chase | PursuerMode::Scatter
                    );
                    line.push(if hunting { tag } else { tag.to_ascii_lowercase() });
                    continue 'cell;
                }
            }
            line.push(if grid.is_walkable(r, c) { ' ' } else { '#' });
        }
        println!("{line}");
    }
}
