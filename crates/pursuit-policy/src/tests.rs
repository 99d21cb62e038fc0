//! Unit tests for mode transitions, targeting, and steering.

use pursuit_grid::GridMap;

/// An open room with a solid border: rows x cols, interior fully walkable.
fn walled_room(rows: usize, cols: usize) -> GridMap {
    let mut grid = GridMap::new(rows, cols).unwrap();
    let (rows, cols) = (rows as i32, cols as i32);
    for r in 0..rows {
        grid.add_wall(r, 0);
        grid.add_wall(r, cols - 1);
    }
    for c in 0..cols {
        grid.add_wall(0, c);
        grid.add_wall(rows - 1, c);
    }
    grid
}

#[cfg(test)]
mod mode {
    use pursuit_core::PursuerMode::*;

    use crate::{on_frightened, on_frightened_elapsed, on_reached_home, timer_toggle};

    #[test]
    fn timer_toggles_only_chase_and_scatter() {
        assert_eq!(timer_toggle(Chase), Scatter);
        assert_eq!(timer_toggle(Scatter), Chase);
        assert_eq!(timer_toggle(Frightened), Frightened);
        assert_eq!(timer_toggle(Eaten), Eaten);
    }

    #[test]
    fn frighten_spares_eaten() {
        assert_eq!(on_frightened(Chase), Frightened);
        assert_eq!(on_frightened(Scatter), Frightened);
        assert_eq!(on_frightened(Frightened), Frightened);
        assert_eq!(on_frightened(Eaten), Eaten);
    }

    #[test]
    fn frightened_elapsed_resumes_chase() {
        assert_eq!(on_frightened_elapsed(Frightened), Chase);
        assert_eq!(on_frightened_elapsed(Scatter), Scatter);
        assert_eq!(on_frightened_elapsed(Eaten), Eaten);
    }

    #[test]
    fn home_respawns_only_eaten() {
        assert_eq!(on_reached_home(Eaten), Scatter);
        assert_eq!(on_reached_home(Chase), Chase);
        assert_eq!(on_reached_home(Frightened), Frightened);
    }
}

#[cfg(test)]
mod target {
    use pursuit_core::{Direction, Position, PursuerMode};
    use pursuit_agent::PursuerKind;

    use crate::{PlayerView, select_target};

    const CORNER: Position = Position { row: 0, col: 9 };
    const HOME: Position = Position { row: 5, col: 5 };

    fn player(row: i32, col: i32, facing: Direction) -> PlayerView {
        PlayerView {
            position: Position::new(row, col),
            facing,
        }
    }

    #[test]
    fn chase_direct_targets_player_cell() {
        let t = select_target(
            PursuerMode::Chase,
            PursuerKind::Direct,
            CORNER,
            HOME,
            player(3, 4, Direction::Left),
        );
        assert_eq!(t, Some(Position::new(3, 4)));
    }

    #[test]
    fn chase_flanker_leads_the_player() {
        let t = select_target(
            PursuerMode::Chase,
            PursuerKind::Flanker,
            CORNER,
            HOME,
            player(3, 4, Direction::Right),
        );
        assert_eq!(t, Some(Position::new(3, 8)));
    }

    #[test]
    fn flanker_with_idle_player_targets_directly() {
        let t = select_target(
            PursuerMode::Chase,
            PursuerKind::Flanker,
            CORNER,
            HOME,
            player(3, 4, Direction::None),
        );
        assert_eq!(t, Some(Position::new(3, 4)));
    }

    #[test]
    fn scatter_targets_corner_not_player() {
        let t = select_target(
            PursuerMode::Scatter,
            PursuerKind::Direct,
            CORNER,
            HOME,
            player(3, 4, Direction::Up),
        );
        assert_eq!(t, Some(CORNER));
    }

    #[test]
    fn frightened_has_no_target() {
        let t = select_target(
            PursuerMode::Frightened,
            PursuerKind::Direct,
            CORNER,
            HOME,
            player(3, 4, Direction::Up),
        );
        assert_eq!(t, None);
    }

    #[test]
    fn eaten_targets_home() {
        let t = select_target(
            PursuerMode::Eaten,
            PursuerKind::Flanker,
            CORNER,
            HOME,
            player(3, 4, Direction::Up),
        );
        assert_eq!(t, Some(HOME));
    }
}

#[cfg(test)]
mod steer {
    use pursuit_core::{Direction, Position, PursuerId, PursuerRng};
    use pursuit_grid::GridMap;

    use super::walled_room;
    use crate::{available_directions, choose_direction, random_direction};

    #[test]
    fn candidates_come_in_decision_order() {
        let grid = walled_room(10, 10);
        let dirs = available_directions(&grid, Position::new(5, 5), 1);
        assert_eq!(
            dirs,
            vec![
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn walls_prune_candidates() {
        let grid = walled_room(10, 10);
        // Against the top-left interior corner: Up and Left are walls.
        let dirs = available_directions(&grid, Position::new(1, 1), 1);
        assert_eq!(dirs, vec![Direction::Down, Direction::Right]);
    }

    #[test]
    fn tie_break_prefers_up_over_right() {
        // Pursuer at (5,5), target (4,6): Up→(4,5) and Right→(5,6) are both
        // distance 1.  The fixed order must pick Up.
        let grid = walled_room(12, 12);
        let dir = choose_direction(
            &grid,
            Position::new(5, 5),
            1,
            Direction::None,
            Position::new(4, 6),
        );
        assert_eq!(dir, Direction::Up);
    }

    #[test]
    fn no_reversal_in_open_corridor() {
        // Horizontal corridor three cells wide, pursuer moving Right, target
        // directly behind it.  Left (the reverse) must not be chosen while
        // other options remain.
        let mut grid = GridMap::new(3, 9).unwrap();
        for c in 0..9 {
            grid.add_wall(0, c);
            grid.add_wall(2, c);
        }
        let dir = choose_direction(
            &grid,
            Position::new(1, 4),
            1,
            Direction::Right,
            Position::new(1, 0),
        );
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn dead_end_allows_reversal() {
        // Corridor closed on three sides: the only exit is back the way the
        // pursuer came.
        let mut grid = GridMap::new(3, 4).unwrap();
        for c in 0..4 {
            grid.add_wall(0, c);
            grid.add_wall(2, c);
        }
        grid.add_wall(1, 3);
        let dir = choose_direction(
            &grid,
            Position::new(1, 2),
            1,
            Direction::Right,
            Position::new(1, 3),
        );
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn fully_trapped_returns_none() {
        let mut grid = GridMap::new(3, 3).unwrap();
        for (r, c) in [(0, 1), (2, 1), (1, 0), (1, 2)] {
            grid.add_wall(r, c);
        }
        let dir = choose_direction(
            &grid,
            Position::new(1, 1),
            1,
            Direction::Up,
            Position::new(0, 0),
        );
        assert_eq!(dir, Direction::None);

        let mut rng = PursuerRng::new(0, PursuerId(0));
        assert_eq!(
            random_direction(&grid, Position::new(1, 1), 1, &mut rng),
            Direction::None
        );
    }

    #[test]
    fn greedy_moves_toward_target() {
        let grid = walled_room(10, 10);
        // Target far below: Down strictly dominates.
        let dir = choose_direction(
            &grid,
            Position::new(2, 5),
            1,
            Direction::None,
            Position::new(8, 5),
        );
        assert_eq!(dir, Direction::Down);
    }

    #[test]
    fn random_direction_only_yields_walkable_candidates() {
        let grid = walled_room(10, 10);
        let mut rng = PursuerRng::new(7, PursuerId(2));
        let pos = Position::new(1, 1); // only Down and Right are open
        for _ in 0..32 {
            let dir = random_direction(&grid, pos, 1, &mut rng);
            assert!(matches!(dir, Direction::Down | Direction::Right));
        }
    }
}
