//! Unit tests for state cells and agent construction.

#[cfg(test)]
mod cells {
    use pursuit_core::{Direction, Position, PursuerMode};

    use crate::cell::{DirectionCell, FrameCell, ModeCell, PositionCell};

    #[test]
    fn position_roundtrip() {
        let cell = PositionCell::new(Position::new(3, 7));
        assert_eq!(cell.load(), Position::new(3, 7));
        cell.store(Position::new(11, 2));
        assert_eq!(cell.load(), Position::new(11, 2));
    }

    #[test]
    fn position_packs_negative_coordinates() {
        // Candidate arithmetic never stores negatives, but the packing must
        // not corrupt them if it ever sees one.
        let cell = PositionCell::new(Position::new(-1, -9));
        assert_eq!(cell.load(), Position::new(-1, -9));
        cell.store(Position::new(i32::MAX, i32::MIN));
        assert_eq!(cell.load(), Position::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn direction_roundtrip() {
        let cell = DirectionCell::new(Direction::None);
        for d in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
            Direction::None,
        ] {
            cell.store(d);
            assert_eq!(cell.load(), d);
        }
    }

    #[test]
    fn mode_roundtrip() {
        let cell = ModeCell::new(PursuerMode::Scatter);
        for m in [
            PursuerMode::Chase,
            PursuerMode::Frightened,
            PursuerMode::Eaten,
            PursuerMode::Scatter,
        ] {
            cell.store(m);
            assert_eq!(cell.load(), m);
        }
    }

    #[test]
    fn frames_wrap() {
        let cell = FrameCell::new(3);
        assert_eq!(cell.load(), 0);
        cell.advance();
        cell.advance();
        assert_eq!(cell.load(), 2);
        cell.advance();
        assert_eq!(cell.load(), 0);
    }

    #[test]
    fn single_frame_cycle_stays_put() {
        let cell = FrameCell::new(1);
        cell.advance();
        assert_eq!(cell.load(), 0);
    }
}

#[cfg(test)]
mod player {
    use pursuit_core::{Direction, Position};

    use crate::{Movable, PlayerAgent};

    #[test]
    fn starts_idle_at_start_cell() {
        let player = PlayerAgent::new(Position::new(5, 5));
        assert_eq!(player.position(), Position::new(5, 5));
        assert_eq!(player.current_direction(), Direction::None);
        assert_eq!(player.desired_direction(), Direction::None);
        assert_eq!(player.animation_frame(), 0);
    }

    #[test]
    fn desired_is_last_write_wins() {
        let player = PlayerAgent::new(Position::new(1, 1));
        player.set_desired_direction(Direction::Up);
        player.set_desired_direction(Direction::Left);
        assert_eq!(player.desired_direction(), Direction::Left);
        // Intent alone never changes facing or position.
        assert_eq!(player.current_direction(), Direction::None);
        assert_eq!(player.position(), Position::new(1, 1));
    }

    #[test]
    fn commit_updates_position_and_facing_together() {
        let player = PlayerAgent::new(Position::new(2, 2));
        player.commit_move(Position::new(2, 3), Direction::Right);
        assert_eq!(player.position(), Position::new(2, 3));
        assert_eq!(player.current_direction(), Direction::Right);
    }
}

#[cfg(test)]
mod pursuer {
    use pursuit_core::{Position, PursuerId, PursuerMode};

    use crate::{Movable, PursuerAgent, PursuerKind, PursuerSpec};

    fn spec() -> PursuerSpec {
        PursuerSpec {
            kind: PursuerKind::Direct,
            start: Position::new(1, 8),
            scatter_corner: Position::new(0, 9),
            home: Position::new(4, 5),
        }
    }

    #[test]
    fn starts_in_scatter() {
        let p = PursuerAgent::new(PursuerId(0), spec());
        assert_eq!(p.mode(), PursuerMode::Scatter);
        assert_eq!(p.position(), Position::new(1, 8));
        assert_eq!(p.scatter_corner(), Position::new(0, 9));
        assert_eq!(p.home(), Position::new(4, 5));
    }

    #[test]
    fn mode_writes_visible_to_readers() {
        let p = PursuerAgent::new(PursuerId(1), spec());
        p.set_mode(PursuerMode::Frightened);
        assert_eq!(p.mode(), PursuerMode::Frightened);
    }
}
