//! Unit tests for pursuit-core primitives.

#[cfg(test)]
mod ids {
    use crate::PursuerId;

    #[test]
    fn index_roundtrip() {
        let id = PursuerId(3);
        assert_eq!(id.index(), 3);
        assert_eq!(PursuerId::try_from(3usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinel_is_max() {
        assert_eq!(PursuerId::INVALID.0, u32::MAX);
        assert_eq!(PursuerId::default(), PursuerId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PursuerId(7).to_string(), "PursuerId(7)");
    }
}

#[cfg(test)]
mod position {
    use crate::{Direction, Position};

    #[test]
    fn manhattan_is_symmetric() {
        let a = Position::new(5, 5);
        let b = Position::new(2, 9);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.manhattan(a), 0);
    }

    #[test]
    fn step_offsets() {
        let p = Position::new(4, 4);
        assert_eq!(p.step(Direction::Up, 1), Position::new(3, 4));
        assert_eq!(p.step(Direction::Down, 1), Position::new(5, 4));
        assert_eq!(p.step(Direction::Left, 1), Position::new(4, 3));
        assert_eq!(p.step(Direction::Right, 1), Position::new(4, 5));
        assert_eq!(p.step(Direction::None, 1), p);
    }

    #[test]
    fn step_respects_speed() {
        let p = Position::new(4, 4);
        assert_eq!(p.step(Direction::Up, 2), Position::new(2, 4));
        assert_eq!(p.step(Direction::Right, 3), Position::new(4, 7));
    }

    #[test]
    fn step_may_leave_bounds() {
        // Candidate positions are allowed to go negative; validity is
        // checked against the grid, not here.
        let p = Position::new(0, 0);
        assert_eq!(p.step(Direction::Up, 1), Position::new(-1, 0));
    }
}

#[cfg(test)]
mod direction {
    use crate::Direction;

    #[test]
    fn opposites_pair_up() {
        for d in Direction::DECISION_ORDER {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
        assert_eq!(Direction::None.opposite(), Direction::None);
    }

    #[test]
    fn decision_order_is_fixed() {
        assert_eq!(
            Direction::DECISION_ORDER,
            [
                Direction::Up,
                Direction::Down,
                Direction::Left,
                Direction::Right
            ]
        );
    }

    #[test]
    fn none_is_not_moving() {
        assert!(!Direction::None.is_moving());
        assert!(Direction::Up.is_moving());
    }
}

#[cfg(test)]
mod config {
    use std::time::Duration;

    use crate::EngineConfig;

    #[test]
    fn defaults() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.player_period, Duration::from_millis(200));
        assert_eq!(cfg.pursuer_period, Duration::from_millis(250));
        assert_eq!(cfg.mode_switch_interval, Duration::from_millis(15_000));
    }
}

#[cfg(test)]
mod rng {
    use crate::{PursuerId, PursuerRng};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = PursuerRng::new(42, PursuerId(0));
        let mut b = PursuerRng::new(42, PursuerId(0));
        for _ in 0..16 {
            assert_eq!(a.gen_range(0..1000), b.gen_range(0..1000));
        }
    }

    #[test]
    fn distinct_pursuers_diverge() {
        let mut a = PursuerRng::new(42, PursuerId(0));
        let mut b = PursuerRng::new(42, PursuerId(1));
        let xs: Vec<u32> = (0..8).map(|_| a.gen_range(0..u32::MAX)).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn choose_from_empty_is_none() {
        let mut rng = PursuerRng::new(1, PursuerId(0));
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
