//! Unit tests for the grid, the layout loader, and the maze generator.

#[cfg(test)]
mod grid {
    use crate::{GridError, GridMap};

    #[test]
    fn zero_dimension_is_fatal() {
        assert!(matches!(
            GridMap::new(0, 10),
            Err(GridError::EmptyGrid { rows: 0, cols: 10 })
        ));
        assert!(matches!(GridMap::new(10, 0), Err(GridError::EmptyGrid { .. })));
    }

    #[test]
    fn starts_fully_walkable() {
        let grid = GridMap::new(4, 5).unwrap();
        assert_eq!(grid.walkable_count(), 20);
        assert!(grid.is_walkable(3, 4));
    }

    #[test]
    fn out_of_bounds_is_never_walkable() {
        let grid = GridMap::new(4, 5).unwrap();
        assert!(!grid.is_walkable(-1, 0));
        assert!(!grid.is_walkable(0, -1));
        assert!(!grid.is_walkable(4, 0));
        assert!(!grid.is_walkable(0, 5));
        assert!(!grid.is_walkable(i32::MIN, i32::MAX));
    }

    #[test]
    fn set_walkable_out_of_bounds_is_a_noop() {
        let mut grid = GridMap::new(4, 5).unwrap();
        grid.set_walkable(-1, 2, false);
        grid.set_walkable(9, 9, false);
        assert_eq!(grid.walkable_count(), 20);
    }

    #[test]
    fn walls_block() {
        let mut grid = GridMap::new(4, 5).unwrap();
        grid.add_wall(2, 2);
        assert!(!grid.is_walkable(2, 2));
        assert!(grid.is_walkable(2, 1));
        assert_eq!(grid.walkable_count(), 19);
    }
}

#[cfg(test)]
mod loader {
    use pursuit_core::Position;

    use crate::{GridError, parse_layout};

    const LAYOUT: &str = "\
#####
#P.o#
#oOG#
#####";

    #[test]
    fn unknown_cell_is_an_error() {
        // '.' is not in the alphabet — the layout above must fail.
        assert!(matches!(
            parse_layout(LAYOUT),
            Err(GridError::UnknownCell { ch: '.', line: 2, col: 3 })
        ));
    }

    #[test]
    fn parses_special_cells() {
        let layout = parse_layout(
            "#####\n\
             #P o#\n\
             #oOG#\n\
             #####",
        )
        .unwrap();

        assert_eq!(layout.grid.rows(), 4);
        assert_eq!(layout.grid.cols(), 5);
        assert_eq!(layout.player_start, Some(Position::new(1, 1)));
        assert_eq!(layout.pursuer_starts, vec![Position::new(2, 3)]);
        assert_eq!(layout.pellets, vec![Position::new(1, 3), Position::new(2, 1)]);
        assert_eq!(layout.power_pellets, vec![Position::new(2, 2)]);

        // Walls are walls, markers are walkable.
        assert!(!layout.grid.is_walkable(0, 0));
        assert!(layout.grid.is_walkable(1, 1));
        assert!(layout.grid.is_walkable(2, 3));
    }

    #[test]
    fn short_lines_pad_walkable() {
        let layout = parse_layout("###\n#\n###").unwrap();
        assert_eq!(layout.grid.cols(), 3);
        assert!(layout.grid.is_walkable(1, 1));
        assert!(layout.grid.is_walkable(1, 2));
    }

    #[test]
    fn empty_input_is_fatal() {
        assert!(matches!(parse_layout(""), Err(GridError::EmptyGrid { .. })));
    }
}

#[cfg(test)]
mod maze {
    use crate::basic_maze;

    #[test]
    fn border_is_walled() {
        let grid = basic_maze(16, 20, 7).unwrap();
        for r in 0..16 {
            assert!(!grid.is_walkable(r, 0));
            assert!(!grid.is_walkable(r, 19));
        }
        for c in 0..20 {
            assert!(!grid.is_walkable(0, c));
            assert!(!grid.is_walkable(15, c));
        }
    }

    #[test]
    fn center_stays_open() {
        let grid = basic_maze(16, 20, 7).unwrap();
        assert!(grid.is_walkable(8, 10));
    }

    #[test]
    fn same_seed_same_maze() {
        let a = basic_maze(16, 20, 99).unwrap();
        let b = basic_maze(16, 20, 99).unwrap();
        for r in 0..16 {
            for c in 0..20 {
                assert_eq!(a.is_walkable(r, c), b.is_walkable(r, c));
            }
        }
    }
}
