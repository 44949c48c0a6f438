//! Tests for ice assignment and slide simulation

#[cfg(test)]
mod tests {
    use echomaze::algorithm::corridors::{Corridor, extract_corridors, find_nodes};
    use echomaze::algorithm::ice::{
        Floor, FloorMap, SlideTable, assign_ice, eligible_corridors, simulate_slide,
    };
    use echomaze::math::sampling::RandomSelector;
    use echomaze::spatial::{Direction, Grid, Position};
    use std::collections::HashSet;

    fn icy_row(width: usize, frozen: &[i32]) -> (Grid, FloorMap) {
        let grid = Grid::open(width, 1);
        let mut floor = FloorMap::normal(width, 1);
        for &x in frozen {
            floor.freeze(Position::new(x, 0));
        }
        (grid, floor)
    }

    // Tests a slide crosses the whole frozen run
    // Verified by stopping after the first ice cell
    #[test]
    fn test_slide_crosses_ice() {
        let (grid, floor) = icy_row(5, &[1, 2, 3]);
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(0, 0), Direction::Right),
            Some(Position::new(4, 0))
        );
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(1, 0), Direction::Right),
            Some(Position::new(4, 0))
        );
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(2, 0), Direction::Left),
            Some(Position::new(0, 0))
        );
    }

    // Tests a slide stops against a wall while still on ice
    // Verified by letting the slide leave the grid
    #[test]
    fn test_slide_stops_at_wall() {
        let (grid, floor) = icy_row(4, &[1, 2, 3]);
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(0, 0), Direction::Right),
            Some(Position::new(3, 0))
        );
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(1, 0), Direction::Up),
            None
        );
    }

    // Tests normal floor moves a single cell
    // Verified by sliding on every floor type
    #[test]
    fn test_no_slide_on_normal_floor() {
        let (grid, floor) = icy_row(4, &[]);
        assert_eq!(
            simulate_slide(&grid, &floor, Position::new(0, 0), Direction::Right),
            Some(Position::new(1, 0))
        );
        assert_eq!(floor.slippery_count(), 0);
        assert_eq!(floor.get(Position::new(2, 0)), Floor::Normal);
        assert_eq!(floor.get(Position::new(-1, 0)), Floor::Normal);
    }

    // Tests the table holds only unblocked directions
    // Verified by inserting None results as the origin
    #[test]
    fn test_slide_table() {
        let (grid, floor) = icy_row(5, &[1, 2, 3]);
        let table = SlideTable::build(&grid, &floor, [Position::new(1, 0), Position::new(2, 0)]);
        assert_eq!(table.len(), 4);
        assert_eq!(
            table.get(Position::new(1, 0), Direction::Left),
            Some(Position::new(0, 0))
        );
        assert_eq!(table.get(Position::new(1, 0), Direction::Down), None);
        assert_eq!(table.get(Position::new(0, 0), Direction::Right), None);
        assert_eq!(table.from_origin(Position::new(2, 0)).count(), 2);
        assert!(SlideTable::default().is_empty());
    }

    // Tests hazards and empty corridors are never frozen
    // Verified by checking only the intermediate cells for hazards
    #[test]
    fn test_eligible_corridors() {
        let corridors = vec![
            Corridor {
                from: Position::new(0, 0),
                to: Position::new(3, 0),
                cells: vec![Position::new(1, 0), Position::new(2, 0)],
            },
            Corridor {
                from: Position::new(0, 1),
                to: Position::new(3, 1),
                cells: vec![Position::new(1, 1), Position::new(2, 1)],
            },
            Corridor {
                from: Position::new(0, 2),
                to: Position::new(1, 2),
                cells: Vec::new(),
            },
        ];

        let none = HashSet::new();
        assert_eq!(eligible_corridors(&corridors, &none).len(), 2);

        let hazard_on_node = HashSet::from([Position::new(3, 1)]);
        let eligible = eligible_corridors(&corridors, &hazard_on_node);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible.first().map(|corridor| corridor.from), Some(Position::new(0, 0)));
    }

    // Tests at least one eligible corridor freezes for a positive ratio
    // Verified by rounding 0.3 of one corridor down to zero
    #[test]
    fn test_assign_ice_minimum() {
        let grid = Grid::open(5, 1);
        let start = Position::new(0, 0);
        let end = Position::new(4, 0);
        let nodes = find_nodes(&grid, start, end);
        let corridors = extract_corridors(&grid, &nodes, start, end);
        let eligible = eligible_corridors(&corridors, &HashSet::new());
        assert_eq!(eligible.len(), 1);

        let mut rng = RandomSelector::new(4);
        let floor = assign_ice(&grid, &eligible, 0.3, &mut rng);
        assert_eq!(floor.slippery_count(), 3);
        assert!(!floor.is_slippery(start));
        assert!(!floor.is_slippery(end));

        let dry = assign_ice(&grid, &eligible, 0.0, &mut rng);
        assert_eq!(dry.slippery_count(), 0);
        let nothing = assign_ice(&grid, &[], 0.3, &mut rng);
        assert_eq!(nothing.slippery_count(), 0);
    }
}
