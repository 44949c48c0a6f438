//! Tests for node detection and corridor extraction

#[cfg(test)]
mod tests {
    use echomaze::Maze;
    use echomaze::algorithm::corridors::{Corridor, extract_corridors, find_nodes, is_node};
    use echomaze::spatial::{Direction, Grid, Position};

    // Tests a straight row yields one corridor between its ends
    // Verified by treating degree-two cells as nodes
    #[test]
    fn test_single_corridor() {
        let grid = Grid::open(3, 1);
        let start = Position::new(0, 0);
        let end = Position::new(2, 0);

        let nodes = find_nodes(&grid, start, end);
        assert_eq!(nodes, vec![start, end]);

        let corridors = extract_corridors(&grid, &nodes, start, end);
        assert_eq!(
            corridors,
            vec![Corridor {
                from: start,
                to: end,
                cells: vec![Position::new(1, 0)],
            }]
        );
        assert!(!corridors.iter().any(Corridor::is_empty));
    }

    // Tests endpoints split corridors even at degree two
    // Verified by ignoring the start in is_node
    #[test]
    fn test_endpoint_splits_corridor() {
        let grid = Grid::open(3, 1);
        let start = Position::new(1, 0);
        let end = Position::new(2, 0);
        assert!(is_node(&grid, start, start, end));

        let nodes = find_nodes(&grid, start, end);
        assert_eq!(nodes.len(), 3);
        let corridors = extract_corridors(&grid, &nodes, start, end);
        assert_eq!(corridors.len(), 2);
        assert!(corridors.iter().all(Corridor::is_empty));
    }

    // Tests a bend is not a corridor
    // Verified by following open walls around corners
    #[test]
    fn test_bend_yields_nothing() {
        let mut grid = Grid::new(2, 2);
        grid.remove_wall(Position::new(0, 0), Direction::Right);
        grid.remove_wall(Position::new(1, 0), Direction::Down);
        let start = Position::new(0, 0);
        let end = Position::new(1, 1);

        assert!(!is_node(&grid, Position::new(1, 0), start, end));
        let nodes = find_nodes(&grid, start, end);
        assert!(extract_corridors(&grid, &nodes, start, end).is_empty());
    }

    // Tests vertical corridors are found from their upper node
    // Verified by walking only rightwards
    #[test]
    fn test_vertical_corridor() {
        let grid = Grid::open(1, 4);
        let start = Position::new(0, 0);
        let end = Position::new(0, 3);
        let nodes = find_nodes(&grid, start, end);
        let corridors = extract_corridors(&grid, &nodes, start, end);
        assert_eq!(corridors.len(), 1);
        let corridor = corridors.first().cloned().unwrap_or(Corridor {
            from: end,
            to: start,
            cells: Vec::new(),
        });
        assert_eq!(corridor.from, start);
        assert_eq!(corridor.to, end);
        assert_eq!(corridor.cells, vec![Position::new(0, 1), Position::new(0, 2)]);
        assert_eq!(corridor.all_cells().count(), 4);
    }

    // Tests corridor cells on generated mazes are straight degree-two runs
    // Verified by allowing the walk to continue through nodes
    #[test]
    fn test_generated_corridors_straight() {
        for seed in 0..30 {
            let maze = Maze::new(10, 10, seed).expect("Failed to generate maze");
            let grid = maze.grid();
            let corridors = extract_corridors(grid, maze.nodes(), maze.start(), maze.end());
            for corridor in &corridors {
                let direction = if corridor.from.y == corridor.to.y {
                    Direction::Right
                } else {
                    Direction::Down
                };
                let mut expected = corridor.from;
                for &cell in &corridor.cells {
                    expected = expected.step(direction);
                    assert_eq!(cell, expected);
                    assert_eq!(grid.open_degree(cell), 2);
                    assert!(!is_node(grid, cell, maze.start(), maze.end()));
                }
                assert_eq!(expected.step(direction), corridor.to);
            }
        }
    }
}
