//! Uniform-cost shortest-path search over a maze grid.
//!
//! Every step between adjacent cells costs 1, so this is the Dijkstra
//! specialization where path cost equals hop count. The expansion keeps two
//! cell-to-distance maps: a *frontier* of discovered cells with tentative
//! distances and a *settled* map of finalized ones.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use tracing::debug;

use crate::maze::{GridCell, Maze};

/// An ordered sequence of grid cells; adjacent entries differ by exactly one
/// unit in exactly one axis.
pub type Path = Vec<GridCell>;

/// Finds a minimum-hop path between two cells of a maze.
///
/// Returns `None` if `start` or `end` is a wall (or out of bounds), or if no
/// connecting path exists. A path of length 1 means `start == end`.
///
/// The returned path is ordered **end to start** (destination first):
/// reconstruction naturally walks settled distances downhill from the
/// destination, and the follower reverses the sequence when it starts
/// walking. Callers consuming the path directly must reverse it themselves.
///
/// Equal-length alternatives are tie-broken by the frontier scan (row-major
/// cell order) and by the fixed `{+x, -x, +y, -y}` neighbor order; any
/// returned path is cost-optimal.
pub fn find_path(maze: &Maze, start: GridCell, end: GridCell) -> Option<Path> {
    // A path can neither start nor end inside a wall.
    if maze.is_wall(start) || maze.is_wall(end) {
        return None;
    }

    let mut frontier: BTreeMap<GridCell, u32> = BTreeMap::new();
    let mut settled: BTreeMap<GridCell, u32> = BTreeMap::new();
    frontier.insert(start, 0);

    loop {
        // Select the frontier entry with the lowest tentative distance. The
        // strict `<` keeps the first minimum in row-major iteration order.
        let mut best: Option<(GridCell, u32)> = None;
        for (&cell, &distance) in &frontier {
            if best.is_none_or(|(_, d)| distance < d) {
                best = Some((cell, distance));
            }
        }
        // An empty frontier before the end settles means no path exists.
        let (current, current_distance) = best?;

        frontier.remove(&current);
        settled.insert(current, current_distance);

        if current == end {
            break;
        }

        // Relax the unsettled, walkable neighbors.
        for neighbor in Maze::neighbors4(current) {
            if maze.is_wall(neighbor) {
                continue;
            }
            if settled.contains_key(&neighbor) {
                continue;
            }

            let candidate = current_distance + 1;
            match frontier.entry(neighbor) {
                Entry::Occupied(mut entry) => {
                    if *entry.get() > candidate {
                        entry.insert(candidate);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(candidate);
                }
            }
        }
    }

    // Walk back from the end, always stepping to the settled neighbor with
    // the strictly smallest distance. Distances decrease by one per step, so
    // the walk terminates at the start.
    let mut path = Path::new();
    let mut current = end;
    loop {
        path.push(current);
        if current == start {
            break;
        }

        let mut best: Option<(GridCell, u32)> = None;
        for neighbor in Maze::neighbors4(current) {
            if let Some(&distance) = settled.get(&neighbor) {
                if best.is_none_or(|(_, d)| distance < d) {
                    best = Some((neighbor, distance));
                }
            }
        }
        match best {
            Some((next, _)) => current = next,
            // Unreachable: every settled cell except the start has a settled
            // neighbor one step closer to the start.
            None => return None,
        }
    }

    debug!(
        start = %start,
        end = %end,
        waypoints = path.len(),
        settled = settled.len(),
        "path found"
    );
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds a maze from rows of `'#'` (wall) and `'.'` (open). Row 0 of the
    /// slice is grid row y = 0.
    fn maze_from_rows(rows: &[&str]) -> Maze {
        let mut maze = Maze::new(rows[0].len() as u32, rows.len() as u32, 1.0).unwrap();
        for (y, row) in rows.iter().enumerate() {
            for (x, tile) in row.chars().enumerate() {
                if tile == '#' {
                    maze.set_wall(GridCell::new(x as i32, y as i32), true)
                        .unwrap();
                }
            }
        }
        maze
    }

    fn assert_adjacent_steps(path: &[GridCell]) {
        for pair in path.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert_eq!(dx + dy, 1, "step {} -> {} is not cardinal", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_open_grid_diagonal_corners() {
        // 5x5 open grid, (0,0) -> (4,4): Manhattan distance 8, so 9 entries,
        // ordered destination first.
        let maze = Maze::new(5, 5, 1.0).unwrap();
        let path = find_path(&maze, GridCell::new(0, 0), GridCell::new(4, 4)).unwrap();

        assert_eq!(path.len(), 9);
        assert_eq!(path[0], GridCell::new(4, 4));
        assert_eq!(*path.last().unwrap(), GridCell::new(0, 0));
        assert_adjacent_steps(&path);
    }

    #[test]
    fn test_open_grid_path_length_is_manhattan() {
        let maze = Maze::new(6, 4, 1.0).unwrap();
        let cases = [
            ((0, 0), (5, 3)),
            ((2, 1), (2, 1)),
            ((5, 0), (0, 3)),
            ((3, 2), (4, 0)),
        ];
        for ((sx, sy), (ex, ey)) in cases {
            let start = GridCell::new(sx, sy);
            let end = GridCell::new(ex, ey);
            let path = find_path(&maze, start, end).unwrap();
            let manhattan = (ex - sx).abs() + (ey - sy).abs();
            assert_eq!(path.len() as i32, manhattan + 1, "{} -> {}", start, end);
            assert_eq!(path[0], end);
            assert_eq!(*path.last().unwrap(), start);
            assert_adjacent_steps(&path);
        }
    }

    #[test]
    fn test_wall_start_or_end_fails() {
        let mut maze = Maze::new(3, 3, 1.0).unwrap();
        maze.set_wall(GridCell::new(1, 1), true).unwrap();

        assert_eq!(
            find_path(&maze, GridCell::new(1, 1), GridCell::new(2, 2)),
            None
        );
        assert_eq!(
            find_path(&maze, GridCell::new(0, 0), GridCell::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_out_of_bounds_endpoints_fail() {
        let maze = Maze::new(3, 3, 1.0).unwrap();
        assert_eq!(
            find_path(&maze, GridCell::new(-1, 0), GridCell::new(2, 2)),
            None
        );
        assert_eq!(
            find_path(&maze, GridCell::new(0, 0), GridCell::new(3, 0)),
            None
        );
    }

    #[test]
    fn test_split_grid_is_unreachable() {
        // A full-height wall through x = 1 disconnects the two sides.
        let maze = maze_from_rows(&[
            ".#.", //
            ".#.", //
            ".#.", //
        ]);
        assert_eq!(
            find_path(&maze, GridCell::new(0, 0), GridCell::new(2, 2)),
            None
        );
    }

    #[test]
    fn test_isolated_cell_is_unreachable() {
        // (1,1) is open but all four of its neighbors are walls.
        let maze = maze_from_rows(&[
            ".#.", //
            "#.#", //
            ".#.", //
        ]);
        assert_eq!(
            find_path(&maze, GridCell::new(0, 0), GridCell::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_wall_start_fails_before_unreachable_end() {
        // The start being a wall fails the query even though the isolated
        // end cell is itself open.
        let maze = maze_from_rows(&[
            "##.", //
            "#.#", //
            ".#.", //
        ]);
        assert!(maze.is_wall(GridCell::new(0, 0)));
        assert!(!maze.is_wall(GridCell::new(1, 1)));
        assert_eq!(
            find_path(&maze, GridCell::new(0, 0), GridCell::new(1, 1)),
            None
        );
    }

    #[test]
    fn test_start_equals_end() {
        // Everything except the center is a wall; the degenerate query still
        // succeeds with a single-cell path.
        let maze = maze_from_rows(&[
            "###", //
            "#.#", //
            "###", //
        ]);
        let path = find_path(&maze, GridCell::new(1, 1), GridCell::new(1, 1)).unwrap();
        assert_eq!(path, vec![GridCell::new(1, 1)]);
    }

    #[test]
    fn test_corridor_has_unique_path() {
        // A snaking corridor leaves exactly one path, so the full sequence
        // is pinned, not just its length.
        let maze = maze_from_rows(&[
            "...", //
            "##.", //
            "...", //
            ".##", //
            "...", //
        ]);
        let path = find_path(&maze, GridCell::new(0, 0), GridCell::new(0, 4)).unwrap();
        assert_eq!(
            path,
            vec![
                GridCell::new(0, 4),
                GridCell::new(1, 4),
                GridCell::new(2, 4),
                GridCell::new(2, 3),
                GridCell::new(2, 2),
                GridCell::new(1, 2),
                GridCell::new(0, 2),
                GridCell::new(0, 1),
                GridCell::new(0, 0),
            ]
        );
    }

    #[test]
    fn test_detour_around_wall_block() {
        // A 2x2 block forces a detour; the path must stay off walls and
        // remain cost-optimal.
        let maze = maze_from_rows(&[
            ".....", //
            ".##..", //
            ".##..", //
            ".....", //
        ]);
        let start = GridCell::new(0, 1);
        let end = GridCell::new(4, 2);
        let path = find_path(&maze, start, end).unwrap();

        assert_adjacent_steps(&path);
        for cell in &path {
            assert!(!maze.is_wall(*cell), "path crosses wall at {}", cell);
        }
        // Manhattan distance is 5, but every monotone route passes the
        // block; the shortest detour (around either side) takes 7 steps.
        assert_eq!(path.len(), 8);
        assert_eq!(path[0], end);
        assert_eq!(*path.last().unwrap(), start);
    }
}
