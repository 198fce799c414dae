use std::collections::HashSet;

use gridwalk_nav::{GridCell, Maze, find_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a 10x10 maze
    let mut maze = Maze::new(10, 10, 1.0)?;

    // A fixed obstacle pattern with a few rooms and corridors
    let walls = vec![
        (1, 1),
        (2, 1),
        (7, 1),
        (8, 1),
        (4, 2),
        (2, 3),
        (3, 3),
        (4, 3),
        (5, 3),
        (7, 3),
        (5, 4),
        (7, 4),
        (1, 5),
        (2, 5),
        (3, 5),
        (5, 5),
        (7, 5),
        (8, 5),
        (3, 6),
        (1, 7),
        (3, 7),
        (5, 7),
        (6, 7),
        (7, 7),
        (1, 8),
        (8, 8),
        (3, 9),
        (4, 9),
        (5, 9),
    ];
    for (x, y) in walls {
        maze.set_wall(GridCell::new(x, y), true)?;
    }

    let start = GridCell::new(0, 0);
    let goal = GridCell::new(9, 9);

    println!("Maze:");
    print_maze(&maze, start, goal, None);
    println!("\nStart: {}", start);
    println!("Goal: {}", goal);

    if let Some(path) = find_path(&maze, start, goal) {
        // The search emits the path destination first
        println!("\nPath found with {} waypoints!", path.len());
        println!(
            "First entry: {} (goal), last entry: {} (start)",
            path[0],
            path[path.len() - 1]
        );

        let path_set: HashSet<(i32, i32)> = path.iter().map(|c| (c.x, c.y)).collect();

        println!("\nMaze with path:");
        print_maze(&maze, start, goal, Some(&path_set));
    } else {
        println!("\nNo path found.");
    }

    Ok(())
}

fn print_maze(maze: &Maze, start: GridCell, goal: GridCell, path: Option<&HashSet<(i32, i32)>>) {
    // Print from top to bottom (reverse y order for visual clarity)
    for y in (0..maze.height() as i32).rev() {
        print!("{} ", y);
        for x in 0..maze.width() as i32 {
            let cell = GridCell::new(x, y);

            if cell == start {
                print!("S ");
                continue;
            }
            if cell == goal {
                print!("G ");
                continue;
            }
            if let Some(path_set) = path {
                if path_set.contains(&(x, y)) {
                    print!("* ");
                    continue;
                }
            }

            if maze.is_wall(cell) {
                print!("X ");
            } else {
                print!(". ");
            }
        }
        println!();
    }

    // Print x-axis labels
    print!("  ");
    for x in 0..maze.width() {
        print!("{} ", x);
    }
    println!();
}
