use gridwalk_nav::{GridCell, Maze, find_path};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a 20x20 maze with 1.0 world-unit tiles
    let mut maze = Maze::new(20, 20, 1.0)?;

    println!("Randomising walls (each cell is a wall with probability 1/5)...");
    maze.randomise_walls();

    println!("\n{}", maze);

    // Keep the corners open so the demo query is well-posed
    let start = GridCell::new(0, 0);
    let goal = GridCell::new(19, 19);
    maze.set_wall(start, false)?;
    maze.set_wall(goal, false)?;

    match find_path(&maze, start, goal) {
        Some(path) => {
            println!(
                "Path from {} to {}: {} waypoints (destination first)",
                start,
                goal,
                path.len()
            );
        }
        None => {
            println!(
                "No path from {} to {} through this maze; regenerate and retry.",
                start, goal
            );
        }
    }

    // Demonstrate world coordinate conversion
    let world = maze.to_world(start);
    println!(
        "\nCell {} sits at world position ({:.2}, {:.2}, {:.2})",
        start, world.x, world.y, world.z
    );
    if let Some(cell) = maze.world_to_grid(&world) {
        println!(
            "World position ({:.2}, {:.2}, {:.2}) maps back to cell {}",
            world.x, world.y, world.z, cell
        );
    }

    println!("\nMaze bounds:");
    println!(
        "  {:.1} x {:.1} world units, centering offset ({:.1}, {:.1}, {:.1})",
        maze.world_width(),
        maze.world_height(),
        maze.centering_offset().x,
        maze.centering_offset().y,
        maze.centering_offset().z,
    );

    Ok(())
}
