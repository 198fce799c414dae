use gridwalk_agent::PathFollower;
use gridwalk_nav::{GridCell, Maze, find_path};
use nalgebra::Vector3;

fn main() {
    let maze_result = Maze::new(5, 5, 1.0);

    let dt = 0.1; // Time step in seconds
    let max_ticks = 100;

    match maze_result {
        Ok(maze) => {
            let start = GridCell::new(0, 0);
            let goal = GridCell::new(4, 4);

            println!("Initializing demo...");
            println!("  Maze: {}x{} open grid", maze.width(), maze.height());
            println!("  Start: {}", start);
            println!("  Goal:  {}", goal);
            println!("  Time Step: {} s", dt);

            let Some(path) = find_path(&maze, start, goal) else {
                eprintln!("No path found on an open grid; this should not happen.");
                return;
            };
            println!("  Path: {} waypoints (destination first)", path.len());

            // The agent stands on the start cell in path space
            let mut follower =
                PathFollower::new(Vector3::new(start.x as f32, 0.0, start.y as f32));
            follower.start_path(&path, Vector3::zeros());

            println!("\nFollowing...");
            let mut tick = 0;
            while follower.is_following() && tick < max_ticks {
                let pos = follower.update(dt);
                tick += 1;
                println!(
                    "Tick {:>2}: position ({:>5.2}, {:>4.2}, {:>5.2})",
                    tick, pos.x, pos.y, pos.z
                );
            }

            println!("\nPath complete after {} ticks.", tick);
            let final_pos = follower.current_position();
            println!(
                "Final position: ({:.2}, {:.2}, {:.2})",
                final_pos.x, final_pos.y, final_pos.z
            );
        }
        Err(e) => {
            eprintln!("Failed to build maze: {:?}", e);
        }
    }
}
