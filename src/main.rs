mod config;

use std::time::Duration;

use anyhow::Context;
use gridwalk_agent::PathFollower;
use gridwalk_nav::{GridCell, Maze, Path, find_path};
use nalgebra::Vector3;
use rand::Rng;
use tokio::time;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cfg = config::load_config().unwrap_or_else(|e| {
        warn!("Falling back to default configuration: {}", e);
        DemoConfig::default()
    });

    info!(
        width = cfg.grid_width,
        height = cfg.grid_height,
        tile_size = cfg.tile_size,
        "Gridwalk demo started"
    );

    let mut maze = Maze::new(cfg.grid_width, cfg.grid_height, cfg.tile_size)
        .context("invalid maze configuration")?;

    // The agent starts every leg from the middle of the grid, in path space
    // (raw cell coordinates; a renderer would apply the maze's centering
    // offset when drawing).
    let home = GridCell::new(cfg.grid_width as i32 / 2, cfg.grid_height as i32 / 2);
    let home_pos = Vector3::new(home.x as f32, 0.0, home.y as f32);
    let mut follower = PathFollower::with_move_speed(home_pos, cfg.move_speed);

    let dt = cfg.tick_millis as f32 / 1000.0;
    let mut ticker = time::interval(Duration::from_millis(cfg.tick_millis));

    for leg in 1..=cfg.legs {
        // Regenerating the maze invalidates any path in flight: stop and
        // reset the agent before searching again.
        maze.randomise_walls();
        maze.set_wall(home, false)
            .context("agent home cell outside the maze")?;
        follower.stop_path();
        follower.set_position(home_pos);

        let Some((target, path)) = pick_reachable_target(&maze, home, cfg.max_target_attempts)
        else {
            warn!(leg, "no reachable target found, regenerating");
            continue;
        };

        info!(leg, %target, waypoints = path.len(), "starting leg");
        follower.start_path(&path, Vector3::zeros());

        let mut ticks = 0u32;
        while follower.is_following() {
            ticker.tick().await;
            let pos = follower.update(dt);
            ticks += 1;
            debug!(x = pos.x, z = pos.z, "tick");
        }

        let arrived = follower.current_position();
        info!(leg, ticks, x = arrived.x, z = arrived.z, "leg complete");
    }

    info!("Gridwalk demo finished");
    Ok(())
}

/// Picks a random open cell the agent can reach, returning it with the
/// computed path. Gives up after `attempts` random draws; the maze may
/// genuinely have no reachable cell besides the start.
fn pick_reachable_target(maze: &Maze, start: GridCell, attempts: u32) -> Option<(GridCell, Path)> {
    let mut rng = rand::rng();
    for _ in 0..attempts {
        let target = GridCell::new(
            rng.random_range(0..maze.width() as i32),
            rng.random_range(0..maze.height() as i32),
        );
        if maze.is_wall(target) || target == start {
            continue;
        }
        if let Some(path) = find_path(maze, start, target) {
            return Some((target, path));
        }
    }
    None
}
