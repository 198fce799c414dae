use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use tracing::info;

const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Demo settings, loaded from `config/default.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Maze width in tiles.
    pub grid_width: u32,
    /// Maze height in tiles.
    pub grid_height: u32,
    /// Size of each tile in world units.
    pub tile_size: f32,
    /// Agent movement speed in world units per second.
    pub move_speed: f32,
    /// Simulation tick interval in milliseconds.
    pub tick_millis: u64,
    /// Number of maze regenerations to walk through before exiting.
    pub legs: u32,
    /// How many random cells to try per leg before giving up on a target.
    pub max_target_attempts: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            grid_width: 20,
            grid_height: 20,
            tile_size: 1.0,
            move_speed: 5.0,
            tick_millis: 50,
            legs: 3,
            max_target_attempts: 64,
        }
    }
}

pub fn load_config() -> Result<DemoConfig, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);

    let settings = Config::builder()
        .add_source(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
        .build()?;

    let config: DemoConfig = settings.try_deserialize()?;
    info!("Successfully loaded configuration: {:?}", config);
    Ok(config)
}
