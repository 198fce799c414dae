#![warn(missing_docs)]
#![doc = "A tick-driven waypoint follower for grid agents."]
#![doc = ""]
#![doc = "This crate provides a per-agent motion controller that walks a computed"]
#![doc = "grid path: it advances a continuous world position toward each waypoint"]
#![doc = "in turn, snapping exactly onto a waypoint when it comes within one"]
#![doc = "tick's step, and goes idle once the last waypoint is reached."]

use gridwalk_nav::GridCell;
use nalgebra::Vector3;

/// Default agent movement speed in world units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;

/// A stateful per-agent path-following controller.
///
/// The follower is a two-state machine: **idle** (no active path) or
/// **following** (advancing toward the next waypoint each tick). It is
/// created idle, becomes active when a non-empty path is supplied, and
/// returns to idle on its own when the last waypoint is reached or when
/// explicitly stopped.
///
/// None of its operations fail: malformed input (an empty path) degrades to
/// a no-op, and [`update`](Self::update) on an idle follower leaves the
/// position untouched. Drive `update` at most once per simulation tick.
#[derive(Debug, Clone)]
pub struct PathFollower {
    /// Current continuous world position.
    position: Vector3<f32>,
    /// Active path, stored start to end (index 0 nearest the agent).
    path: Vec<GridCell>,
    /// Index of the next unreached waypoint.
    next_index: usize,
    /// World position of the waypoint currently being approached.
    target: Vector3<f32>,
    /// Translation applied when converting waypoint cells to world space.
    path_offset: Vector3<f32>,
    /// Movement speed in world units per second.
    move_speed: f32,
    /// Whether a path is actively being followed.
    following: bool,
}

impl PathFollower {
    /// Creates an idle follower at the given world position with the
    /// [`DEFAULT_MOVE_SPEED`].
    #[must_use]
    pub fn new(position: Vector3<f32>) -> Self {
        Self::with_move_speed(position, DEFAULT_MOVE_SPEED)
    }

    /// Creates an idle follower at the given world position.
    ///
    /// # Arguments
    ///
    /// * `position`: The agent's starting world position.
    /// * `move_speed`: Movement speed in world units per second. Expected to
    ///   be positive; an agent with non-positive speed never reaches its
    ///   waypoints.
    #[must_use]
    pub fn with_move_speed(position: Vector3<f32>, move_speed: f32) -> Self {
        PathFollower {
            position,
            path: Vec::new(),
            next_index: 0,
            target: position,
            path_offset: Vector3::zeros(),
            move_speed,
            following: false,
        }
    }

    /// Starts following a path.
    ///
    /// The search emits paths destination first, so the stored copy is
    /// reversed here: index 0 becomes the waypoint nearest the agent and the
    /// last index the destination. An empty `path` leaves the follower's
    /// state unchanged.
    ///
    /// # Arguments
    ///
    /// * `path`: Waypoints as produced by the search (destination first).
    /// * `origin_offset`: Translation applied to every waypoint when
    ///   converting its grid coordinates to world space, so a path can be
    ///   walked relative to where the agent stands.
    pub fn start_path(&mut self, path: &[GridCell], origin_offset: Vector3<f32>) {
        if path.is_empty() {
            return;
        }

        self.path = path.to_vec();
        self.path.reverse();
        self.path_offset = origin_offset;
        self.next_index = 0;
        self.target = self.waypoint_to_world(self.path[0]);
        self.following = true;
    }

    /// Stops following the current path.
    ///
    /// The stored path is cleared and the follower goes idle; the current
    /// world position is left unchanged.
    pub fn stop_path(&mut self) {
        self.path.clear();
        self.following = false;
    }

    /// Teleports the agent to a world position without touching path state.
    pub fn set_position(&mut self, position: Vector3<f32>) {
        self.position = position;
    }

    /// Advances the agent by one simulation tick and returns its position.
    ///
    /// While following, the agent moves `move_speed * delta_time` world
    /// units straight toward the current target waypoint. If the remaining
    /// distance fits within that step the position snaps exactly onto the
    /// waypoint (no overshoot is carried forward) and the next waypoint
    /// becomes the target; past the last waypoint the follower goes idle.
    ///
    /// The reached check compares positions exactly: the snap guarantees
    /// equality, so no epsilon is involved and termination is deterministic.
    ///
    /// # Arguments
    ///
    /// * `delta_time`: Tick duration in seconds.
    pub fn update(&mut self, delta_time: f32) -> Vector3<f32> {
        if !self.following {
            return self.position;
        }
        if self.path.is_empty() {
            self.following = false;
            return self.position;
        }

        let to_target = self.target - self.position;
        let remaining = to_target.norm();
        let step = self.move_speed * delta_time;

        if remaining > step {
            self.position += to_target.normalize() * step;
        } else {
            self.position = self.target;
        }

        if self.position == self.target {
            if !self.advance_waypoint() {
                self.following = false;
            }
        }

        self.position
    }

    /// The agent's current world position.
    pub fn current_position(&self) -> Vector3<f32> {
        self.position
    }

    /// Whether a path is actively being followed. External animation or
    /// state collaborators read this to pick a locomotion pose.
    pub fn is_following(&self) -> bool {
        self.following
    }

    /// Movement speed in world units per second.
    pub fn move_speed(&self) -> f32 {
        self.move_speed
    }

    /// Retargets the next waypoint in the path, returning `false` when the
    /// path is exhausted.
    fn advance_waypoint(&mut self) -> bool {
        self.next_index += 1;
        match self.path.get(self.next_index) {
            Some(&next) => {
                self.target = self.waypoint_to_world(next);
                true
            }
            None => false,
        }
    }

    /// Waypoints live on the grid's XZ plane; world position is the raw
    /// cell coordinates plus the path's origin offset.
    fn waypoint_to_world(&self, cell: GridCell) -> Vector3<f32> {
        Vector3::new(cell.x as f32, 0.0, cell.y as f32) + self.path_offset
    }
}
