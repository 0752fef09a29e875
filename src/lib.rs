pub mod ball;
pub mod c_api;
pub mod collision;
pub mod config;
pub mod driver;
pub mod error;
pub mod scene;
pub mod setup;
pub mod vector;
pub mod viewport;

pub use ball::Ball;
pub use collision::{WallHits, resolve_ball_collision, resolve_wall_collision};
pub use config::{BallConfig, SceneConfig};
pub use driver::{FixedTimestep, FrameLoop};
pub use error::SimulationError;
pub use scene::{Scene, SceneParams, WorldSize, setup_scene, step_scene};
pub use setup::{DEFAULT_RADIUS_RANGE, random_balls};
pub use vector::{Vector2, VectorExt, vec2};
pub use viewport::{Renderer, Viewport};
