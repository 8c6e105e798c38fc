pub mod config;
pub mod logger;
pub mod session;
pub mod session_rng;
pub mod snake;

pub use config::GameConfig;
pub use session::{SessionCommand, SnakeSession, SnapshotBroadcaster};
pub use session_rng::SessionRng;
pub use snake::{
    Board, Cell, Coordinate, Direction, GameEngine, GameOverReason, GameSnapshot, Segment,
    SnakeBody, StepOutcome,
};
