mod board;
mod body;
mod engine;
mod food_placer;
mod input;
mod types;

pub use board::Board;
pub use body::SnakeBody;
pub use engine::{GameEngine, GameSnapshot, StepOutcome};
pub use input::direction_from_key;
pub use types::{Cell, Coordinate, Direction, GameOverReason, Segment};
