use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::Validate;

pub const DEFAULT_BOARD_SIZE: usize = 15;
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub board_size: usize,
    pub tick_interval_ms: u64,
    /// Fixed food RNG seed. `None` seeds from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if !(2..=100).contains(&self.board_size) {
            return Err("Board size must be between 2 and 100".to_string());
        }
        if !(50..=5000).contains(&self.tick_interval_ms) {
            return Err("Tick interval must be between 50ms and 5000ms".to_string());
        }
        Ok(())
    }
}
