use std::collections::HashSet;
use std::sync::Arc;

use super::board::Board;
use super::body::SnakeBody;
use super::food_placer;
use super::input::direction_from_key;
use super::types::{Cell, Coordinate, Direction, GameOverReason, Segment};
use crate::config::GameConfig;
use crate::log;
use crate::session_rng::SessionRng;

const START_HEADING: Direction = Direction::Right;
const START_FOOD_OFFSET: usize = 5;
const RESET_FOOD_CELL: usize = 53;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Ate { score: u32 },
    /// The game ended and has already been reset. `score` is the final score.
    GameOver { reason: GameOverReason, score: u32 },
}

/// Read-only copy of the state a renderer needs, taken between steps.
#[derive(Clone, Debug)]
pub struct GameSnapshot {
    pub board: Arc<Board>,
    pub occupied_cells: HashSet<Cell>,
    /// Head first.
    pub segments: Vec<Segment>,
    pub food_cell: Cell,
    pub score: u32,
    pub heading: Direction,
}

#[derive(Debug)]
pub struct GameEngine {
    board: Arc<Board>,
    body: SnakeBody,
    food_cell: Cell,
    heading: Direction,
    score: u32,
    games_played: u32,
    rng: SessionRng,
}

impl GameEngine {
    pub fn new(board_size: usize, rng: SessionRng) -> Self {
        let board = Arc::new(Board::build(board_size));
        let start = start_segment(&board);
        Self {
            body: SnakeBody::new(start),
            food_cell: start_food_cell(&board, start),
            heading: START_HEADING,
            score: 0,
            games_played: 0,
            board,
            rng,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.board_size, SessionRng::from_seed(config.seed))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn body(&self) -> &SnakeBody {
        &self.body
    }

    pub fn food_cell(&self) -> Cell {
        self.food_cell
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Reversing is accepted here; the following step turns it into a
    /// self-collision when the body is long enough.
    pub fn set_direction(&mut self, direction: Direction) {
        self.heading = direction;
    }

    pub fn handle_key(&mut self, key: &str) -> bool {
        match direction_from_key(key) {
            Some(direction) => {
                self.set_direction(direction);
                true
            }
            None => false,
        }
    }

    pub fn step(&mut self) -> StepOutcome {
        let head = self.body.head();
        let Some(next_coordinate) = self.board.neighbor(head.coordinate, self.heading) else {
            return self.game_over(GameOverReason::WallCollision);
        };

        let next_cell = self.board.cell_at(next_coordinate);
        if self.collides_with_body(next_cell) {
            return self.game_over(GameOverReason::SelfCollision);
        }

        self.body.advance(Segment::new(next_coordinate, next_cell));
        if next_cell != self.food_cell {
            return StepOutcome::Moved;
        }

        self.score += 1;
        self.try_grow();

        if self.body.len() >= self.board.cell_count() {
            return self.game_over(GameOverReason::BoardFilled);
        }

        self.food_cell = food_placer::pick(
            &mut self.rng,
            self.body.occupied_cells(),
            next_cell,
            self.board.size(),
        );
        log!(
            "Ate food at {}. Score: {}, length: {}, next food at {}",
            next_cell,
            self.score,
            self.body.len(),
            self.food_cell
        );

        StepOutcome::Ate { score: self.score }
    }

    pub fn reset(&mut self) {
        let start = start_segment(&self.board);
        self.score = 0;
        self.body.initialize(start);
        self.food_cell = reset_food_cell(&self.board, start);
        self.heading = START_HEADING;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: Arc::clone(&self.board),
            occupied_cells: self.body.occupied_cells().clone(),
            segments: self.body.segments().copied().collect(),
            food_cell: self.food_cell,
            score: self.score,
            heading: self.heading,
        }
    }

    /// Checked against the pre-move body. The tail cell is free to enter
    /// once the body has three or more segments, since the tail leaves it
    /// this step; with two segments the tail is the neck.
    fn collides_with_body(&self, cell: Cell) -> bool {
        if !self.body.occupies(cell) {
            return false;
        }
        !(self.body.len() >= 3 && cell == self.body.tail().cell)
    }

    /// Appends a segment behind the tail, opposite to the way it travels.
    /// Does nothing when that cell is off the board or taken.
    fn try_grow(&mut self) -> bool {
        let tail = self.body.tail();
        let travel = self
            .body
            .tail_movement_direction()
            .unwrap_or(self.heading);

        let Some(coordinate) = self.board.neighbor(tail.coordinate, travel.opposite()) else {
            log!("No room to grow behind tail at {}", tail.cell);
            return false;
        };

        let cell = self.board.cell_at(coordinate);
        if self.body.occupies(cell) {
            log!("Growth cell {} is occupied", cell);
            return false;
        }

        self.body.grow(Segment::new(coordinate, cell));
        true
    }

    fn game_over(&mut self, reason: GameOverReason) -> StepOutcome {
        let score = self.score;
        log!(
            "Game over ({}). Score: {}, length: {}",
            reason,
            score,
            self.body.len()
        );
        self.games_played += 1;
        self.reset();
        StepOutcome::GameOver { reason, score }
    }

    #[cfg(test)]
    fn body_mut(&mut self) -> &mut SnakeBody {
        &mut self.body
    }

    #[cfg(test)]
    fn set_food_cell(&mut self, cell: Cell) {
        self.food_cell = cell;
    }
}

fn start_coordinate(board: &Board) -> Coordinate {
    let offset = (board.size() + 1) / 3;
    Coordinate::new(offset, offset)
}

fn start_segment(board: &Board) -> Segment {
    let coordinate = start_coordinate(board);
    Segment::new(coordinate, board.cell_at(coordinate))
}

fn start_food_cell(board: &Board, start: Segment) -> Cell {
    Cell::new((start.cell.id() - 1 + START_FOOD_OFFSET) % board.cell_count() + 1)
}

/// Fixed food cell after a game over, wrapped onto small boards. Falls back
/// to the start food cell when it would land on the fresh snake.
fn reset_food_cell(board: &Board, start: Segment) -> Cell {
    let cell = Cell::new((RESET_FOOD_CELL - 1) % board.cell_count() + 1);
    if cell == start.cell {
        start_food_cell(board, start)
    } else {
        cell
    }
}
