use std::fmt;

/// Board cell identifier, `1..=size²`, assigned row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell(usize);

impl Cell {
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One unit along `direction`. `None` when that would go below row or
    /// column zero; the upper edge is the board's concern.
    pub fn step(&self, direction: Direction) -> Option<Coordinate> {
        match direction {
            Direction::Up => self.row.checked_sub(1).map(|row| Coordinate::new(row, self.col)),
            Direction::Right => Some(Coordinate::new(self.row, self.col + 1)),
            Direction::Down => Some(Coordinate::new(self.row + 1, self.col)),
            Direction::Left => self.col.checked_sub(1).map(|col| Coordinate::new(self.row, col)),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Direction that leads from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Coordinate, to: Coordinate) -> Option<Direction> {
        if from.row == to.row && to.col == from.col + 1 {
            Some(Direction::Right)
        } else if from.row == to.row && from.col == to.col + 1 {
            Some(Direction::Left)
        } else if from.col == to.col && to.row == from.row + 1 {
            Some(Direction::Down)
        } else if from.col == to.col && from.row == to.row + 1 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub coordinate: Coordinate,
    pub cell: Cell,
}

impl Segment {
    pub fn new(coordinate: Coordinate, cell: Cell) -> Self {
        Self { coordinate, cell }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    WallCollision,
    SelfCollision,
    /// The body covers every cell, so there is nowhere left to put food.
    BoardFilled,
}

impl fmt::Display for GameOverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameOverReason::WallCollision => "wall collision",
            GameOverReason::SelfCollision => "self collision",
            GameOverReason::BoardFilled => "board filled",
        };
        write!(f, "{}", text)
    }
}
