use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Direction, Segment};

/// Snake segments ordered head to tail, plus the set of cells they cover.
/// Both are updated in lockstep.
#[derive(Clone, Debug)]
pub struct SnakeBody {
    segments: VecDeque<Segment>,
    occupied: HashSet<Cell>,
}

impl SnakeBody {
    pub fn new(start: Segment) -> Self {
        let mut body = Self {
            segments: VecDeque::new(),
            occupied: HashSet::new(),
        };
        body.initialize(start);
        body
    }

    pub fn initialize(&mut self, start: Segment) {
        self.segments.clear();
        self.occupied.clear();
        self.segments.push_back(start);
        self.occupied.insert(start.cell);
    }

    pub fn head(&self) -> Segment {
        *self.segments.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Segment {
        *self.segments.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn occupied_cells(&self) -> &HashSet<Cell> {
        &self.occupied
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// Ordinary move. The tail cell is released before the new head cell is
    /// claimed, so moving into the cell the tail just left is allowed.
    pub fn advance(&mut self, new_head: Segment) {
        self.segments.push_front(new_head);
        let tail = self
            .segments
            .pop_back()
            .expect("Snake body should never be empty");
        self.occupied.remove(&tail.cell);
        self.occupied.insert(new_head.cell);
    }

    pub fn grow(&mut self, new_tail: Segment) {
        self.segments.push_back(new_tail);
        self.occupied.insert(new_tail.cell);
    }

    /// Direction the tail travelled to reach its cell, read from the segment
    /// just ahead of it. `None` for a single-segment body.
    pub fn tail_movement_direction(&self) -> Option<Direction> {
        let len = self.segments.len();
        if len < 2 {
            return None;
        }
        let tail = self.segments[len - 1];
        let ahead = self.segments[len - 2];
        Direction::between(tail.coordinate, ahead.coordinate)
    }
}
