use super::types::{Cell, Coordinate, Direction};

/// Square grid of cell ids, built once per game and never mutated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    pub fn build(size: usize) -> Self {
        assert!(size > 0, "Board must have at least one cell");
        let cells = (1..=size * size).map(Cell::new).collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.size && coordinate.col < self.size
    }

    pub fn cell_at(&self, coordinate: Coordinate) -> Cell {
        assert!(
            self.is_in_bounds(coordinate),
            "Coordinate {:?} is outside a {}x{} board",
            coordinate,
            self.size,
            self.size
        );
        self.cells[coordinate.row * self.size + coordinate.col]
    }

    pub fn coordinate_of(&self, cell: Cell) -> Coordinate {
        assert!(
            (1..=self.cell_count()).contains(&cell.id()),
            "Cell {} is outside a {}x{} board",
            cell,
            self.size,
            self.size
        );
        let index = cell.id() - 1;
        Coordinate::new(index / self.size, index % self.size)
    }

    /// The in-bounds coordinate one step along `direction`, if any.
    pub fn neighbor(&self, coordinate: Coordinate, direction: Direction) -> Option<Coordinate> {
        coordinate
            .step(direction)
            .filter(|next| self.is_in_bounds(*next))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }
}
