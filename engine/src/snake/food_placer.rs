use std::collections::HashSet;

use super::types::Cell;
use crate::session_rng::SessionRng;

/// Draws uniformly from `1..=board_size²` until the candidate is neither
/// excluded nor the current food cell. The caller guarantees a free cell.
pub fn pick(
    rng: &mut SessionRng,
    exclude: &HashSet<Cell>,
    current_food: Cell,
    board_size: usize,
) -> Cell {
    let max_cell = board_size * board_size;
    loop {
        let candidate = Cell::new(rng.random_range(1..=max_cell));
        if exclude.contains(&candidate) || candidate == current_food {
            continue;
        }
        return candidate;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_returns_excluded_or_current() {
        let mut rng = SessionRng::new(42);
        let exclude: HashSet<Cell> = (1..=20).map(Cell::new).collect();
        let current = Cell::new(21);
        for _ in 0..500 {
            let cell = pick(&mut rng, &exclude, current, 5);
            assert!((22..=25).contains(&cell.id()));
        }
    }

    #[test]
    fn test_finds_single_free_cell() {
        let mut rng = SessionRng::new(42);
        let exclude: HashSet<Cell> = (1..=9).filter(|&id| id != 4 && id != 8).map(Cell::new).collect();
        for _ in 0..50 {
            assert_eq!(pick(&mut rng, &exclude, Cell::new(8), 3), Cell::new(4));
        }
    }

    #[test]
    fn test_covers_every_free_cell() {
        let mut rng = SessionRng::new(42);
        let exclude: HashSet<Cell> = [Cell::new(1), Cell::new(5)].into_iter().collect();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick(&mut rng, &exclude, Cell::new(9), 3));
        }
        let expected: HashSet<Cell> = [2, 3, 4, 6, 7, 8].into_iter().map(Cell::new).collect();
        assert_eq!(seen, expected);
    }
}
