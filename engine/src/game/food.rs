use crate::board;
use crate::session_rng::SessionRng;
use super::types::Cell;

#[derive(Clone, Debug)]
pub struct Food {
    pub position: Cell,
}

impl Food {
    pub fn new(rng: &mut SessionRng) -> Self {
        Self {
            position: random_cell(rng),
        }
    }

    // Rejection sampling: occupancy stays far below the cell count in
    // practice, so this terminates quickly.
    pub fn relocate(&mut self, occupied: &[Cell], rng: &mut SessionRng) {
        loop {
            let candidate = random_cell(rng);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return;
            }
        }
    }
}

fn random_cell(rng: &mut SessionRng) -> Cell {
    Cell::new(
        rng.random_range(0..board::GRID_WIDTH) * board::CELL_SIZE,
        rng.random_range(0..board::GRID_HEIGHT) * board::CELL_SIZE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_food_is_grid_aligned_and_in_bounds() {
        let mut rng = SessionRng::new(7);
        for _ in 0..500 {
            let food = Food::new(&mut rng);
            assert_eq!(food.position.x % board::CELL_SIZE, 0);
            assert_eq!(food.position.y % board::CELL_SIZE, 0);
            assert!((0..board::BOARD_WIDTH).contains(&food.position.x));
            assert!((0..board::BOARD_HEIGHT).contains(&food.position.y));
        }
    }

    #[test]
    fn test_relocate_avoids_occupied_cells() {
        let mut rng = SessionRng::new(42);
        let mut food = Food::new(&mut rng);

        // Occupy most of one row so rejection actually happens.
        let occupied: Vec<Cell> = (0..board::GRID_WIDTH)
            .flat_map(|gx| {
                (0..board::GRID_HEIGHT / 2)
                    .map(move |gy| Cell::new(gx * board::CELL_SIZE, gy * board::CELL_SIZE))
            })
            .collect();

        for _ in 0..100 {
            food.relocate(&occupied, &mut rng);
            assert!(!occupied.contains(&food.position));
        }
    }
}
