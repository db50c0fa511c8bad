use crate::board;
use crate::session_rng::SessionRng;
use super::types::{Cell, Direction};

#[derive(Clone, Debug)]
pub struct Snake {
    pub segments: Vec<Cell>,
    pub target_length: usize,
    pub direction: Direction,
    pub pending_direction: Option<Direction>,
    pub last_vacated: Option<Cell>,
}

impl Snake {
    pub fn new() -> Self {
        Self {
            segments: vec![board::CENTER],
            target_length: 1,
            direction: Direction::Right,
            pending_direction: None,
            last_vacated: None,
        }
    }

    pub fn head(&self) -> Cell {
        *self
            .segments
            .first()
            .expect("Snake body should never be empty")
    }

    // Stored, not applied: the turn takes effect at the next tick.
    // A request that would reverse the current heading is dropped.
    pub fn request_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(&self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    pub fn apply_pending_direction(&mut self) {
        if let Some(new_direction) = self.pending_direction {
            self.direction = new_direction;
            self.pending_direction = None;
        }
    }

    pub fn next_head(&self) -> Cell {
        let head = self.head();
        let (dx, dy) = self.direction.offset();
        Cell::new(
            wrap(head.x + dx * board::CELL_SIZE, board::BOARD_WIDTH),
            wrap(head.y + dy * board::CELL_SIZE, board::BOARD_HEIGHT),
        )
    }

    // Head and neck are skipped: a one-cell-per-tick mover can never
    // occupy its own neck, only a body or tail segment.
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.segments.iter().skip(2).any(|segment| *segment == cell)
    }

    pub fn advance(&mut self, new_head: Cell) {
        self.segments.insert(0, new_head);
    }

    pub fn trim_tail(&mut self) {
        if self.segments.len() > self.target_length {
            self.last_vacated = self.segments.pop();
        }
    }

    pub fn reset(&mut self, rng: &mut SessionRng) {
        self.segments.clear();
        self.segments.push(board::CENTER);
        self.target_length = 1;
        self.direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        self.pending_direction = None;
        self.last_vacated = None;
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

// Reflection around the board edge, deliberately not a modulo wrap:
// a left exit from x=0 lands at abs(-20 - 640) = 660 for one tick.
fn wrap(coord: i32, dimension: i32) -> i32 {
    if coord < 0 || coord > dimension {
        (coord - dimension).abs()
    } else {
        coord
    }
}
