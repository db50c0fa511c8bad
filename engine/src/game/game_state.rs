use crate::log;
use crate::session_rng::SessionRng;
use super::food::Food;
use super::snake::Snake;
use super::types::Cell;

#[derive(Clone, Copy, Debug, Default)]
pub struct TickEvent {
    pub reset: bool,
    pub ate: bool,
}

pub struct RenderFrame<'a> {
    pub food: Cell,
    pub segments: &'a [Cell],
    pub last_vacated: Option<Cell>,
    pub high_score: usize,
}

pub struct GameState {
    pub snake: Snake,
    pub food: Food,
    pub high_score: usize,
}

impl GameState {
    pub fn new(rng: &mut SessionRng) -> Self {
        Self {
            snake: Snake::new(),
            food: Food::new(rng),
            high_score: 0,
        }
    }

    // Fixed per-tick order: commit direction, move, collision check,
    // trim, food check. A reset tick still runs the food check against
    // the respawned head.
    pub fn tick(&mut self, rng: &mut SessionRng) -> TickEvent {
        self.snake.apply_pending_direction();
        let new_head = self.snake.next_head();

        let reset = if self.snake.collides_with_body(new_head) {
            log!(
                "Self collision at ({}, {}), round reset",
                new_head.x,
                new_head.y
            );
            self.snake.reset(rng);
            true
        } else {
            self.snake.advance(new_head);
            self.snake.trim_tail();
            false
        };

        let ate = self.snake.head() == self.food.position;
        if ate {
            self.snake.target_length += 1;
            if self.snake.target_length > self.high_score {
                self.high_score = self.snake.target_length;
            }
            self.food.relocate(&self.snake.segments, rng);
            log!(
                "Ate food at ({}, {}). Length: {}",
                self.snake.head().x,
                self.snake.head().y,
                self.snake.target_length
            );
        }

        TickEvent { reset, ate }
    }

    pub fn render_frame(&self) -> RenderFrame<'_> {
        RenderFrame {
            food: self.food.position,
            segments: &self.snake.segments,
            last_vacated: self.snake.last_vacated,
            high_score: self.high_score,
        }
    }

    #[cfg(test)]
    fn place_food(&mut self, position: Cell) {
        self.food.position = position;
    }

    #[cfg(test)]
    fn set_segments(&mut self, segments: Vec<Cell>) {
        self.snake.target_length = segments.len();
        self.snake.segments = segments;
    }
}
