mod food;
mod game_state;
mod snake;
mod types;

pub use food::Food;
pub use game_state::{GameState, RenderFrame, TickEvent};
pub use snake::Snake;
pub use types::{Cell, Direction};
