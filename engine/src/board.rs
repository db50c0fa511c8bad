use crate::game::Cell;

pub const CELL_SIZE: i32 = 20;

pub const BOARD_WIDTH: i32 = 640;
pub const BOARD_HEIGHT: i32 = 480;

pub const GRID_WIDTH: i32 = BOARD_WIDTH / CELL_SIZE;
pub const GRID_HEIGHT: i32 = BOARD_HEIGHT / CELL_SIZE;

pub const CENTER: Cell = Cell::new(BOARD_WIDTH / 2, BOARD_HEIGHT / 2);
