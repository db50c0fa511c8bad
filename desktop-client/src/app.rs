use std::time::{Duration, Instant};

use eframe::egui;
use snake_engine::game::{Cell, Direction, GameState};
use snake_engine::{board, SessionRng};

const BACKGROUND_COLOR: egui::Color32 = egui::Color32::BLACK;
const BORDER_COLOR: egui::Color32 = egui::Color32::from_rgb(93, 216, 228);
const FOOD_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 0, 0);
const SNAKE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 255, 0);

pub struct SnakeApp {
    state: GameState,
    rng: SessionRng,
    tick_interval: Duration,
    last_tick: Instant,
}

impl SnakeApp {
    pub fn new(state: GameState, rng: SessionRng, tick_interval: Duration) -> Self {
        Self {
            state,
            rng,
            tick_interval,
            last_tick: Instant::now(),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let mut quit = false;
        let mut new_direction = None;

        ctx.input(|i| {
            quit = i.key_pressed(egui::Key::Escape);

            if i.key_pressed(egui::Key::ArrowUp) {
                new_direction = Some(Direction::Up);
            } else if i.key_pressed(egui::Key::ArrowDown) {
                new_direction = Some(Direction::Down);
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                new_direction = Some(Direction::Left);
            } else if i.key_pressed(egui::Key::ArrowRight) {
                new_direction = Some(Direction::Right);
            }
        });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if let Some(direction) = new_direction {
            self.state.snake.request_direction(direction);
        }
    }

    fn render_cell(painter: &egui::Painter, origin: egui::Pos2, cell: Cell, fill: egui::Color32) {
        let rect = egui::Rect::from_min_size(
            origin + egui::vec2(cell.x as f32, cell.y as f32),
            egui::vec2(board::CELL_SIZE as f32, board::CELL_SIZE as f32),
        );
        painter.rect_filled(rect, egui::CornerRadius::ZERO, fill);
        painter.rect_stroke(
            rect,
            egui::CornerRadius::ZERO,
            egui::Stroke::new(1.0, BORDER_COLOR),
            egui::StrokeKind::Inside,
        );
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Fixed-rate pacing: repaints run at display rate, the game
        // advances only when the tick interval has elapsed.
        if self.last_tick.elapsed() >= self.tick_interval {
            self.state.tick(&mut self.rng);
            self.last_tick = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let frame = self.state.render_frame();

            ui.heading(format!("Snake | high score: {}", frame.high_score));
            ui.separator();

            let (response, painter) = ui.allocate_painter(
                egui::Vec2::new(board::BOARD_WIDTH as f32, board::BOARD_HEIGHT as f32),
                egui::Sense::hover(),
            );

            let canvas = response.rect;
            painter.rect_filled(canvas, egui::CornerRadius::ZERO, BACKGROUND_COLOR);

            Self::render_cell(&painter, canvas.min, frame.food, FOOD_COLOR);
            for segment in frame.segments {
                Self::render_cell(&painter, canvas.min, *segment, SNAKE_COLOR);
            }
        });

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}
