use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::time::Duration;

use snake_engine::board;
use snake_engine::game::{Cell, Direction, GameState};
use snake_engine::SessionRng;

// Serpentine body filling the top rows, head on a free row below it.
fn create_long_body_state(rows: i32, rng: &mut SessionRng) -> GameState {
    let mut state = GameState::new(rng);

    let mut segments = vec![Cell::new(0, (rows + 1) * board::CELL_SIZE)];
    for row in 0..rows {
        let y = row * board::CELL_SIZE;
        let columns: Vec<i32> = if row % 2 == 0 {
            (0..board::GRID_WIDTH).collect()
        } else {
            (0..board::GRID_WIDTH).rev().collect()
        };
        for gx in columns {
            segments.push(Cell::new(gx * board::CELL_SIZE, y));
        }
    }

    state.snake.target_length = segments.len();
    state.snake.segments = segments;
    state.snake.direction = Direction::Right;
    state.food.position = Cell::new(0, board::BOARD_HEIGHT - board::CELL_SIZE);
    state
}

fn bench_tick_long_body() {
    let mut rng = SessionRng::new(17);
    let mut state = create_long_body_state(8, &mut rng);
    for _ in 0..32 {
        state.tick(&mut rng);
    }
}

fn bench_food_relocation_crowded() {
    let mut rng = SessionRng::new(17);
    let mut state = create_long_body_state(16, &mut rng);
    for _ in 0..32 {
        state.food.relocate(&state.snake.segments, &mut rng);
    }
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("long_body_32_ticks", |b| {
        b.iter(bench_tick_long_body)
    });

    group.bench_function("crowded_food_relocation", |b| {
        b.iter(bench_food_relocation_crowded)
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
