use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use common::games::SessionRng;
use common::games::snake::{GameStatus, SnakeGameState};

// Steers in a square so the snake survives long runs; restarts on the
// occasional self-collision once it has grown.
const STEER_CYCLE: [&str; 4] = ["ArrowDown", "ArrowRight", "ArrowUp", "ArrowRight"];

fn bench_tick(c: &mut Criterion) {
    c.bench_function("snake_tick_1000_steps", |b| {
        b.iter(|| {
            let mut rng = SessionRng::new(7);
            let mut state = SnakeGameState::new();
            state.toggle_play_pause();

            for step in 0..1000 {
                state.handle_key(STEER_CYCLE[(step / 3) % STEER_CYCLE.len()]);
                state.tick(&mut rng);
                if state.status() == GameStatus::GameOver {
                    state.toggle_play_pause();
                }
            }

            black_box(state.score())
        })
    });
}

criterion_group!(benches, bench_tick);
criterion_main!(benches);
