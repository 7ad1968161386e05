use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use snake_common::games::SessionRng;
use snake_common::games::snake::{BotController, GameEngine, GridSize, TickResult, build_frame};

fn play_autopilot_ticks(ticks: usize) -> u32 {
    let mut engine = GameEngine::new(GridSize::new(30, 29), 4, SessionRng::new(42));
    let mut state = engine.start();
    let mut best_score = 0;

    for _ in 0..ticks {
        if let Some(direction) = BotController::calculate_move(&state) {
            engine.set_direction(&mut state, direction);
        }
        state = match engine.update(state) {
            TickResult::Running(next) => next,
            TickResult::Reset(info) => {
                best_score = best_score.max(info.final_score);
                engine.start()
            }
        };
    }

    best_score.max(state.score())
}

fn build_frames(ticks: usize) -> usize {
    let mut engine = GameEngine::new(GridSize::new(30, 29), 4, SessionRng::new(7));
    let state = engine.start();
    (0..ticks).map(|_| build_frame(&state, 20).commands.len()).sum()
}

fn tick_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("autopilot_10k_ticks", |b| {
        b.iter(|| play_autopilot_ticks(black_box(10_000)))
    });

    group.bench_function("build_frame_1k", |b| {
        b.iter(|| build_frames(black_box(1_000)))
    });

    group.finish();
}

criterion_group!(benches, tick_bench);
criterion_main!(benches);
