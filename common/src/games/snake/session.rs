use std::future::Future;
use std::time::Duration;

use ringbuffer::{AllocRingBuffer, RingBuffer};
use tokio::sync::mpsc;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::games::SessionRng;
use crate::log;
use super::bot_controller::BotController;
use super::game_state::{GameEngine, ResetInfo, SnakeGameState, TickResult};
use super::input::{KeyAction, SessionCommand};
use super::render::{Frame, build_frame};
use super::types::{Collision, GridSize};

/// Render port. Implementations draw frames and may announce resets.
pub trait FrameSink: Send + Sync + Clone + 'static {
    fn present(&self, frame: Frame) -> impl Future<Output = ()> + Send;

    fn game_reset(&self, info: ResetInfo) -> impl Future<Output = ()> + Send;
}

#[derive(Clone, Debug)]
pub struct SnakeSessionSettings {
    pub grid: GridSize,
    pub cell_size: u32,
    pub initial_length: usize,
    pub tick_interval: Duration,
    pub autopilot: bool,
    pub history_capacity: usize,
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEnd {
    Collision(Collision),
    Restarted,
    Stopped,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameRecord {
    pub end: GameEnd,
    pub score: u32,
    pub length: usize,
    pub ticks: u64,
}

impl GameRecord {
    fn from_reset(info: &ResetInfo) -> Self {
        Self {
            end: GameEnd::Collision(info.reason),
            score: info.final_score,
            length: info.final_length,
            ticks: info.ticks,
        }
    }

    fn interrupted(state: &SnakeGameState, end: GameEnd) -> Self {
        Self {
            end,
            score: state.score(),
            length: state.snake().len(),
            ticks: state.ticks(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub seed: u64,
    pub games_played: u32,
    pub best_score: u32,
    pub total_ticks: u64,
    pub recent: Vec<GameRecord>,
}

struct SessionHistory {
    games_played: u32,
    best_score: u32,
    total_ticks: u64,
    recent: AllocRingBuffer<GameRecord>,
}

impl SessionHistory {
    fn new(capacity: usize) -> Self {
        Self {
            games_played: 0,
            best_score: 0,
            total_ticks: 0,
            recent: AllocRingBuffer::new(capacity.max(1)),
        }
    }

    fn record(&mut self, record: GameRecord) {
        self.games_played += 1;
        self.best_score = self.best_score.max(record.score);
        self.recent.enqueue(record);
    }

    fn into_summary(self, seed: u64) -> SessionSummary {
        SessionSummary {
            seed,
            games_played: self.games_played,
            best_score: self.best_score,
            total_ticks: self.total_ticks,
            recent: self.recent.iter().copied().collect(),
        }
    }
}

pub struct SnakeSession;

impl SnakeSession {
    pub fn create_engine(settings: &SnakeSessionSettings) -> GameEngine {
        let rng = match settings.seed {
            Some(seed) => SessionRng::new(seed),
            None => SessionRng::from_random(),
        };
        GameEngine::new(settings.grid, settings.initial_length, rng)
    }

    fn create_ticker(period: Duration) -> Interval {
        // First tick one period after start, like a repeating timer.
        let mut ticker = interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        ticker
    }

    /// Drives one session until `Stop` arrives or the command channel closes.
    /// There is exactly one ticker; restarts reschedule it in place.
    pub async fn run<S: FrameSink>(
        settings: SnakeSessionSettings,
        mut commands: mpsc::UnboundedReceiver<SessionCommand>,
        sink: S,
    ) -> SessionSummary {
        let mut engine = Self::create_engine(&settings);
        let mut history = SessionHistory::new(settings.history_capacity);
        let cell_size = settings.cell_size;

        log!(
            "Session started with seed {}, tick interval {} ms",
            engine.seed(),
            settings.tick_interval.as_millis()
        );

        let mut state = engine.start();
        sink.present(build_frame(&state, cell_size)).await;
        let mut ticker = Self::create_ticker(settings.tick_interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    if settings.autopilot
                        && let Some(direction) = BotController::calculate_move(&state)
                    {
                        engine.set_direction(&mut state, direction);
                    }

                    history.total_ticks += 1;
                    state = match engine.update(state) {
                        TickResult::Running(next) => next,
                        TickResult::Reset(info) => {
                            history.record(GameRecord::from_reset(&info));
                            sink.game_reset(info).await;
                            ticker.reset();
                            engine.start()
                        }
                    };
                    sink.present(build_frame(&state, cell_size)).await;
                }
                command = commands.recv() => {
                    match command {
                        Some(SessionCommand::Key(key)) => match key.action() {
                            KeyAction::Turn(direction) => {
                                engine.set_direction(&mut state, direction);
                            }
                            KeyAction::Restart => {
                                log!("Restart requested at score {}", state.score());
                                history.record(GameRecord::interrupted(&state, GameEnd::Restarted));
                                ticker.reset();
                                state = engine.start();
                                sink.present(build_frame(&state, cell_size)).await;
                            }
                        },
                        Some(SessionCommand::Stop) | None => {
                            history.record(GameRecord::interrupted(&state, GameEnd::Stopped));
                            break;
                        }
                    }
                }
            }
        }

        let summary = history.into_summary(engine.seed());
        log!(
            "Session finished: {} games, best score {}, {} ticks",
            summary.games_played,
            summary.best_score,
            summary.total_ticks
        );
        summary
    }
}
