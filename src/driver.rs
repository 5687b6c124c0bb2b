//! Fixed timestep loop driver
//!
//! Wall-clock time is accumulated and drained in constant steps, so the
//! simulation runs at the same rate whatever the display does. Input and
//! drawing sit behind traits so the loop can run headless.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::sim::{self, GameEvent, MatchState, TickInput};

/// Edge-triggered commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Start,
    Restart,
    Quit,
}

/// Where input comes from
pub trait InputSource {
    /// Called once per frame before any step runs
    fn capture(&mut self) {}
    /// Next pending command, `None` once drained
    fn poll_event(&mut self) -> Option<InputEvent>;
    /// Currently held movement keys
    fn held(&self) -> TickInput;
}

/// Where a match gets drawn
pub trait Renderer {
    fn render(&mut self, state: &MatchState);
}

/// Input source that never produces anything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        None
    }

    fn held(&self) -> TickInput {
        TickInput::default()
    }
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _state: &MatchState) {}
}

/// Accumulator for fixed-size simulation steps
#[derive(Debug, Clone)]
pub struct FixedTimestep {
    step: Duration,
    accumulator: Duration,
    max_substeps: u32,
}

impl FixedTimestep {
    pub fn new(step: Duration, max_substeps: u32) -> Self {
        Self {
            step,
            accumulator: Duration::ZERO,
            max_substeps: max_substeps.max(1),
        }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn dt(&self) -> f32 {
        self.step.as_secs_f32()
    }

    /// Time accumulated but not yet simulated
    pub fn pending(&self) -> Duration {
        self.accumulator
    }

    /// Add elapsed time and return how many whole steps to run now.
    /// A step runs only while strictly more than one step is banked.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator > self.step {
            if steps == self.max_substeps {
                log::debug!(
                    "Dropping {:?} of simulation backlog after {steps} steps",
                    self.accumulator
                );
                self.accumulator = Duration::ZERO;
                break;
            }
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }
}

/// One running game: match state, serve RNG, timestep and the I/O seams
pub struct Game<I: InputSource, R: Renderer> {
    pub state: MatchState,
    rng: Pcg32,
    timestep: FixedTimestep,
    input: I,
    renderer: R,
    running: bool,
}

impl<I: InputSource, R: Renderer> Game<I, R> {
    pub fn new(config: &GameConfig, input: I, renderer: R) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        log::info!("Serve seed: {seed}");
        let mut rng = Pcg32::seed_from_u64(seed);
        Self {
            state: MatchState::new(config.rules, &mut rng),
            rng,
            timestep: FixedTimestep::new(config.step(), config.max_substeps),
            input,
            renderer,
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    /// Run one loop iteration: drain whole steps from `elapsed`, then render once.
    /// Returns the game events produced by the steps.
    pub fn frame(&mut self, elapsed: Duration) -> Vec<GameEvent> {
        self.input.capture();
        let steps = self.timestep.advance(elapsed);
        let dt = self.timestep.dt();
        for _ in 0..steps {
            self.process_events();
            if !self.state.is_game_over() {
                let input = self.input.held();
                sim::tick(&mut self.state, &input, dt, &mut self.rng);
            }
        }
        self.renderer.render(&self.state);
        self.state.drain_events()
    }

    fn process_events(&mut self) {
        while let Some(event) = self.input.poll_event() {
            match event {
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    self.running = false;
                }
                InputEvent::Restart => sim::restart(&mut self.state, &mut self.rng),
                InputEvent::Start => {
                    sim::start(&mut self.state);
                }
            }
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::MatchPhase;
    use std::collections::VecDeque;

    const STEP: Duration = Duration::from_millis(10);

    #[test]
    fn test_timestep_requires_strictly_more_than_one_step() {
        let mut ts = FixedTimestep::new(STEP, 8);
        assert_eq!(ts.advance(Duration::from_millis(10)), 0);
        assert_eq!(ts.advance(Duration::from_millis(1)), 1);
        assert_eq!(ts.pending(), Duration::from_millis(1));
    }

    #[test]
    fn test_timestep_carries_remainder() {
        let mut ts = FixedTimestep::new(STEP, 8);
        assert_eq!(ts.advance(Duration::from_millis(35)), 3);
        assert_eq!(ts.pending(), Duration::from_millis(5));
        assert_eq!(ts.advance(Duration::from_millis(6)), 1);
        assert_eq!(ts.pending(), Duration::from_millis(1));
    }

    #[test]
    fn test_timestep_caps_substeps() {
        let mut ts = FixedTimestep::new(STEP, 4);
        assert_eq!(ts.advance(Duration::from_secs(2)), 4);
        assert_eq!(ts.pending(), Duration::ZERO);
    }

    #[derive(Default)]
    struct Scripted {
        frames: VecDeque<Vec<InputEvent>>,
        pending: VecDeque<InputEvent>,
        held: TickInput,
    }

    impl InputSource for Scripted {
        fn capture(&mut self) {
            let captured = self.frames.pop_front().unwrap_or_default();
            self.pending.extend(captured);
        }

        fn poll_event(&mut self) -> Option<InputEvent> {
            self.pending.pop_front()
        }

        fn held(&self) -> TickInput {
            self.held
        }
    }

    #[derive(Default)]
    struct CountingRenderer {
        frames: u32,
    }

    impl Renderer for CountingRenderer {
        fn render(&mut self, _state: &MatchState) {
            self.frames += 1;
        }
    }

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(42),
            ..GameConfig::default()
        }
    }

    #[test]
    fn test_frame_renders_once_per_iteration() {
        let mut game = Game::new(&config(), NoInput, CountingRenderer::default());
        game.frame(Duration::from_millis(50));
        game.frame(Duration::ZERO);
        assert_eq!(game.renderer().frames, 2);
    }

    #[test]
    fn test_events_only_apply_when_a_step_runs() {
        let input = Scripted {
            frames: VecDeque::from([vec![InputEvent::Start]]),
            ..Default::default()
        };
        let mut game = Game::new(&config(), input, NullRenderer);

        // No whole step yet, so the start key stays queued in the source
        game.frame(Duration::from_millis(5));
        assert_eq!(game.state.phase, MatchPhase::Instructions);
        assert_eq!(game.input_mut().pending, VecDeque::from([InputEvent::Start]));
    }

    #[test]
    fn test_start_then_ball_moves() {
        let input = Scripted {
            frames: VecDeque::from([vec![InputEvent::Start]]),
            ..Default::default()
        };
        let mut game = Game::new(&config(), input, NullRenderer);
        let center = game.state.ball.pos;

        game.frame(Duration::from_millis(40));
        assert_eq!(game.state.phase, MatchPhase::Playing);
        assert_ne!(game.state.ball.pos, center);
        assert_eq!(game.state.time_ticks, 2);
    }

    #[test]
    fn test_quit_stops_loop() {
        let input = Scripted {
            frames: VecDeque::from([vec![InputEvent::Quit]]),
            ..Default::default()
        };
        let mut game = Game::new(&config(), input, NullRenderer);
        assert!(game.is_running());
        game.frame(Duration::from_millis(20));
        assert!(!game.is_running());
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = Game::new(&config(), NoInput, NullRenderer);
        let b = Game::new(&config(), NoInput, NullRenderer);
        assert_eq!(a.state.ball.vel, b.state.ball.vel);
    }
}
