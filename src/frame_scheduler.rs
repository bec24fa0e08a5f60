//! Frame pacing around [`Engine::service`].
//!
//! Provides portable frame pacing without async/await or platform-specific
//! timers. The caller is responsible for sleeping between frames.

use embassy_time::{Duration, Instant};

use crate::{
    Engine, OutputDriver,
    command::{Command, CommandReceiver},
    random::{Random, RandomSource},
    time::Clock,
};

/// Result of a frame tick.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (zero if behind schedule).
    pub sleep_duration: Duration,
    /// Whether the engine wrote a frame to the output
    pub flushed: bool,
}

/// Drives an [`Engine`] at its target frame rate.
///
/// Each tick drains the command queue, runs one service pass and writes
/// the output. When the schedule falls more than two frames behind it
/// restarts from `now` instead of bursting to catch up.
///
/// # Usage
///
/// ```ignore
/// static COMMANDS: CommandQueue<8> = CommandQueue::new();
///
/// let engine = Engine::<_, 60>::new(SystemClock, EngineConfig::default());
/// let mut scheduler = FrameScheduler::new(engine, driver, COMMANDS.receiver());
/// scheduler.engine_mut().start();
///
/// loop {
///     let result = scheduler.tick(Instant::now());
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, C, O, const N: usize, const Q: usize, R = Random> {
    engine: Engine<C, N, R>,
    output: O,
    commands: CommandReceiver<'a, Q>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, C, O, const N: usize, const Q: usize, R> FrameScheduler<'a, C, O, N, Q, R>
where
    C: Clock,
    O: OutputDriver,
    R: RandomSource,
{
    /// Create a scheduler paced at the engine's configured FPS
    pub fn new(engine: Engine<C, N, R>, output: O, commands: CommandReceiver<'a, Q>) -> Self {
        let frame_duration = Duration::from_millis(u64::from(engine.config().frame_delay()));
        Self::with_frame_duration(engine, output, commands, frame_duration)
    }

    pub fn with_frame_duration(
        engine: Engine<C, N, R>,
        output: O,
        commands: CommandReceiver<'a, Q>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            engine,
            output,
            commands,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.drain_commands();

        // Drift correction: skip the backlog after a long stall
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        let flushed = self.engine.service(&mut self.output);

        self.next_frame += self.frame_duration;
        let sleep_duration = self
            .next_frame
            .checked_duration_since(now)
            .unwrap_or(Duration::from_millis(0));

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            flushed,
        }
    }

    /// Apply every queued command
    ///
    /// A stop is flushed right away so the strip goes dark even though the
    /// stopped engine no longer writes frames.
    fn drain_commands(&mut self) {
        while let Some(command) = self.commands.try_receive() {
            let stopping = command == Command::Stop;
            self.engine.apply(command);
            if stopping {
                self.engine.show(&mut self.output);
            }
        }
    }

    pub const fn engine(&self) -> &Engine<C, N, R> {
        &self.engine
    }

    pub const fn engine_mut(&mut self) -> &mut Engine<C, N, R> {
        &mut self.engine
    }

    pub const fn output(&self) -> &O {
        &self.output
    }
}
