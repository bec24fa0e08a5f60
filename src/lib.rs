#![no_std]

pub mod bar;
pub mod bounds;
pub mod color;
pub mod command;
pub mod engine;
pub mod frame_scheduler;
pub mod math8;
pub mod mode;
pub mod palette;
pub mod random;
pub mod segment;
pub mod time;
pub mod wave;

pub use command::{Command, CommandQueue, CommandReceiver, CommandSender, QueueFull};
pub use engine::{Engine, EngineConfig};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use mode::{CustomMode, ModeContext, ModeId};
pub use palette::{BlendType, Palette16, PaletteSlot};
pub use random::{Random, RandomSource};
pub use segment::Segment;
pub use time::{Clock, SystemClock};

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// The engine hands it the display buffer once per service pass.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}

impl<O: OutputDriver + ?Sized> OutputDriver for &mut O {
    fn write(&mut self, colors: &[Rgb]) {
        (**self).write(colors);
    }
}
