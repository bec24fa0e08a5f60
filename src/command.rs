//! Deferred engine commands.
//!
//! Another execution context (an interrupt, a network task) queues
//! commands here; the frame scheduler drains the queue before each
//! service pass, so the engine itself is only touched from one context.
//! The queue is a `heapless::Deque` behind a `critical-section` mutex.

use core::cell::RefCell;

use critical_section::Mutex;
use embassy_time::Duration;
use heapless::Deque;

use crate::{color::Rgb, mode::ModeId, palette::BlendType, segment::Segment};

/// A configuration change to apply on the next tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    /// Render every segment on the next tick regardless of its schedule
    Trigger,
    SetMode(ModeId),
    /// Switch to the following mode, wrapping
    NextMode,
    SetSpeed(u16),
    IncreaseSpeed(u16),
    DecreaseSpeed(u16),
    SetBrightness(u8),
    IncreaseBrightness(u8),
    DecreaseBrightness(u8),
    /// Crossfade toward a single color
    SetColor(Rgb),
    /// Crossfade toward a catalog palette, index taken modulo the catalog
    SetTargetPalette(u8),
    /// Switch to a catalog palette without crossfading
    SetCurrentPalette(u8),
    /// Crossfade toward the next catalog palette
    NextPalette,
    SetBlendType(BlendType),
    ToggleBlendType,
    SetSegment(u8, Segment),
    ResetSegments,
    SetAutoplay(bool),
    SetAutoPalette(bool),
    SetHueDelta(u8),
    SetHuePeriod(Duration),
    SetBlur(u8),
    SetReverse(bool),
}

/// Returned when the queue has no room; gives the command back
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueFull(pub Command);

/// Bounded, interrupt-safe command queue
pub struct CommandQueue<const SIZE: usize> {
    inner: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Sending half; any number of senders may share the queue
    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(command).map_err(QueueFull)
        })
    }

    /// Oldest queued command, if any
    pub fn try_receive(&self) -> Option<Command> {
        critical_section::with(|cs| self.inner.borrow(cs).borrow_mut().pop_front())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    /// Queue `command`, or hand it back if the queue is full
    pub fn try_send(&self, command: Command) -> Result<(), QueueFull> {
        self.queue.try_send(command)
    }
}

#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    pub fn try_receive(&self) -> Option<Command> {
        self.queue.try_receive()
    }
}
