#![allow(dead_code)]

use core::cell::Cell;

use stripfx::{Clock, OutputDriver, RandomSource, Rgb};

pub const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
pub const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Clock moved by hand
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

impl ManualClock {
    pub fn new(start: u32) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn set(&self, ms: u32) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Keeps every frame it is given
#[derive(Debug, Default)]
pub struct RecordingOutput {
    pub frames: Vec<Vec<Rgb>>,
}

impl RecordingOutput {
    pub fn last(&self) -> Option<&[Rgb]> {
        self.frames.last().map(Vec::as_slice)
    }

    pub fn count(&self) -> usize {
        self.frames.len()
    }
}

impl OutputDriver for RecordingOutput {
    fn write(&mut self, colors: &[Rgb]) {
        self.frames.push(colors.to_vec());
    }
}

/// Replays a fixed byte sequence, wrapping at the end
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: Vec<u8>,
    position: usize,
}

impl ScriptedRandom {
    pub fn new(script: &[u8]) -> Self {
        Self {
            script: script.to_vec(),
            position: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn random8(&mut self) -> u8 {
        let value = self.script[self.position % self.script.len()];
        self.position += 1;
        value
    }

    fn random16(&mut self) -> u16 {
        let hi = u16::from(self.random8());
        let lo = u16::from(self.random8());
        (hi << 8) | lo
    }
}

pub fn solid(leds: &[Rgb], color: Rgb) -> bool {
    leds.iter().all(|led| *led == color)
}
