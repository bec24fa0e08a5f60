//! 16-stop color palettes.
//!
//! A palette is addressed by an 8-bit index: the upper nibble selects a
//! stop, the lower nibble is the fraction toward the next stop (stop 15
//! wraps to stop 0).

mod catalog;

pub use catalog::{CATALOG, CatalogEntry, PALETTE_COUNT, catalog_entry, find_palette, palette_name};

use crate::{
    color::{BLACK, Rgb, average_light, nscale8_video, scale_color},
    math8::scale8,
};

/// Maximum stored length of a palette name
pub const PALETTE_NAME_CAPACITY: usize = 24;

/// Name shown for palettes that are not from the catalog
pub const CUSTOM_PALETTE_NAME: &str = "Custom";

pub type PaletteName = heapless::String<PALETTE_NAME_CAPACITY>;

/// How lookups between two stops are resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendType {
    /// Nearest lower stop
    NoBlend,
    /// Linear interpolation toward the next stop
    #[default]
    Linear,
}

impl BlendType {
    pub const fn toggled(self) -> Self {
        match self {
            Self::NoBlend => Self::Linear,
            Self::Linear => Self::NoBlend,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette16 {
    entries: [Rgb; 16],
}

impl Palette16 {
    pub const fn new(entries: [Rgb; 16]) -> Self {
        Self { entries }
    }

    /// Palette with every stop set to `color`
    pub const fn solid(color: Rgb) -> Self {
        Self {
            entries: [color; 16],
        }
    }

    pub const fn entries(&self) -> &[Rgb; 16] {
        &self.entries
    }

    /// Color at `index`, scaled by `brightness`
    pub fn lookup(&self, index: u8, brightness: u8, blend: BlendType) -> Rgb {
        let hi = usize::from(index >> 4);
        let lo = index & 0x0F;
        let entry = self.entries[hi];

        let color = if lo != 0 && blend == BlendType::Linear {
            let next = self.entries[(hi + 1) & 0x0F];
            let amount_of_next = lo << 4;
            let amount_of_entry = 255 - amount_of_next;
            Rgb {
                r: scale8(entry.r, amount_of_entry) + scale8(next.r, amount_of_next),
                g: scale8(entry.g, amount_of_entry) + scale8(next.g, amount_of_next),
                b: scale8(entry.b, amount_of_entry) + scale8(next.b, amount_of_next),
            }
        } else {
            entry
        };

        scale_color(color, brightness)
    }

    /// Deeply dimmed backdrop for ambient effects
    ///
    /// Only single-color palettes (first two stops equal) have one;
    /// otherwise the backdrop is black.
    pub fn background(&self) -> Rgb {
        let first = self.entries[0];
        if first != self.entries[1] {
            return BLACK;
        }
        let scale = match average_light(first) {
            65.. => 16,
            17..=64 => 64,
            _ => 86,
        };
        nscale8_video(first, scale)
    }

    /// Move every channel toward `target` by at most `step`
    ///
    /// Returns `false` when nothing changed. The number of calls needed to
    /// converge is the largest channel distance divided by `step`.
    pub fn crossfade_toward(&mut self, target: &Self, step: u8) -> bool {
        let step = step.max(1);
        let mut changed = false;
        for (current, target) in self.entries.iter_mut().zip(target.entries.iter()) {
            changed |= approach(&mut current.r, target.r, step);
            changed |= approach(&mut current.g, target.g, step);
            changed |= approach(&mut current.b, target.b, step);
        }
        changed
    }
}

impl Default for Palette16 {
    fn default() -> Self {
        catalog_entry(0).palette
    }
}

fn approach(value: &mut u8, target: u8, step: u8) -> bool {
    if *value == target {
        return false;
    }
    *value = if *value < target {
        value.saturating_add(step).min(target)
    } else {
        value.saturating_sub(step).max(target)
    };
    true
}

/// Fill `leds` with consecutive palette colors
///
/// The index starts at `start_index` and advances by `step` per pixel,
/// wrapping at 256.
pub fn fill_palette(
    leds: &mut [Rgb],
    start_index: u8,
    step: u8,
    palette: &Palette16,
    brightness: u8,
    blend: BlendType,
) {
    let mut index = start_index;
    for led in leds {
        *led = palette.lookup(index, brightness, blend);
        index = index.wrapping_add(step);
    }
}

/// A palette together with its display name and catalog number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteSlot {
    palette: Palette16,
    name: PaletteName,
    index: Option<u8>,
}

impl PaletteSlot {
    /// Catalog palette `index`, wrapped modulo the catalog size
    pub fn catalog(index: u8) -> Self {
        let index = index % PALETTE_COUNT;
        let entry = catalog_entry(index);
        Self {
            palette: entry.palette,
            name: truncated_name(entry.name),
            index: Some(index),
        }
    }

    /// Caller-provided palette
    ///
    /// A name that matches a catalog entry links the slot to that catalog
    /// number, so cycling continues from there.
    pub fn named(palette: Palette16, name: &str) -> Self {
        Self {
            palette,
            name: truncated_name(name),
            index: find_palette(name),
        }
    }

    pub fn solid(color: Rgb) -> Self {
        Self::named(Palette16::solid(color), CUSTOM_PALETTE_NAME)
    }

    pub const fn palette(&self) -> &Palette16 {
        &self.palette
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Catalog number, `None` for custom palettes
    pub const fn index(&self) -> Option<u8> {
        self.index
    }

    /// The catalog palette after this one, wrapping; custom palettes
    /// continue at the start of the catalog
    pub fn next_in_catalog(&self) -> Self {
        match self.index {
            Some(index) if index + 1 < PALETTE_COUNT => Self::catalog(index + 1),
            _ => Self::catalog(0),
        }
    }
}

impl Default for PaletteSlot {
    fn default() -> Self {
        Self::catalog(0)
    }
}

fn truncated_name(name: &str) -> PaletteName {
    let mut out = PaletteName::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}

/// The current/target palette pair
///
/// Rendering always uses `current`; [`PaletteCrossfade::advance`] walks it
/// toward `target` and adopts the target's name once both match.
#[derive(Debug, Clone, Default)]
pub struct PaletteCrossfade {
    current: PaletteSlot,
    target: PaletteSlot,
}

impl PaletteCrossfade {
    pub fn new(initial: PaletteSlot) -> Self {
        Self {
            current: initial.clone(),
            target: initial,
        }
    }

    pub const fn current(&self) -> &PaletteSlot {
        &self.current
    }

    pub const fn target(&self) -> &PaletteSlot {
        &self.target
    }

    /// Replace the rendered palette immediately
    pub fn set_current(&mut self, slot: PaletteSlot) {
        self.current = slot;
    }

    /// Start a crossfade toward `slot`
    pub fn set_target(&mut self, slot: PaletteSlot) {
        self.target = slot;
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }

    /// One crossfade step
    ///
    /// Returns `true` on the step that completes the crossfade.
    pub fn advance(&mut self, step: u8) -> bool {
        if self.current.palette != self.target.palette {
            self.current
                .palette
                .crossfade_toward(&self.target.palette, step);
        }
        if self.current.palette == self.target.palette && self.current != self.target {
            self.current.name = self.target.name.clone();
            self.current.index = self.target.index;
            return true;
        }
        false
    }
}
