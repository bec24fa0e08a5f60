//! The animation engine.
//!
//! [`Engine`] owns every piece of mutable state: the segment table, the
//! display and working buffers, the palette pair and the mode crossfade.
//! It is driven by calling [`Engine::service`] at least at the target
//! frame rate; setters may be called between two service passes.

use embassy_time::Duration;
use heapless::Vec;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::{
    OutputDriver,
    color::{BLACK, Rgb, fade_to_black_by, nblend},
    command::Command,
    mode::{CustomMode, MODE_COUNT, ModeContext, ModeId, ModeSlot},
    palette::{
        BlendType, PALETTE_COUNT, Palette16, PaletteCrossfade, PaletteSlot, find_palette,
        palette_name,
    },
    random::{Random, RandomSource},
    segment::{
        DEFAULT_BEAT88, DEFAULT_BLUR, DEFAULT_HUE_DELTA, DEFAULT_HUE_PERIOD, MAX_SEGMENTS,
        Segment, SegmentRuntime, TWINKLE_MAX, clamp_beat88,
    },
    time::{Clock, deadline_reached, duration_ms},
};

pub const DEFAULT_FPS: u16 = 60;
/// Amount removed from carried-over working pixels per decay step
pub const DEFAULT_DECAY: u8 = 4;
pub const DEFAULT_DECAY_INTERVAL: Duration = Duration::from_millis(10);
/// Interval between two steps of a mode crossfade
pub const DEFAULT_TRANSITION_INTERVAL: Duration = Duration::from_millis(8);
/// Interval between two steps of a palette crossfade
pub const DEFAULT_PALETTE_INTERVAL: Duration = Duration::from_millis(16);
pub const DEFAULT_PALETTE_STEP: u8 = 1;
pub const DEFAULT_SEED: u64 = 0x2545_F491_4F6C_DD1D;

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Target frames per second; sets the render interval of every segment
    pub fps: u16,
    pub brightness: u8,
    pub mode: ModeId,
    pub beat88: u16,
    /// Catalog index of the initial palette
    pub palette: u8,
    pub blend_type: BlendType,
    pub hue_delta: u8,
    pub hue_period: Duration,
    /// Weight of the working buffer when blended into the display
    pub blur: u8,
    pub decay: u8,
    pub decay_interval: Duration,
    pub transition_interval: Duration,
    pub palette_interval: Duration,
    /// Per-channel change of one palette crossfade step
    pub palette_step: u8,
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            brightness: 255,
            mode: ModeId::Static,
            beat88: DEFAULT_BEAT88,
            palette: 0,
            blend_type: BlendType::Linear,
            hue_delta: DEFAULT_HUE_DELTA,
            hue_period: DEFAULT_HUE_PERIOD,
            blur: DEFAULT_BLUR,
            decay: DEFAULT_DECAY,
            decay_interval: DEFAULT_DECAY_INTERVAL,
            transition_interval: DEFAULT_TRANSITION_INTERVAL,
            palette_interval: DEFAULT_PALETTE_INTERVAL,
            palette_step: DEFAULT_PALETTE_STEP,
            seed: DEFAULT_SEED,
        }
    }
}

impl EngineConfig {
    /// Milliseconds between two renders of a segment
    pub const fn frame_delay(&self) -> u16 {
        let fps = if self.fps == 0 { 1 } else { self.fps };
        1000 / fps
    }

    /// Segment spanning `len` pixels with the configured defaults
    fn segment(&self, len: usize) -> Segment {
        let last = len.saturating_sub(1).min(usize::from(u16::MAX)) as u16;
        Segment::new(0, last)
            .with_mode(self.mode)
            .with_beat88(self.beat88)
            .with_blend_type(self.blend_type)
            .with_blur(self.blur)
            .with_hue_rotation(self.hue_delta, self.hue_period)
    }
}

/// Engine-wide mode crossfade
#[derive(Debug, Clone, Copy, Default)]
struct Transition {
    active: bool,
    progress: u8,
    next_step: u32,
}

struct SegmentSlot {
    config: Segment,
    runtime: SegmentRuntime,
    mode: ModeSlot,
    /// Decay steps elapsed since the segment last rendered
    pending_decay: u8,
}

/// Segmented LED animation engine for a strip of `N` pixels
///
/// Time comes from the [`Clock`] `C`, randomness from `R`. All setters
/// without a segment index act on segment 0, which always exists.
pub struct Engine<C, const N: usize, R = Random> {
    clock: C,
    rng: R,
    config: EngineConfig,
    segments: Vec<SegmentSlot, MAX_SEGMENTS>,

    display: [Rgb; N],
    working: [Rgb; N],
    /// Per-pixel bytes kept by modes across frames
    scratch: [u8; N],

    palettes: PaletteCrossfade,
    transition: Transition,
    brightness: u8,
    running: bool,
    triggered: bool,
    next_decay: u32,
    next_palette_step: u32,
    custom_mode: Option<CustomMode>,
}

impl<C: Clock, const N: usize> Engine<C, N> {
    /// Create an engine with the default random source seeded from `config`
    pub fn new(clock: C, config: EngineConfig) -> Self {
        let rng = Random::with_seed(config.seed);
        Self::with_random(clock, config, rng)
    }
}

impl<C: Clock, const N: usize, R: RandomSource> Engine<C, N, R> {
    pub fn with_random(clock: C, config: EngineConfig, rng: R) -> Self {
        let now = clock.now_ms();
        let mut engine = Self {
            clock,
            rng,
            config,
            segments: Vec::new(),
            display: [BLACK; N],
            working: [BLACK; N],
            scratch: [0; N],
            palettes: PaletteCrossfade::new(PaletteSlot::catalog(config.palette)),
            transition: Transition::default(),
            brightness: config.brightness,
            running: false,
            triggered: false,
            next_decay: now,
            next_palette_step: now,
            custom_mode: None,
        };
        engine.install(0, config.segment(N), now);
        engine
    }

    /// Blank the buffers, restart every schedule and push one black frame
    pub fn init<O: OutputDriver>(&mut self, output: &mut O) {
        let now = self.clock.now_ms();
        for slot in &mut self.segments {
            slot.runtime = SegmentRuntime::starting_at(now, &slot.config);
            slot.mode.reset();
            slot.pending_decay = 0;
        }
        self.display.fill(BLACK);
        self.working.fill(BLACK);
        self.scratch.fill(0);
        self.transition = Transition::default();
        self.triggered = false;
        self.next_decay = now;
        self.next_palette_step = now;
        #[cfg(feature = "esp32-log")]
        println!("[Engine.init] {} pixels, {} segment(s)", N, self.segments.len());
        output.write(&self.display);
    }

    pub fn start(&mut self) {
        if self.running {
            return;
        }
        // Deadlines may have drifted arbitrarily far while stopped
        let now = self.clock.now_ms();
        for slot in &mut self.segments {
            slot.runtime.reschedule(now, &slot.config);
            slot.pending_decay = 0;
        }
        self.next_decay = now;
        self.next_palette_step = now;
        if self.transition.active {
            self.transition.next_step = now;
        }
        self.running = true;
        #[cfg(feature = "esp32-log")]
        println!("[Engine.start] running");
    }

    /// Stop animating and blank both buffers
    ///
    /// Nothing is written to the output; call [`Engine::show`] to push the
    /// black frame.
    pub fn stop(&mut self) {
        self.running = false;
        self.display.fill(BLACK);
        self.working.fill(BLACK);
        #[cfg(feature = "esp32-log")]
        println!("[Engine.stop] stopped");
    }

    /// Render every segment on the next service pass, ignoring schedules
    pub fn trigger(&mut self) {
        self.triggered = true;
    }

    /// Blend the working buffer into the display and flush once
    ///
    /// Works while stopped and does not render any mode.
    pub fn show<O: OutputDriver>(&mut self, output: &mut O) {
        for slot in &self.segments {
            let bounds = slot.config.bounds();
            nblend(
                bounds.slice_mut(&mut self.display),
                bounds.slice(&self.working),
                slot.config.blur,
            );
        }
        output.write(&self.display);
    }

    /// One scheduling pass
    ///
    /// Renders the segments that are due, advances both crossfades, hue
    /// rotation and autoplay, then flushes the display buffer once.
    /// Returns `false` without doing anything while stopped.
    pub fn service<O: OutputDriver>(&mut self, output: &mut O) -> bool {
        if !self.running {
            return false;
        }
        let now = self.clock.now_ms();
        let frame_delay = self.config.frame_delay();

        let decay_steps = self.take_decay_steps(now);
        let transition_due =
            self.transition.active && deadline_reached(now, self.transition.next_step);
        if transition_due {
            self.transition.next_step =
                now.wrapping_add(duration_ms(self.config.transition_interval));
        }

        let palette = *self.palettes.current().palette();
        for slot in &mut self.segments {
            let bounds = slot.config.bounds();
            slot.pending_decay = slot.pending_decay.saturating_add(decay_steps);
            let due = self.triggered || deadline_reached(now, slot.runtime.next_service);
            if due && N > 0 {
                // Trails fade on wall-clock time, not per render
                if !self.transition.active {
                    let working = bounds.slice_mut(&mut self.working);
                    for _ in 0..slot.pending_decay {
                        fade_to_black_by(working, self.config.decay);
                    }
                }
                slot.pending_decay = 0;
                let mut ctx = ModeContext {
                    now,
                    segment: &slot.config,
                    runtime: &mut slot.runtime,
                    palette: &palette,
                    brightness: self.brightness,
                    frame_delay,
                    in_transition: self.transition.active,
                    leds: &mut self.working,
                    scratch: &mut self.scratch,
                    rng: &mut self.rng,
                };
                let suggested = slot.mode.render(&mut ctx);
                slot.runtime.next_service = now.wrapping_add(u32::from(suggested.max(frame_delay)));
            }

            let display = bounds.slice_mut(&mut self.display);
            let working = bounds.slice(&self.working);
            if self.transition.active {
                if transition_due {
                    nblend(display, working, self.transition.progress);
                }
            } else {
                nblend(display, working, slot.config.blur);
            }

            slot.runtime.rotate_hue(&slot.config, now);
        }

        if transition_due {
            self.transition.progress = self.transition.progress.saturating_add(1);
            if self.transition.progress == u8::MAX {
                self.transition = Transition::default();
                #[cfg(feature = "esp32-log")]
                println!("[Engine.service] mode transition complete");
            }
        }

        if deadline_reached(now, self.next_palette_step) {
            self.next_palette_step = now.wrapping_add(duration_ms(self.config.palette_interval));
            if self.palettes.advance(self.config.palette_step) {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Engine.service] palette is now {}",
                    self.palettes.current().name()
                );
            }
        }

        self.run_autoplay(now);
        self.triggered = false;
        output.write(&self.display);
        true
    }

    /// Number of decay instants passed since the previous pass
    ///
    /// Instants sit on a fixed grid so the count only depends on elapsed
    /// time. The grid is held back while a mode crossfade runs.
    fn take_decay_steps(&mut self, now: u32) -> u8 {
        let interval = duration_ms(self.config.decay_interval).max(1);
        if self.transition.active {
            self.next_decay = now.wrapping_add(interval);
            return 0;
        }
        if !deadline_reached(now, self.next_decay) {
            return 0;
        }
        let steps = now.wrapping_sub(self.next_decay) / interval + 1;
        self.next_decay = self
            .next_decay
            .wrapping_add(steps.wrapping_mul(interval));
        u8::try_from(steps).unwrap_or(u8::MAX)
    }

    fn run_autoplay(&mut self, now: u32) {
        for index in 0..self.segments.len() {
            let slot = &self.segments[index];
            let next_mode = (slot.config.autoplay
                && !self.transition.active
                && deadline_reached(now, slot.runtime.next_autoplay))
            .then(|| slot.config.mode.next());
            let next_palette =
                slot.config.auto_palette && deadline_reached(now, slot.runtime.next_auto_palette);

            if let Some(mode) = next_mode {
                self.change_mode(index, mode, now);
                let slot = &mut self.segments[index];
                slot.runtime.next_autoplay = now.wrapping_add(slot.config.autoplay_ms);
            }
            if next_palette {
                let target = self.palettes.target().next_in_catalog();
                self.palettes.set_target(target);
                let slot = &mut self.segments[index];
                slot.runtime.next_auto_palette = now.wrapping_add(slot.config.auto_palette_ms);
            }
        }
    }

    /// Fit `segment` into the buffer and store it at `index`
    ///
    /// The segment's working range is cleared so its first frame never
    /// shows stale pixels.
    fn install(&mut self, index: usize, mut segment: Segment, now: u32) {
        segment.bounds = segment.bounds.clamped(N);
        segment.bounds.slice_mut(&mut self.working).fill(BLACK);
        segment.bounds.bytes_mut(&mut self.scratch).fill(0);
        let slot = SegmentSlot {
            config: segment,
            runtime: SegmentRuntime::starting_at(now, &segment),
            mode: segment.mode.to_slot(self.custom_mode),
            pending_decay: 0,
        };
        if let Some(existing) = self.segments.get_mut(index) {
            *existing = slot;
        } else {
            // Capacity is checked by the callers
            let _ = self.segments.push(slot);
        }
    }

    /// Switch segment `index` to `mode` and start the crossfade
    ///
    /// A crossfade already running keeps its progress; only its target
    /// changes.
    fn change_mode(&mut self, index: usize, mode: ModeId, now: u32) {
        let custom = self.custom_mode;
        let Some(slot) = self.segments.get_mut(index) else {
            return;
        };
        if slot.config.mode == mode {
            return;
        }
        slot.config.mode = mode;
        slot.mode = mode.to_slot(custom);
        if !self.transition.active {
            slot.config.bounds().slice_mut(&mut self.working).fill(BLACK);
            self.transition.progress = 0;
            self.transition.next_step = now;
        }
        self.transition.active = true;
        #[cfg(feature = "esp32-log")]
        println!("[Engine.change_mode] segment {} -> {:?}", index, mode);
    }

    fn primary(&self) -> Option<&SegmentSlot> {
        self.segments.first()
    }

    fn primary_mut(&mut self) -> Option<&mut SegmentSlot> {
        self.segments.first_mut()
    }

    // Configuration

    pub fn set_mode(&mut self, mode: ModeId) {
        let now = self.clock.now_ms();
        self.change_mode(0, mode, now);
    }

    /// Set the mode by number; out-of-range numbers select the last mode
    pub fn set_mode_raw(&mut self, mode: u8) {
        self.set_mode(ModeId::from_raw_clamped(mode));
    }

    pub fn next_mode(&mut self) {
        self.set_mode(self.mode().next());
    }

    /// Register a caller-drawn mode and switch segment 0 to it
    pub fn set_custom_mode(&mut self, mode: CustomMode) {
        self.custom_mode = Some(mode);
        match self.primary_mut() {
            Some(slot) if slot.config.mode == ModeId::Custom => {
                slot.mode = ModeSlot::Custom(Some(mode));
            }
            _ => self.set_mode(ModeId::Custom),
        }
    }

    /// Set the speed, clamped to the valid range
    ///
    /// The timebase moves to now so running waves continue from phase 0
    /// instead of jumping.
    pub fn set_speed(&mut self, beat88: u16) {
        let now = self.clock.now_ms();
        if let Some(slot) = self.primary_mut() {
            slot.config.beat88 = clamp_beat88(beat88);
            slot.runtime.rebase(now);
        }
    }

    pub fn increase_speed(&mut self, delta: u16) {
        self.set_speed(self.beat88().saturating_add(delta));
    }

    pub fn decrease_speed(&mut self, delta: u16) {
        self.set_speed(self.beat88().saturating_sub(delta));
    }

    pub fn set_brightness(&mut self, brightness: u8) {
        self.brightness = brightness;
    }

    pub fn increase_brightness(&mut self, delta: u8) {
        self.brightness = self.brightness.saturating_add(delta);
    }

    pub fn decrease_brightness(&mut self, delta: u8) {
        self.brightness = self.brightness.saturating_sub(delta);
    }

    /// Crossfade toward a palette made of one color
    pub fn set_color(&mut self, color: Rgb) {
        self.palettes.set_target(PaletteSlot::solid(color));
    }

    /// Replace the rendered palette immediately
    pub fn set_current_palette(&mut self, palette: Palette16, name: &str) {
        self.palettes.set_current(PaletteSlot::named(palette, name));
    }

    pub fn set_current_palette_index(&mut self, index: u8) {
        self.palettes.set_current(PaletteSlot::catalog(index));
    }

    /// Crossfade toward `palette`
    ///
    /// When `name` matches a catalog palette, that catalog entry is used
    /// instead.
    pub fn set_target_palette(&mut self, palette: Palette16, name: &str) {
        let slot = match find_palette(name) {
            Some(index) => PaletteSlot::catalog(index),
            None => PaletteSlot::named(palette, name),
        };
        #[cfg(feature = "esp32-log")]
        println!("[Engine.set_target_palette] {}", slot.name());
        self.palettes.set_target(slot);
    }

    /// Crossfade toward catalog palette `index`, taken modulo the catalog
    pub fn set_target_palette_index(&mut self, index: u8) {
        self.palettes.set_target(PaletteSlot::catalog(index));
    }

    pub fn next_palette(&mut self) {
        let target = self.palettes.target().next_in_catalog();
        self.palettes.set_target(target);
    }

    pub fn set_blend_type(&mut self, blend_type: BlendType) {
        if let Some(slot) = self.primary_mut() {
            slot.config.blend_type = blend_type;
        }
    }

    pub fn toggle_blend_type(&mut self) {
        if let Some(slot) = self.primary_mut() {
            slot.config.blend_type = slot.config.blend_type.toggled();
        }
    }

    /// Install `segment` at `index`
    ///
    /// Indices past the current count append at the next free index;
    /// indices at or beyond [`MAX_SEGMENTS`] are ignored. The bounds are
    /// fitted into the pixel buffer and the runtime starts fresh.
    pub fn set_segment(&mut self, index: u8, segment: Segment) {
        let index = usize::from(index);
        if index >= MAX_SEGMENTS {
            return;
        }
        let now = self.clock.now_ms();
        let index = index.min(self.segments.len());
        self.install(index, segment, now);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Engine.set_segment] segment {} [{}, {}]",
            index,
            segment.bounds().start,
            segment.bounds().stop
        );
    }

    /// Back to one segment spanning the whole strip with configured defaults
    pub fn reset_segments(&mut self) {
        let now = self.clock.now_ms();
        self.segments.clear();
        self.scratch.fill(0);
        self.install(0, self.config.segment(N), now);
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        let now = self.clock.now_ms();
        if let Some(slot) = self.primary_mut() {
            slot.config.autoplay = enabled;
            slot.runtime.next_autoplay = now.wrapping_add(slot.config.autoplay_ms);
        }
    }

    pub fn set_auto_palette(&mut self, enabled: bool) {
        let now = self.clock.now_ms();
        if let Some(slot) = self.primary_mut() {
            slot.config.auto_palette = enabled;
            slot.runtime.next_auto_palette = now.wrapping_add(slot.config.auto_palette_ms);
        }
    }

    pub fn set_hue_delta(&mut self, delta: u8) {
        if let Some(slot) = self.primary_mut() {
            slot.config.hue_delta = delta;
        }
    }

    pub fn set_hue_period(&mut self, period: Duration) {
        let now = self.clock.now_ms();
        if let Some(slot) = self.primary_mut() {
            slot.config.hue_period_ms = duration_ms(period);
            slot.runtime.next_hue = now.wrapping_add(slot.config.hue_period_ms);
        }
    }

    pub fn set_blur(&mut self, blur: u8) {
        if let Some(slot) = self.primary_mut() {
            slot.config.blur = blur;
        }
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        if let Some(slot) = self.primary_mut() {
            slot.config.reverse = reverse;
        }
    }

    /// Twinkle speed and density, each capped at [`TWINKLE_MAX`]
    pub fn set_twinkle(&mut self, speed: u8, density: u8) {
        if let Some(slot) = self.primary_mut() {
            slot.config.twinkle_speed = speed.min(TWINKLE_MAX);
            slot.config.twinkle_density = density.min(TWINKLE_MAX);
        }
    }

    pub fn set_fire(&mut self, cooling: u8, sparking: u8) {
        if let Some(slot) = self.primary_mut() {
            slot.config.cooling = cooling;
            slot.config.sparking = sparking;
        }
    }

    /// Execute one queued command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Start => self.start(),
            Command::Stop => self.stop(),
            Command::Trigger => self.trigger(),
            Command::SetMode(mode) => self.set_mode(mode),
            Command::NextMode => self.next_mode(),
            Command::SetSpeed(beat88) => self.set_speed(beat88),
            Command::IncreaseSpeed(delta) => self.increase_speed(delta),
            Command::DecreaseSpeed(delta) => self.decrease_speed(delta),
            Command::SetBrightness(brightness) => self.set_brightness(brightness),
            Command::IncreaseBrightness(delta) => self.increase_brightness(delta),
            Command::DecreaseBrightness(delta) => self.decrease_brightness(delta),
            Command::SetColor(color) => self.set_color(color),
            Command::SetTargetPalette(index) => self.set_target_palette_index(index),
            Command::SetCurrentPalette(index) => self.set_current_palette_index(index),
            Command::NextPalette => self.next_palette(),
            Command::SetBlendType(blend_type) => self.set_blend_type(blend_type),
            Command::ToggleBlendType => self.toggle_blend_type(),
            Command::SetSegment(index, segment) => self.set_segment(index, segment),
            Command::ResetSegments => self.reset_segments(),
            Command::SetAutoplay(enabled) => self.set_autoplay(enabled),
            Command::SetAutoPalette(enabled) => self.set_auto_palette(enabled),
            Command::SetHueDelta(delta) => self.set_hue_delta(delta),
            Command::SetHuePeriod(period) => self.set_hue_period(period),
            Command::SetBlur(blur) => self.set_blur(blur),
            Command::SetReverse(reverse) => self.set_reverse(reverse),
        }
    }

    // Introspection

    pub const fn is_running(&self) -> bool {
        self.running
    }

    pub fn mode(&self) -> ModeId {
        self.primary().map_or(ModeId::Static, |slot| slot.config.mode)
    }

    pub fn beat88(&self) -> u16 {
        self.primary().map_or(DEFAULT_BEAT88, |slot| slot.config.beat88)
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    /// Number of pixels in segment 0
    pub fn length(&self) -> u16 {
        self.primary().map_or(0, |slot| slot.config.bounds().len_in(N))
    }

    pub const fn mode_count(&self) -> u8 {
        MODE_COUNT
    }

    pub const fn palette_count(&self) -> u8 {
        PALETTE_COUNT
    }

    /// Display name of mode number `mode`, empty when out of range
    pub fn mode_name(&self, mode: u8) -> &'static str {
        ModeId::from_raw(mode).map_or("", ModeId::as_str)
    }

    /// Display name of catalog palette `index`, empty when out of range
    pub fn palette_name(&self, index: u8) -> &'static str {
        palette_name(index)
    }

    pub const fn current_palette(&self) -> &PaletteSlot {
        self.palettes.current()
    }

    pub const fn target_palette(&self) -> &PaletteSlot {
        self.palettes.target()
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index).map(|slot| &slot.config)
    }

    pub fn segment_runtime(&self, index: usize) -> Option<&SegmentRuntime> {
        self.segments.get(index).map(|slot| &slot.runtime)
    }

    /// Current palette color at `index`, at full brightness
    pub fn color_at(&self, index: u8) -> Rgb {
        let blend = self
            .primary()
            .map_or(BlendType::Linear, |slot| slot.config.blend_type);
        self.palettes.current().palette().lookup(index, 255, blend)
    }

    pub const fn is_transitioning(&self) -> bool {
        self.transition.active
    }

    pub const fn transition_progress(&self) -> u8 {
        self.transition.progress
    }

    /// What was last written to the output
    pub fn frame(&self) -> &[Rgb] {
        &self.display
    }

    /// What the modes drew
    pub fn working_frame(&self) -> &[Rgb] {
        &self.working
    }

    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }
}
