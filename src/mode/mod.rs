//! Mode registry with compile-time known variants
//!
//! All modes are stored in an enum to avoid heap allocations. Each mode
//! instance owns its private state, so two segments running the same
//! mode never share history.

mod bubble_sort;
mod chase;
mod context;
mod ease;
mod fill;
mod fire;
mod juggle;
mod multi_dynamic;
mod noise;
mod plasma;
mod pride;
mod scan;
mod twinkle;

pub use bubble_sort::BubbleSort;
pub use chase::{Chase, ChaseKind};
pub use context::ModeContext;
pub use ease::Ease;
pub use fill::{FillKind, PaletteFill};
pub use fire::{Fire2012, FireFlicker, Firework};
pub use juggle::{DotBeat, Juggle};
pub use multi_dynamic::MultiDynamic;
pub use noise::NoiseMover;
pub use plasma::Plasma;
pub use pride::Pride;
pub use scan::{ScanKind, Scanner};
pub use twinkle::{Twinkle, TwinkleKind};

/// Caller-provided animation for [`ModeId::Custom`]
pub type CustomMode = fn(&mut ModeContext<'_>) -> u16;

pub trait Mode {
    /// Draw one frame into the segment's range of the working buffer
    ///
    /// Returns the suggested minimum delay, in milliseconds, before the
    /// next call.
    fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16;

    /// Forget all state kept across frames
    fn reset(&mut self) {}
}

/// Known mode ids that can be requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ModeId {
    #[default]
    Static = 0,
    Ease,
    TwinkleEase,
    Plasma,
    JugglePal,
    Confetti,
    FillWave,
    DotBeat,
    ToInner,
    Breath,
    MultiDynamic,
    Rainbow,
    RainbowCycle,
    Pride,
    PrideGlitter,
    Scan,
    DualScan,
    Fade,
    TheaterChase,
    TheaterChaseDualPalette,
    TheaterChaseRainbow,
    RunningLights,
    TwinkleFade,
    TwinkleFox,
    SoftTwinkles,
    FillBright,
    Firework,
    Fire2012,
    LarsonScanner,
    Comet,
    FireFlicker,
    FireFlickerSoft,
    FireFlickerIntense,
    BubbleSort,
    Off,
    NoiseMover,
    TwinkleNoiseMover,
    FillBeat,
    Custom,
}

/// Number of registered modes
pub const MODE_COUNT: u8 = ModeId::ALL.len() as u8;

impl ModeId {
    /// Every mode in id order
    pub const ALL: [Self; 39] = [
        Self::Static,
        Self::Ease,
        Self::TwinkleEase,
        Self::Plasma,
        Self::JugglePal,
        Self::Confetti,
        Self::FillWave,
        Self::DotBeat,
        Self::ToInner,
        Self::Breath,
        Self::MultiDynamic,
        Self::Rainbow,
        Self::RainbowCycle,
        Self::Pride,
        Self::PrideGlitter,
        Self::Scan,
        Self::DualScan,
        Self::Fade,
        Self::TheaterChase,
        Self::TheaterChaseDualPalette,
        Self::TheaterChaseRainbow,
        Self::RunningLights,
        Self::TwinkleFade,
        Self::TwinkleFox,
        Self::SoftTwinkles,
        Self::FillBright,
        Self::Firework,
        Self::Fire2012,
        Self::LarsonScanner,
        Self::Comet,
        Self::FireFlicker,
        Self::FireFlickerSoft,
        Self::FireFlickerIntense,
        Self::BubbleSort,
        Self::Off,
        Self::NoiseMover,
        Self::TwinkleNoiseMover,
        Self::FillBeat,
        Self::Custom,
    ];

    pub const fn from_raw(value: u8) -> Option<Self> {
        if value < MODE_COUNT {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// Like [`ModeId::from_raw`], pinning out-of-range ids to the last mode
    pub const fn from_raw_clamped(value: u8) -> Self {
        let index = if value < MODE_COUNT { value } else { MODE_COUNT - 1 };
        Self::ALL[index as usize]
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// The following mode, wrapping after the last one
    pub const fn next(self) -> Self {
        Self::ALL[((self as u8 + 1) % MODE_COUNT) as usize]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::Ease => "Ease",
            Self::TwinkleEase => "Ease Twinkle",
            Self::Plasma => "Plasma Effect",
            Self::JugglePal => "Juggle Moving Pixels",
            Self::Confetti => "Random Confetti",
            Self::FillWave => "FILL Wave",
            Self::DotBeat => "Moving Dots",
            Self::ToInner => "Fast to Center",
            Self::Breath => "Breath",
            Self::MultiDynamic => "Multi Dynamic",
            Self::Rainbow => "Rainbow",
            Self::RainbowCycle => "Rainbow Cycle",
            Self::Pride => "Pride",
            Self::PrideGlitter => "Pride Glitter",
            Self::Scan => "Scan",
            Self::DualScan => "Dual Scan",
            Self::Fade => "Fade",
            Self::TheaterChase => "Theater Chase",
            Self::TheaterChaseDualPalette => "Theater Chase Dual palette",
            Self::TheaterChaseRainbow => "Theater Chase Rainbow",
            Self::RunningLights => "Running Lights",
            Self::TwinkleFade => "Twinkle Fade",
            Self::TwinkleFox => "Twinkle Fox",
            Self::SoftTwinkles => "Soft Twinkles",
            Self::FillBright => "Fill waving Brightness",
            Self::Firework => "The Firework",
            Self::Fire2012 => "Fire 2012",
            Self::LarsonScanner => "Larson Scanner",
            Self::Comet => "Comet",
            Self::FireFlicker => "Fire Flicker",
            Self::FireFlickerSoft => "Fire Flicker (soft)",
            Self::FireFlickerIntense => "Fire Flicker (intense)",
            Self::BubbleSort => "Bubble Sort",
            Self::Off => "Off",
            Self::NoiseMover => "iNoise8 Mover",
            Self::TwinkleNoiseMover => "Twinkle iNoise8 Mover",
            Self::FillBeat => "Color Fill Beat",
            Self::Custom => "Custom",
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|id| id.as_str() == s)
    }

    /// Fresh instance of the mode
    pub fn to_slot(self, custom: Option<CustomMode>) -> ModeSlot {
        match self {
            Self::Static => ModeSlot::Fill(PaletteFill::new(FillKind::Static)),
            Self::Ease => ModeSlot::Ease(Ease::new(false)),
            Self::TwinkleEase => ModeSlot::Ease(Ease::new(true)),
            Self::Plasma => ModeSlot::Plasma(Plasma),
            Self::JugglePal => ModeSlot::Juggle(Juggle::new()),
            Self::Confetti => ModeSlot::Twinkle(Twinkle::new(TwinkleKind::Confetti)),
            Self::FillWave => ModeSlot::Fill(PaletteFill::new(FillKind::Wave)),
            Self::DotBeat => ModeSlot::DotBeat(DotBeat::new()),
            Self::ToInner => ModeSlot::Fill(PaletteFill::new(FillKind::ToInner)),
            Self::Breath => ModeSlot::Fill(PaletteFill::new(FillKind::Breath)),
            Self::MultiDynamic => ModeSlot::MultiDynamic(MultiDynamic::new()),
            Self::Rainbow => ModeSlot::Fill(PaletteFill::new(FillKind::Rainbow)),
            Self::RainbowCycle => ModeSlot::Fill(PaletteFill::new(FillKind::RainbowCycle)),
            Self::Pride => ModeSlot::Pride(Pride::new(false)),
            Self::PrideGlitter => ModeSlot::Pride(Pride::new(true)),
            Self::Scan => ModeSlot::Scanner(Scanner::new(ScanKind::Scan)),
            Self::DualScan => ModeSlot::Scanner(Scanner::new(ScanKind::DualScan)),
            Self::Fade => ModeSlot::Fill(PaletteFill::new(FillKind::Fade)),
            Self::TheaterChase => ModeSlot::Chase(Chase::new(ChaseKind::Theater)),
            Self::TheaterChaseDualPalette => {
                ModeSlot::Chase(Chase::new(ChaseKind::TheaterDualPalette))
            }
            Self::TheaterChaseRainbow => ModeSlot::Chase(Chase::new(ChaseKind::TheaterRainbow)),
            Self::RunningLights => ModeSlot::Chase(Chase::new(ChaseKind::RunningLights)),
            Self::TwinkleFade => ModeSlot::Twinkle(Twinkle::new(TwinkleKind::Fade)),
            Self::TwinkleFox => ModeSlot::Twinkle(Twinkle::new(TwinkleKind::Fox)),
            Self::SoftTwinkles => ModeSlot::Twinkle(Twinkle::new(TwinkleKind::Soft)),
            Self::FillBright => ModeSlot::Fill(PaletteFill::new(FillKind::Bright)),
            Self::Firework => ModeSlot::Firework(Firework),
            Self::Fire2012 => ModeSlot::Fire2012(Fire2012::new()),
            Self::LarsonScanner => ModeSlot::Scanner(Scanner::new(ScanKind::Larson)),
            Self::Comet => ModeSlot::Scanner(Scanner::new(ScanKind::Comet)),
            Self::FireFlicker => ModeSlot::FireFlicker(FireFlicker::new(4)),
            Self::FireFlickerSoft => ModeSlot::FireFlicker(FireFlicker::new(6)),
            Self::FireFlickerIntense => ModeSlot::FireFlicker(FireFlicker::new(2)),
            Self::BubbleSort => ModeSlot::BubbleSort(BubbleSort::new()),
            Self::Off => ModeSlot::Fill(PaletteFill::new(FillKind::Off)),
            Self::NoiseMover => ModeSlot::NoiseMover(NoiseMover::new(false)),
            Self::TwinkleNoiseMover => ModeSlot::NoiseMover(NoiseMover::new(true)),
            Self::FillBeat => ModeSlot::Fill(PaletteFill::new(FillKind::Beat)),
            Self::Custom => ModeSlot::Custom(custom),
        }
    }
}

/// Mode slot - enum containing all possible mode instances
#[derive(Debug, Clone)]
pub enum ModeSlot {
    Fill(PaletteFill),
    Ease(Ease),
    Plasma(Plasma),
    Juggle(Juggle),
    DotBeat(DotBeat),
    Twinkle(Twinkle),
    MultiDynamic(MultiDynamic),
    Pride(Pride),
    Scanner(Scanner),
    Chase(Chase),
    FireFlicker(FireFlicker),
    Fire2012(Fire2012),
    Firework(Firework),
    BubbleSort(BubbleSort),
    NoiseMover(NoiseMover),
    /// Caller-provided function; without one the static fill is drawn
    Custom(Option<CustomMode>),
}

impl Default for ModeSlot {
    fn default() -> Self {
        ModeId::Static.to_slot(None)
    }
}

impl ModeSlot {
    /// Render the current mode
    pub fn render(&mut self, ctx: &mut ModeContext<'_>) -> u16 {
        match self {
            Self::Fill(mode) => mode.render(ctx),
            Self::Ease(mode) => mode.render(ctx),
            Self::Plasma(mode) => mode.render(ctx),
            Self::Juggle(mode) => mode.render(ctx),
            Self::DotBeat(mode) => mode.render(ctx),
            Self::Twinkle(mode) => mode.render(ctx),
            Self::MultiDynamic(mode) => mode.render(ctx),
            Self::Pride(mode) => mode.render(ctx),
            Self::Scanner(mode) => mode.render(ctx),
            Self::Chase(mode) => mode.render(ctx),
            Self::FireFlicker(mode) => mode.render(ctx),
            Self::Fire2012(mode) => mode.render(ctx),
            Self::Firework(mode) => mode.render(ctx),
            Self::BubbleSort(mode) => mode.render(ctx),
            Self::NoiseMover(mode) => mode.render(ctx),
            Self::Custom(Some(render)) => (*render)(ctx),
            Self::Custom(None) => PaletteFill::new(FillKind::Static).render(ctx),
        }
    }

    /// Reset the mode state
    pub fn reset(&mut self) {
        match self {
            Self::Fill(mode) => Mode::reset(mode),
            Self::Ease(mode) => Mode::reset(mode),
            Self::Plasma(mode) => Mode::reset(mode),
            Self::Juggle(mode) => Mode::reset(mode),
            Self::DotBeat(mode) => Mode::reset(mode),
            Self::Twinkle(mode) => Mode::reset(mode),
            Self::MultiDynamic(mode) => Mode::reset(mode),
            Self::Pride(mode) => Mode::reset(mode),
            Self::Scanner(mode) => Mode::reset(mode),
            Self::Chase(mode) => Mode::reset(mode),
            Self::FireFlicker(mode) => Mode::reset(mode),
            Self::Fire2012(mode) => Mode::reset(mode),
            Self::Firework(mode) => Mode::reset(mode),
            Self::BubbleSort(mode) => Mode::reset(mode),
            Self::NoiseMover(mode) => Mode::reset(mode),
            Self::Custom(_) => {}
        }
    }
}
