mod utils;

use smart_leds::RGB8;
pub use utils::{
    add_colors, average_light, blend_colors, blur1d, fade_to_black_by, is_lit, mirror_half,
    nblend, nscale8_video, rgb_from_u32, scale_color, sub_colors,
};

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
pub const WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};
