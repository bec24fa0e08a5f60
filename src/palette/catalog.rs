//! Built-in palettes.
//!
//! Read-only data; the index of an entry is its catalog number.

use super::Palette16;
use crate::color::rgb_from_u32;

macro_rules! hex_palette {
    ($($color:expr),* $(,)?) => {
        Palette16::new([$(rgb_from_u32($color)),*])
    };
}

/// A named catalog palette
#[derive(Debug)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub palette: Palette16,
}

/// Number of built-in palettes
pub const PALETTE_COUNT: u8 = 17;

#[allow(clippy::unreadable_literal)]
pub static CATALOG: [CatalogEntry; PALETTE_COUNT as usize] = [
    CatalogEntry {
        name: "Rainbow Colors",
        palette: hex_palette![
            0xFF0000, 0xD52A00, 0xAB5500, 0xAB7F00, 0xABAB00, 0x56D500, 0x00FF00, 0x00D52A,
            0x00AB55, 0x0056AA, 0x0000FF, 0x2A00D5, 0x5500AB, 0x7F0081, 0xAB0055, 0xD5002B,
        ],
    },
    CatalogEntry {
        name: "Lava Colors",
        palette: hex_palette![
            0x000000, 0x800000, 0x000000, 0x800000, 0x8B0000, 0x8B0000, 0x800000, 0x8B0000,
            0x8B0000, 0x8B0000, 0xFF0000, 0xFFA500, 0xFFFFFF, 0xFFA500, 0xFF0000, 0x8B0000,
        ],
    },
    CatalogEntry {
        name: "Iced Water Colors",
        palette: hex_palette![
            0x000000, 0x000000, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x00FFFF,
            0x00FFFF, 0x00FFFF, 0x00FFFF, 0x00FFFF, 0x00FFFF, 0xFFFFFF, 0xFFFFFF, 0xFFFFFF,
        ],
    },
    CatalogEntry {
        name: "RainbowStripe Colors",
        palette: hex_palette![
            0xFF0000, 0x000000, 0xAB5500, 0x000000, 0xABAB00, 0x000000, 0x00FF00, 0x000000,
            0x00AB55, 0x000000, 0x0000FF, 0x000000, 0x5500AB, 0x000000, 0xAB0055, 0x000000,
        ],
    },
    CatalogEntry {
        name: "Forest Colors",
        palette: hex_palette![
            0x006400, 0x006400, 0x556B2F, 0x006400, 0x008000, 0x228B22, 0x6B8E23, 0x008000,
            0x2E8B57, 0x66CDAA, 0x32CD32, 0x9ACD32, 0x90EE90, 0x7CFC00, 0x66CDAA, 0x228B22,
        ],
    },
    CatalogEntry {
        name: "Ocean Colors",
        palette: hex_palette![
            0x191970, 0x00008B, 0x191970, 0x000080, 0x00008B, 0x0000CD, 0x2E8B57, 0x008080,
            0x5F9EA0, 0x0000FF, 0x008B8B, 0x6495ED, 0x7FFFD4, 0x2E8B57, 0x00FFFF, 0x87CEFA,
        ],
    },
    CatalogEntry {
        name: "Heat Colors",
        palette: hex_palette![
            0x000000, 0x330000, 0x660000, 0x990000, 0xCC0000, 0xFF0000, 0xFF3300, 0xFF6600,
            0xFF9900, 0xFFCC00, 0xFFFF00, 0xFFFF33, 0xFFFF66, 0xFFFF99, 0xFFFFCC, 0xFFFFFF,
        ],
    },
    CatalogEntry {
        name: "Party Colors",
        palette: hex_palette![
            0x5500AB, 0x84007C, 0xB5004B, 0xE5001B, 0xE81700, 0xB84700, 0xAB7700, 0xABAB00,
            0xAB5500, 0xDD2200, 0xF2000E, 0xC2003E, 0x8F0071, 0x5F00A1, 0x2F00D0, 0x0007F9,
        ],
    },
    CatalogEntry {
        name: "Cloud Colors",
        palette: hex_palette![
            0x0000FF, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B, 0x00008B,
            0x0000FF, 0x00008B, 0x87CEEB, 0x87CEEB, 0xADD8E6, 0xFFFFFF, 0xADD8E6, 0x87CEEB,
        ],
    },
    CatalogEntry {
        name: "Ice Colors",
        palette: hex_palette![
            0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040,
            0x0C1040, 0x0C1040, 0x0C1040, 0x0C1040, 0x182080, 0x182080, 0x182080, 0x5080C0,
        ],
    },
    CatalogEntry {
        name: "Retro C9 Colors",
        palette: hex_palette![
            0xB80400, 0x902C02, 0xB80400, 0x902C02, 0x902C02, 0xB80400, 0x902C02, 0xB80400,
            0x046002, 0x046002, 0x046002, 0x046002, 0x070758, 0x070758, 0x070758, 0x606820,
        ],
    },
    CatalogEntry {
        name: "Snow Colors",
        palette: hex_palette![
            0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0x304048,
            0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0x304048, 0xE0F0FF,
        ],
    },
    CatalogEntry {
        name: "Fairy Light Colors",
        palette: hex_palette![
            0xFFE42D, 0xFFE42D, 0xFFE42D, 0xFFE42D, 0x7F7216, 0x7F7216, 0xFFE42D, 0xFFE42D,
            0x3F390B, 0x3F390B, 0xFFE42D, 0xFFE42D, 0xFFE42D, 0xFFE42D, 0xFFE42D, 0xFFE42D,
        ],
    },
    CatalogEntry {
        name: "Blue White Colors",
        palette: hex_palette![
            0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF,
            0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x0000FF, 0x808080, 0x808080, 0x808080,
        ],
    },
    CatalogEntry {
        name: "Red White Colors",
        palette: hex_palette![
            0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0x808080, 0x808080, 0x808080, 0x808080,
            0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0x808080, 0x808080, 0x808080, 0x808080,
        ],
    },
    CatalogEntry {
        name: "Holly Colors",
        palette: hex_palette![
            0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C,
            0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0x00580C, 0xB00402,
        ],
    },
    CatalogEntry {
        name: "Red Green White Colors",
        palette: hex_palette![
            0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000, 0xFF0000,
            0xFF0000, 0xFF0000, 0x808080, 0x808080, 0x008000, 0x008000, 0x008000, 0x008000,
        ],
    },
];

/// Catalog entry for `index`, wrapped modulo the catalog size
pub fn catalog_entry(index: u8) -> &'static CatalogEntry {
    &CATALOG[usize::from(index % PALETTE_COUNT)]
}

/// Name of catalog palette `index`, or `""` if there is none
pub fn palette_name(index: u8) -> &'static str {
    CATALOG.get(usize::from(index)).map_or("", |entry| entry.name)
}

/// Catalog number of the palette called `name`
#[allow(clippy::cast_possible_truncation)]
pub fn find_palette(name: &str) -> Option<u8> {
    CATALOG
        .iter()
        .position(|entry| entry.name == name)
        .map(|index| index as u8)
}
