//! The fixed universe of 4096 twelve-bit colors.
//!
//! Every color is a triplet of 4-bit channels. Channels expand to 8 bits by
//! nibble duplication (`byte = nibble * 17`), so `f0a` is `#FF00AA`.

use std::fmt;
use std::str::FromStr;

use crate::color::{OkLch, PerceptualAdapter, Rgb8};
use crate::error::MosaicError;

/// Number of values a 4-bit channel can take.
pub const CHANNEL_LEVELS: u8 = 16;

/// Number of colors in the universe (16^3).
pub const UNIVERSE_SIZE: usize = 4096;

/// A 4-bit-per-channel color, each channel in [0, 15].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawColor {
    r: u8,
    g: u8,
    b: u8,
}

impl RawColor {
    /// Creates a color from three nibbles.
    ///
    /// Returns `MosaicError::InvalidColorFormat` if any channel exceeds 15.
    pub fn new(r: u8, g: u8, b: u8) -> Result<Self, MosaicError> {
        if r >= CHANNEL_LEVELS || g >= CHANNEL_LEVELS || b >= CHANNEL_LEVELS {
            return Err(MosaicError::InvalidColorFormat(format!(
                "channels ({r}, {g}, {b}) must each be in 0..=15"
            )));
        }
        Ok(Self { r, g, b })
    }

    /// Inverse of [`RawColor::index`]; `None` outside `0..4096`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index >= UNIVERSE_SIZE {
            return None;
        }
        Some(Self {
            r: (index >> 8) as u8,
            g: ((index >> 4) & 0xf) as u8,
            b: (index & 0xf) as u8,
        })
    }

    /// Parses a canonical key: exactly three lowercase hex digits.
    pub fn from_hex3(hex3: &str) -> Result<Self, MosaicError> {
        let bytes = hex3.as_bytes();
        if bytes.len() != 3 {
            return Err(MosaicError::InvalidColorFormat(format!(
                "expected 3 hex digits, got {hex3:?}"
            )));
        }
        let mut nibbles = [0u8; 3];
        for (slot, &byte) in nibbles.iter_mut().zip(bytes) {
            *slot = match byte {
                b'0'..=b'9' => byte - b'0',
                b'a'..=b'f' => byte - b'a' + 10,
                _ => {
                    return Err(MosaicError::InvalidColorFormat(format!(
                        "expected lowercase hex digits [0-9a-f], got {hex3:?}"
                    )))
                }
            };
        }
        Ok(Self {
            r: nibbles[0],
            g: nibbles[1],
            b: nibbles[2],
        })
    }

    pub fn r(self) -> u8 {
        self.r
    }

    pub fn g(self) -> u8 {
        self.g
    }

    pub fn b(self) -> u8 {
        self.b
    }

    /// Position in the r -> g -> b enumeration: `r*256 + g*16 + b`.
    pub fn index(self) -> usize {
        usize::from(self.r) * 256 + usize::from(self.g) * 16 + usize::from(self.b)
    }

    /// Lowercase three-digit key, e.g. `"f0a"`.
    pub fn hex3(self) -> String {
        format!("{:x}{:x}{:x}", self.r, self.g, self.b)
    }

    /// Nibble-expanded 8-bit triple.
    pub fn rgb8(self) -> Rgb8 {
        Rgb8::new(self.r * 17, self.g * 17, self.b * 17)
    }

    /// Uppercase `#RRGGBB` of the expanded color.
    pub fn hex6(self) -> String {
        self.rgb8().to_hex6()
    }
}

impl fmt::Display for RawColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}{:x}{:x}", self.r, self.g, self.b)
    }
}

impl FromStr for RawColor {
    type Err = MosaicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex3(s)
    }
}

/// A universe color paired with its perceptual coordinates, not yet placed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniverseColor {
    pub color: RawColor,
    pub perceptual: OkLch,
}

/// Iterates all 4096 colors in index order (r outer, b inner).
pub fn all_colors() -> impl Iterator<Item = RawColor> {
    (0..UNIVERSE_SIZE).filter_map(RawColor::from_index)
}

/// Enumerates the universe and converts every color through `adapter`.
///
/// The returned vector is indexed by [`RawColor::index`].
pub fn generate_universe<A: PerceptualAdapter + ?Sized>(adapter: &A) -> Vec<UniverseColor> {
    all_colors()
        .map(|color| UniverseColor {
            color,
            perceptual: adapter.to_perceptual(color.rgb8()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::OkLchAdapter;
    use std::collections::HashSet;

    #[test]
    fn universe_has_4096_distinct_keys() {
        let keys: HashSet<String> = all_colors().map(RawColor::hex3).collect();
        assert_eq!(keys.len(), UNIVERSE_SIZE);
        assert_eq!(all_colors().count(), UNIVERSE_SIZE);
    }

    #[test]
    fn index_is_a_bijection_onto_0_to_4095() {
        for (expected, color) in all_colors().enumerate() {
            assert_eq!(color.index(), expected);
            assert_eq!(RawColor::from_index(expected), Some(color));
        }
        assert_eq!(RawColor::from_index(UNIVERSE_SIZE), None);
    }

    #[test]
    fn enumeration_order_is_r_then_g_then_b() {
        let first: Vec<String> = all_colors().take(3).map(RawColor::hex3).collect();
        assert_eq!(first, ["000", "001", "002"]);
        assert_eq!(RawColor::from_index(16).unwrap().hex3(), "010");
        assert_eq!(RawColor::from_index(256).unwrap().hex3(), "100");
        assert_eq!(RawColor::from_index(4095).unwrap().hex3(), "fff");
    }

    #[test]
    fn nibble_expansion_matches_shorthand_hex() {
        assert_eq!(RawColor::from_hex3("f0a").unwrap().hex6(), "#FF00AA");
        assert_eq!(RawColor::from_hex3("000").unwrap().hex6(), "#000000");
        assert_eq!(RawColor::from_hex3("fff").unwrap().hex6(), "#FFFFFF");
        assert_eq!(RawColor::from_hex3("123").unwrap().hex6(), "#112233");
    }

    #[test]
    fn rgb8_multiplies_each_nibble_by_17() {
        let c = RawColor::new(1, 8, 15).unwrap();
        assert_eq!(c.rgb8(), Rgb8::new(17, 136, 255));
    }

    #[test]
    fn new_rejects_channels_above_15() {
        assert!(RawColor::new(16, 0, 0).is_err());
        assert!(RawColor::new(0, 0, 255).is_err());
        assert!(RawColor::new(15, 15, 15).is_ok());
    }

    #[test]
    fn from_hex3_rejects_non_canonical_keys() {
        for bad in ["", "ff", "ffff", "FFF", "f0A", "g00", "#ff", " ff", "ÿf"] {
            assert!(
                matches!(
                    RawColor::from_hex3(bad),
                    Err(MosaicError::InvalidColorFormat(_))
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn from_str_and_display_agree_with_hex3() {
        let c: RawColor = "c0e".parse().unwrap();
        assert_eq!((c.r(), c.g(), c.b()), (12, 0, 14));
        assert_eq!(c.to_string(), "c0e");
        assert_eq!(c.hex3(), "c0e");
    }

    #[test]
    fn generate_universe_is_indexed_by_color_index() {
        let universe = generate_universe(&OkLchAdapter);
        assert_eq!(universe.len(), UNIVERSE_SIZE);
        for (i, entry) in universe.iter().enumerate() {
            assert_eq!(entry.color.index(), i);
        }
    }

    #[test]
    fn generate_universe_calls_adapter_with_expanded_rgb() {
        let probe = |rgb: Rgb8| OkLch {
            l: f64::from(rgb.r) / 255.0,
            c: f64::from(rgb.g) / 1000.0,
            h: f64::from(rgb.b),
        };
        let universe = generate_universe(&probe);
        let f0a = &universe[RawColor::from_hex3("f0a").unwrap().index()];
        assert_eq!(f0a.perceptual.l, 1.0);
        assert_eq!(f0a.perceptual.c, 0.0);
        assert_eq!(f0a.perceptual.h, 170.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn lowercase_keys_parse_to_their_own_index(key in "[0-9a-f]{3}") {
                let color = RawColor::from_hex3(&key).unwrap();
                prop_assert_eq!(color.hex3(), key.clone());
                prop_assert_eq!(usize::from_str_radix(&key, 16).unwrap(), color.index());
            }

            #[test]
            fn keys_with_non_hex_characters_are_rejected(key in "[0-9a-f]{0,2}[g-zA-Z#][0-9a-f]{0,2}") {
                prop_assert!(RawColor::from_hex3(&key).is_err());
            }
        }
    }
}
