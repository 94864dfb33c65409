//! Color types and the perceptual color-space seam.
//!
//! The mosaic only ever converts in one direction: 8-bit sRGB in, OKLCh out.
//! [`PerceptualAdapter`] is the seam the planner depends on; [`OkLchAdapter`]
//! is the default implementation, chaining sRGB -> linear -> OKLab -> OKLCh.
//! Uses `f64` throughout so that identical inputs give bit-identical layouts.

use serde::{Deserialize, Serialize};

/// 8-bit sRGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// sRGB color with components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Linear RGB color (gamma-decoded).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// OKLab perceptual color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OkLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

/// OKLCh (cylindrical form of OKLab): lightness in [0, 1], chroma in
/// [0, ~0.4], hue in degrees [0, 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OkLch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats as an uppercase `#RRGGBB` string.
    pub fn to_hex6(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Normalizes each channel to [0, 1].
    pub fn to_srgb(self) -> Srgb {
        Srgb {
            r: f64::from(self.r) / 255.0,
            g: f64::from(self.g) / 255.0,
            b: f64::from(self.b) / 255.0,
        }
    }
}

/// Converts an 8-bit RGB triple into its perceptual (OKLCh) coordinates.
///
/// Implementations must be pure: the same input always yields the same output,
/// otherwise the mosaic stops being reproducible across runs.
pub trait PerceptualAdapter {
    fn to_perceptual(&self, rgb: Rgb8) -> OkLch;
}

/// Default adapter using the OKLab transform.
#[derive(Debug, Clone, Copy, Default)]
pub struct OkLchAdapter;

impl PerceptualAdapter for OkLchAdapter {
    fn to_perceptual(&self, rgb: Rgb8) -> OkLch {
        srgb_to_oklch(rgb.to_srgb())
    }
}

impl<F> PerceptualAdapter for F
where
    F: Fn(Rgb8) -> OkLch,
{
    fn to_perceptual(&self, rgb: Rgb8) -> OkLch {
        self(rgb)
    }
}

/// Applies inverse sRGB gamma to a single component.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Converts sRGB to linear RGB by applying inverse sRGB gamma.
pub fn srgb_to_linear(c: Srgb) -> LinearRgb {
    LinearRgb {
        r: srgb_component_to_linear(c.r),
        g: srgb_component_to_linear(c.g),
        b: srgb_component_to_linear(c.b),
    }
}

/// Converts linear RGB to OKLab via the OKLab matrix transform.
pub fn linear_to_oklab(c: LinearRgb) -> OkLab {
    let l_ = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
    let m_ = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
    let s_ = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

    let (l_c, m_c, s_c) = (l_.cbrt(), m_.cbrt(), s_.cbrt());

    OkLab {
        l: 0.2104542553 * l_c + 0.7936177850 * m_c - 0.0040720468 * s_c,
        a: 1.9779984951 * l_c - 2.4285922050 * m_c + 0.4505937099 * s_c,
        b: 0.0259040371 * l_c + 0.7827717662 * m_c - 0.8086757660 * s_c,
    }
}

/// Converts OKLab to OKLCh.
///
/// Chroma below 1e-10 gets hue 0.0 instead of an indeterminate `atan2(0, 0)`.
pub fn oklab_to_oklch(c: OkLab) -> OkLch {
    let chroma = c.a.hypot(c.b);
    let h = if chroma < 1e-10 {
        0.0
    } else {
        c.b.atan2(c.a).to_degrees().rem_euclid(360.0)
    };
    OkLch {
        l: c.l,
        c: chroma,
        h,
    }
}

/// sRGB -> linear -> OKLab -> OKLCh.
pub fn srgb_to_oklch(c: Srgb) -> OkLch {
    oklab_to_oklch(linear_to_oklab(srgb_to_linear(c)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn to_hex6_is_uppercase_with_hash() {
        assert_eq!(Rgb8::new(0xff, 0x00, 0xaa).to_hex6(), "#FF00AA");
        assert_eq!(Rgb8::new(0, 0, 0).to_hex6(), "#000000");
        assert_eq!(Rgb8::new(0x0a, 0xb0, 0x11).to_hex6(), "#0AB011");
    }

    #[test]
    fn to_srgb_normalizes_channels() {
        let s = Rgb8::new(255, 0, 51).to_srgb();
        assert!(approx_eq(s.r, 1.0));
        assert!(approx_eq(s.g, 0.0));
        assert!(approx_eq(s.b, 0.2));
    }

    #[test]
    fn srgb_gamma_boundary_at_0_04045() {
        let lin = srgb_to_linear(Srgb {
            r: 0.04045,
            g: 0.0,
            b: 1.0,
        });
        assert!(approx_eq(lin.r, 0.04045 / 12.92));
        assert!(approx_eq(lin.g, 0.0));
        assert!(approx_eq(lin.b, 1.0));
    }

    #[test]
    fn white_has_full_lightness_and_no_chroma() {
        let lch = OkLchAdapter.to_perceptual(Rgb8::new(255, 255, 255));
        assert!(approx_eq(lch.l, 1.0), "expected L~1.0, got {}", lch.l);
        assert!(lch.c < 1e-6, "expected chroma~0, got {}", lch.c);
    }

    #[test]
    fn black_has_zero_lightness_and_zero_hue() {
        let lch = OkLchAdapter.to_perceptual(Rgb8::new(0, 0, 0));
        assert!(approx_eq(lch.l, 0.0), "expected L~0.0, got {}", lch.l);
        assert_eq!(lch.c, 0.0);
        assert_eq!(lch.h, 0.0);
    }

    #[test]
    fn pure_red_has_hue_near_29_degrees() {
        let lch = OkLchAdapter.to_perceptual(Rgb8::new(255, 0, 0));
        assert!((lch.h - 29.2).abs() < 1.0, "expected ~29.2, got {}", lch.h);
        assert!((lch.c - 0.2577).abs() < 1e-3, "chroma {}", lch.c);
        assert!((lch.l - 0.6280).abs() < 1e-3, "lightness {}", lch.l);
    }

    #[test]
    fn pure_blue_has_hue_near_264_degrees() {
        let lch = OkLchAdapter.to_perceptual(Rgb8::new(0, 0, 255));
        assert!((lch.h - 264.05).abs() < 1.0, "expected ~264, got {}", lch.h);
    }

    #[test]
    fn zero_chroma_sets_hue_to_zero() {
        let lch = oklab_to_oklch(OkLab {
            l: 0.5,
            a: 0.0,
            b: 0.0,
        });
        assert_eq!(lch.h, 0.0);
        assert!(!lch.h.is_nan());
    }

    #[test]
    fn closures_are_adapters() {
        let fixed = |_rgb: Rgb8| OkLch {
            l: 0.5,
            c: 0.1,
            h: 180.0,
        };
        assert_eq!(fixed.to_perceptual(Rgb8::new(1, 2, 3)).h, 180.0);
    }

    #[test]
    fn oklch_serializes_as_lch_object() {
        let json = serde_json::to_value(OkLch {
            l: 0.5,
            c: 0.25,
            h: 90.0,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"l": 0.5, "c": 0.25, "h": 90.0}));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn perceptual_ranges_hold_for_every_8bit_color(
                r in any::<u8>(),
                g in any::<u8>(),
                b in any::<u8>(),
            ) {
                let lch = OkLchAdapter.to_perceptual(Rgb8::new(r, g, b));
                prop_assert!(lch.l > -1e-9 && lch.l < 1.0 + 1e-9, "L {}", lch.l);
                prop_assert!(lch.c >= 0.0 && lch.c < 0.4, "C {}", lch.c);
                prop_assert!(lch.h >= 0.0 && lch.h < 360.0, "H {}", lch.h);
            }
        }
    }
}
