//! The colour model: one colour value expressed in any [`ColourSpace`].
//!
//! Conversions go through `palette` for the spaces it knows about
//! and through [`transform`] for the others.  Conversions never clamp:
//! a colour outside the sRGB gamut keeps its out-of-range coordinates.

use std::str::FromStr;
use palette::{Hsl, Hsv, Hwb, Hsluv, Lab, Lch, Lchuv, LinSrgb, Luv, Oklab,
              Oklch, Srgb, Xyz};
use palette::color_difference::Ciede2000;
use palette::convert::FromColorUnclamped;
use palette::encoding;
use palette::white_point::D65;
use rgb::{RGB8, RGBA8};
use crate::{ColourSpace, Error, Result};

mod cvd;
mod transform;

pub use cvd::Deficiency;

type Hsb64 = Hsv<encoding::Srgb, f64>;
type Hsl64 = Hsl<encoding::Srgb, f64>;
type Hwb64 = Hwb<encoding::Srgb, f64>;
type Xyz64 = Xyz<D65, f64>;
type Lab64 = Lab<D65, f64>;
type Lch64 = Lch<D65, f64>;
type Luv64 = Luv<D65, f64>;
type Lchuv64 = Lchuv<D65, f64>;
type Hsluv64 = Hsluv<D65, f64>;
type Oklab64 = Oklab<f64>;
type Oklch64 = Oklch<f64>;

/// Tolerance on the \[0, 1\] sRGB range before a colour is deemed
/// outside the display gamut.
const GAMUT_EPS: f64 = 1e-9;

/// XYZ of the D65 reference white.
const D65_XYZ: [f64; 3] = [0.95047, 1., 1.08883];

/// A colour, stored as unclamped gamma-encoded sRGB plus alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Colour {
    srgb: Srgb<f64>,
    alpha: f64,
}

impl Colour {
    /// Opaque colour from sRGB channels in \[0, 1\].  Values outside
    /// that range are kept as is.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Colour { srgb: Srgb::new(r, g, b), alpha: 1. }
    }

    /// Opaque colour from sRGB channels in \[0, 255\].
    pub fn from_rgb255(r: f64, g: f64, b: f64) -> Self {
        Colour::new(r / 255., g / 255., b / 255.)
    }

    pub fn with_alpha(self, alpha: f64) -> Self { Colour { alpha, ..self } }

    pub fn alpha(&self) -> f64 { self.alpha }

    /// Parse `#rrggbb`, `#rgb` or `#rrggbbaa` (the `#` is optional).
    ///
    /// # Example
    ///
    /// ```
    /// use colour_atlas::Colour;
    /// let c = Colour::from_hex("#ff8000").unwrap();
    /// assert_eq!(c.to_rgb8(), rgb::RGB8::new(255, 128, 0));
    /// assert!(Colour::from_hex("#ff80").is_err());
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::parse(hex, "not a hexadecimal colour"))
        }
        let (rgb, alpha) = match digits.len() {
            8 => {
                let a = u8::from_str_radix(&digits[6 ..], 16)
                    .map_err(|e| Error::parse(hex, e))?;
                (&digits[.. 6], a as f64 / 255.)
            }
            3 | 6 => (digits, 1.),
            n => return Err(Error::parse(
                hex, format!("expected 3, 6 or 8 hex digits, got {n}"))),
        };
        let c = Srgb::<u8>::from_str(rgb).map_err(|e| Error::parse(hex, e))?;
        Ok(Colour { srgb: c.into_format(), alpha })
    }

    /// The `#rrggbb` code of the colour, clamped to the sRGB gamut.
    pub fn hex(&self) -> String {
        let RGB8 { r, g, b } = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// The gamma-encoded sRGB channels, unclamped.
    pub fn rgb(&self) -> [f64; 3] {
        let (r, g, b) = self.srgb.into_components();
        [r, g, b]
    }

    /// The colour as 8 bit RGB (clamped and rounded).
    pub fn to_rgb8(&self) -> RGB8 {
        let [r, g, b] = self.rgb().map(to_byte);
        RGB8 { r, g, b }
    }

    /// The colour as 8 bit RGBA (clamped and rounded).
    pub fn to_rgba8(&self) -> RGBA8 {
        let RGB8 { r, g, b } = self.to_rgb8();
        RGBA8 { r, g, b, a: to_byte(self.alpha) }
    }

    /// Whether the colour can be displayed on an sRGB screen.
    pub fn is_in_display_gamut(&self) -> bool {
        self.rgb().iter()
            .all(|c| (-GAMUT_EPS ..= 1. + GAMUT_EPS).contains(c))
    }

    /// Whether the colour is a shade of grey, in which case its hue
    /// is meaningless.
    pub fn is_achromatic(&self) -> bool {
        let [r, g, b] = self.rgb();
        (r - g).abs() < GAMUT_EPS && (g - b).abs() < GAMUT_EPS
    }

    /// The coordinates of the colour in `space`.  Hues are in degrees
    /// in \[0, 360).
    pub fn to_space(&self, space: ColourSpace) -> [f64; 3] {
        use ColourSpace as S;
        let srgb = self.srgb;
        match space {
            S::Rgb => self.rgb(),
            S::Rgb255 => self.rgb().map(|c| 255. * c),
            S::RgbLinear => linear(srgb),
            S::Hsb => {
                let (h, s, v) = Hsb64::from_color_unclamped(srgb)
                    .into_components();
                [h.into_positive_degrees(), s, v]
            }
            S::Hsl => {
                let (h, s, l) = Hsl64::from_color_unclamped(srgb)
                    .into_components();
                [h.into_positive_degrees(), s, l]
            }
            S::Hwb => {
                let (h, w, b) = Hwb64::from_color_unclamped(srgb)
                    .into_components();
                [h.into_positive_degrees(), w, b]
            }
            S::Hsi => {
                let hue = self.to_space(S::Hsb)[0];
                transform::hsi_from_rgb(self.rgb(), hue)
            }
            S::Xyz => xyz(srgb),
            S::Xyy => xyy_from_xyz(xyz(srgb)),
            S::Lab => {
                let (l, a, b) = Lab64::from_color_unclamped(srgb)
                    .into_components();
                [l, a, b]
            }
            S::Lchab => {
                let (l, c, h) = Lch64::from_color_unclamped(srgb)
                    .into_components();
                [l, c, h.into_positive_degrees()]
            }
            S::Luv => {
                let (l, u, v) = Luv64::from_color_unclamped(srgb)
                    .into_components();
                [l, u, v]
            }
            S::Lchuv => {
                let (l, c, h) = Lchuv64::from_color_unclamped(srgb)
                    .into_components();
                [l, c, h.into_positive_degrees()]
            }
            S::Hsluv => {
                let (h, s, l) = Hsluv64::from_color_unclamped(srgb)
                    .into_components();
                let s = if transform::is_extreme_lightness(l) { 0. } else { s };
                [h.into_positive_degrees(), s, l]
            }
            S::Hpluv => transform::hpluv_from_lchuv(self.to_space(S::Lchuv)),
            S::Ypbpr => transform::ypbpr_from_rgb(self.rgb()),
            S::Ycbcr => transform::ycbcr_from_ypbpr(self.to_space(S::Ypbpr)),
            S::Ycgco => transform::ycgco_from_rgb(self.rgb()),
            S::Yuv => transform::yuv_from_rgb(self.rgb()),
            S::Yiq => transform::yiq_from_rgb(self.rgb()),
            S::Ydbdr => transform::ydbdr_from_rgb(self.rgb()),
            S::Ipt => transform::ipt_from_xyz(xyz(srgb)),
            S::Ictcp => transform::ictcp_from_xyz(xyz(srgb)),
            S::Jzazbz => transform::jzazbz_from_xyz(xyz(srgb)),
            S::Jzczhz => {
                transform::polar_from_cartesian(self.to_space(S::Jzazbz))
            }
            S::Oklab => {
                let (l, a, b) = Oklab64::from_color_unclamped(srgb)
                    .into_components();
                [l, a, b]
            }
            S::Oklch => {
                let (l, c, h) = Oklch64::from_color_unclamped(srgb)
                    .into_components();
                [l, c, h.into_positive_degrees()]
            }
            S::Xyb => transform::xyb_from_linear(linear(srgb)),
        }
    }

    /// The opaque colour with coordinates `v` in `space`.
    pub fn from_space(space: ColourSpace, v: [f64; 3]) -> Self {
        use ColourSpace as S;
        let [a, b, c] = v;
        let srgb = match space {
            S::Rgb => Srgb::new(a, b, c),
            S::Rgb255 => Srgb::new(a / 255., b / 255., c / 255.),
            S::RgbLinear => Srgb::from_linear(LinSrgb::new(a, b, c)),
            S::Hsb => Srgb::from_color_unclamped(
                Hsb64::from_components((a, b, c))),
            S::Hsl => Srgb::from_color_unclamped(
                Hsl64::from_components((a, b, c))),
            S::Hwb => Srgb::from_color_unclamped(
                Hwb64::from_components((a, b, c))),
            S::Hsi => from_array(transform::rgb_from_hsi(v)),
            S::Xyz => from_xyz(v),
            S::Xyy => from_xyz(xyz_from_xyy(v)),
            S::Lab => Srgb::from_color_unclamped(
                Lab64::from_components((a, b, c))),
            S::Lchab => Srgb::from_color_unclamped(
                Lch64::from_components((a, b, c))),
            S::Luv => Srgb::from_color_unclamped(
                Luv64::from_components((a, b, c))),
            S::Lchuv => from_lchuv(v),
            S::Hsluv => Srgb::from_color_unclamped(
                Hsluv64::from_components((a, b, c))),
            S::Hpluv => from_lchuv(transform::lchuv_from_hpluv(v)),
            S::Ypbpr => from_array(transform::rgb_from_ypbpr(v)),
            S::Ycbcr => from_array(transform::rgb_from_ypbpr(
                transform::ypbpr_from_ycbcr(v))),
            S::Ycgco => from_array(transform::rgb_from_ycgco(v)),
            S::Yuv => from_array(transform::rgb_from_yuv(v)),
            S::Yiq => from_array(transform::rgb_from_yiq(v)),
            S::Ydbdr => from_array(transform::rgb_from_ydbdr(v)),
            S::Ipt => from_xyz(transform::xyz_from_ipt(v)),
            S::Ictcp => from_xyz(transform::xyz_from_ictcp(v)),
            S::Jzazbz => from_xyz(transform::xyz_from_jzazbz(v)),
            S::Jzczhz => from_xyz(transform::xyz_from_jzazbz(
                transform::cartesian_from_polar(v))),
            S::Oklab => Srgb::from_color_unclamped(
                Oklab64::from_components((a, b, c))),
            S::Oklch => Srgb::from_color_unclamped(
                Oklch64::from_components((a, b, c))),
            S::Xyb => {
                let [r, g, b] = transform::linear_from_xyb(v);
                Srgb::from_linear(LinSrgb::new(r, g, b))
            }
        };
        Colour { srgb, alpha: 1. }
    }

    /// Interpolate between `self` (`t = 0`) and `other` (`t = 1`) in
    /// `space`.  Hue axes follow the shortest arc; when one end is
    /// achromatic, the hue of the other end is used throughout.
    pub fn mix(&self, other: &Colour, space: ColourSpace, t: f64) -> Colour {
        let v0 = self.to_space(space);
        let v1 = other.to_space(space);
        let mut v = [0.; 3];
        for i in 0 .. 3 { v[i] = lerp(v0[i], v1[i], t) }
        if let Some(h) = space.hue_axis() {
            let (h0, h1) = match (self.is_achromatic(), other.is_achromatic()) {
                (true, false) => (v1[h], v1[h]),
                (false, true) => (v0[h], v0[h]),
                _ => (v0[h], v1[h]),
            };
            v[h] = lerp_hue(h0, h1, t);
        }
        Colour::from_space(space, v).with_alpha(lerp(self.alpha, other.alpha, t))
    }

    /// CIEDE2000 colour difference.
    pub fn difference(&self, other: &Colour) -> f64 {
        let lab0 = Lab64::from_color_unclamped(self.srgb);
        let lab1 = Lab64::from_color_unclamped(other.srgb);
        lab0.difference(lab1)
    }

    /// How the colour is seen with the given vision `deficiency`.
    pub fn simulate(&self, deficiency: Deficiency) -> Colour {
        let [r, g, b] = cvd::simulate_linear(deficiency, linear(self.srgb));
        Colour { srgb: Srgb::from_linear(LinSrgb::new(r, g, b)),
                 alpha: self.alpha }
    }
}

impl FromStr for Colour {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> { Colour::from_hex(s) }
}

#[inline]
fn to_byte(c: f64) -> u8 { (255. * c).round().clamp(0., 255.) as u8 }

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 { a + t * (b - a) }

/// Interpolate the hues `h0` and `h1` (in degrees) along the shortest arc.
fn lerp_hue(h0: f64, h1: f64, t: f64) -> f64 {
    let dh = {
        if h1 > h0 && h1 - h0 > 180. { h1 - (h0 + 360.) }
        else if h1 < h0 && h0 - h1 > 180. { h1 + 360. - h0 }
        else { h1 - h0 } };
    (h0 + t * dh).rem_euclid(360.)
}

fn linear(srgb: Srgb<f64>) -> [f64; 3] {
    let lin: LinSrgb<f64> = srgb.into_linear();
    let (r, g, b) = lin.into_components();
    [r, g, b]
}

fn xyz(srgb: Srgb<f64>) -> [f64; 3] {
    let (x, y, z) = Xyz64::from_color_unclamped(srgb)
        .into_components();
    [x, y, z]
}

/// Chromaticity and luminance.  Black has no chromaticity of its own
/// and is given the one of the white point, like all greys.
fn xyy_from_xyz([x, y, z]: [f64; 3]) -> [f64; 3] {
    let sum = x + y + z;
    if sum.abs() < 1e-12 {
        let [wx, wy, wz] = D65_XYZ;
        let w = wx + wy + wz;
        [wx / w, wy / w, y]
    } else {
        [x / sum, y / sum, y]
    }
}

fn xyz_from_xyy([x, y, luma]: [f64; 3]) -> [f64; 3] {
    if y == 0. { return [0.; 3] }
    [x * luma / y, luma, (1. - x - y) * luma / y]
}

fn from_array([r, g, b]: [f64; 3]) -> Srgb<f64> { Srgb::new(r, g, b) }

fn from_xyz([x, y, z]: [f64; 3]) -> Srgb<f64> {
    Srgb::from_color_unclamped(Xyz64::new(x, y, z))
}

fn from_lchuv([l, c, h]: [f64; 3]) -> Srgb<f64> {
    Srgb::from_color_unclamped(Lchuv64::from_components((l, c, h)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_rgb_eq(a: &Colour, b: &Colour, eps: f64) {
        for (x, y) in a.rgb().into_iter().zip(b.rgb()) {
            assert_abs_diff_eq!(x, y, epsilon = eps);
        }
    }

    #[test]
    fn every_space_round_trips() {
        let colours = [Colour::new(0.9, 0.2, 0.35), Colour::new(0.1, 0.6, 0.3),
                       Colour::new(0.25, 0.3, 0.95), Colour::new(0.5, 0.5, 0.5)];
        for space in ColourSpace::ALL {
            for c in &colours {
                let back = Colour::from_space(space, c.to_space(space));
                assert!(a_close(c, &back, 1e-6),
                        "{space}: {:?} -> {:?}", c.rgb(), back.rgb());
            }
        }
    }

    fn a_close(a: &Colour, b: &Colour, eps: f64) -> bool {
        a.rgb().into_iter().zip(b.rgb()).all(|(x, y)| (x - y).abs() <= eps)
    }

    #[test]
    fn lab_of_green() {
        let [l, a, b] = Colour::new(0., 1., 0.).to_space(ColourSpace::Lab);
        assert_abs_diff_eq!(l, 87.73, epsilon = 0.05);
        assert_abs_diff_eq!(a, -86.18, epsilon = 0.05);
        assert_abs_diff_eq!(b, 83.18, epsilon = 0.05);
    }

    #[test]
    fn hues_are_degrees() {
        let blue = Colour::new(0., 0., 1.);
        assert_abs_diff_eq!(blue.to_space(ColourSpace::Hsb)[0], 240.,
                            epsilon = 1e-9);
        assert_abs_diff_eq!(blue.to_space(ColourSpace::Hsi)[0], 240.,
                            epsilon = 1e-9);
        let h = blue.to_space(ColourSpace::Oklch)[2];
        assert!((0. .. 360.).contains(&h));
    }

    #[test]
    fn out_of_gamut_is_not_clamped() {
        let c = Colour::from_space(ColourSpace::Lab, [50., 120., 0.]);
        assert!(!c.is_in_display_gamut());
        let lab = c.to_space(ColourSpace::Lab);
        assert_abs_diff_eq!(lab[1], 120., epsilon = 1e-6);
        assert!(Colour::new(1., 0., 0.).is_in_display_gamut());
    }

    #[test]
    fn hex_parsing() {
        let c = Colour::from_hex("#0080ff").unwrap();
        assert_eq!(c.to_rgba8(), RGBA8::new(0, 128, 255, 255));
        assert_eq!(c.hex(), "#0080ff");
        assert_eq!(Colour::from_hex("f00").unwrap().to_rgb8(),
                   RGB8::new(255, 0, 0));
        assert_eq!(Colour::from_hex("#00000080").unwrap().to_rgba8().a, 128);
        for bad in ["", "#12", "#12345", "#gg0000", "#ééé", "+f+f+f",
                    "#ff0000+f", "##ff0000", "#-ff", "0x00ff"] {
            match Colour::from_hex(bad) {
                Err(Error::Parse { input, .. }) => assert_eq!(input, bad),
                other => panic!("{bad:?} parsed as {other:?}"),
            }
        }
    }

    #[test]
    fn rgb_mix_is_linear() {
        let red = Colour::new(1., 0., 0.);
        let blue = Colour::new(0., 0., 1.);
        let mid = red.mix(&blue, ColourSpace::Rgb, 0.5);
        assert_rgb_eq(&mid, &Colour::new(0.5, 0., 0.5), 1e-12);
        assert_rgb_eq(&red.mix(&blue, ColourSpace::Rgb, 0.), &red, 1e-12);
        assert_rgb_eq(&red.mix(&blue, ColourSpace::Rgb, 1.), &blue, 1e-12);
    }

    #[test]
    fn hue_takes_shortest_arc() {
        assert_abs_diff_eq!(lerp_hue(350., 10., 0.5), 0., epsilon = 1e-9);
        assert_abs_diff_eq!(lerp_hue(10., 350., 0.25), 5., epsilon = 1e-9);
        assert_abs_diff_eq!(lerp_hue(90., 180., 0.5), 135., epsilon = 1e-9);
        // Red to magenta in HSB goes through 330°, not through green.
        let red = Colour::new(1., 0., 0.);
        let magenta = Colour::new(1., 0., 1.);
        let mid = red.mix(&magenta, ColourSpace::Hsb, 0.5);
        assert_abs_diff_eq!(mid.to_space(ColourSpace::Hsb)[0], 330.,
                            epsilon = 1e-9);
    }

    #[test]
    fn achromatic_end_borrows_hue() {
        let white = Colour::new(1., 1., 1.);
        let blue = Colour::new(0., 0., 1.);
        let mid = white.mix(&blue, ColourSpace::Hsl, 0.5);
        assert_abs_diff_eq!(mid.to_space(ColourSpace::Hsl)[0], 240.,
                            epsilon = 1e-9);
    }

    #[test]
    fn alpha_is_interpolated() {
        let a = Colour::new(0., 0., 0.).with_alpha(0.);
        let b = Colour::new(1., 1., 1.);
        assert_abs_diff_eq!(a.mix(&b, ColourSpace::Oklab, 0.25).alpha(), 0.25,
                            epsilon = 1e-12);
    }

    #[test]
    fn difference_is_ciede2000() {
        let c = Colour::new(0.3, 0.4, 0.5);
        assert_abs_diff_eq!(c.difference(&c), 0., epsilon = 1e-9);
        let black = Colour::new(0., 0., 0.);
        let white = Colour::new(1., 1., 1.);
        assert_abs_diff_eq!(black.difference(&white), 100., epsilon = 0.01);
    }

    #[test]
    fn black_has_the_white_chromaticity() {
        let black = Colour::new(0., 0., 0.);
        let white = Colour::new(1., 1., 1.);
        let [x, y, luma] = black.to_space(ColourSpace::Xyy);
        let [wx, wy, _] = white.to_space(ColourSpace::Xyy);
        assert_abs_diff_eq!(x, wx, epsilon = 1e-4);
        assert_abs_diff_eq!(y, wy, epsilon = 1e-4);
        assert_eq!(luma, 0.);
        assert_eq!(Colour::from_space(ColourSpace::Xyy, [x, y, luma]).rgb(),
                   [0.; 3]);
    }

    #[test]
    fn black_to_white_is_grey_everywhere() {
        let black = Colour::new(0., 0., 0.);
        let white = Colour::new(1., 1., 1.);
        for space in ColourSpace::ALL {
            for t in [0.25, 0.5, 0.75] {
                let [r, g, b] = black.mix(&white, space, t).rgb();
                let spread = r.max(g).max(b) - r.min(g).min(b);
                assert!(spread < 2e-3, "{space} at {t}: {:?}", [r, g, b]);
                assert!((0.01 .. 0.99).contains(&r), "{space} at {t}: {r}");
            }
        }
    }

    #[test]
    fn simulation_keeps_greys() {
        let grey = Colour::new(0.5, 0.5, 0.5);
        for d in Deficiency::ALL {
            assert_rgb_eq(&grey.simulate(d), &grey, 1e-3);
        }
    }
}
