// Written by colour-atlas-tools

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;
use crate::ColourSpace;

/// Extremes of the sRGB cube in every colour space.  Hue axes span
/// the full circle.
pub(crate) fn table(space: ColourSpace) -> SpaceLimits {
    use ColourSpace::*;
    match space {
        Rgb => SpaceLimits::new((0.0, 1.0), (0.0, 1.0), (0.0, 1.0)),
        Rgb255 => SpaceLimits::new((0.0, 255.0), (0.0, 255.0), (0.0, 255.0)),
        RgbLinear => SpaceLimits::new((0.0, 1.0), (0.0, 1.0), (0.0, 1.0)),
        Hsb => SpaceLimits::new((0.0, 360.0), (0.0, 1.0), (0.0, 1.0)),
        Hsl => SpaceLimits::new((0.0, 360.0), (0.0, 1.0), (0.0, 1.0)),
        Hwb => SpaceLimits::new((0.0, 360.0), (0.0, 1.0), (0.0, 1.0)),
        Hsi => SpaceLimits::new((0.0, 360.0), (0.0, 1.0), (0.0, 1.0)),
        Xyz => SpaceLimits::new((0.0, 0.9505), (0.0, 1.0), (0.0, 1.0888)),
        Xyy => SpaceLimits::new((0.15, 0.64), (0.06, 0.6), (0.0, 1.0)),
        Lab => SpaceLimits::new(
            (0.0, 100.0), (-86.1827, 98.2343), (-107.8602, 94.478)),
        Lchab => SpaceLimits::new((0.0, 100.0), (0.0, 133.8076), (0.0, 360.0)),
        Luv => SpaceLimits::new(
            (0.0, 100.0), (-83.0776, 175.015), (-134.1029, 107.3985)),
        Lchuv => SpaceLimits::new((0.0, 100.0), (0.0, 179.0414), (0.0, 360.0)),
        Hsluv => SpaceLimits::new((0.0, 360.0), (0.0, 100.0), (0.0, 100.0)),
        Hpluv => SpaceLimits::new(
            (0.0, 360.0), (0.0, 1784.3315), (0.0, 100.0)),
        Ypbpr => SpaceLimits::new((0.0, 1.0), (-0.5, 0.5), (-0.5, 0.5)),
        Ycbcr => SpaceLimits::new((16.0, 235.0), (16.0, 240.0), (16.0, 240.0)),
        Ycgco => SpaceLimits::new((0.0, 1.0), (-0.5, 0.5), (-0.5, 0.5)),
        Yuv => SpaceLimits::new(
            (0.0, 1.0), (-0.4359, 0.4359), (-0.6148, 0.6148)),
        Yiq => SpaceLimits::new(
            (0.0, 1.0), (-0.5959, 0.5959), (-0.5227, 0.5227)),
        Ydbdr => SpaceLimits::new(
            (0.0, 1.0), (-1.333, 1.333), (-1.333, 1.333)),
        Ipt => SpaceLimits::new(
            (0.0, 1.0), (-0.4534, 0.6624), (-0.7485, 0.6515)),
        Ictcp => SpaceLimits::new(
            (0.0, 0.5081), (-0.2642, 0.2606), (-0.1475, 0.2583)),
        Jzazbz => SpaceLimits::new(
            (0.0, 0.1672), (-0.0929, 0.109), (-0.1563, 0.1152)),
        Jzczhz => SpaceLimits::new((0.0, 0.1672), (0.0, 0.1593), (0.0, 360.0)),
        Oklab => SpaceLimits::new(
            (0.0, 1.0), (-0.2339, 0.2762), (-0.3115, 0.1986)),
        Oklch => SpaceLimits::new((0.0, 1.0), (0.0, 0.3225), (0.0, 360.0)),
        Xyb => SpaceLimits::new(
            (-0.0154, 0.0281), (0.0, 0.8453), (0.0, 0.8453)),
    }
}

lazy_static! {
  pub(crate) static ref REGISTRY: Vec<SpaceLimits> =
    ColourSpace::ALL.iter().map(|&s| table(s)).collect();
}
