use std::fmt;
use std::str::FromStr;
use crate::Error;

/// The colour spaces a [`Colour`](crate::Colour) can be expressed in.
///
/// The order of the variants is the order in which a
/// [`SpaceCycler`](crate::SpaceCycler) visits them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColourSpace {
    /// Gamma-encoded sRGB, channels in \[0, 1\].
    Rgb,
    /// Gamma-encoded sRGB, channels in \[0, 255\].
    Rgb255,
    /// Linear-light sRGB.
    RgbLinear,
    /// Hue, saturation, brightness (aka HSV).
    Hsb,
    /// Hue, saturation, lightness.
    Hsl,
    /// Hue, whiteness, blackness.
    Hwb,
    /// Hue, saturation, intensity.
    Hsi,
    /// CIE 1931 XYZ, D65 white with Y = 1.
    Xyz,
    /// CIE xyY chromaticity and luminance.
    Xyy,
    /// CIE L\*a\*b\*, D65.
    Lab,
    /// CIE L\*C\*h°, polar form of [`Lab`](Self::Lab).
    Lchab,
    /// CIE L\*u\*v\*, D65.
    Luv,
    /// CIE L\*C\*h°uv, polar form of [`Luv`](Self::Luv).
    Lchuv,
    /// HSLuv: [`Lchuv`](Self::Lchuv) with the chroma stretched to the
    /// sRGB gamut at each hue.
    Hsluv,
    /// HPLuv: [`Lchuv`](Self::Lchuv) with the chroma relative to the
    /// largest chroma available at every hue (pastel).
    Hpluv,
    /// Analogue component video (BT.601).
    Ypbpr,
    /// Digital component video, studio range (BT.601).
    Ycbcr,
    /// Luma, green and orange chroma.
    Ycgco,
    /// PAL analogue television.
    Yuv,
    /// NTSC analogue television.
    Yiq,
    /// SECAM analogue television.
    Ydbdr,
    /// Ebner & Fairchild IPT.
    Ipt,
    /// BT.2100 ICtCp with the PQ transfer function.
    Ictcp,
    /// Safdar et al. Jzazbz.
    Jzazbz,
    /// Polar form of [`Jzazbz`](Self::Jzazbz).
    Jzczhz,
    /// Björn Ottosson's Oklab.
    Oklab,
    /// Polar form of [`Oklab`](Self::Oklab).
    Oklch,
    /// JPEG XL XYB.
    Xyb,
}

impl ColourSpace {
    /// All colour spaces, in cycling order.
    pub const ALL: [ColourSpace; 28] = {
        use ColourSpace::*;
        [Rgb, Rgb255, RgbLinear, Hsb, Hsl, Hwb, Hsi, Xyz, Xyy, Lab, Lchab,
         Luv, Lchuv, Hsluv, Hpluv, Ypbpr, Ycbcr, Ycgco, Yuv, Yiq, Ydbdr, Ipt,
         Ictcp, Jzazbz, Jzczhz, Oklab, Oklch, Xyb]
    };

    /// Number of colour spaces.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of the space in [`ColourSpace::ALL`].
    #[inline]
    pub fn index(self) -> usize { self as usize }

    /// Short name of the space (also accepted by [`FromStr`]).
    pub fn name(self) -> &'static str {
        use ColourSpace::*;
        match self {
            Rgb => "RGB", Rgb255 => "RGB255", RgbLinear => "RGBLinear",
            Hsb => "HSB", Hsl => "HSL", Hwb => "HWB", Hsi => "HSI",
            Xyz => "XYZ", Xyy => "xyY", Lab => "LAB", Lchab => "LCHab",
            Luv => "LUV", Lchuv => "LCHuv", Hsluv => "HSLuv",
            Hpluv => "HPLuv", Ypbpr => "YPbPr", Ycbcr => "YCbCr",
            Ycgco => "YCgCo", Yuv => "YUV", Yiq => "YIQ", Ydbdr => "YDbDr",
            Ipt => "IPT", Ictcp => "ICtCp", Jzazbz => "JzAzBz",
            Jzczhz => "JzCzHz", Oklab => "OKLAB", Oklch => "OKLCH",
            Xyb => "XYB",
        }
    }

    /// Names of the three axes, in triplet order.
    pub fn axes(self) -> [&'static str; 3] {
        use ColourSpace::*;
        match self {
            Rgb | Rgb255 | RgbLinear => ["R", "G", "B"],
            Hsb => ["H", "S", "B"],
            Hsl => ["H", "S", "L"],
            Hwb => ["H", "W", "B"],
            Hsi => ["H", "S", "I"],
            Xyz => ["X", "Y", "Z"],
            Xyy => ["x", "y", "Y"],
            Lab => ["L", "a", "b"],
            Lchab | Lchuv => ["L", "C", "h"],
            Luv => ["L", "u", "v"],
            Hsluv | Hpluv => ["H", "S", "L"],
            Ypbpr => ["Y", "Pb", "Pr"],
            Ycbcr => ["Y", "Cb", "Cr"],
            Ycgco => ["Y", "Cg", "Co"],
            Yuv => ["Y", "U", "V"],
            Yiq => ["Y", "I", "Q"],
            Ydbdr => ["Y", "Db", "Dr"],
            Ipt => ["I", "P", "T"],
            Ictcp => ["I", "Ct", "Cp"],
            Jzazbz => ["J", "a", "b"],
            Jzczhz => ["J", "C", "h"],
            Oklab => ["L", "a", "b"],
            Oklch => ["L", "C", "h"],
            Xyb => ["X", "Y", "B"],
        }
    }

    /// The axis holding a hue angle in degrees, if any.
    pub fn hue_axis(self) -> Option<usize> {
        use ColourSpace::*;
        match self {
            Hsb | Hsl | Hwb | Hsi | Hsluv | Hpluv => Some(0),
            Lchab | Lchuv | Jzczhz | Oklch => Some(2),
            _ => None,
        }
    }
}

impl fmt::Display for ColourSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColourSpace {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ColourSpace::ALL.iter().copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::parse(s, "unknown colour space"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_follows_all() {
        for (i, s) in ColourSpace::ALL.iter().enumerate() {
            assert_eq!(s.index(), i, "{s}");
        }
        assert_eq!(ColourSpace::COUNT, 28);
    }

    #[test]
    fn names_parse_back() {
        for s in ColourSpace::ALL {
            assert_eq!(s.name().parse::<ColourSpace>().unwrap(), s);
            assert_eq!(s.name().to_lowercase().parse::<ColourSpace>()
                       .unwrap(), s);
        }
        assert!("CMYK".parse::<ColourSpace>().is_err());
    }
}
