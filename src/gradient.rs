//! Pixel accurate gradients through a sequence of colours.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use rgb::RGBA8;
use tracing::{debug, trace};
use crate::{Canvas, Colour, ColourSpace, Deficiency, Error, Interpolation,
            Result};

/// How gradient images are laid out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientOptions {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) transparent_out_of_gamut: bool,
    pub(crate) label_colour: RGBA8,
    pub(crate) label_position: Option<(u32, u32)>,
    pub(crate) label_scale: u32,
}

impl Default for GradientOptions {
    fn default() -> Self {
        GradientOptions {
            width: 600,
            height: 60,
            transparent_out_of_gamut: false,
            label_colour: RGBA8::new(255, 255, 255, 255),
            label_position: Some((4, 4)),
            label_scale: 2,
        }
    }
}

impl GradientOptions {
    pub fn new() -> Self { Self::default() }

    pub fn width(mut self, w: u32) -> Self {
        self.width = w;
        self
    }

    pub fn height(mut self, h: u32) -> Self {
        self.height = h;
        self
    }

    /// Make the columns whose colour cannot be displayed transparent
    /// (default: `false`).
    pub fn transparent_out_of_gamut(mut self, yes: bool) -> Self {
        self.transparent_out_of_gamut = yes;
        self
    }

    pub fn label_colour(mut self, c: RGBA8) -> Self {
        self.label_colour = c;
        self
    }

    /// Top left corner of the label (default: `(4, 4)`).
    pub fn label_position(mut self, x: u32, y: u32) -> Self {
        self.label_position = Some((x, y));
        self
    }

    /// Do not write the label on the image.
    pub fn no_label(mut self) -> Self {
        self.label_position = None;
        self
    }

    /// Size in pixels of one font pixel (default: 2).
    pub fn label_scale(mut self, s: u32) -> Self {
        self.label_scale = s;
        self
    }

    pub fn size(&self) -> (u32, u32) { (self.width, self.height) }
}

/// Interpolation strategies offered for gradients.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Interpolate in the colour space.
    Space(ColourSpace),
    /// Interpolate in `space` and show the result as seen with
    /// `deficiency`.
    Simulated { space: ColourSpace, deficiency: Deficiency },
}

impl Interpolation for Strategy {
    fn interpolate(&self, start: &Colour, end: &Colour, distance: f64)
                   -> Colour {
        match self {
            Strategy::Space(s) => start.mix(end, *s, distance),
            Strategy::Simulated { space, deficiency } =>
                start.mix(end, *space, distance).simulate(*deficiency),
        }
    }

    fn label(&self) -> String {
        match self {
            Strategy::Space(s) => s.name().to_string(),
            Strategy::Simulated { space, deficiency } =>
                format!("{space} ({deficiency})"),
        }
    }
}

impl From<ColourSpace> for Strategy {
    fn from(s: ColourSpace) -> Self { Strategy::Space(s) }
}

/// A labelled gradient.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GradientImage {
    label: String,
    canvas: Canvas,
}

impl GradientImage {
    pub fn label(&self) -> &str { &self.label }

    pub fn canvas(&self) -> &Canvas { &self.canvas }
}

/// Colours of the columns of one section, from `a` to `b`.
fn section<I>(a: &Colour, b: &Colour, strategy: &I, width: u32,
              transparent: bool) -> Vec<RGBA8>
where I: Interpolation {
    let column = |c: Colour| {
        let mut px = c.to_rgba8();
        if transparent && !c.is_in_display_gamut() {
            px.a = 0;
        }
        px
    };
    // A single column gets `a` only.
    strategy.range(a, b, width as usize).map(|(_, c)| column(c)).collect()
}

/// Draw the gradient through `points` with `strategy`.  Each pair of
/// consecutive points is given an equal share of the width; the
/// columns left over at the right repeat the last colour.
///
/// # Example
///
/// ```
/// use colour_atlas::{gradient, Colour, ColourSpace, GradientOptions};
/// let points = [Colour::new(1., 0., 0.), Colour::new(0., 0., 1.)];
/// let opts = GradientOptions::new().width(100).height(10).no_label();
/// let img = gradient::draw("red-blue", &opts, &points, &ColourSpace::Rgb)
///     .unwrap();
/// let c = img.canvas();
/// assert_eq!(c.pixel(0, 5).unwrap(), rgb::RGBA8::new(255, 0, 0, 255));
/// assert_eq!(c.pixel(99, 5).unwrap(), rgb::RGBA8::new(0, 0, 255, 255));
/// ```
pub fn draw<I>(label: &str, options: &GradientOptions, points: &[Colour],
               strategy: &I) -> Result<GradientImage>
where I: Interpolation {
    let (width, height) = options.size();
    if points.len() < 2 {
        return Err(Error::DegenerateGeometry(format!(
            "a gradient needs at least 2 colours, got {}", points.len())))
    }
    if height == 0 {
        return Err(Error::DegenerateGeometry(
            "gradient height is zero".to_string()))
    }
    let sections = points.len() - 1;
    let section_width = width / sections as u32;
    if section_width == 0 {
        return Err(Error::DegenerateGeometry(format!(
            "width {width} is too small for {sections} sections")))
    }
    let transparent = options.transparent_out_of_gamut;
    let compute = |s: usize| {
        trace!(section = s, "sampling section");
        section(&points[s], &points[s + 1], strategy, section_width,
                transparent)
    };
    #[cfg(feature = "parallel")]
    let columns: Vec<Vec<RGBA8>> =
        (0 .. sections).into_par_iter().map(compute).collect();
    #[cfg(not(feature = "parallel"))]
    let columns: Vec<Vec<RGBA8>> = (0 .. sections).map(compute).collect();

    let mut canvas = Canvas::new(width, height, RGBA8::default());
    let mut x = 0;
    for c in columns.iter().flatten() {
        canvas.fill_column(x, *c);
        x += 1;
    }
    if let Some(&last) = columns.last().and_then(|c| c.last()) {
        for x in x .. width {
            canvas.fill_column(x, last);
        }
    }
    if let Some((lx, ly)) = options.label_position {
        canvas.draw_text(label, lx, ly, options.label_colour,
                         options.label_scale);
    }
    debug!(label, width, height, sections, section_width,
           "drew gradient");
    Ok(GradientImage { label: label.to_string(), canvas })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Colour { Colour::new(1., 0., 0.) }
    fn blue() -> Colour { Colour::new(0., 0., 1.) }

    fn plain(w: u32, h: u32) -> GradientOptions {
        GradientOptions::new().width(w).height(h).no_label()
    }

    #[test]
    fn red_to_blue() {
        let img = draw("RGB", &plain(100, 10), &[red(), blue()],
                       &ColourSpace::Rgb).unwrap();
        let c = img.canvas();
        assert_eq!((c.width(), c.height()), (100, 10));
        for y in 0 .. 10 {
            assert_eq!(c.pixel(0, y), Some(RGBA8::new(255, 0, 0, 255)));
            assert_eq!(c.pixel(99, y), Some(RGBA8::new(0, 0, 255, 255)));
        }
        let mid = c.pixel(50, 3).unwrap();
        assert!(mid.r.abs_diff(128) <= 2 && mid.b.abs_diff(128) <= 2,
                "{mid:?}");
        assert_eq!(mid.g, 0);
    }

    #[test]
    fn endpoints_of_every_section() {
        let pts = [red(), Colour::new(0., 1., 0.), blue(),
                   Colour::new(1., 1., 1.)];
        for space in [ColourSpace::Rgb, ColourSpace::Lab, ColourSpace::Hsl,
                      ColourSpace::Oklch] {
            let img = draw("", &plain(90, 2), &pts, &space).unwrap();
            for (s, w) in [(0, 0), (1, 30), (2, 60)] {
                assert_eq!(img.canvas().pixel(w, 0).unwrap(),
                           pts[s].to_rgba8(), "{space} start {s}");
                assert_eq!(img.canvas().pixel(w + 29, 0).unwrap(),
                           pts[s + 1].to_rgba8(), "{space} end {s}");
            }
        }
    }

    #[test]
    fn remainder_repeats_last_colour() {
        let pts = [red(), blue(), Colour::new(0., 1., 0.)];
        let img = draw("", &plain(11, 1), &pts, &ColourSpace::Rgb).unwrap();
        let c = img.canvas();
        assert_eq!(c.width(), 11);
        assert_eq!(c.pixel(9, 0), Some(RGBA8::new(0, 255, 0, 255)));
        assert_eq!(c.pixel(10, 0), Some(RGBA8::new(0, 255, 0, 255)));
    }

    #[test]
    fn single_pixel_sections() {
        let pts = [red(), blue(), Colour::new(0., 1., 0.)];
        let img = draw("", &plain(2, 1), &pts, &ColourSpace::Rgb).unwrap();
        assert_eq!(img.canvas().pixel(0, 0), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(img.canvas().pixel(1, 0), Some(RGBA8::new(0, 0, 255, 255)));
    }

    #[test]
    fn degenerate_geometry() {
        let e = |r: Result<GradientImage>| {
            matches!(r, Err(Error::DegenerateGeometry(_)))
        };
        let s = ColourSpace::Rgb;
        assert!(e(draw("", &plain(10, 10), &[red()], &s)));
        assert!(e(draw("", &plain(10, 10), &[], &s)));
        assert!(e(draw("", &plain(10, 0), &[red(), blue()], &s)));
        assert!(e(draw("", &plain(0, 10), &[red(), blue()], &s)));
        assert!(e(draw("", &plain(2, 10), &[red(), blue(), red(), blue()],
                       &s)));
    }

    #[test]
    fn transparency_of_out_of_gamut_colours() {
        // Straight lines in Lab between saturated colours leave the gamut.
        let pts = [Colour::new(0., 0., 1.), Colour::new(1., 1., 0.)];
        let s = ColourSpace::Lab;
        let opaque = draw("", &plain(64, 1), &pts, &s).unwrap();
        assert!(opaque.canvas().pixels().iter().all(|p| p.a == 255));
        let opts = plain(64, 1).transparent_out_of_gamut(true);
        let img = draw("", &opts, &pts, &s).unwrap();
        let px = img.canvas().pixels();
        assert_eq!(px[0].a, 255);
        assert_eq!(px[63].a, 255);
        for (x, p) in px.iter().enumerate() {
            let t = x as f64 / 63.;
            let c = pts[0].mix(&pts[1], s, t);
            assert_eq!(p.a == 0, !c.is_in_display_gamut(), "column {x}");
        }
    }

    #[test]
    fn label_is_written() {
        let opts = GradientOptions::new().width(60).height(20)
            .label_colour(RGBA8::new(1, 2, 3, 255)).label_position(0, 0)
            .label_scale(1);
        let img = draw("L", &opts, &[red(), blue()], &ColourSpace::Rgb)
            .unwrap();
        assert_eq!(img.label(), "L");
        assert_eq!(img.canvas().pixel(0, 0), Some(RGBA8::new(1, 2, 3, 255)));
        assert_eq!(img.canvas().pixel(0, 6), Some(RGBA8::new(1, 2, 3, 255)));
        assert_eq!(img.canvas().pixel(0, 7), Some(RGBA8::new(255, 0, 0, 255)));
    }

    #[test]
    fn simulated_strategy() {
        let s = Strategy::Simulated { space: ColourSpace::Rgb,
                                      deficiency: Deficiency::Achromatopsia };
        assert_eq!(s.label(), "RGB (Achromatopsia)");
        let img = draw("", &plain(20, 1), &[red(), blue()], &s).unwrap();
        for p in img.canvas().pixels() {
            assert!(p.r.abs_diff(p.g) <= 1 && p.g.abs_diff(p.b) <= 1);
        }
        assert_eq!(Strategy::from(ColourSpace::Lab).label(), "LAB");
    }
}
