//! Colour spaces, lattices and gradients.
//!
//! - [`Colour`] expresses one colour in any of the 28 [`ColourSpace`]s.
//! - [`limits`] and [`normalise`] map coordinates of any space into a
//!   comparable, roughly unit, cube.
//! - [`Lattice`], [`SpaceCycler`] and [`Arrangement`] move a grid of
//!   sample colours to their position in the selected space.
//! - [`gradient::draw`] renders a gradient through any [`Interpolation`]
//!   strategy and [`composite`] assembles the results into a grid.

use glam::DVec3;

mod error;
mod space;
mod model;
mod limits;
mod lattice;
mod cycler;
mod arrange;
mod font;
pub mod canvas;
pub mod gradient;
pub mod composite;

pub use error::{Error, Result};
pub use space::ColourSpace;
pub use model::{Colour, Deficiency};
pub use limits::ty::{AxisLimits, SpaceLimits};
pub use lattice::{ColourSample, Lattice};
pub use cycler::{Cycle, SpaceCycler};
pub use arrange::{Arrangement, ArrangeOptions, CameraPose, SampleView};
pub use canvas::Canvas;
pub use gradient::{GradientImage, GradientOptions, Strategy};

/// The limits of the sRGB gamut in `space`.
///
/// # Example
///
/// ```
/// use colour_atlas::{limits, ColourSpace};
/// let lab = limits(ColourSpace::Lab);
/// assert_eq!(lab.first().max, 100.);
/// ```
pub fn limits(space: ColourSpace) -> &'static SpaceLimits {
    &limits::REGISTRY[space.index()]
}

/// Normalise the coordinates `v` of a colour in `space` with the
/// [`limits`] of that space.  Colours of the sRGB gamut land in the
/// unit cube; others may fall outside (no clamping is performed).
pub fn normalise(space: ColourSpace, v: [f64; 3]) -> DVec3 {
    limits(space).normalise(v)
}

/// A way to interpolate between two colours.
pub trait Interpolation: Sync {
    /// Returns the colour at `distance` ∈ \[0, 1\] from `start` to `end`.
    fn interpolate(&self, start: &Colour, end: &Colour, distance: f64)
                   -> Colour;

    /// Name of the strategy, used to label images.
    fn label(&self) -> String;

    /// Return an iterator yielding `n` colours uniformly sampled from
    /// `start` to `end` (both included) together with their distance.
    /// The first distance is exactly `0.` and the last exactly `1.`;
    /// if `n == 1`, only `start` is yielded.
    ///
    /// # Example
    ///
    /// ```
    /// use colour_atlas::{Colour, ColourSpace, Interpolation};
    /// let red = Colour::new(1., 0., 0.);
    /// let blue = Colour::new(0., 0., 1.);
    /// let d: Vec<_> = ColourSpace::Rgb.range(&red, &blue, 5)
    ///     .map(|(t, _)| t).collect();
    /// assert_eq!(d, [0., 0.25, 0.5, 0.75, 1.]);
    /// ```
    fn range<'a>(&'a self, start: &'a Colour, end: &'a Colour, n: usize)
                 -> Range<'a, Self>
    where Self: Sized {
        if n == 0 {
            Range { strategy: self, start, end, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { strategy: self, start, end, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

impl Interpolation for ColourSpace {
    #[inline]
    fn interpolate(&self, start: &Colour, end: &Colour, distance: f64)
                   -> Colour {
        start.mix(end, *self, distance)
    }

    fn label(&self) -> String { self.name().to_string() }
}

/// An iterator yielding distances in \[0, 1\] together with colours.
///
/// Created by [`Interpolation::range`].
pub struct Range<'a, I> {
    strategy: &'a I,
    start: &'a Colour,
    end: &'a Colour,
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<'a, I> Range<'a, I> where I: Interpolation {
    /// Return the distance and colour of the position `k` (assuming
    /// it is in the range `0 ..= self.last`).
    fn colour(&self, k: usize) -> (f64, Colour) {
        let t = {
            if k == 0 { 0. }
            else if k == self.last { 1. }
            else { k as f64 / self.flast } };
        (t, self.strategy.interpolate(self.start, self.end, t))
    }
}

impl<'a, I> Iterator for Range<'a, I>
where I: Interpolation {
    type Item = (f64, Colour);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.colour(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = (self.j + 1).saturating_sub(self.i);
        (len, Some(len))
    }
}

impl<'a, I> ExactSizeIterator for Range<'a, I>
where I: Interpolation {}

impl<'a, I> DoubleEndedIterator for Range<'a, I>
where I: Interpolation {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.colour(self.j);
            if self.j == 0 {
                self.i = 1
            } else {
                self.j -= 1;
            }
            Some(item)
        } else {
            None
        }
    }
}
