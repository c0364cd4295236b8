use glam::DVec3;
use rgb::RGBA8;
use tracing::debug;
use crate::{Colour, Error, Result};

/// One colour of a [`Lattice`] together with where it is displayed.
#[derive(Clone, Debug)]
pub struct ColourSample {
    colour: Colour,
    display: RGBA8,
    /// Current display position.
    pub position: DVec3,
}

impl ColourSample {
    fn new(colour: Colour) -> Self {
        ColourSample { colour, display: colour.to_rgba8(),
                       position: DVec3::ZERO }
    }

    pub fn colour(&self) -> &Colour { &self.colour }

    /// The colour the sample is drawn with; it never changes.
    pub fn display(&self) -> RGBA8 { self.display }
}

/// A regular `n × n × n` grid of sRGB colours.
#[derive(Clone, Debug)]
pub struct Lattice {
    samples: Vec<ColourSample>,
}

impl Lattice {
    /// Sample every channel at `n` evenly spaced values of \[0, 255\].
    /// Samples are ordered by red, then green, then blue.
    ///
    /// # Example
    ///
    /// ```
    /// use colour_atlas::Lattice;
    /// let l = Lattice::new(16).unwrap();
    /// assert_eq!(l.len(), 4096);
    /// assert!(Lattice::new(1).is_err());
    /// ```
    pub fn new(n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::DegenerateGeometry(
                format!("a lattice needs at least 2 samples per axis, \
                         got {n}")))
        }
        let channel = |i: usize| i as f64 / (n - 1) as f64 * 255.;
        let mut samples = Vec::with_capacity(n * n * n);
        for r in 0 .. n {
            for g in 0 .. n {
                for b in 0 .. n {
                    let c = Colour::from_rgb255(channel(r), channel(g),
                                                channel(b));
                    samples.push(ColourSample::new(c));
                }
            }
        }
        debug!(n, samples = samples.len(), "built colour lattice");
        Ok(Lattice { samples })
    }

    pub fn len(&self) -> usize { self.samples.len() }

    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    pub fn samples(&self) -> &[ColourSample] { &self.samples }

    pub(crate) fn samples_mut(&mut self) -> &mut [ColourSample] {
        &mut self.samples
    }
}
