use std::time::Duration;
use glam::DVec3;
use rgb::RGBA8;
use tracing::{debug, info};
use crate::{normalise, ColourSample, ColourSpace, Cycle, Lattice, Result,
            SpaceCycler};

/// Parameters of an [`Arrangement`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrangeOptions {
    pub(crate) lattice_size: usize,
    pub(crate) axis_length: f64,
    pub(crate) ease_rate: f64,
}

impl Default for ArrangeOptions {
    fn default() -> Self {
        ArrangeOptions { lattice_size: 16, axis_length: 10., ease_rate: 1. }
    }
}

impl ArrangeOptions {
    pub fn new() -> Self { Self::default() }

    /// Number of samples per lattice axis (default: 16).
    pub fn lattice_size(mut self, n: usize) -> Self {
        self.lattice_size = n;
        self
    }

    /// Length of the displayed axes; normalised positions are scaled
    /// by it (default: 10).
    pub fn axis_length(mut self, l: f64) -> Self {
        self.axis_length = l;
        self
    }

    /// Fraction of the remaining distance covered per second of
    /// elapsed time (default: 1).
    pub fn ease_rate(mut self, r: f64) -> Self {
        self.ease_rate = r;
        self
    }
}

/// Fixed placement of the camera looking at the arrangement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
}

/// What a render host needs to draw one sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleView {
    pub index: usize,
    pub position: DVec3,
    pub colour: RGBA8,
}

/// A lattice of colours moving towards their place in the selected
/// colour space.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use colour_atlas::{Arrangement, ArrangeOptions, Cycle};
/// let mut a = Arrangement::new(ArrangeOptions::new().lattice_size(4))
///     .unwrap();
/// assert_eq!(a.space_name(), "RGB");
/// a.step(Duration::from_millis(16), Some(Cycle::Forward));
/// assert_eq!(a.space_name(), "RGB255");
/// ```
#[derive(Clone, Debug)]
pub struct Arrangement {
    lattice: Lattice,
    cycler: SpaceCycler,
    targets: Vec<DVec3>, // Targets of the samples in `cycler.current()`
    options: ArrangeOptions,
}

impl Arrangement {
    /// Builds the lattice with all samples at the origin, the first
    /// colour space being selected.
    pub fn new(options: ArrangeOptions) -> Result<Self> {
        Self::with_cycler(options, SpaceCycler::new())
    }

    /// Same as [`Arrangement::new`] but starting on `space`.
    pub fn starting_at(options: ArrangeOptions, space: ColourSpace)
                       -> Result<Self> {
        Self::with_cycler(options, SpaceCycler::at(space))
    }

    fn with_cycler(options: ArrangeOptions, cycler: SpaceCycler)
                   -> Result<Self> {
        let lattice = Lattice::new(options.lattice_size)?;
        let targets = targets(&lattice, cycler.current(),
                              options.axis_length);
        Ok(Arrangement { lattice, cycler, targets, options })
    }

    pub fn space(&self) -> ColourSpace { self.cycler.current() }

    /// Text to display for the active space.
    pub fn space_name(&self) -> &'static str { self.space().name() }

    pub fn samples(&self) -> &[ColourSample] { self.lattice.samples() }

    /// Position sample `index` is moving to.
    pub fn target(&self, index: usize) -> Option<DVec3> {
        self.targets.get(index).copied()
    }

    /// Process the input `event`, if any, then move every sample
    /// towards its target in proportion to the `elapsed` time.
    pub fn step(&mut self, elapsed: Duration, event: Option<Cycle>)
                -> &[ColourSample] {
        if let Some(event) = event {
            self.cycle(event);
        }
        let factor = (elapsed.as_secs_f64() * self.options.ease_rate)
            .clamp(0., 1.);
        self.ease(factor);
        self.lattice.samples()
    }

    /// Put every sample exactly on its target.
    pub fn snap(&mut self) -> &[ColourSample] {
        self.ease(1.);
        self.lattice.samples()
    }

    fn cycle(&mut self, event: Cycle) {
        let space = self.cycler.apply(event);
        self.targets = targets(&self.lattice, space,
                               self.options.axis_length);
        info!(space = space.name(), index = self.cycler.index(),
              "colour space selected");
    }

    fn ease(&mut self, factor: f64) {
        let samples = self.lattice.samples_mut();
        if factor >= 1. {
            for (s, &t) in samples.iter_mut().zip(&self.targets) {
                s.position = t;
            }
        } else if factor > 0. {
            for (s, &t) in samples.iter_mut().zip(&self.targets) {
                s.position = s.position.lerp(t, factor);
            }
        }
    }

    /// The samples as a render host sees them.
    pub fn views(&self) -> impl Iterator<Item = SampleView> + '_ {
        self.lattice.samples().iter().enumerate().map(|(index, s)| {
            SampleView { index, position: s.position, colour: s.display() }
        })
    }

    pub fn camera(&self) -> CameraPose {
        let l = self.options.axis_length;
        CameraPose { position: DVec3::new(1.8 * l, 1.4 * l, 1.8 * l),
                     look_at: DVec3::splat(0.5 * l) }
    }
}

fn targets(lattice: &Lattice, space: ColourSpace, axis_length: f64)
           -> Vec<DVec3> {
    debug!(space = space.name(), samples = lattice.len(),
           "computing sample targets");
    lattice.samples().iter()
        .map(|s| normalise(space, s.colour().to_space(space)) * axis_length)
        .collect()
}
