use glam::DVec3;

/// The range of one axis of a colour space.
///
/// Invariant: `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub min: f64,
    pub max: f64,
}

impl AxisLimits {
    pub(crate) const fn new(min: f64, max: f64) -> Self {
        AxisLimits { min, max }
    }

    /// Map `value` linearly so that `min` goes to 0 and `max` to 1.
    /// Values outside the range are not clamped.
    #[inline]
    pub fn normalise(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    /// Inverse of [`AxisLimits::normalise`].
    #[inline]
    pub fn denormalise(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }
}

/// The limits of the three axes of a colour space, in triplet order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpaceLimits {
    pub axes: [AxisLimits; 3],
}

impl SpaceLimits {
    pub(crate) const fn new(first: (f64, f64), second: (f64, f64),
                            third: (f64, f64)) -> Self {
        SpaceLimits { axes: [AxisLimits::new(first.0, first.1),
                             AxisLimits::new(second.0, second.1),
                             AxisLimits::new(third.0, third.1)] }
    }

    pub fn first(&self) -> AxisLimits { self.axes[0] }
    pub fn second(&self) -> AxisLimits { self.axes[1] }
    pub fn third(&self) -> AxisLimits { self.axes[2] }

    /// Normalise each coordinate of `v` with the limits of its axis.
    pub fn normalise(&self, v: [f64; 3]) -> DVec3 {
        DVec3::new(self.axes[0].normalise(v[0]),
                   self.axes[1].normalise(v[1]),
                   self.axes[2].normalise(v[2]))
    }
}
