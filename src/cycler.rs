use crate::ColourSpace;

/// A discrete request to change the selected colour space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cycle {
    Forward,
    Backward,
}

/// Selection of the current colour space, cycling through
/// [`ColourSpace::ALL`] and wrapping at both ends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpaceCycler {
    index: usize, // Invariant: index < ColourSpace::COUNT
}

impl SpaceCycler {
    const LAST: usize = ColourSpace::COUNT - 1;

    /// Starts on the first colour space.
    pub fn new() -> Self { SpaceCycler { index: 0 } }

    /// Starts on `space`.
    pub fn at(space: ColourSpace) -> Self { SpaceCycler { index: space.index() } }

    pub fn index(&self) -> usize { self.index }

    pub fn current(&self) -> ColourSpace { ColourSpace::ALL[self.index] }

    pub fn forward(&mut self) -> ColourSpace {
        self.index = if self.index == Self::LAST { 0 } else { self.index + 1 };
        self.current()
    }

    pub fn backward(&mut self) -> ColourSpace {
        self.index = if self.index == 0 { Self::LAST } else { self.index - 1 };
        self.current()
    }

    pub fn apply(&mut self, event: Cycle) -> ColourSpace {
        match event {
            Cycle::Forward => self.forward(),
            Cycle::Backward => self.backward(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_both_ends() {
        let mut c = SpaceCycler::new();
        assert_eq!(c.current(), ColourSpace::Rgb);
        assert_eq!(c.backward(), ColourSpace::Xyb);
        assert_eq!(c.index(), 27);
        assert_eq!(c.forward(), ColourSpace::Rgb);
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn forward_then_backward_is_identity() {
        for space in ColourSpace::ALL {
            let mut c = SpaceCycler::at(space);
            c.apply(Cycle::Forward);
            c.apply(Cycle::Backward);
            assert_eq!(c.current(), space);
            c.apply(Cycle::Backward);
            c.apply(Cycle::Forward);
            assert_eq!(c.current(), space);
        }
    }

    #[test]
    fn visits_every_space() {
        let mut c = SpaceCycler::new();
        let seen: Vec<_> = (0 .. ColourSpace::COUNT)
            .map(|_| c.forward()).collect();
        assert_eq!(seen.len(), 28);
        assert_eq!(*seen.last().unwrap(), ColourSpace::Rgb);
        assert_eq!(seen[0], ColourSpace::Rgb255);
    }
}
