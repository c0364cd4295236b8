// Regenerate `src/limits.rs` by sweeping the sRGB cube through every
// colour space.  Run from the `tools/` directory.

use std::{env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use colour_atlas::{Colour, ColourSpace};

/// Number of steps per edge of the cube.  The faces hold the extremes
/// of every space used here but the interior is also sampled, more
/// coarsely, in case the conversion is not monotone.
const FACE_STEPS: usize = 256;
const INTERIOR_STEPS: usize = 32;

type Extremes = [(f64, f64); 3];

fn update(ext: &mut Extremes, space: ColourSpace, c: &Colour) {
    for (e, x) in ext.iter_mut().zip(c.to_space(space)) {
        if x < e.0 { e.0 = x }
        if x > e.1 { e.1 = x }
    }
}

fn sweep(space: ColourSpace) -> Extremes {
    let mut ext = [(f64::INFINITY, f64::NEG_INFINITY); 3];
    let n = FACE_STEPS as f64;
    for i in 0 ..= FACE_STEPS {
        for j in 0 ..= FACE_STEPS {
            let (u, v) = (i as f64 / n, j as f64 / n);
            for fixed in [0., 1.] {
                update(&mut ext, space, &Colour::new(fixed, u, v));
                update(&mut ext, space, &Colour::new(u, fixed, v));
                update(&mut ext, space, &Colour::new(u, v, fixed));
            }
        }
    }
    let n = INTERIOR_STEPS as f64;
    for r in 1 .. INTERIOR_STEPS {
        for g in 1 .. INTERIOR_STEPS {
            for b in 1 .. INTERIOR_STEPS {
                let c = Colour::new(r as f64 / n, g as f64 / n, b as f64 / n);
                update(&mut ext, space, &c);
            }
        }
    }
    if let Some(h) = space.hue_axis() {
        ext[h] = (0., 360.);
    }
    // Saturation and lightness are percentages; the sweep overshoots
    // 100 by rounding only.
    if space == ColourSpace::Hsluv {
        ext[1] = (0., 100.);
        ext[2] = (0., 100.);
    }
    ext
}

fn round(x: f64) -> f64 {
    let x = (x * 1e4).round() / 1e4;
    if x == 0. { 0. } else { x } // No "-0.0"
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut fh = BufWriter::new(File::create("../src/limits.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;\n\
                  use crate::ColourSpace;\n\n\
                  /// Extremes of the sRGB cube in every colour space.  \
                  Hue axes span\n\
                  /// the full circle.\n\
                  pub(crate) fn table(space: ColourSpace) -> SpaceLimits {{\n    \
                  use ColourSpace::*;\n    \
                  match space {{",
             env::args().next().unwrap_or_default())?;
    for space in ColourSpace::ALL {
        let e = sweep(space);
        let axes = format!("({:?}, {:?}), ({:?}, {:?}), ({:?}, {:?})",
                           round(e[0].0), round(e[0].1),
                           round(e[1].0), round(e[1].1),
                           round(e[2].0), round(e[2].1));
        let line = format!("        {space:?} => SpaceLimits::new({axes}),");
        if line.len() <= 79 {
            writeln!(fh, "{line}")?;
        } else {
            writeln!(fh, "        {space:?} => SpaceLimits::new(\n            \
                          {axes}),")?;
        }
    }
    writeln!(fh, "    }}\n}}\n\n\
                  lazy_static! {{\n  \
                  pub(crate) static ref REGISTRY: Vec<SpaceLimits> =\n    \
                  ColourSpace::ALL.iter().map(|&s| table(s)).collect();\n\
                  }}")?;
    Ok(())
}
