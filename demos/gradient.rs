use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use colour_atlas::{Colour, ColourSpace, Deficiency, Interpolation, Strategy};

type Err = Box<dyn Error>;

fn table_of_colours(fh: &mut impl Write, colours: &[Colour],
                    width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for c in colours {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.hex())?;
    }
    writeln!(fh, "<td rowspan=\"2\" style=\"padding-left: 7px\">\
                  {comment}</td></tr><tr>")?;
    for c in colours {
        let c = c.simulate(Deficiency::Achromatopsia);
        writeln!(fh, "  <td style=\"width: {width}px; height: 12px; \
                      background-color: {}\"></td>",
                 c.hex())?;
    }
    writeln!(fh, "</tr></table><br/>")?;
    Ok(())
}

fn gradient(fh: &mut impl Write, strategy: &impl Interpolation,
            c0: &str, c1: &str, n: usize, width: u32) -> Result<(), Err> {
    let c0 = Colour::from_hex(c0)?;
    let c1 = Colour::from_hex(c1)?;
    let colours: Vec<_> = strategy.range(&c0, &c1, n).map(|(_, c)| c)
        .collect();
    table_of_colours(fh, &colours, width, &strategy.label())
}

fn main() -> Result<(), Err> {
    let mut fh = BufWriter::new(File::create("gradient.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>colour-atlas: test {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;
    for (c0, c1) in [("#5e0063", "#ffebaa"), ("#ff0000", "#0000ff"),
                     ("#ff0000", "#00ff00"), ("#000000", "#ffffff")] {
        writeln!(fh, "<h3>{c0} → {c1}</h3>")?;
        gradient(&mut fh, &ColourSpace::Rgb, c0, c1, 10, 43)?;
        for space in ColourSpace::ALL {
            gradient(&mut fh, &space, c0, c1, 150, 2)?;
        }
    }

    writeln!(fh, "<h3>Vision deficiencies</h3>")?;
    for deficiency in Deficiency::ALL {
        let s = Strategy::Simulated { space: ColourSpace::Oklab,
                                      deficiency };
        gradient(&mut fh, &s, "#ff0000", "#00ff00", 150, 2)?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
