//! colour-atlas - explore colour spaces from the command line.

use std::{io::{self, BufRead, Write},
          path::PathBuf,
          time::Duration};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use colour_atlas::{composite, limits, Arrangement, ArrangeOptions, Colour,
                   ColourSpace, Deficiency, GradientOptions, Strategy};

#[derive(Parser)]
#[command(name = "colour-atlas")]
#[command(author, version, about = "Colour space lattices and gradients")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a grid of gradients, one row per colour space
    Gradients(GradientsArgs),
    /// Arrange a colour lattice in a colour space and print positions
    Lattice(LatticeArgs),
    /// Read hex colours from stdin and show them in every space
    Inspect,
    /// List the colour spaces and the limits of the sRGB gamut
    Spaces,
}

#[derive(Args)]
struct GradientsArgs {
    /// Output PNG file
    #[arg(short, long)]
    output: PathBuf,

    /// Comma separated colours of one gradient (may be repeated)
    #[arg(short, long = "points", value_parser = parse_points)]
    points: Vec<Points>,

    /// Width of each gradient
    #[arg(long, default_value_t = 600)]
    width: u32,

    /// Height of each gradient
    #[arg(long, default_value_t = 60)]
    height: u32,

    /// Make out of gamut columns transparent
    #[arg(long)]
    transparent: bool,

    /// Also show the gradients in SPACE as seen with each deficiency
    #[arg(long, value_name = "SPACE", value_parser = parse_space)]
    simulate: Option<ColourSpace>,
}

#[derive(Args)]
struct LatticeArgs {
    /// Colour space to arrange the lattice in
    #[arg(short, long, default_value = "RGB", value_parser = parse_space)]
    space: ColourSpace,

    /// Samples per axis
    #[arg(long, default_value_t = 16)]
    size: usize,

    /// Number of steps (0 snaps the samples to their targets)
    #[arg(long, default_value_t = 0)]
    steps: usize,

    /// Seconds elapsed between two steps
    #[arg(long, default_value_t = 0.1)]
    dt: f64,

    /// Print at most this many samples
    #[arg(long, default_value_t = 20)]
    limit: usize,
}

fn parse_space(s: &str) -> Result<ColourSpace, String> {
    s.parse().map_err(|e: colour_atlas::Error| e.to_string())
}

/// The colours of one gradient.
#[derive(Clone)]
struct Points(Vec<Colour>);

fn parse_points(s: &str) -> Result<Points, String> {
    s.split(',').map(|c| Colour::from_hex(c.trim()))
        .collect::<Result<_, _>>()
        .map(Points)
        .map_err(|e| e.to_string())
}

fn default_points() -> Vec<Vec<Colour>> {
    vec![vec![Colour::new(1., 0., 0.), Colour::new(0., 0., 1.)],
         vec![Colour::new(0., 0., 0.), Colour::new(1., 1., 1.)],
         vec![Colour::new(1., 1., 0.), Colour::new(0.5, 0., 1.)]]
}

fn gradients(args: GradientsArgs) -> Result<()> {
    let points = if args.points.is_empty() { default_points() }
                 else { args.points.into_iter().map(|p| p.0).collect() };
    let mut strategies: Vec<Strategy> =
        ColourSpace::ALL.iter().map(|&s| Strategy::Space(s)).collect();
    if let Some(space) = args.simulate {
        strategies.extend(Deficiency::ALL.iter().map(|&deficiency| {
            Strategy::Simulated { space, deficiency }
        }));
    }
    let options = GradientOptions::new()
        .width(args.width)
        .height(args.height)
        .transparent_out_of_gamut(args.transparent);
    let grid = composite::render_grid(&points, &strategies, &options)
        .context("Failed to draw the gradients")?;
    grid.write_png(&args.output)
        .with_context(|| format!("Failed to write {}",
                                 args.output.display()))?;
    info!(gradients = points.len() * strategies.len(), "done");
    Ok(())
}

fn lattice(args: LatticeArgs) -> Result<()> {
    let options = ArrangeOptions::new().lattice_size(args.size);
    let mut arrangement = Arrangement::starting_at(options, args.space)?;
    if args.steps == 0 {
        arrangement.snap();
    } else {
        let dt = Duration::try_from_secs_f64(args.dt)
            .context("Invalid --dt")?;
        for _ in 0 .. args.steps {
            arrangement.step(dt, None);
        }
    }
    let out = io::stdout();
    let mut out = out.lock();
    writeln!(out, "{}  (camera at {:.2}, looking at {:.2})",
             arrangement.space_name(), arrangement.camera().position,
             arrangement.camera().look_at)?;
    for v in arrangement.views().take(args.limit) {
        let c = v.colour;
        writeln!(out, "{:5}  #{:02x}{:02x}{:02x}  ({:8.4}, {:8.4}, {:8.4})",
                 v.index, c.r, c.g, c.b,
                 v.position.x, v.position.y, v.position.z)?;
    }
    Ok(())
}

fn inspect() -> Result<()> {
    let stdin = io::stdin();
    let mut out = io::stdout();
    let mut previous: Option<Colour> = None;
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() { continue }
        let c = match Colour::from_hex(line) {
            Ok(c) => c,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                continue
            }
        };
        writeln!(out, "{}{}", c.hex(),
                 if c.is_in_display_gamut() { "" } else { " (out of gamut)" })?;
        for space in ColourSpace::ALL {
            let [a, b, d] = c.to_space(space);
            writeln!(out, "  {:<10} {:>12.4} {:>12.4} {:>12.4}",
                     space.name(), a, b, d)?;
        }
        if let Some(p) = previous {
            writeln!(out, "  CIEDE2000 from {}: {:.4}", p.hex(),
                     c.difference(&p))?;
        }
        previous = Some(c);
    }
    Ok(())
}

fn spaces() -> Result<()> {
    let out = io::stdout();
    let mut out = out.lock();
    for space in ColourSpace::ALL {
        write!(out, "{:>2} {:<10}", space.index(), space.name())?;
        let lim = limits(space);
        for (name, axis) in space.axes().iter().zip(&lim.axes) {
            write!(out, "  {name} [{}, {}]", axis.min, axis.max)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Gradients(args) => gradients(args),
        Commands::Lattice(args) => lattice(args),
        Commands::Inspect => inspect(),
        Commands::Spaces => spaces(),
    }
}
