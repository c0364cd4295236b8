//! Assemble gradient images into larger canvases.

use rgb::RGBA8;
use tracing::debug;
use crate::{gradient, Canvas, Colour, Error, GradientImage, GradientOptions,
            Interpolation, Result};

/// Check that all `sizes` are equal and return the common one.
fn common_size(what: &str, sizes: impl Iterator<Item = (u32, u32)>)
               -> Result<(u32, u32)> {
    let mut common = None;
    for (k, s) in sizes.enumerate() {
        match common {
            None => common = Some(s),
            Some(c) if c != s => {
                return Err(Error::SizeMismatch(format!(
                    "{what} {k} is {}×{} while the first one is {}×{}",
                    s.0, s.1, c.0, c.1)))
            }
            Some(_) => (),
        }
    }
    common.ok_or_else(|| Error::DegenerateGeometry(
        format!("no {what} to assemble")))
}

/// Total extent of `count` pieces of extent `size` laid end to end.
fn span(what: &str, size: u32, count: usize) -> Result<u32> {
    u32::try_from(count).ok()
        .and_then(|n| size.checked_mul(n))
        .ok_or_else(|| Error::DegenerateGeometry(format!(
            "{count} {what}s of {size} pixels exceed the canvas limits")))
}

/// Stack `images` vertically: image `k` is placed at `y = k * height`.
pub fn stack_rows(images: &[GradientImage]) -> Result<Canvas> {
    let (w, h) = common_size(
        "image", images.iter().map(|i| (i.canvas().width(),
                                        i.canvas().height())))?;
    let height = span("row", h, images.len())?;
    let mut canvas = Canvas::new(w, height, RGBA8::default());
    for (k, img) in images.iter().enumerate() {
        canvas.blit(img.canvas(), 0, k as u32 * h);
    }
    debug!(rows = images.len(), width = w, height = canvas.height(),
           "stacked rows");
    Ok(canvas)
}

/// Put `columns` side by side: column `k` is placed at `x = k * width`.
pub fn stack_columns(columns: &[Canvas]) -> Result<Canvas> {
    let (w, h) = common_size(
        "column", columns.iter().map(|c| (c.width(), c.height())))?;
    let width = span("column", w, columns.len())?;
    let mut canvas = Canvas::new(width, h, RGBA8::default());
    for (k, col) in columns.iter().enumerate() {
        canvas.blit(col, k as u32 * w, 0);
    }
    debug!(columns = columns.len(), width = canvas.width(), height = h,
           "stacked columns");
    Ok(canvas)
}

/// Draw the gradient of every point set with every strategy, one
/// column per point set and one row per strategy.
pub fn render_grid<I>(point_sets: &[Vec<Colour>], strategies: &[I],
                      options: &GradientOptions) -> Result<Canvas>
where I: Interpolation {
    let mut columns = Vec::with_capacity(point_sets.len());
    for points in point_sets {
        let images = strategies.iter()
            .map(|s| gradient::draw(&s.label(), options, points, s))
            .collect::<Result<Vec<_>>>()?;
        columns.push(stack_rows(&images)?);
    }
    stack_columns(&columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ColourSpace;

    fn image(c: RGBA8, w: u32, h: u32) -> GradientImage {
        let opts = GradientOptions::new().width(w).height(h).no_label();
        let col = Colour::from_rgb255(c.r as f64, c.g as f64, c.b as f64);
        gradient::draw("", &opts, &[col, col], &ColourSpace::Rgb).unwrap()
    }

    #[test]
    fn rows_are_stacked_in_order() {
        let colours = [RGBA8::new(255, 0, 0, 255), RGBA8::new(0, 255, 0, 255),
                       RGBA8::new(0, 0, 255, 255)];
        let imgs: Vec<_> = colours.iter().map(|&c| image(c, 8, 5)).collect();
        let c = stack_rows(&imgs).unwrap();
        assert_eq!((c.width(), c.height()), (8, 15));
        for (k, &col) in colours.iter().enumerate() {
            let y = k as u32 * 5;
            assert_eq!(c.pixel(0, y), Some(col));
            assert_eq!(c.pixel(7, y + 4), Some(col));
        }
    }

    #[test]
    fn columns_are_placed_side_by_side() {
        let a = Canvas::new(3, 2, RGBA8::new(1, 1, 1, 255));
        let b = Canvas::new(3, 2, RGBA8::new(2, 2, 2, 255));
        let c = stack_columns(&[a, b]).unwrap();
        assert_eq!((c.width(), c.height()), (6, 2));
        assert_eq!(c.pixel(2, 1), Some(RGBA8::new(1, 1, 1, 255)));
        assert_eq!(c.pixel(3, 0), Some(RGBA8::new(2, 2, 2, 255)));
    }

    #[test]
    fn size_mismatch() {
        let imgs = [image(RGBA8::new(0, 0, 0, 255), 8, 5),
                    image(RGBA8::new(0, 0, 0, 255), 8, 6)];
        assert!(matches!(stack_rows(&imgs), Err(Error::SizeMismatch(_))));
        let cols = [Canvas::new(3, 2, RGBA8::default()),
                    Canvas::new(4, 2, RGBA8::default())];
        assert!(matches!(stack_columns(&cols), Err(Error::SizeMismatch(_))));
    }

    #[test]
    fn empty_input() {
        assert!(matches!(stack_rows(&[]), Err(Error::DegenerateGeometry(_))));
        assert!(matches!(stack_columns(&[]),
                         Err(Error::DegenerateGeometry(_))));
    }

    #[test]
    fn oversized_result_is_rejected() {
        // Zero-height columns allocate nothing.
        let wide = Canvas::new(u32::MAX / 2 + 1, 0, RGBA8::default());
        assert!(matches!(stack_columns(&[wide.clone(), wide]),
                         Err(Error::DegenerateGeometry(_))));
        assert!(matches!(span("row", 1 << 16, 1 << 16),
                         Err(Error::DegenerateGeometry(_))));
        assert_eq!(span("row", 60, 3).unwrap(), 180);
        assert_eq!(span("row", u32::MAX, 1).unwrap(), u32::MAX);
    }

    #[test]
    fn grid_dimensions() {
        let sets = vec![vec![Colour::new(1., 0., 0.), Colour::new(0., 0., 1.)],
                        vec![Colour::new(0., 0., 0.), Colour::new(1., 1., 1.),
                             Colour::new(0., 1., 0.)]];
        let strategies = [ColourSpace::Rgb, ColourSpace::Lab,
                          ColourSpace::Oklch];
        let opts = GradientOptions::new().width(40).height(6).no_label();
        let g = render_grid(&sets, &strategies, &opts).unwrap();
        assert_eq!((g.width(), g.height()), (80, 18));
        assert_eq!(g.pixel(0, 0), Some(RGBA8::new(255, 0, 0, 255)));
        assert_eq!(g.pixel(40, 17), Some(RGBA8::new(0, 0, 0, 255)));
        assert_eq!(g.pixel(79, 12), Some(RGBA8::new(0, 255, 0, 255)));
    }
}
