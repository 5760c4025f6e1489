use rayon::prelude::*;

use crate::{
    escape::escape_iterations,
    foundation::core::{Canvas, Complex, Region},
    foundation::error::{OrbitmapError, OrbitmapResult},
};

/// Escape-time counts for every pixel of a canvas, row-major.
///
/// Entries lie in `[0, max_iter]`. The field is fully populated before it is
/// handed out and never mutated afterwards; the colorize stage consumes it
/// read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IterationField {
    width: u32,
    height: u32,
    max_iter: u32,
    data: Vec<u32>,
}

impl IterationField {
    /// Field width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Field height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Iteration cap the field was generated with.
    pub fn max_iter(&self) -> u32 {
        self.max_iter
    }

    /// Escape count at pixel column `px`, row `py`.
    ///
    /// # Panics
    ///
    /// Panics if `px` or `py` is out of bounds.
    pub fn get(&self, px: u32, py: u32) -> u32 {
        assert!(px < self.width && py < self.height, "pixel out of bounds");
        self.data[py as usize * self.width as usize + px as usize]
    }

    /// All counts, row-major.
    pub fn as_slice(&self) -> &[u32] {
        &self.data
    }
}

/// Threading controls for field generation.
#[derive(Clone, Debug, Default)]
pub struct FieldThreading {
    /// Partition rows across a rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

/// Aggregated sampling counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldStats {
    /// Total pixels sampled.
    pub pixels_total: u64,
    /// Pixels that hit the iteration cap (treated as set interior).
    pub interior: u64,
}

/// Generate an escape-time field sequentially.
///
/// Convenience wrapper over [`generate_field_with_stats`] with default
/// threading; see there for the mapping contract.
pub fn generate_field(
    region: Region,
    canvas: Canvas,
    max_iter: u32,
) -> OrbitmapResult<IterationField> {
    generate_field_with_stats(region, canvas, max_iter, &FieldThreading::default())
        .map(|(field, _)| field)
}

/// Generate an escape-time field and return sampling stats.
///
/// Pixel `(px, py)` samples the plane point
///
/// ```text
/// real = min_x + (px / (width - 1)) * (max_x - min_x)
/// imag = min_y + (py / (height - 1)) * (max_y - min_y)
/// ```
///
/// so pixel `(0, 0)` maps to `(min_x, min_y)` and pixel
/// `(width - 1, height - 1)` maps to `(max_x, max_y)` exactly.
///
/// Every pixel is independent; in parallel mode rows are partitioned across a
/// rayon pool, each worker writing a disjoint row slice of the pre-allocated
/// buffer. Parallel and sequential output are bit-identical.
#[tracing::instrument(skip(threading))]
pub fn generate_field_with_stats(
    region: Region,
    canvas: Canvas,
    max_iter: u32,
    threading: &FieldThreading,
) -> OrbitmapResult<(IterationField, FieldStats)> {
    region.validate()?;
    canvas.validate()?;

    let width = canvas.width as usize;
    let mut data = vec![0u32; canvas.pixels() as usize];

    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            data.par_chunks_mut(width)
                .enumerate()
                .for_each(|(py, row)| sample_row(region, canvas, max_iter, py, row));
        });
    } else {
        for (py, row) in data.chunks_mut(width).enumerate() {
            sample_row(region, canvas, max_iter, py, row);
        }
    }

    let interior = data.iter().filter(|&&n| n == max_iter).count() as u64;
    let stats = FieldStats {
        pixels_total: data.len() as u64,
        interior,
    };
    tracing::debug!(
        pixels = stats.pixels_total,
        interior = stats.interior,
        "field generated"
    );

    let field = IterationField {
        width: canvas.width,
        height: canvas.height,
        max_iter,
        data,
    };
    Ok((field, stats))
}

fn sample_row(region: Region, canvas: Canvas, max_iter: u32, py: usize, row: &mut [u32]) {
    let imag = region.min_y + (py as f64 / f64::from(canvas.height - 1)) * region.height();
    for (px, slot) in row.iter_mut().enumerate() {
        let real = region.min_x + (px as f64 / f64::from(canvas.width - 1)) * region.width();
        *slot = escape_iterations(Complex::new(real, imag), max_iter);
    }
}

fn build_thread_pool(threads: Option<usize>) -> OrbitmapResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(OrbitmapError::validation(
            "field threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        OrbitmapError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../tests/unit/field.rs"]
mod tests;
