use std::path::Path;

use crate::{
    encode::save_image,
    field::{FieldStats, FieldThreading, generate_field_with_stats},
    foundation::error::OrbitmapResult,
    job::RenderJob,
    render::{ImageRGBA, colorize},
};

/// Sample + colorize a job into pixels.
///
/// This is the primary one-shot API for producing an image from a
/// [`RenderJob`]; [`render_to_file`] adds the encode step.
pub fn render_image(job: &RenderJob, threading: &FieldThreading) -> OrbitmapResult<ImageRGBA> {
    render_image_with_stats(job, threading).map(|(image, _)| image)
}

/// Sample + colorize a job and return sampling stats alongside the pixels.
#[tracing::instrument(skip(job, threading))]
pub fn render_image_with_stats(
    job: &RenderJob,
    threading: &FieldThreading,
) -> OrbitmapResult<(ImageRGBA, FieldStats)> {
    job.validate()?;
    let (field, stats) = generate_field_with_stats(job.region, job.canvas, job.max_iter, threading)?;
    let image = colorize(&field, job.palette);
    Ok((image, stats))
}

/// Render a job and write the image to `path`.
///
/// The output format follows the path extension (see [`save_image`]).
/// Returns the sampling stats for the run.
#[tracing::instrument(skip(job, threading))]
pub fn render_to_file(
    job: &RenderJob,
    threading: &FieldThreading,
    path: &Path,
) -> OrbitmapResult<FieldStats> {
    let (image, stats) = render_image_with_stats(job, threading)?;
    save_image(&image, path)?;
    Ok(stats)
}
