//! Orbitmap computes Mandelbrot escape-time fields and rasterizes them to images.
//!
//! The crate turns a rectangular window of the complex plane ([`Region`]) into pixels
//! via a fixed three-stage pipeline:
//!
//! 1. **Sample**: `Region + Canvas + max_iter -> IterationField` (the escape-time
//!    evaluator and the pixel-to-plane mapping)
//! 2. **Colorize**: `IterationField + Palette -> ImageRGBA` (pure LUT application)
//! 3. **Encode**: `ImageRGBA -> PNG/JPEG` on disk (the only IO in the crate)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: sampling and colorizing are pure and stable for a
//!   given input; two identical runs produce bit-identical fields and pixels.
//! - **No IO in samplers**: file IO is confined to [`save_image`] and the CLI.
//! - **Sequential-by-default**: row-parallel sampling is available behind
//!   [`FieldThreading`], and must match the sequential output bit-for-bit.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod escape;
mod field;
mod foundation;
mod job;
mod palette;
mod pipeline;
mod render;

pub use encode::save_image;
pub use escape::escape_iterations;
pub use field::{
    FieldStats, FieldThreading, IterationField, generate_field, generate_field_with_stats,
};
pub use foundation::core::{Canvas, Complex, Region};
pub use foundation::error::{OrbitmapError, OrbitmapResult};
pub use job::RenderJob;
pub use palette::Palette;
pub use pipeline::{render_image, render_image_with_stats, render_to_file};
pub use render::{ImageRGBA, colorize};
