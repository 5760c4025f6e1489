use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::error::{OrbitmapError, OrbitmapResult},
    render::ImageRGBA,
};

/// Write an image to disk, inferring the format from the path extension.
///
/// PNG and JPEG are supported; JPEG output is flattened to RGB8 since the
/// format carries no alpha channel. The parent directory is created if
/// missing. IO and encoder failures are fatal and carry the offending path.
pub fn save_image(image: &ImageRGBA, path: &Path) -> OrbitmapResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let format = image::ImageFormat::from_path(path).map_err(|_| {
        OrbitmapError::encode(format!(
            "unsupported output extension for '{}' (use .png or .jpg)",
            path.display()
        ))
    })?;

    match format {
        image::ImageFormat::Png => image::save_buffer_with_format(
            path,
            &image.data,
            image.width,
            image.height,
            image::ColorType::Rgba8,
            format,
        ),
        image::ImageFormat::Jpeg => {
            let rgb = flatten_to_rgb8(&image.data);
            image::save_buffer_with_format(
                path,
                &rgb,
                image.width,
                image.height,
                image::ColorType::Rgb8,
                format,
            )
        }
        other => {
            return Err(OrbitmapError::encode(format!(
                "unsupported output format {other:?} for '{}' (use .png or .jpg)",
                path.display()
            )));
        }
    }
    .map_err(|e| OrbitmapError::encode(format!("write '{}': {e}", path.display())))
}

fn flatten_to_rgb8(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    rgb
}
