use crate::{field::IterationField, palette::Palette};

/// A rasterized frame: tightly packed row-major RGBA8, alpha always opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageRGBA {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGBA8 bytes, `width * height * 4` of them.
    pub data: Vec<u8>,
}

/// Rasterize an iteration field through a palette.
///
/// Builds the palette lookup table once and applies it per entry. Pure and
/// deterministic; the output dimensions always equal the field's.
pub fn colorize(field: &IterationField, palette: Palette) -> ImageRGBA {
    let lut = palette.build_lut(field.max_iter());
    let mut data = Vec::with_capacity(field.as_slice().len() * 4);
    for &n in field.as_slice() {
        let [r, g, b] = lut[n as usize];
        data.extend_from_slice(&[r, g, b, 255]);
    }
    ImageRGBA {
        width: field.width(),
        height: field.height(),
        data,
    }
}

#[cfg(test)]
#[path = "../tests/unit/render.rs"]
mod tests;
