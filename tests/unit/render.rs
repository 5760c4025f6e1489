use super::*;
use crate::{Canvas, Region, generate_field};

fn small_field() -> IterationField {
    let region = Region::new(-2.0, 1.0, -1.5, 1.5).unwrap();
    generate_field(region, Canvas::new(8, 6).unwrap(), 25).unwrap()
}

#[test]
fn output_matches_field_dimensions() {
    let field = small_field();
    let img = colorize(&field, Palette::Twilight);
    assert_eq!(img.width, 8);
    assert_eq!(img.height, 6);
    assert_eq!(img.data.len(), 8 * 6 * 4);
}

#[test]
fn output_is_fully_opaque() {
    let img = colorize(&small_field(), Palette::Hsl);
    assert!(img.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn interior_counts_use_the_interior_color() {
    // A window deep inside the main cardioid saturates every pixel.
    let region = Region::new(-0.01, 0.01, -0.01, 0.01).unwrap();
    let field = generate_field(region, Canvas::new(4, 4).unwrap(), 30).unwrap();
    let img = colorize(&field, Palette::Grayscale);
    assert!(img.data.chunks_exact(4).all(|px| px[..3] == [0, 0, 0]));
}

#[test]
fn colorize_is_deterministic() {
    let field = small_field();
    assert_eq!(colorize(&field, Palette::Twilight), colorize(&field, Palette::Twilight));
}
