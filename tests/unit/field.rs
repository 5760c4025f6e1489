use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn region(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Region {
    Region::new(min_x, max_x, min_y, max_y).unwrap()
}

#[test]
fn corners_map_exactly_to_region_bounds() {
    let r = region(-2.0, 1.0, -1.5, 1.5);
    let field = generate_field(r, canvas(4, 4), 50).unwrap();

    assert_eq!(field.width(), 4);
    assert_eq!(field.height(), 4);
    assert_eq!(field.as_slice().len(), 16);
    assert_eq!(
        field.get(0, 0),
        escape_iterations(Complex::new(-2.0, -1.5), 50)
    );
    assert_eq!(
        field.get(3, 3),
        escape_iterations(Complex::new(1.0, 1.5), 50)
    );
}

#[test]
fn two_by_two_samples_only_the_corners() {
    // Pixel (0,0) maps to (-1,-1) and pixel (1,1) to (1,1); both corners sit
    // outside the set body and must escape well before the cap.
    let field = generate_field(region(-1.0, 1.0, -1.0, 1.0), canvas(2, 2), 10).unwrap();
    assert_eq!(
        field.get(0, 0),
        escape_iterations(Complex::new(-1.0, -1.0), 10)
    );
    assert_eq!(
        field.get(1, 1),
        escape_iterations(Complex::new(1.0, 1.0), 10)
    );
    assert!(field.get(0, 0) < 10);
    assert!(field.get(1, 1) < 10);
}

#[test]
fn entries_never_exceed_the_cap() {
    let field = generate_field(region(-2.0, 1.0, -1.5, 1.5), canvas(16, 12), 37).unwrap();
    assert!(field.as_slice().iter().all(|&n| n <= 37));
    assert_eq!(field.max_iter(), 37);
}

#[test]
fn generation_is_deterministic() {
    let r = region(-0.8, -0.7, 0.1, 0.2);
    let a = generate_field(r, canvas(32, 24), 200).unwrap();
    let b = generate_field(r, canvas(32, 24), 200).unwrap();
    assert_eq!(a, b);
}

#[test]
fn interior_region_is_all_interior() {
    let r = region(-0.01, 0.01, -0.01, 0.01);
    let (field, stats) =
        generate_field_with_stats(r, canvas(8, 8), 30, &FieldThreading::default()).unwrap();
    assert_eq!(stats.pixels_total, 64);
    assert_eq!(stats.interior, 64);
    assert!(field.as_slice().iter().all(|&n| n == 30));
}

#[test]
fn degenerate_inputs_are_rejected() {
    let r = Region {
        min_x: 1.0,
        max_x: 1.0,
        min_y: -1.0,
        max_y: 1.0,
    };
    assert!(generate_field(r, canvas(4, 4), 10).is_err());

    let c = Canvas {
        width: 1,
        height: 4,
    };
    assert!(generate_field(region(-1.0, 1.0, -1.0, 1.0), c, 10).is_err());
}

#[test]
fn zero_worker_threads_is_rejected() {
    let threading = FieldThreading {
        parallel: true,
        threads: Some(0),
    };
    let err = generate_field_with_stats(
        region(-1.0, 1.0, -1.0, 1.0),
        canvas(4, 4),
        10,
        &threading,
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn zero_cap_yields_a_zero_field() {
    let (field, stats) = generate_field_with_stats(
        region(-1.0, 1.0, -1.0, 1.0),
        canvas(4, 4),
        0,
        &FieldThreading::default(),
    )
    .unwrap();
    assert!(field.as_slice().iter().all(|&n| n == 0));
    // With a zero cap every entry equals the cap, so everything counts as interior.
    assert_eq!(stats.interior, 16);
}
