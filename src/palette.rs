/// Deterministic mapping from escape counts to colors.
///
/// A palette is realized as a lookup table of `max_iter + 1` RGB entries, one
/// per possible count; index `max_iter` is the interior color. The mapping is
/// a pure function of `(palette, max_iter)`, so renders are reproducible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Cyclic dark-blue-light-red gradient; interior maps to the dark
    /// cycle endpoint, so counts near 0 and near the cap stay distinguishable.
    #[default]
    Twilight,
    /// Hue ramp `sqrt(n / max_iter) * 360` at full saturation, interior black.
    Hsl,
    /// Linear gray ramp, interior black.
    Grayscale,
}

/// Anchor stops for the cyclic twilight gradient (position, rgb).
/// First and last stop share a color so the gradient wraps cleanly.
const TWILIGHT_STOPS: [(f64, [u8; 3]); 5] = [
    (0.0, [48, 20, 76]),
    (0.25, [85, 114, 190]),
    (0.5, [229, 220, 226]),
    (0.75, [186, 88, 69]),
    (1.0, [48, 20, 76]),
];

impl Palette {
    /// Precompute the `max_iter + 1` entry lookup table for this palette.
    pub fn build_lut(self, max_iter: u32) -> Vec<[u8; 3]> {
        let len = max_iter as usize + 1;
        let mut lut = Vec::with_capacity(len);
        for n in 0..=max_iter {
            if n == max_iter {
                lut.push(self.interior_color());
            } else {
                let t = f64::from(n) / f64::from(max_iter);
                lut.push(self.escape_color(t));
            }
        }
        lut
    }

    /// Color for counts below the cap, `t` in `[0, 1)`.
    fn escape_color(self, t: f64) -> [u8; 3] {
        match self {
            Self::Twilight => sample_stops(&TWILIGHT_STOPS, t),
            Self::Hsl => hsl_to_rgb(t.sqrt() * 360.0, 1.0, 0.5),
            Self::Grayscale => {
                let v = (t * 255.0).round() as u8;
                [v, v, v]
            }
        }
    }

    /// Color for counts that hit the cap.
    fn interior_color(self) -> [u8; 3] {
        match self {
            Self::Twilight => TWILIGHT_STOPS[0].1,
            Self::Hsl | Self::Grayscale => [0, 0, 0],
        }
    }
}

/// Piecewise-linear interpolation over sorted gradient stops.
fn sample_stops(stops: &[(f64, [u8; 3])], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    for pair in stops.windows(2) {
        let (t0, lo) = pair[0];
        let (t1, hi) = pair[1];
        if t <= t1 {
            let local = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            return [
                lerp_u8(lo[0], hi[0], local),
                lerp_u8(lo[1], hi[1], local),
                lerp_u8(lo[2], hi[2], local),
            ];
        }
    }
    stops[stops.len() - 1].1
}

fn lerp_u8(lo: u8, hi: u8, t: f64) -> u8 {
    (f64::from(lo) + (f64::from(hi) - f64::from(lo)) * t).round() as u8
}

/// Convert HSL (`h` in degrees, `s`/`l` in `[0, 1]`) to RGB8.
fn hsl_to_rgb(h: f64, s: f64, l: f64) -> [u8; 3] {
    if s == 0.0 {
        let v = (l * 255.0).round() as u8;
        return [v, v, v];
    }

    fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    let h = h / 360.0;
    [
        (hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0).round() as u8,
        (hue_to_channel(p, q, h) * 255.0).round() as u8,
        (hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
#[path = "../tests/unit/palette.rs"]
mod tests;
