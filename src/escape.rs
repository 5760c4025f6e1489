use crate::foundation::core::Complex;

/// Count Mandelbrot iterations before the orbit of `c` escapes.
///
/// Starting from `z = 0`, applies `z <- z^2 + c` while `|z| <= 2` and the
/// iteration count is below `max_iter`, then returns the count. The result is
/// always in `[0, max_iter]`; the orbit of any point with `|z| > 2` is
/// guaranteed to diverge, so `max_iter` means "never escaped".
///
/// Deterministic for a given `(c, max_iter)` and free of side effects, which
/// is what lets the field generator run pixels in any order.
pub fn escape_iterations(c: Complex, max_iter: u32) -> u32 {
    // Closed-form interior checks: these points never escape, so the loop
    // would always run to the cap. Skipping it changes no observable result.
    if in_cardioid(c) || in_period2_bulb(c) {
        return max_iter;
    }

    let mut z = Complex::ZERO;
    let mut n = 0;
    while z.norm_sq() <= 4.0 && n < max_iter {
        z = Complex::new(
            z.re * z.re - z.im * z.im + c.re,
            2.0 * z.re * z.im + c.im,
        );
        n += 1;
    }
    n
}

/// `true` if `c` lies inside the main cardioid.
fn in_cardioid(c: Complex) -> bool {
    let im2 = c.im * c.im;
    let q = (c.re - 0.25) * (c.re - 0.25) + im2;
    q * (q + (c.re - 0.25)) <= 0.25 * im2
}

/// `true` if `c` lies inside the period-2 bulb.
fn in_period2_bulb(c: Complex) -> bool {
    (c.re + 1.0) * (c.re + 1.0) + c.im * c.im <= 0.0625
}

#[cfg(test)]
#[path = "../tests/unit/escape.rs"]
mod tests;
