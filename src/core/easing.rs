// Easing curves used by particle animation.

/// Quadratic ease-in-out, equivalent to the common `power1.inOut` curve.
///
/// Input is clamped to \[0, 1\]; output is 0 at 0, 0.5 at 0.5 and 1 at 1.
#[inline]
pub fn power1_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * 0.5
    }
}

#[inline]
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}
