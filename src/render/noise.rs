use crate::seed::sequence::SeededSequence;

/// Perturb ink density on a straight-alpha RGBA8 buffer.
///
/// Pixels are visited in row-major order. Each pixel with non-zero alpha draws one value in
/// `[-amplitude, amplitude)` from `rng`, rounds it, and adds it to R, G and B with clamping.
/// Alpha is never modified and fully transparent pixels draw nothing. Returns the number of
/// pixels touched.
pub fn apply_texture_noise(rgba: &mut [u8], amplitude: f64, rng: &mut SeededSequence) -> usize {
    let amplitude = if amplitude.is_finite() {
        amplitude.abs()
    } else {
        0.0
    };
    let mut touched = 0usize;
    for px in rgba.chunks_exact_mut(4) {
        if px[3] == 0 {
            continue;
        }
        let delta = rng.range(-amplitude, amplitude).round() as i16;
        for c in &mut px[..3] {
            *c = (i16::from(*c) + delta).clamp(0, 255) as u8;
        }
        touched += 1;
    }
    touched
}

#[cfg(test)]
#[path = "../../tests/unit/render/noise.rs"]
mod tests;
