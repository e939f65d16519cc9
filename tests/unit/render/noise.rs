use super::*;

fn checker(width: usize, height: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            if (x + y) % 3 == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                out.extend_from_slice(&[120, 60, 250, ((x * 17 + y * 5) % 255 + 1) as u8]);
            }
        }
    }
    out
}

#[test]
fn transparent_pixels_and_alpha_are_untouched() {
    let before = checker(32, 8);
    let mut after = before.clone();
    let mut rng = SeededSequence::new(123);
    let touched = apply_texture_noise(&mut after, 8.0, &mut rng);

    let opaque = before.chunks_exact(4).filter(|p| p[3] != 0).count();
    assert_eq!(touched, opaque);
    assert_eq!(rng.draws(), opaque as u64);

    for (b, a) in before.chunks_exact(4).zip(after.chunks_exact(4)) {
        assert_eq!(b[3], a[3]);
        if b[3] == 0 {
            assert_eq!(b, a);
        } else {
            let d0 = i16::from(a[0]) - i16::from(b[0]);
            let d1 = i16::from(a[1]) - i16::from(b[1]);
            assert!(d0.abs() <= 8);
            assert_eq!(d0, d1);
        }
    }
}

#[test]
fn channels_clamp_at_the_edges() {
    let mut px = vec![0, 255, 3, 255];
    let mut rng = SeededSequence::new(5);
    for _ in 0..200 {
        apply_texture_noise(&mut px, 8.0, &mut rng);
        assert_eq!(px[3], 255);
    }
    // Same delta applied to every channel keeps the ordering between them.
    assert!(px[0] <= px[1]);
}

#[test]
fn same_seed_same_noise() {
    let mut a = checker(16, 16);
    let mut b = a.clone();
    apply_texture_noise(&mut a, 8.0, &mut SeededSequence::new(77));
    apply_texture_noise(&mut b, 8.0, &mut SeededSequence::new(77));
    assert_eq!(a, b);
}

#[test]
fn zero_amplitude_still_consumes_the_sequence() {
    let before = checker(4, 4);
    let mut after = before.clone();
    let mut rng = SeededSequence::new(1);
    let touched = apply_texture_noise(&mut after, 0.0, &mut rng);
    assert_eq!(before, after);
    assert_eq!(rng.draws(), touched as u64);
}
