use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

#[test]
fn plan_for_fixed_seed_is_pinned() {
    let mut rng = SeededSequence::new(42);
    let plan = JitterPlan::sample("Jan", &JitterConfig::default(), &mut rng);

    assert!(close(plan.string.rotation_deg, 0.41153794853016734));
    assert!(close(plan.string.size_scale, 1.0079274997115135));
    assert!(close(plan.string.offset_x, -0.3402357501909137));
    assert!(close(plan.string.offset_y, 1.6622235495597124));

    let expected = [
        ('J', [-0.3085398841649294, -0.8998830113559961, 0.9126083696028218, 0.30872851703315973, 0.06740381056442857]),
        ('a', [0.8596161901950836, -0.45316203171387315, 0.9274292374495416, 0.06196688814088702, -0.15078942887485028]),
        ('n', [1.6784198377281427, -0.6674089962616563, 0.9487565763527528, -0.1715332381427288, -0.18882658453658224]),
    ];
    assert_eq!(plan.glyphs.len(), expected.len());
    for (g, (ch, want)) in plan.glyphs.iter().zip(expected) {
        assert_eq!(g.ch, ch);
        assert!(close(g.baseline_dy, want[0]));
        assert!(close(g.spacing, want[1]));
        assert!(close(g.opacity, want[2]));
        assert!(close(g.stroke_dx, want[3]));
        assert!(close(g.stroke_dy, want[4]));
    }
    assert_eq!(rng.draws(), 4 + 5 * 3);
}

#[test]
fn defaults_stay_in_bounds_over_many_draws() {
    let config = JitterConfig::default();
    let mut rng = SeededSequence::new(0x1b70_7d44);
    for _ in 0..10_000 {
        let plan = JitterPlan::sample("5", &config, &mut rng);
        assert!((-2.5..=2.5).contains(&plan.string.rotation_deg));
        assert!((0.8..=1.2).contains(&plan.string.size_scale));
        assert!(plan.string.offset_x.abs() <= 5.0);
        assert!(plan.string.offset_y.abs() <= 3.0);
        let g = plan.glyphs[0];
        assert!((0.85..=1.0).contains(&g.opacity));
        assert!(g.baseline_dy.abs() <= 2.0);
        assert!((-1.0..=2.0).contains(&g.spacing));
        assert!(g.stroke_dx.abs() <= 0.5);
        assert!(g.stroke_dy.abs() <= 0.3);
    }
}

#[test]
fn intensity_scales_stroke_noise_only() {
    let calm = JitterConfig {
        intensity: 0.0,
        ..JitterConfig::default()
    };
    let mut a = SeededSequence::new(9);
    let mut b = SeededSequence::new(9);
    let still = JitterPlan::sample("ab", &calm, &mut a);
    let normal = JitterPlan::sample("ab", &JitterConfig::default(), &mut b);

    assert_eq!(still.string, normal.string);
    for (s, n) in still.glyphs.iter().zip(&normal.glyphs) {
        assert_eq!(s.stroke_dx, 0.0);
        assert_eq!(s.stroke_dy, 0.0);
        assert_eq!(s.opacity, n.opacity);
    }
    assert_eq!(a.draws(), b.draws());
}

#[test]
fn multibyte_text_gets_one_entry_per_char() {
    let mut rng = SeededSequence::new(1);
    let plan = JitterPlan::sample("5 é", &JitterConfig::default(), &mut rng);
    assert_eq!(plan.glyphs.len(), 3);
    assert_eq!(plan.glyphs[2].ch, 'é');
}

#[test]
fn sanitize_orders_spans_and_clamps() {
    let wild = JitterConfig {
        rotation_deg: Span(90.0, -90.0),
        opacity: Span(0.5, 3.0),
        intensity: f64::INFINITY,
        texture_noise: -4.0,
        ..JitterConfig::default()
    }
    .sanitized();
    assert_eq!(wild.rotation_deg, Span(-45.0, 45.0));
    assert_eq!(wild.opacity, Span(0.5, 1.0));
    assert_eq!(wild.intensity, 1.0);
    assert_eq!(wild.texture_noise, 0.0);
    assert_eq!(JitterConfig::default().sanitized(), JitterConfig::default());
}
