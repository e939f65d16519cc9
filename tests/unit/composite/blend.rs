use super::*;

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    assert_eq!(over(dst, [255, 255, 255, 0]), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    assert_eq!(over([0, 0, 0, 255], [255, 0, 0, 255]), [255, 0, 0, 255]);
}

#[test]
fn over_dst_transparent_returns_src() {
    let src = [100, 110, 120, 200];
    assert_eq!(over([0, 0, 0, 0], src), src);
}

#[test]
fn over_half_alpha_on_opaque() {
    // 50% black over opaque white.
    assert_eq!(over([255, 255, 255, 255], [0, 0, 0, 128]), [127, 127, 127, 255]);
}

#[test]
fn blit_clips_to_destination() {
    let mut dst = vec![0u8; 4 * 4 * 4];
    let src = [9u8, 9, 9, 255].repeat(3 * 3);
    let view = PremulView {
        data: &src,
        width: 3,
        height: 3,
    };

    assert_eq!(blit_over(&mut dst, 4, 4, view, 2, 2).unwrap(), 4);
    assert_eq!(blit_over(&mut dst, 4, 4, view, -2, -2).unwrap(), 1);
    assert_eq!(blit_over(&mut dst, 4, 4, view, 10, 0).unwrap(), 0);

    let px = |x: usize, y: usize| dst[(y * 4 + x) * 4 + 3];
    assert_eq!(px(0, 0), 255);
    assert_eq!(px(1, 1), 0);
    assert_eq!(px(3, 3), 255);
    assert_eq!(px(2, 2), 255);
}

#[test]
fn blit_rejects_mismatched_buffers() {
    let mut dst = vec![0u8; 8];
    let view = PremulView {
        data: &[0u8; 4],
        width: 2,
        height: 2,
    };
    assert!(blit_over(&mut dst, 2, 1, view, 0, 0).is_err());
}
