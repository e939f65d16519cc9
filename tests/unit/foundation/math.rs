use super::*;

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255_u8(255, 255), 255);
    assert_eq!(mul_div255_u8(128, 255), 128);
    assert_eq!(mul_div255_u8(100, 128), ((100u16 * 128 + 127) / 255) as u8);
    assert_eq!(mul_div255_u16(0, 200), 0);
}

#[test]
fn premultiply_clears_transparent_color() {
    let mut px = vec![10, 20, 30, 0, 200, 100, 50, 255];
    premultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[0, 0, 0, 0]);
    assert_eq!(&px[4..], &[200, 100, 50, 255]);
}

#[test]
fn unpremultiply_recovers_close_values() {
    let mut px = vec![200, 100, 50, 128];
    let original = px.clone();
    premultiply_rgba8_in_place(&mut px);
    unpremultiply_rgba8_in_place(&mut px);
    for i in 0..3 {
        assert!((i32::from(px[i]) - i32::from(original[i])).abs() <= 2);
    }
    assert_eq!(px[3], 128);
}
