use super::*;

fn default_layout(sig: Placement, date: Placement) -> CompositeLayout {
    CompositeLayout::compute(Canvas::clamped(400, 200), 10, 0.6, sig, date)
}

#[test]
fn default_layout_splits_signature_and_date() {
    let l = default_layout(Placement::Top, Placement::Bottom);
    assert_eq!(
        l.signature,
        Slot {
            x: 10,
            y: 10,
            width: 380,
            height: 120
        }
    );
    assert_eq!(
        l.date,
        Slot {
            x: 10,
            y: 140,
            width: 380,
            height: 50
        }
    );
}

#[test]
fn swapped_and_shared_edges() {
    let swapped = default_layout(Placement::Bottom, Placement::Top);
    assert_eq!((swapped.signature.y, swapped.date.y), (70, 10));

    let both_top = default_layout(Placement::Top, Placement::Top);
    assert_eq!((both_top.signature.y, both_top.date.y), (10, 140));

    let both_bottom = default_layout(Placement::Bottom, Placement::Bottom);
    assert_eq!((both_bottom.signature.y, both_bottom.date.y), (70, 10));
}

#[test]
fn oversized_padding_is_clamped() {
    let l = CompositeLayout::compute(Canvas::clamped(100, 40), 500, 0.6, Placement::Top, Placement::Bottom);
    assert_eq!(l.signature.x, 12);
    assert_eq!(l.signature.width, 76);
    assert!(l.date.y + l.date.height <= 40);
    assert!(l.signature.y + l.signature.height <= 40);
}

#[test]
fn bitmap_composite_places_layers() {
    let l = default_layout(Placement::Top, Placement::Bottom);
    let sig = image::RgbaImage::from_pixel(100, 50, image::Rgba([0, 0, 255, 255]));
    let date_rgba = [255u8, 0, 0, 255].repeat(380 * 50);
    let date = RasterImage::encode(380, 50, date_rgba).unwrap();

    let out = composite_bitmap(&l, None, Some(&sig), &date).unwrap();
    assert_eq!((out.width, out.height), (400, 200));
    let px = |x: usize, y: usize| {
        let i = (y * 400 + x) * 4;
        [out.rgba[i], out.rgba[i + 1], out.rgba[i + 2], out.rgba[i + 3]]
    };
    // Signature centered in its slot: x 150..250, y 45..95.
    assert_eq!(px(200, 70), [0, 0, 255, 255]);
    assert_eq!(px(100, 70), [0, 0, 0, 0]);
    assert_eq!(px(200, 160), [255, 0, 0, 255]);
    assert_eq!(px(0, 0), [0, 0, 0, 0]);
}

#[test]
fn bitmap_composite_background() {
    let l = default_layout(Placement::Top, Placement::Bottom);
    let date = RasterImage::encode(380, 50, vec![0u8; 380 * 50 * 4]).unwrap();
    let white = Color::rgba(1.0, 1.0, 1.0, 1.0);
    let out = composite_bitmap(&l, Some(white), None, &date).unwrap();
    assert!(out.rgba.chunks_exact(4).all(|p| p == [255, 255, 255, 255]));
}

#[test]
fn markup_composite_embeds_both_layers() {
    let l = default_layout(Placement::Top, Placement::Bottom);
    let sig = image::RgbaImage::from_pixel(4, 2, image::Rgba([0, 0, 0, 255]));
    let date_svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="380" height="50"></svg>"#;
    let svg = composite_markup(&l, None, Some(&sig), date_svg).unwrap();
    assert!(svg.contains(r#"width="400" height="200""#));
    assert!(svg.contains("href=\"data:image/png;base64,"));
    assert!(svg.contains(r#"<image x="10" y="140" width="380" height="50" href="data:image/svg+xml;base64,"#));
    usvg::Tree::from_data(svg.as_bytes(), &usvg::Options::default()).unwrap();

    let date_only = composite_markup(&l, None, None, date_svg).unwrap();
    assert!(!date_only.contains("image/png"));
}
