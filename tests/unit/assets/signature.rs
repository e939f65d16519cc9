use std::io::Cursor;

use super::*;

fn temp_dir(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "inkdate_{name}_{}_{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_fn(w, h, |x, _| {
        if x % 2 == 0 {
            image::Rgba([10, 20, 30, 255])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn fit_size_preserves_aspect() {
    assert_eq!(fit_size(200.0, 100.0, 380, 120), Some((240, 120)));
    assert_eq!(fit_size(1000.0, 100.0, 380, 120), Some((380, 38)));
    assert_eq!(fit_size(10.0, 10.0, 50, 20), Some((20, 20)));
    assert_eq!(fit_size(0.0, 10.0, 50, 20), None);
    assert_eq!(fit_size(10.0, 10.0, 0, 20), None);
}

#[test]
fn raster_signature_is_fitted() {
    let sig = LoadedSignature::from_bytes("sig.png", &png_bytes(40, 20)).unwrap();
    assert_eq!(sig.intrinsic_size(), (40.0, 20.0));
    let fitted = sig.fitted(100, 30).unwrap();
    assert_eq!(fitted.dimensions(), (60, 30));
    assert!(fitted.pixels().any(|p| p[3] > 0));
}

#[test]
fn svg_signature_detected_by_content() {
    let svg = br##"  <svg xmlns="http://www.w3.org/2000/svg" width="30" height="10"><path d="M0 5 L30 5" stroke="#000" stroke-width="4"/></svg>"##;
    let sig = LoadedSignature::from_bytes("upload.bin", svg).unwrap();
    assert_eq!(sig.intrinsic_size(), (30.0, 10.0));
    let fitted = sig.fitted(60, 60).unwrap();
    assert_eq!(fitted.dimensions(), (60, 20));
    assert_eq!(fitted.get_pixel(30, 10)[3], 255);
}

#[test]
fn load_from_disk_and_missing_file() {
    let tmp = temp_dir("signature_load");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("sig.png");
    std::fs::write(&path, png_bytes(8, 4)).unwrap();

    let sig = load_signature(&path).unwrap();
    assert_eq!(sig.path(), path.as_path());

    let err = load_signature(&tmp.join("missing.png")).unwrap_err();
    assert!(matches!(err, InkdateError::Asset(_)));

    std::fs::remove_dir_all(&tmp).ok();
}

#[tokio::test]
async fn async_load_matches_sync_load() {
    let tmp = temp_dir("signature_load_async");
    std::fs::create_dir_all(&tmp).unwrap();
    let path = tmp.join("sig.png");
    std::fs::write(&path, png_bytes(8, 4)).unwrap();

    let a = load_signature_async(&path).await.unwrap();
    let b = load_signature(&path).unwrap();
    assert_eq!(a.fitted(16, 16).unwrap(), b.fitted(16, 16).unwrap());

    assert!(load_signature_async(&tmp.join("nope.svg")).await.is_err());
    std::fs::remove_dir_all(&tmp).ok();
}
