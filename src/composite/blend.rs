use crate::foundation::error::{InkdateError, InkdateResult};
use crate::foundation::math::mul_div255_u8;

pub(crate) type PremulRgba8 = [u8; 4];

/// Source-over for one premultiplied pixel.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// A premultiplied RGBA8 buffer with its dimensions.
#[derive(Clone, Copy, Debug)]
pub(crate) struct PremulView<'a> {
    pub(crate) data: &'a [u8],
    pub(crate) width: u32,
    pub(crate) height: u32,
}

/// Composite `src` over `dst` with its top-left corner at `(x, y)`, clipped to `dst`.
///
/// Both buffers are premultiplied. Returns the number of destination pixels visited.
pub(crate) fn blit_over(
    dst: &mut [u8],
    dst_w: u32,
    dst_h: u32,
    src: PremulView<'_>,
    x: i64,
    y: i64,
) -> InkdateResult<usize> {
    if dst.len() != (dst_w as usize) * (dst_h as usize) * 4
        || src.data.len() != (src.width as usize) * (src.height as usize) * 4
    {
        return Err(InkdateError::render(
            "blit_over expects tightly packed rgba8 buffers",
        ));
    }

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + i64::from(src.width)).min(i64::from(dst_w));
    let y1 = (y + i64::from(src.height)).min(i64::from(dst_h));
    if x0 >= x1 || y0 >= y1 {
        return Ok(0);
    }

    let mut visited = 0usize;
    for dy in y0..y1 {
        let sy = (dy - y) as usize;
        for dx in x0..x1 {
            let sx = (dx - x) as usize;
            let si = (sy * src.width as usize + sx) * 4;
            let di = (dy as usize * dst_w as usize + dx as usize) * 4;
            let s = [src.data[si], src.data[si + 1], src.data[si + 2], src.data[si + 3]];
            let d = [dst[di], dst[di + 1], dst[di + 2], dst[di + 3]];
            dst[di..di + 4].copy_from_slice(&over(d, s));
            visited += 1;
        }
    }
    Ok(visited)
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
