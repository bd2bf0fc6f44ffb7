use crate::{
    color::Rgb8,
    error::{MenuError, MenuResult},
};

/// Fill a row-major RGBA8 buffer with a vertical two-color gradient.
///
/// Row `y` gets `start.lerp(end, y / height)` at full opacity, so row 0 is
/// exactly `start` and the interpolation is monotonic toward `end`. The last
/// row sits one step short of `end` (the divisor is `height`, matching the
/// asset definition).
pub fn fill_vertical(
    buf: &mut [u8],
    width: u32,
    height: u32,
    start: Rgb8,
    end: Rgb8,
) -> MenuResult<()> {
    if width == 0 || height == 0 {
        return Err(MenuError::validation(
            "gradient dimensions must be positive",
        ));
    }
    let expected = width as usize * height as usize * 4;
    if buf.len() != expected {
        return Err(MenuError::validation(format!(
            "gradient buffer is {} bytes, expected {expected}",
            buf.len()
        )));
    }

    let stride = width as usize * 4;
    for (y, row) in buf.chunks_exact_mut(stride).enumerate() {
        let ratio = y as f64 / f64::from(height);
        let c = start.lerp(end, ratio);
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&[c.r, c.g, c.b, 255]);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(buf: &[u8], width: u32, y: u32) -> &[u8] {
        let stride = width as usize * 4;
        &buf[y as usize * stride..][..stride]
    }

    #[test]
    fn rows_match_the_interpolation_formula() {
        let (w, h) = (4u32, 64u32);
        let start = Rgb8::new(0x66, 0x7e, 0xea);
        let end = Rgb8::new(0x76, 0x4b, 0xa2);
        let mut buf = vec![0u8; (w * h * 4) as usize];
        fill_vertical(&mut buf, w, h, start, end).unwrap();

        for y in 0..h {
            let expected = start.lerp(end, f64::from(y) / f64::from(h));
            for px in row(&buf, w, y).chunks_exact(4) {
                assert_eq!(px, [expected.r, expected.g, expected.b, 255]);
            }
        }
    }

    #[test]
    fn gradient_is_monotonic_per_channel() {
        let (w, h) = (1u32, 200u32);
        let start = Rgb8::new(30, 250, 100);
        let end = Rgb8::new(200, 10, 100);
        let mut buf = vec![0u8; (w * h * 4) as usize];
        fill_vertical(&mut buf, w, h, start, end).unwrap();

        assert_eq!(&row(&buf, w, 0)[..3], [start.r, start.g, start.b]);
        for y in 1..h {
            let prev = row(&buf, w, y - 1);
            let cur = row(&buf, w, y);
            assert!(cur[0] >= prev[0]); // r rises
            assert!(cur[1] <= prev[1]); // g falls
            assert_eq!(cur[2], prev[2]); // b constant
        }
    }

    #[test]
    fn rejects_degenerate_dimensions_and_bad_buffers() {
        let c = Rgb8::new(0, 0, 0);
        let mut buf = vec![0u8; 16];
        assert!(fill_vertical(&mut buf, 0, 4, c, c).is_err());
        assert!(fill_vertical(&mut buf, 2, 0, c, c).is_err());
        assert!(fill_vertical(&mut buf, 3, 3, c, c).is_err());
    }
}
