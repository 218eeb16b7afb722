use crate::image::*;

pub const SET: u8 = 0xff;
pub const UNSET: u8 = 0;

/// Binarizes an 8bpp image: strictly brighter than `threshold` becomes
/// `SET`, everything else (equal included) becomes `UNSET`.
pub fn threshold<T: ConstImage + ?Sized>(grey_src: &T, threshold: u8) -> ImageBuffer {
    assert_eq!(grey_src.format(), ImageFormat::Mono8Bpp, "threshold requires 8bpp input");
    let mut dst = ImageBuffer::new(ImageFormat::Mono8Bpp, grey_src.width(), grey_src.height(), None);
    let width = grey_src.width() as usize;

    for y in 0..grey_src.height() {
        let src_row = &grey_src.row(y)[..width];
        let dst_row = dst.mut_row(y);
        for (dst_px, &src_px) in dst_row.iter_mut().zip(src_row) {
            *dst_px = if src_px > threshold { SET } else { UNSET };
        }
    }
    dst
}
