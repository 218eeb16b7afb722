use crate::image::*;

/// Packs a binary 8bpp mask into 1bpp rows, leftmost pixel in the MSB.
///
/// Any non-zero mask value is a set bit. Output pitch is `ceil(width / 8)`;
/// bits past the image width stay 0.
pub fn pack<T: ConstImage + ?Sized>(mask: &T) -> ImageBuffer {
    assert_eq!(mask.format(), ImageFormat::Mono8Bpp, "pack requires 8bpp input");
    let mut packed = ImageBuffer::new(ImageFormat::Mono1Bpp, mask.width(), mask.height(), None);
    let width = mask.width() as usize;

    for y in 0..mask.height() {
        let mask_row = &mask.row(y)[..width];
        let packed_row = packed.mut_row(y);
        for (byte, pixels) in packed_row.iter_mut().zip(mask_row.chunks(8)) {
            *byte = pixels
                .iter()
                .enumerate()
                .filter(|(_, px)| **px != 0)
                .fold(0u8, |val, (b, _)| val | (1 << (7 - b)));
        }
    }

    packed
}

/// Flips every bit of every row, pitch padding included.
pub fn invert(image: &mut impl Image) {
    for y in 0..image.height() {
        for byte in image.mut_row(y) {
            *byte = 0xff - *byte;
        }
    }
}
