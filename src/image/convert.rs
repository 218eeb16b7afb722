use std::path::Path;

use image as imagex; // external, for IO
use log::debug;

use super::*;
use crate::error::LoadError;

/// Copies an 8-bit luma image into our own buffer.
pub fn from_luma(img_x: &imagex::GrayImage) -> ImageBuffer {
    let src = ConstImageView::new(
        ImageFormat::Mono8Bpp,
        img_x.as_raw(),
        img_x.width(),
        img_x.height(),
        None,
    );
    let mut img = ImageBuffer::new(ImageFormat::Mono8Bpp, src.width(), src.height(), None);
    for (y, src_row) in src.rows().enumerate() {
        img.mut_row(y as u32).copy_from_slice(src_row);
    }
    img
}

// BT.601 weights in 14-bit fixed point, as OpenCV's RGB2GRAY
const R2Y: u32 = 4899;
const G2Y: u32 = 9617;
const B2Y: u32 = 1868;
const Y_SHIFT: u32 = 14;

pub fn rgb_to_luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * R2Y + g * G2Y + b * B2Y + (1 << (Y_SHIFT - 1))) >> Y_SHIFT) as u8
}

/// Converts a color image to 8-bit luma with `rgb_to_luma`.
pub fn luma_from_rgb(img_x: &imagex::RgbImage) -> imagex::GrayImage {
    imagex::GrayImage::from_fn(img_x.width(), img_x.height(), |x, y| {
        imagex::Luma([rgb_to_luma(img_x.get_pixel(x, y).0)])
    })
}

/// Loads any supported raster file and converts it to 8-bit grayscale.
///
/// The format is sniffed from the content first, so a misnamed file still
/// decodes. Gray inputs pass through; color inputs use BT.601 weights and
/// alpha is dropped.
pub fn load_grayscale(path: &Path) -> Result<ImageBuffer, LoadError> {
    let reader = imagex::io::Reader::open(path)
        .and_then(|r| r.with_guessed_format())
        .map_err(|source| LoadError::Open {
            path: path.to_owned(),
            source,
        })?;
    debug!("{:?}: detected format {:?}", path, reader.format());

    let img_x = reader.decode().map_err(|source| LoadError::Decode {
        path: path.to_owned(),
        source,
    })?;
    let luma_x = if img_x.color().has_color() {
        luma_from_rgb(&img_x.into_rgb8())
    } else {
        img_x.into_luma8()
    };
    if luma_x.width() == 0 || luma_x.height() == 0 {
        return Err(LoadError::Empty { path: path.to_owned() });
    }

    Ok(from_luma(&luma_x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_luma() {
        let img_x = imagex::GrayImage::from_raw(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let img = from_luma(&img_x);
        assert_eq!(img.size(), (3u32, 2u32).into());
        assert_eq!(img.format(), ImageFormat::Mono8Bpp);
        assert_eq!(img.row(0), &[1, 2, 3]);
        assert_eq!(img.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");
        imagex::GrayImage::from_raw(2, 1, vec![200, 50]).unwrap().save(&path).unwrap();

        let img = load_grayscale(&path).unwrap();
        assert_eq!(img.size(), (2u32, 1u32).into());
        assert_eq!(img.row(0), &[200, 50]);
    }

    #[test]
    fn test_rgb_to_luma() {
        assert_eq!(rgb_to_luma([0, 0, 0]), 0);
        assert_eq!(rgb_to_luma([255, 255, 255]), 255);
        assert_eq!(rgb_to_luma([255, 0, 0]), 76);
        assert_eq!(rgb_to_luma([0, 150, 0]), 88);
        assert_eq!(rgb_to_luma([0, 0, 255]), 29);
    }

    #[test]
    fn test_load_rgb_as_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("color.png");
        imagex::RgbImage::from_raw(4, 1, vec![255, 255, 255, 0, 0, 0, 255, 0, 0, 0, 150, 0])
            .unwrap()
            .save(&path)
            .unwrap();

        let img = load_grayscale(&path).unwrap();
        assert_eq!(img.row(0), &[255, 0, 76, 88]);
    }

    #[test]
    fn test_load_rgb_near_threshold() {
        // green 150 is 88 in gray, so it stays dark at threshold 100
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("green.png");
        imagex::RgbImage::from_raw(1, 1, vec![0, 150, 0]).unwrap().save(&path).unwrap();

        let img = load_grayscale(&path).unwrap();
        let packed = crate::imgproc::process(&img, crate::imgproc::MonoImgprocOptions { threshold: 100 });
        assert_eq!(packed.row(0), &[0xff]);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_grayscale(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }), "{:?}", err);
    }

    #[test]
    fn test_load_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.png");
        std::fs::write(&path, b"\x89PNG\r\n\x1a\nthis is not a png").unwrap();

        let err = load_grayscale(&path).unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }), "{:?}", err);
    }
}
