pub mod bitpack;
pub mod threshold;

use std::path::Path;

use log::{debug, trace};

use crate::error::LoadError;
use crate::image::{convert, ConstImage, ImageBuffer};

pub const DEFAULT_THRESHOLD: u8 = 128;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonoImgprocOptions {
    pub threshold: u8,
}

impl Default for MonoImgprocOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Grayscale to display-ready 1bpp: threshold, pack MSB-first, then invert
/// so that lit pixels read as 0 bits on the panel.
pub fn process<T: ConstImage + ?Sized>(grey_src: &T, options: MonoImgprocOptions) -> ImageBuffer {
    let t_start = std::time::Instant::now();
    let mask = threshold::threshold(grey_src, options.threshold);
    let t_threshold = std::time::Instant::now();

    let mut packed = bitpack::pack(&mask);
    bitpack::invert(&mut packed);
    let t_pack = std::time::Instant::now();

    trace!(
        "imgproc {}x{}: threshold {:?}, pack {:?}",
        grey_src.width(),
        grey_src.height(),
        t_threshold - t_start,
        t_pack - t_threshold
    );
    packed
}

/// Loads an image file and returns its packed, inverted bitmask.
pub fn pack_image_file(path: &Path, options: MonoImgprocOptions) -> Result<ImageBuffer, LoadError> {
    let grey_img = convert::load_grayscale(path)?;
    debug!(
        "loaded {:?}: {}x{}, threshold {}",
        path,
        grey_img.width(),
        grey_img.height(),
        options.threshold
    );
    Ok(process(&grey_img, options))
}
