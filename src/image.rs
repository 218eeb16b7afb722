#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl<T> From<(T, T)> for Size
where
    T: Into<u32>,
{
    fn from(value: (T, T)) -> Self {
        Size {
            width: value.0.into(),
            height: value.1.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ImageFormat {
    Mono1Bpp,  // mono, 1 bit per pixel, MSB is the leftmost pixel
    Mono8Bpp,  // mono, 8 bits per pixel
}

impl ImageFormat {
    pub fn bpp(&self) -> u32 {
        match self {
            Self::Mono1Bpp => 1,
            Self::Mono8Bpp => 8,
        }
    }
}

pub fn minimum_pitch(bpp: u32, width: u32) -> u32 {
    (width * bpp + 7) / 8
}


#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImageHeader {
    format: ImageFormat,
    width: u32,
    pitch: u32,
    height: u32,
}

impl ImageHeader {
    pub fn new(format: ImageFormat, data_len: usize, width: u32, height: u32, pitch: Option<u32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        assert!(
            pitch >= minimum_pitch,
            "invalid pitch {} for width {} with format {:?}",
            pitch,
            width,
            format
        );
        assert!(
            data_len >= (height * pitch) as usize,
            "invalid data len {} for height {} and pitch {}",
            data_len,
            height,
            pitch
        );
        ImageHeader {
            format,
            width,
            pitch,
            height,
        }
    }
}

pub trait HasImageHeader {
    fn header(&self) -> ImageHeader;
}

pub trait ConstImage: HasImageHeader {
    fn data(&self) -> &[u8];

    fn bpp(&self) -> u32 {
        self.header().format.bpp()
    }
    fn format(&self) -> ImageFormat {
        self.header().format
    }
    fn width(&self) -> u32 {
        self.header().width
    }
    fn height(&self) -> u32 {
        self.header().height
    }
    fn pitch(&self) -> u32 {
        self.header().pitch
    }
    fn is_continuous(&self) -> bool {
        self.pitch() == minimum_pitch(self.bpp(), self.width())
    }
    fn size(&self) -> Size {
        (self.width(), self.height()).into()
    }
    /// Bytes of one row, trailing pitch padding included.
    fn row(&self, y: u32) -> &[u8] {
        let start = (y * self.pitch()) as usize;
        &self.data()[start..start + self.pitch() as usize]
    }
    fn rows(&self) -> std::slice::ChunksExact<'_, u8> {
        let len = (self.height() * self.pitch()) as usize;
        self.data()[..len].chunks_exact(self.pitch().max(1) as usize)
    }
}

pub trait Image: ConstImage {
    fn mut_data(&mut self) -> &mut [u8];

    fn mut_row(&mut self, y: u32) -> &mut [u8] {
        let pitch = self.pitch() as usize;
        let start = y as usize * pitch;
        &mut self.mut_data()[start..start + pitch]
    }

    fn fill(&mut self, val: u8) {
        for y in 0..self.height() {
            self.mut_row(y).fill(val);
        }
    }
}

pub struct ConstImageView<'a> {
    header: ImageHeader,
    data: &'a [u8],
}

impl<'a> ConstImageView<'a> {
    pub fn new(format: ImageFormat, data: &'a [u8], width: u32, height: u32, pitch: Option<u32>) -> Self {
        let header = ImageHeader::new(format, data.len(), width, height, pitch);
        ConstImageView { header, data }
    }
}

impl<'a> HasImageHeader for ConstImageView<'a> {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl<'a> ConstImage for ConstImageView<'a> {
    fn data(&self) -> &[u8] {
        self.data
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImageBuffer {
    data: Vec<u8>,
    header: ImageHeader,
}

impl ImageBuffer {
    pub fn new(format: ImageFormat, width: u32, height: u32, pitch: Option<u32>) -> Self {
        let minimum_pitch = minimum_pitch(format.bpp(), width);
        let pitch = pitch.unwrap_or(minimum_pitch);
        let data = vec![0; (pitch * height) as usize];
        let header = ImageHeader::new(format, data.len(), width, height, Some(pitch));
        Self { data, header }
    }
}

impl HasImageHeader for ImageBuffer {
    fn header(&self) -> ImageHeader {
        self.header
    }
}

impl ConstImage for ImageBuffer {
    fn data(&self) -> &[u8] {
        self.data.as_slice()
    }
}

impl Image for ImageBuffer {
    fn mut_data(&mut self) -> &mut [u8] {
        self.data.as_mut_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_1bpp() {
        let mut buf = ImageBuffer::new(ImageFormat::Mono1Bpp, 100, 100, None);
        assert_eq!(buf.width(), 100);
        assert_eq!(buf.height(), 100);
        assert_eq!(buf.pitch(), 13);
        assert!(buf.is_continuous());

        buf.mut_row(2)[1] = 0xa5;
        assert_eq!(buf.data()[13 * 2 + 1], 0xa5);
        assert_eq!(buf.row(2).len(), 13);
        assert_eq!(buf.rows().count(), 100);
    }

    #[test]
    fn test_8bpp_with_pitch() {
        let data: Vec<u8> = (0..12).collect();
        let view = ConstImageView::new(ImageFormat::Mono8Bpp, &data, 3, 3, Some(4));
        assert!(!view.is_continuous());
        assert_eq!(view.row(1), &[4, 5, 6, 7]);
        assert_eq!(view.rows().nth(2).unwrap(), &[8, 9, 10, 11]);
    }

    #[test]
    fn test_fill() {
        let mut buf = ImageBuffer::new(ImageFormat::Mono8Bpp, 5, 2, None);
        buf.fill(0x42);
        assert!(buf.data().iter().all(|v| *v == 0x42));
    }

    #[test]
    #[should_panic(expected = "invalid pitch")]
    fn test_pitch_too_small() {
        let data = [0u8; 4];
        ConstImageView::new(ImageFormat::Mono8Bpp, &data, 4, 1, Some(2));
    }
}

pub mod convert;
