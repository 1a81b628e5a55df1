//! Monochrome raster images.
//!
//! A [`BitMatrix`] is a height x width grid of dots where `true` means ink.
//! It is packed row by row into the byte layout the printer expects: 8 dots
//! per byte, leftmost dot in the most significant bit, every row starting on
//! a fresh byte.
//!
//! Decoding image files is left to the caller. The `from_luma` and
//! `from_rgba` constructors only apply a threshold to pixels that are already
//! in memory.

use log::warn;

/// Row-major monochrome bitmap, `true` = ink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: u16,
    height: u16,
    dots: Vec<bool>,
}

impl BitMatrix {
    /// Blank (all white) bitmap.
    pub fn new(width: u16, height: u16) -> Self {
        BitMatrix {
            width,
            height,
            dots: vec![false; width as usize * height as usize],
        }
    }

    /// Build a bitmap from rows of dots.
    ///
    /// The width is taken from the widest row and shorter rows are padded
    /// with white. Rows or columns beyond `u16::MAX` cannot be addressed by
    /// the printer and are dropped.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let widest = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
        let width = clamp_dimension("width", widest);
        let height = clamp_dimension("height", rows.len());

        let mut matrix = BitMatrix::new(width, height);
        for (y, row) in rows.iter().take(height as usize).enumerate() {
            for (x, &dot) in row.as_ref().iter().take(width as usize).enumerate() {
                matrix.dots[y * width as usize + x] = dot;
            }
        }
        matrix
    }

    /// Threshold an 8-bit grayscale buffer of `width * height` pixels.
    ///
    /// A pixel is inked when its value is at or below `threshold`, so dark
    /// pixels print. Missing trailing pixels are treated as white.
    pub fn from_luma(width: u16, height: u16, pixels: &[u8], threshold: u8) -> Self {
        let mut matrix = BitMatrix::new(width, height);
        for (dot, &luma) in matrix.dots.iter_mut().zip(pixels.iter()) {
            *dot = luma <= threshold;
        }
        matrix
    }

    /// Threshold an 8-bit RGBA buffer of `width * height * 4` bytes.
    ///
    /// Each pixel is composited over white before its brightness is compared
    /// with `threshold`, so fully transparent pixels never print.
    pub fn from_rgba(width: u16, height: u16, pixels: &[u8], threshold: u8) -> Self {
        let mut matrix = BitMatrix::new(width, height);
        for (dot, px) in matrix.dots.iter_mut().zip(pixels.chunks_exact(4)) {
            let brightness = (px[0] as u32 + px[1] as u32 + px[2] as u32) / 3;
            let alpha = px[3] as u32;
            let composited = (brightness * alpha + 255 * (255 - alpha)) / 255;
            *dot = composited <= threshold as u32;
        }
        matrix
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.dots[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: u16, y: u16, ink: bool) {
        if x < self.width && y < self.height {
            self.dots[y as usize * self.width as usize + x as usize] = ink;
        }
    }

    /// Bytes needed for one packed row.
    pub fn bytes_per_row(&self) -> usize {
        (self.width as usize + 7) / 8
    }

    /// Pack every row, MSB first, each row padded to a whole byte.
    pub fn pack(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.bytes_per_row() * self.height as usize);
        if self.width == 0 {
            return buf;
        }
        for row in self.dots.chunks(self.width as usize) {
            pack_row(row, &mut buf);
        }
        buf
    }
}

/// Pack one row of dots into `buf`, 8 per byte, MSB first.
///
/// A final partial byte keeps its unused low bits at zero.
pub fn pack_row(row: &[bool], buf: &mut Vec<u8>) {
    for chunk in row.chunks(8) {
        let mut byte: u8 = 0x00;
        for (i, &dot) in chunk.iter().enumerate() {
            if dot {
                byte |= 0x80 >> i;
            }
        }
        buf.push(byte);
    }
}

fn clamp_dimension(name: &str, len: usize) -> u16 {
    if len > u16::MAX as usize {
        warn!("raster {} {} exceeds {}, clamping", name, len, u16::MAX);
        u16::MAX
    } else {
        len as u16
    }
}
