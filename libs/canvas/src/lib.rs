pub mod draw;
pub mod pixel;

use std::ops::Range;

use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

pub use self::draw::Rect;
use self::pixel::{Pixel, Rgba8};

pub type Rgba8Canvas = Canvas<Rgba8>;

/// Row-major pixel buffer. Every drawing operation clips to its bounds.
#[derive(Clone)]
pub struct Canvas<P: Pixel> {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) data: Box<[P::DATA]>,
}

impl<P: Pixel> Canvas<P> {
    /// Creates a canvas filled with the zero pixel (fully transparent for [`Rgba8`]).
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![P::DATA::default(); width * height * P::CHANNELS].into_boxed_slice(),
        }
    }

    pub fn filled(width: usize, height: usize, pixel: P) -> Self {
        let mut canvas = Self::new(width, height);
        bytemuck::cast_slice_mut::<P::DATA, P>(&mut canvas.data).fill(pixel);
        canvas
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline(always)]
    fn pixel_indices(&self, x: usize, y: usize) -> Option<Range<usize>> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixel_indices_unchecked(x, y))
    }

    #[inline(always)]
    fn pixel_indices_unchecked(&self, x: usize, y: usize) -> Range<usize> {
        let no_channels = P::CHANNELS;
        // If in bounds, this can't overflow as we have tested that at construction!
        let min_index = (y * self.width + x) * no_channels;
        min_index..min_index + no_channels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<&P> {
        self.pixel_indices(x, y)
            .map(|pixel_indices| P::from_slice(&self.data[pixel_indices]))
    }

    pub fn get_pixel(&self, x: usize, y: usize) -> &P {
        match self.pixel(x, y) {
            None => panic!(
                "Image index {:?} out of bounds {:?}",
                (x, y),
                (self.width, self.height)
            ),
            Some(pixel) => pixel,
        }
    }

    pub fn pixels(&self) -> impl Iterator<Item = &P> {
        bytemuck::cast_slice::<P::DATA, P>(&self.data).iter()
    }

    fn row_range_mut<'a>(
        &'a mut self,
        y: usize,
        height: usize,
    ) -> impl 'a + ParallelIterator<Item = (usize, &'a mut [P::DATA])> {
        self.data
            .par_chunks_exact_mut(self.width * P::CHANNELS)
            .enumerate()
            .skip(y)
            .take(height)
    }

    /// Parallel iterator over the pixels of a region, yielding absolute
    /// `(x, y)` coordinates. The region is clipped to the canvas.
    ///
    /// Panics if the canvas has zero width.
    pub fn iter_region_mut<'a>(
        &'a mut self,
        x: usize,
        y: usize,
        w: usize,
        h: usize,
    ) -> impl 'a + ParallelIterator<Item = ((usize, usize), &'a mut P)> {
        self.row_range_mut(y, h).flat_map(move |(iy, row)| {
            row.par_chunks_exact_mut(P::CHANNELS)
                .enumerate()
                .skip(x)
                .take(w)
                .map(move |(ix, d)| ((ix, iy), P::from_slice_mut(d)))
        })
    }
}

pub mod adapter {
    use image::RgbaImage;

    use super::Rgba8Canvas;

    pub fn adapt(canvas: Rgba8Canvas) -> RgbaImage {
        let (width, height) = canvas.dimensions();
        RgbaImage::from_raw(width as u32, height as u32, canvas.data.into_vec())
            .expect("canvas data length always matches its dimensions")
    }
}
