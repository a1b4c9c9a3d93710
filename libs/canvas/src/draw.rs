use rayon::iter::ParallelIterator;

use crate::{
    Canvas,
    pixel::{Compositable, Pixel},
};

/// Axis-aligned rectangle with inclusive corners, in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Rectangle covering `width` x `height` pixels starting at `(x, y)`.
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(x, y, x + width - 1, y + height - 1)
    }

    pub const fn width(&self) -> i32 {
        self.x1 - self.x0 + 1
    }

    pub const fn height(&self) -> i32 {
        self.y1 - self.y0 + 1
    }

    pub const fn is_empty(&self) -> bool {
        self.x1 < self.x0 || self.y1 < self.y0
    }

    pub const fn inset(&self, by: i32) -> Self {
        Self::new(self.x0 + by, self.y0 + by, self.x1 - by, self.y1 - by)
    }

    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub const fn contains(&self, other: &Rect) -> bool {
        other.x0 >= self.x0 && other.x1 <= self.x1 && other.y0 >= self.y0 && other.y1 <= self.y1
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 <= other.x1
            && other.x0 <= self.x1
            && self.y0 <= other.y1
            && other.y0 <= self.y1
    }

    /// Clips to a `width` x `height` canvas, returning `(x, y, w, h)`.
    fn clip(&self, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
        let x0 = self.x0.max(0) as i64;
        let y0 = self.y0.max(0) as i64;
        let x1 = (self.x1 as i64).min(width as i64 - 1);
        let y1 = (self.y1 as i64).min(height as i64 - 1);
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some((
            x0 as usize,
            y0 as usize,
            (x1 - x0 + 1) as usize,
            (y1 - y0 + 1) as usize,
        ))
    }
}

impl<P: Pixel + Compositable> Canvas<P> {
    /// Blends `color` onto every pixel of `bounds` whose integer position passes `covers`.
    pub fn fill_where<F>(&mut self, bounds: Rect, color: P, covers: F)
    where
        F: Fn(i32, i32) -> bool + Sync + Send,
    {
        let Some((x, y, w, h)) = bounds.clip(self.width, self.height) else {
            return;
        };
        self.iter_region_mut(x, y, w, h)
            .for_each(|((px, py), pixel)| {
                if covers(px as i32, py as i32) {
                    *pixel = pixel.blend(color);
                }
            });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: P) {
        self.fill_where(rect, color, |_, _| true);
    }

    /// Filled rectangle with an outline of `width` pixels drawn inside its bounds.
    pub fn draw_rect(&mut self, rect: Rect, fill: P, outline: P, width: u32) {
        self.fill_rect(rect, fill);
        if width == 0 {
            return;
        }
        let inner = rect.inset(width as i32);
        self.fill_where(rect, outline, |x, y| !inner.contains_point(x, y));
    }

    /// Straight line of `width` pixels between two inclusive endpoints.
    pub fn stroke_line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: P) {
        if width == 0 {
            return;
        }
        let (fx, fy) = (from.0 as f32, from.1 as f32);
        let (dx, dy) = ((to.0 - from.0) as f32, (to.1 - from.1) as f32);
        let length = (dx * dx + dy * dy).sqrt();
        let (ux, uy) = if length == 0.0 {
            (1.0, 0.0)
        } else {
            (dx / length, dy / length)
        };
        let half = width as f32 / 2.0;

        let pad = width as i32;
        let bounds = Rect::new(
            from.0.min(to.0) - pad,
            from.1.min(to.1) - pad,
            from.0.max(to.0) + pad,
            from.1.max(to.1) + pad,
        );
        self.fill_where(bounds, color, |x, y| {
            let (cx, cy) = (x as f32 + 0.5 - fx, y as f32 + 0.5 - fy);
            let along = cx * ux + cy * uy;
            let across = cy * ux - cx * uy;
            (0.0..length + 1.0).contains(&along) && (-half..half).contains(&across)
        });
    }

    /// Disc centred on the pixel corner `center`, covering `2 * radius` pixels across.
    pub fn fill_circle(&mut self, center: (i32, i32), radius: u32, color: P) {
        let r = radius as i32;
        let bounds = Rect::new(center.0 - r, center.1 - r, center.0 + r, center.1 + r);
        let r2 = (radius as f32) * (radius as f32);
        self.fill_where(bounds, color, |x, y| {
            let dx = x as f32 + 0.5 - center.0 as f32;
            let dy = y as f32 + 0.5 - center.1 as f32;
            dx * dx + dy * dy <= r2
        });
    }
}
