use domino_canvas::{Rect, Rgba8Canvas, adapter};
use image::RgbaImage;

use crate::{
    error::DominoError,
    geometry::GeometryConfig,
    layout::PipLayoutTable,
    palette::Palette,
    render::{FaceRenderer, TileRenderer},
};

/// One domino of the set, stored with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoordinate {
    min: u8,
    max: u8,
}

impl TileCoordinate {
    /// Normalizes an unordered pair so that `(5, 2)` and `(2, 5)` are the same tile.
    pub fn new(a: u8, b: u8) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn min(&self) -> u8 {
        self.min
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn is_double(&self) -> bool {
        self.min == self.max
    }

    /// Every tile of a `max_pips` set in atlas order: rows by `max`, then columns by `min`.
    pub fn all(max_pips: u8) -> impl Iterator<Item = Self> {
        (0..=max_pips).flat_map(|max| (0..=max).map(move |min| Self { min, max }))
    }
}

/// Normalized texture coordinates of an atlas cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UvRect {
    pub u: f32,
    pub v: f32,
    pub width: f32,
    pub height: f32,
}

/// Pixel placement of tiles and faces.
///
/// Tiles sit at column `min`, row `max` of a grid of `S x 2S` cells, leaving
/// the upper triangle empty. Faces sit in a single row of `S x S` cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtlasLayout {
    texture_size: u32,
    max_pips: u8,
}

impl AtlasLayout {
    pub fn new(texture_size: u32, max_pips: u8) -> Self {
        Self {
            texture_size,
            max_pips,
        }
    }

    pub fn texture_size(&self) -> u32 {
        self.texture_size
    }

    pub fn max_pips(&self) -> u8 {
        self.max_pips
    }

    fn columns(&self) -> u32 {
        u32::from(self.max_pips) + 1
    }

    pub fn tile_atlas_size(&self) -> (u32, u32) {
        let width = self.texture_size * self.columns();
        (width, width * 2)
    }

    pub fn face_atlas_size(&self) -> (u32, u32) {
        (self.texture_size * self.columns(), self.texture_size)
    }

    fn check(&self, pips: u8) -> Result<(), DominoError> {
        if pips > self.max_pips {
            return Err(DominoError::PipCountOutOfRange {
                pips,
                max: self.max_pips,
            });
        }
        Ok(())
    }

    pub fn tile_origin(&self, tile: TileCoordinate) -> Result<(u32, u32), DominoError> {
        self.check(tile.max)?;
        Ok((
            u32::from(tile.min) * self.texture_size,
            u32::from(tile.max) * self.texture_size * 2,
        ))
    }

    pub fn tile_rect(&self, tile: TileCoordinate) -> Result<Rect, DominoError> {
        let (x, y) = self.tile_origin(tile)?;
        let size = self.texture_size as i32;
        Ok(Rect::from_origin_size(x as i32, y as i32, size, size * 2))
    }

    pub fn face_origin(&self, pips: u8) -> Result<(u32, u32), DominoError> {
        self.check(pips)?;
        Ok((u32::from(pips) * self.texture_size, 0))
    }

    pub fn face_rect(&self, pips: u8) -> Result<Rect, DominoError> {
        let (x, y) = self.face_origin(pips)?;
        let size = self.texture_size as i32;
        Ok(Rect::from_origin_size(x as i32, y as i32, size, size))
    }

    pub fn tile_uv(&self, tile: TileCoordinate) -> Result<UvRect, DominoError> {
        self.check(tile.max)?;
        let cells = self.columns() as f32;
        Ok(UvRect {
            u: f32::from(tile.min) / cells,
            v: f32::from(tile.max) / cells,
            width: 1.0 / cells,
            height: 1.0 / cells,
        })
    }

    pub fn face_uv(&self, pips: u8) -> Result<UvRect, DominoError> {
        self.check(pips)?;
        let cells = self.columns() as f32;
        Ok(UvRect {
            u: f32::from(pips) / cells,
            v: 0.0,
            width: 1.0 / cells,
            height: 1.0,
        })
    }

    /// The tile drawn over pixel `(x, y)` of the tile atlas, if any.
    pub fn tile_at(&self, x: u32, y: u32) -> Option<TileCoordinate> {
        if self.texture_size == 0 {
            return None;
        }
        let min = x / self.texture_size;
        let max = y / (self.texture_size * 2);
        if min > max || max > u32::from(self.max_pips) {
            return None;
        }
        Some(TileCoordinate {
            min: min as u8,
            max: max as u8,
        })
    }
}

/// Paints both atlases. Each pass owns its canvas until it is handed back as an image.
pub struct AtlasComposer<'a> {
    geometry: GeometryConfig,
    table: &'a PipLayoutTable,
    palette: &'a Palette,
    layout: AtlasLayout,
}

impl<'a> AtlasComposer<'a> {
    pub fn new(
        geometry: GeometryConfig,
        table: &'a PipLayoutTable,
        palette: &'a Palette,
    ) -> Result<Self, DominoError> {
        if table.max_pips() > Palette::MAX_PIPS {
            return Err(DominoError::InvalidConfig(format!(
                "layout table covers {} pips but the palette stops at {}",
                table.max_pips(),
                Palette::MAX_PIPS
            )));
        }
        Ok(Self {
            geometry,
            table,
            palette,
            layout: AtlasLayout::new(geometry.texture_size, table.max_pips()),
        })
    }

    pub fn tile_canvas(&self) -> Result<Rgba8Canvas, DominoError> {
        let (width, height) = self.layout.tile_atlas_size();
        log::info!(
            "Composing {width}x{height} tile atlas for pips 0..={}",
            self.layout.max_pips()
        );
        let mut canvas = Rgba8Canvas::new(width as usize, height as usize);
        let renderer = TileRenderer::new(&self.geometry, self.table, self.palette);

        for tile in TileCoordinate::all(self.layout.max_pips()) {
            let (x, y) = self.layout.tile_origin(tile)?;
            log::debug!("Tile {}|{} at ({x}, {y})", tile.min, tile.max);
            renderer.render_tile(&mut canvas, x as i32, y as i32, tile.min, tile.max)?;
        }
        Ok(canvas)
    }

    pub fn face_canvas(&self) -> Result<Rgba8Canvas, DominoError> {
        let (width, height) = self.layout.face_atlas_size();
        log::info!("Composing {width}x{height} face atlas");
        let mut canvas = Rgba8Canvas::new(width as usize, height as usize);
        let renderer = FaceRenderer::new(&self.geometry, self.table, self.palette);

        for pips in 0..=self.layout.max_pips() {
            let (x, y) = self.layout.face_origin(pips)?;
            log::debug!("Face {pips} at ({x}, {y})");
            renderer.render_face(&mut canvas, x as i32, y as i32, pips)?;
        }
        Ok(canvas)
    }

    pub fn compose_tile_atlas(&self) -> Result<RgbaImage, DominoError> {
        self.tile_canvas().map(adapter::adapt)
    }

    pub fn compose_face_atlas(&self) -> Result<RgbaImage, DominoError> {
        self.face_canvas().map(adapter::adapt)
    }
}
