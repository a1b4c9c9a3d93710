use domino_canvas::{Rect, Rgba8Canvas, pixel::Rgba8};

use crate::{
    error::DominoError, geometry::GeometryConfig, layout::PipLayoutTable, palette::Palette,
};

/// Shared cell drawing for tiles and faces.
#[derive(Clone, Copy)]
struct CellPainter<'a> {
    geometry: &'a GeometryConfig,
    layout: &'a PipLayoutTable,
    palette: &'a Palette,
}

impl CellPainter<'_> {
    /// Resolves the dots and color for `pips` before anything is drawn.
    fn pips(&self, pips: u8) -> Result<(&[(u32, u32)], Rgba8), DominoError> {
        let pattern = self.layout.pattern(pips)?;
        let color = self.palette.pip(pips)?;
        Ok((pattern.dots(), color))
    }

    fn frame(&self, canvas: &mut Rgba8Canvas, x: i32, y: i32, cells: i32) -> Rect {
        let size = self.geometry.texture_size as i32;
        let padding = self.geometry.padding as i32;
        let rect = Rect::new(
            x + padding,
            y + padding,
            x + size - padding,
            y + size * cells - padding,
        );
        canvas.draw_rect(
            rect,
            self.palette.background,
            self.palette.line,
            self.geometry.line_width,
        );
        rect
    }

    fn dots(&self, canvas: &mut Rgba8Canvas, x: i32, y: i32, dots: &[(u32, u32)], color: Rgba8) {
        for &(dx, dy) in dots {
            canvas.fill_circle(
                (x + dx as i32, y + dy as i32),
                self.geometry.pip_radius,
                color,
            );
        }
    }
}

/// Draws a two-cell domino tile: `min` pips on top, `max` pips below.
pub struct TileRenderer<'a> {
    painter: CellPainter<'a>,
}

impl<'a> TileRenderer<'a> {
    pub fn new(
        geometry: &'a GeometryConfig,
        layout: &'a PipLayoutTable,
        palette: &'a Palette,
    ) -> Self {
        Self {
            painter: CellPainter {
                geometry,
                layout,
                palette,
            },
        }
    }

    /// Renders the tile with its top-left corner at `(x, y)` and returns the
    /// outlined rectangle. Fails without drawing if either pip count is out
    /// of range.
    pub fn render_tile(
        &self,
        canvas: &mut Rgba8Canvas,
        x: i32,
        y: i32,
        min: u8,
        max: u8,
    ) -> Result<Rect, DominoError> {
        let (top_dots, top_color) = self.painter.pips(min)?;
        let (bottom_dots, bottom_color) = self.painter.pips(max)?;
        let geometry = self.painter.geometry;
        let size = geometry.texture_size as i32;
        let margin = geometry.margin as i32;

        let rect = self.painter.frame(canvas, x, y, 2);
        canvas.stroke_line(
            (x + margin, y + size),
            (x + size - margin, y + size),
            geometry.line_width,
            self.painter.palette.line,
        );
        self.painter.dots(canvas, x, y, top_dots, top_color);
        self.painter.dots(canvas, x, y + size, bottom_dots, bottom_color);
        Ok(rect)
    }
}

/// Draws a single-cell face showing one pip count.
pub struct FaceRenderer<'a> {
    painter: CellPainter<'a>,
}

impl<'a> FaceRenderer<'a> {
    pub fn new(
        geometry: &'a GeometryConfig,
        layout: &'a PipLayoutTable,
        palette: &'a Palette,
    ) -> Self {
        Self {
            painter: CellPainter {
                geometry,
                layout,
                palette,
            },
        }
    }

    pub fn render_face(
        &self,
        canvas: &mut Rgba8Canvas,
        x: i32,
        y: i32,
        pips: u8,
    ) -> Result<Rect, DominoError> {
        let (dots, color) = self.painter.pips(pips)?;
        let rect = self.painter.frame(canvas, x, y, 1);
        self.painter.dots(canvas, x, y, dots, color);
        Ok(rect)
    }
}
