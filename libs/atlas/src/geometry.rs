/// Pixel measurements of one domino cell, all derived from the texture size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryConfig {
    pub texture_size: u32,
    pub margin: u32,
    /// Pitch of the two-column split of the inner cell.
    pub cell2: u32,
    /// Pitch of the three-row split of the inner cell.
    pub cell3: u32,
    pub line_width: u32,
    pub padding: u32,
    pub pip_radius: u32,
}

impl GeometryConfig {
    pub const fn new(texture_size: u32) -> Self {
        let margin = texture_size / 4;
        let inner = texture_size - margin * 2;
        Self {
            texture_size,
            margin,
            cell2: inner / 2,
            cell3: inner / 3,
            line_width: texture_size / 15,
            padding: texture_size / 15,
            pip_radius: texture_size / 15,
        }
    }

    /// Dot y-offsets from the cell top: top, one third, middle, two thirds, bottom.
    pub const fn row_offsets(&self) -> [u32; 5] {
        [
            self.margin,
            self.margin + self.cell3,
            self.margin + self.cell2,
            self.margin + self.cell3 * 2,
            self.margin + self.cell2 * 2,
        ]
    }

    /// Dot x-offsets from the cell left edge: left, center, right.
    pub const fn column_offsets(&self) -> [u32; 3] {
        [
            self.margin,
            self.margin + self.cell2,
            self.margin + self.cell2 * 2,
        ]
    }
}
