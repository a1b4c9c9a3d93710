use std::path::PathBuf;

use crate::{error::DominoError, geometry::GeometryConfig, palette::Palette};

/// Run configuration, built once at startup and handed to every stage.
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// Edge length in pixels of one square cell.
    pub texture_size: u32,
    pub max_pips: u8,
    pub layout_path: PathBuf,
    pub tile_atlas_name: String,
    pub face_atlas_name: String,
    /// Reject layout records whose dot count differs from their pip count.
    pub strict_layout: bool,
    pub palette: Palette,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            texture_size: 120,
            max_pips: Palette::MAX_PIPS,
            layout_path: PathBuf::from("assets/pip_positions.txt"),
            tile_atlas_name: "set.png".to_owned(),
            face_atlas_name: "pips.png".to_owned(),
            strict_layout: true,
            palette: Palette::default(),
        }
    }
}

impl AtlasConfig {
    /// Smallest texture size whose padding is at least one pixel, so a cell's
    /// frame ends inside the cell.
    pub const MIN_TEXTURE_SIZE: u32 = 15;

    pub fn validate(&self) -> Result<(), DominoError> {
        if self.texture_size < Self::MIN_TEXTURE_SIZE {
            return Err(DominoError::InvalidConfig(format!(
                "texture size {} is below the minimum of {}",
                self.texture_size,
                Self::MIN_TEXTURE_SIZE
            )));
        }
        if self.max_pips > Palette::MAX_PIPS {
            return Err(DominoError::InvalidConfig(format!(
                "max pips {} exceeds the {} colors in the palette",
                self.max_pips,
                Palette::MAX_PIPS + 1
            )));
        }
        // Drawing coordinates are i32; the tallest atlas is 2 * S * (N + 1) pixels.
        let height = u64::from(self.texture_size) * (u64::from(self.max_pips) + 1) * 2;
        if height > i32::MAX as u64 {
            return Err(DominoError::InvalidConfig(format!(
                "texture size {} overflows the atlas dimensions",
                self.texture_size
            )));
        }
        if self.tile_atlas_name == self.face_atlas_name {
            return Err(DominoError::InvalidConfig(format!(
                "tile and face atlases share the file name {:?}",
                self.tile_atlas_name
            )));
        }
        Ok(())
    }

    pub fn geometry(&self) -> GeometryConfig {
        GeometryConfig::new(self.texture_size)
    }
}
