pub mod compose;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod palette;
pub mod render;

use std::path::{Path, PathBuf};

use image::ImageFormat;

pub use compose::{AtlasComposer, AtlasLayout, TileCoordinate, UvRect};
pub use config::AtlasConfig;
pub use error::DominoError;
pub use geometry::GeometryConfig;
pub use layout::{PipLayoutTable, PipPattern};
pub use palette::Palette;
pub use render::{FaceRenderer, TileRenderer};

/// Files written by a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAtlases {
    pub tile_atlas: PathBuf,
    pub face_atlas: PathBuf,
}

/// Loads the layout table named by `config` and writes both atlases into `out_dir`.
pub fn generate(config: &AtlasConfig, out_dir: &Path) -> Result<GeneratedAtlases, DominoError> {
    config.validate()?;
    let geometry = config.geometry();
    let table = PipLayoutTable::open(
        &config.layout_path,
        &geometry,
        config.max_pips,
        config.strict_layout,
    )?;
    write_atlases(config, &table, out_dir)
}

/// Composes both atlases from an already loaded table, then writes them as PNG.
///
/// Nothing is written unless both images compose successfully.
pub fn write_atlases(
    config: &AtlasConfig,
    table: &PipLayoutTable,
    out_dir: &Path,
) -> Result<GeneratedAtlases, DominoError> {
    config.validate()?;
    let composer = AtlasComposer::new(config.geometry(), table, &config.palette)?;
    let tiles = composer.compose_tile_atlas()?;
    let faces = composer.compose_face_atlas()?;

    let written = GeneratedAtlases {
        tile_atlas: out_dir.join(&config.tile_atlas_name),
        face_atlas: out_dir.join(&config.face_atlas_name),
    };
    tiles.save_with_format(&written.tile_atlas, ImageFormat::Png)?;
    log::info!("Wrote {}", written.tile_atlas.display());
    faces.save_with_format(&written.face_atlas, ImageFormat::Png)?;
    log::info!("Wrote {}", written.face_atlas.display());
    Ok(written)
}
