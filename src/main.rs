use std::{error::Error, path::Path};

use domino_atlas::AtlasConfig;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AtlasConfig::default();
    log::info!(
        "Generating domino atlases: texture size {}, pips 0..={}",
        config.texture_size,
        config.max_pips
    );

    match domino_atlas::generate(&config, Path::new(".")) {
        Ok(written) => {
            log::info!(
                "Done: {} and {}",
                written.tile_atlas.display(),
                written.face_atlas.display()
            );
            Ok(())
        }
        Err(err) => {
            log::error!("Atlas generation failed: {err}");
            Err(err.into())
        }
    }
}
