use std::path::PathBuf;

use domino_atlas::{AtlasConfig, DominoError, PipLayoutTable, generate, write_atlases};

fn shipped_layout() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/pip_positions.txt")
}

fn config(texture_size: u32) -> AtlasConfig {
    AtlasConfig {
        texture_size,
        layout_path: shipped_layout(),
        ..Default::default()
    }
}

#[test]
fn writes_both_atlases_with_expected_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let written = generate(&config(120), dir.path()).unwrap();

    assert_eq!(written.tile_atlas, dir.path().join("set.png"));
    assert_eq!(written.face_atlas, dir.path().join("pips.png"));

    let tiles = image::open(&written.tile_atlas).unwrap().into_rgba8();
    let faces = image::open(&written.face_atlas).unwrap().into_rgba8();
    assert_eq!(tiles.dimensions(), (120 * 13, 240 * 13));
    assert_eq!(faces.dimensions(), (120 * 13, 120));

    // lossless: the centre of tile (3, 5)'s middle top dot keeps palette entry 3
    assert_eq!(tiles.get_pixel(420, 660).0, [0x34, 0xE0, 0x24, 0xFF]);
    assert_eq!(tiles.get_pixel(0, 0).0, [0, 0, 0, 0]);
}

#[test]
fn output_is_byte_identical_across_runs() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = generate(&config(30), first.path()).unwrap();
    let b = generate(&config(30), second.path()).unwrap();

    assert_eq!(
        std::fs::read(&a.tile_atlas).unwrap(),
        std::fs::read(&b.tile_atlas).unwrap()
    );
    assert_eq!(
        std::fs::read(&a.face_atlas).unwrap(),
        std::fs::read(&b.face_atlas).unwrap()
    );
}

#[test]
fn malformed_layout_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let layout = dir.path().join("short.txt");
    std::fs::write(&layout, "000\n000\n000\n000\n000\n\n").unwrap();

    let config = AtlasConfig {
        layout_path: layout,
        ..config(30)
    };
    let err = generate(&config, dir.path()).unwrap_err();
    assert!(matches!(err, DominoError::MalformedLayout { .. }));
    assert!(!dir.path().join("set.png").exists());
    assert!(!dir.path().join("pips.png").exists());
}

#[test]
fn smaller_sets_shrink_the_atlas() {
    let dir = tempfile::tempdir().unwrap();
    let config = AtlasConfig {
        max_pips: 6,
        ..config(30)
    };
    let written = generate(&config, dir.path()).unwrap();
    let tiles = image::open(&written.tile_atlas).unwrap().into_rgba8();
    assert_eq!(tiles.dimensions(), (30 * 7, 60 * 7));
}

#[test]
fn unwritable_output_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(30);
    let table = PipLayoutTable::open(
        &config.layout_path,
        &config.geometry(),
        config.max_pips,
        true,
    )
    .unwrap();

    let missing = dir.path().join("no/such/dir");
    let err = write_atlases(&config, &table, &missing).unwrap_err();
    assert!(matches!(err, DominoError::Image(_) | DominoError::Io(_)));
}
