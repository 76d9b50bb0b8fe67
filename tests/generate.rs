use std::fs;
use std::path::PathBuf;

use tilemap_gen::config::{Config, WorldMapConfig};
use tilemap_gen::domain::LookupTable;
use tilemap_gen::{generate_world_map, run, Args, Error};
use clap::Parser;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tilemap-gen-it-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn small_tables() -> WorldMapConfig {
    WorldMapConfig {
        ground_table: LookupTable::new("Grass", [(1, "Grass"), (3, "DirtH"), (4, "DirtV")]),
        obstruction_table: LookupTable::new("None", [(-1, "None"), (7, "WallV")]),
        ..WorldMapConfig::default()
    }
}

#[test]
fn generates_tile_map_from_csv_layers() {
    let dir = scratch_dir("generate");
    let ground = dir.join("trial_Ground.csv");
    let obstruction = dir.join("trial_Walls.csv");
    fs::write(&ground, "1,3\n4,-1\n").unwrap();
    fs::write(&obstruction, "-1,-1\n7,2\n").unwrap();
    let output = dir.join("src/gameplay/environment/world_map_array.rs");

    generate_world_map(&ground, &obstruction, &output, &small_tables()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("// Auto-generated tile map\nuse super::{GroundType, ObstructionType, Tile};\n"));
    assert!(text.contains("pub const TILE_MAP: [[Tile; 2]; 2] = [\n"));
    assert!(text.contains(
        "    [Tile { ground: GroundType::Grass, obstruction: ObstructionType::None }, \
         Tile { ground: GroundType::DirtH, obstruction: ObstructionType::None }],\n"
    ));
    assert!(text.contains(
        "    [Tile { ground: GroundType::DirtV, obstruction: ObstructionType::WallV }, \
         Tile { ground: GroundType::Grass, obstruction: ObstructionType::None }]\n];"
    ));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn declared_size_is_rows_then_first_row_length() {
    let dir = scratch_dir("dimensions");
    let ground = dir.join("ground.csv");
    let obstruction = dir.join("walls.csv");
    fs::write(&ground, "1,1,1\n1,1,1\n").unwrap();
    fs::write(&obstruction, "-1,-1,-1\n-1,-1,-1\n").unwrap();
    let output = dir.join("map.rs");

    generate_world_map(&ground, &obstruction, &output, &WorldMapConfig::default()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("[[Tile; 2]; 3]"));
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn shape_mismatch_writes_no_file() {
    let dir = scratch_dir("mismatch");
    let ground = dir.join("ground.csv");
    let obstruction = dir.join("walls.csv");
    fs::write(&ground, "1,1\n1,1\n").unwrap();
    fs::write(&obstruction, "-1,-1\n").unwrap();
    let output = dir.join("out/map.rs");

    let err = generate_world_map(&ground, &obstruction, &output, &WorldMapConfig::default())
        .unwrap_err();

    assert!(matches!(err, Error::ShapeMismatch(_)));
    assert!(!output.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn missing_layer_is_not_found() {
    let dir = scratch_dir("missing");
    let ground = dir.join("ground.csv");
    fs::write(&ground, "1\n").unwrap();
    let output = dir.join("map.rs");

    let err = generate_world_map(&ground, &dir.join("walls.csv"), &output, &WorldMapConfig::default())
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!output.exists());
    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn cli_runs_both_tools_from_config_file() {
    let dir = scratch_dir("cli");
    fs::write(dir.join("ground.csv"), "3\n").unwrap();
    fs::write(dir.join("walls.csv"), "15\n").unwrap();
    fs::write(dir.join("sprite_sheet.png"), "pixels").unwrap();
    let config_path = dir.join("tilemap.yaml");
    fs::write(
        &config_path,
        format!(
            "sprite_sheet:\n  source: {0}/sprite_sheet.png\n  destination: {0}/assets/textures/tileset.png\n\
             world_map:\n  ground_csv: {0}/ground.csv\n  obstruction_csv: {0}/walls.csv\n  output: {0}/gen/map.rs\n",
            dir.display()
        ),
    )
    .unwrap();
    assert!(Config::load(&config_path).is_ok());

    let config_arg = config_path.to_str().unwrap();
    run(Args::try_parse_from(["tilemap-gen", "--config", config_arg, "copy"]).unwrap()).unwrap();
    run(Args::try_parse_from(["tilemap-gen", "--config", config_arg, "generate"]).unwrap()).unwrap();

    assert_eq!(
        fs::read_to_string(dir.join("assets/textures/tileset.png")).unwrap(),
        "pixels"
    );
    let text = fs::read_to_string(dir.join("gen/map.rs")).unwrap();
    assert!(text.contains("Tile { ground: GroundType::DirtH, obstruction: ObstructionType::Tower }"));
    fs::remove_dir_all(&dir).unwrap();
}
