use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use crate::config::{require_path, Config, WorldMapConfig};
use crate::grid::load_grid;
use crate::tiles::build_tile_map;
use crate::template::write_tile_map;

pub mod config;
pub mod domain;
pub mod error;
pub mod fs;
pub mod grid;
pub mod template;
pub mod tiles;

pub use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// YAML file with paths, lookup tables and output names
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Copy the sprite sheet into the game's assets
    Copy {
        /// Sprite sheet exported by the art tool
        #[arg(short, long)]
        source: Option<PathBuf>,

        /// Location inside the game's asset directory
        #[arg(short, long)]
        destination: Option<PathBuf>,
    },
    /// Generate the tile map source file from ground and obstruction CSVs
    Generate {
        /// Ground layer CSV
        #[arg(short, long)]
        ground: Option<PathBuf>,

        /// Obstruction layer CSV
        #[arg(short = 'w', long)]
        obstruction: Option<PathBuf>,

        /// Generated Rust file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?;

    match args.command {
        Command::Copy {
            source,
            destination,
        } => {
            let source = require_path(source, config.sprite_sheet.source, "sprite sheet source")?;
            let destination = require_path(
                destination,
                config.sprite_sheet.destination,
                "sprite sheet destination",
            )?;
            fs::copy_file(&source, &destination)
        }
        Command::Generate {
            ground,
            obstruction,
            output,
        } => {
            let mut world = config.world_map;
            let ground = require_path(ground, world.ground_csv.take(), "ground CSV")?;
            let obstruction =
                require_path(obstruction, world.obstruction_csv.take(), "obstruction CSV")?;
            let output = require_path(output, world.output.take(), "output path")?;
            generate_world_map(&ground, &obstruction, &output, &world)
        }
    }
}

/// Load, check shape, map, render and write the tile map.
pub fn generate_world_map(
    ground_csv: &Path,
    obstruction_csv: &Path,
    output: &Path,
    world: &WorldMapConfig,
) -> Result<()> {
    let ground = load_grid(ground_csv)?;
    let obstruction = load_grid(obstruction_csv)?;

    let tiles = build_tile_map(
        &ground,
        &obstruction,
        &world.ground_table,
        &world.obstruction_table,
    )?;

    write_tile_map(&tiles, &world.emit, output)
}
