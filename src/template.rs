use serde::Deserialize;
use std::path::Path;
use tera::{Context, Tera};

use crate::domain::{TileDescriptor, TileMap};
use crate::error::Result;
use crate::fs::write_atomic;

const TILE_MAP_TEMPLATE: &str = "// {{ header }}
use {{ import_path }}::{{ imports }};

pub const {{ const_name }}: [[{{ tile_type }}; {{ rows }}]; {{ columns }}] = {{ matrix }}
";

/// Names used in the generated source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmitOptions {
    pub header: String,
    pub import_path: String,
    pub ground_type: String,
    pub obstruction_type: String,
    pub tile_type: String,
    pub const_name: String,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            header: "Auto-generated tile map".to_string(),
            import_path: "super".to_string(),
            ground_type: "GroundType".to_string(),
            obstruction_type: "ObstructionType".to_string(),
            tile_type: "Tile".to_string(),
            const_name: "TILE_MAP".to_string(),
        }
    }
}

fn descriptor_literal(tile: &TileDescriptor, options: &EmitOptions) -> String {
    format!(
        "{} {{ ground: {}::{}, obstruction: {}::{} }}",
        options.tile_type,
        options.ground_type,
        tile.ground,
        options.obstruction_type,
        tile.obstruction
    )
}

fn format_matrix(map: &TileMap, options: &EmitOptions) -> String {
    let rows: Vec<String> = map
        .rows
        .iter()
        .map(|row| {
            let tiles: Vec<String> = row.iter().map(|t| descriptor_literal(t, options)).collect();
            format!("    [{}]", tiles.join(", "))
        })
        .collect();
    format!("[\n{}\n];", rows.join(",\n"))
}

/// Renders the whole generated file.
///
/// The size annotation is `[[Tile; rows]; columns]`: the row count is the
/// inner bound and the first row's length the outer one. Only square maps
/// produce a literal that matches its declared type.
pub fn render_tile_map(map: &TileMap, options: &EmitOptions) -> Result<String> {
    let mut context = Context::new();
    context.insert("header", &options.header);
    context.insert("import_path", &options.import_path);
    context.insert(
        "imports",
        &format!(
            "{{{}, {}, {}}}",
            options.ground_type, options.obstruction_type, options.tile_type
        ),
    );
    context.insert("const_name", &options.const_name);
    context.insert("tile_type", &options.tile_type);
    context.insert("rows", &map.row_count());
    context.insert("columns", &map.column_count());
    context.insert("matrix", &format_matrix(map, options));

    Ok(Tera::one_off(TILE_MAP_TEMPLATE, &context, false)?)
}

/// Renders the map and writes it to `output`, creating parent directories.
pub fn write_tile_map(map: &TileMap, options: &EmitOptions, output: &Path) -> Result<()> {
    let rendered = render_tile_map(map, options)?;
    write_atomic(output, &rendered)?;
    println!("Wrote Rust matrix to {}", output.display());
    Ok(())
}
