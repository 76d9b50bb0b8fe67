use crate::domain::{Grid, LookupTable, TileDescriptor, TileMap};
use crate::error::{Error, Result};

/// Fails unless both grids have the same row count and per-row column counts.
pub fn check_same_shape(ground: &Grid, obstruction: &Grid) -> Result<()> {
    if ground.row_count() != obstruction.row_count() {
        return Err(Error::ShapeMismatch(format!(
            "ground has {} rows, obstruction has {}",
            ground.row_count(),
            obstruction.row_count()
        )));
    }
    for (index, (g, o)) in ground.rows.iter().zip(&obstruction.rows).enumerate() {
        if g.len() != o.len() {
            return Err(Error::ShapeMismatch(format!(
                "row {} has {} ground columns and {} obstruction columns",
                index + 1,
                g.len(),
                o.len()
            )));
        }
    }
    Ok(())
}

pub fn build_tile_map(
    ground: &Grid,
    obstruction: &Grid,
    ground_table: &LookupTable,
    obstruction_table: &LookupTable,
) -> Result<TileMap> {
    check_same_shape(ground, obstruction)?;

    let rows = ground
        .rows
        .iter()
        .zip(&obstruction.rows)
        .map(|(g_row, o_row)| {
            g_row
                .iter()
                .zip(o_row)
                .map(|(&g, &o)| TileDescriptor {
                    ground: ground_table.lookup(g).to_string(),
                    obstruction: obstruction_table.lookup(o).to_string(),
                })
                .collect()
        })
        .collect();

    Ok(TileMap { rows })
}
