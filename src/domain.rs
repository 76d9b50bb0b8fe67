use serde::Deserialize;
use std::collections::BTreeMap;

/// Rows of integer tile codes as exported by the level editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    pub rows: Vec<Vec<i64>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<i64>>) -> Self {
        Self { rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the first row, zero for an empty grid.
    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}

/// Maps a tile code to the name of an enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LookupTable {
    pub default: String,
    #[serde(default)]
    pub labels: BTreeMap<i64, String>,
}

impl LookupTable {
    pub fn new<L: Into<String>>(default: L, labels: impl IntoIterator<Item = (i64, L)>) -> Self {
        Self {
            default: default.into(),
            labels: labels.into_iter().map(|(k, v)| (k, v.into())).collect(),
        }
    }

    pub fn lookup(&self, code: i64) -> &str {
        self.labels.get(&code).map(String::as_str).unwrap_or(&self.default)
    }

    pub fn ground() -> Self {
        Self::new("Grass", [(1, "Grass"), (3, "DirtH"), (4, "DirtV")])
    }

    pub fn obstruction() -> Self {
        Self::new(
            "None",
            [
                (-1, "None"),
                (7, "WallV"),
                (6, "WallH"),
                (15, "Tower"),
                (3, "Rock1"),
                (4, "Rock2"),
                (5, "Rock3"),
            ],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileDescriptor {
    pub ground: String,
    pub obstruction: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TileMap {
    pub rows: Vec<Vec<TileDescriptor>>,
}

impl TileMap {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }
}
