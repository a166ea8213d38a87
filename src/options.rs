//! Grid options - the user-facing configuration surface.
//!
//! Options are stored as JSON. Every field has a default, so `{}` is a valid
//! document and older files keep loading as fields are added.
//!
//! ```json
//! {
//!   "columns": 12,
//!   "rows": 6,
//!   "margin": [4.0, 4.0],
//!   "packing": { "row_ceiling": { "per_item": { "base": 100, "per_item": 2 } } }
//! }
//! ```

use crate::constants::{DEFAULT_COLUMNS, DEFAULT_MARGIN, DEFAULT_ROWS};
use crate::error::{GridError, GridResult};
use crate::input::coords::CoordinateConverter;
use crate::packing::PackPolicy;
use crate::types::{ContainerSize, GridGeometry};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    /// Number of columns, at least 1
    pub columns: u32,
    /// Number of rows, at least 1
    pub rows: u32,
    /// Horizontal and vertical margin around each cell, in pixels
    pub margin: [f64; 2],
    /// Packing behaviour for repacks after a move or resize
    pub packing: PackPolicy,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            margin: DEFAULT_MARGIN,
            packing: PackPolicy::default(),
        }
    }
}

impl GridOptions {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    pub fn with_margin(mut self, x: f64, y: f64) -> Self {
        self.margin = [x, y];
        self
    }

    pub fn with_packing(mut self, packing: PackPolicy) -> Self {
        self.packing = packing;
        self
    }

    /// Check the guarantees the coordinate mapper relies on.
    pub fn validate(&self) -> GridResult<()> {
        if self.columns == 0 {
            return Err(GridError::InvalidOptions("columns must be at least 1".to_string()));
        }
        if self.rows == 0 {
            return Err(GridError::InvalidOptions("rows must be at least 1".to_string()));
        }
        if self.margin.iter().any(|m| !m.is_finite() || *m < 0.0) {
            return Err(GridError::InvalidOptions(format!(
                "margins must be finite and non-negative, got {:?}",
                self.margin
            )));
        }
        Ok(())
    }

    /// Geometry for a container of the given size.
    pub fn geometry_for(&self, container: ContainerSize) -> GridGeometry {
        CoordinateConverter::geometry_for(container, self.columns, self.rows, self.margin)
    }

    /// Geometry before the container has been measured: capacity and margins
    /// set, cell size zero.
    pub fn unmeasured_geometry(&self) -> GridGeometry {
        GridGeometry {
            columns: self.columns,
            rows: self.rows,
            cell_width: 0.0,
            cell_height: 0.0,
            margin_x: self.margin[0],
            margin_y: self.margin[1],
        }
    }

    /// Parse and validate options from a JSON string.
    pub fn from_json(json: &str) -> GridResult<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load and validate options from `path`.
    pub fn load(path: &Path) -> GridResult<Self> {
        let content = fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        debug!(path = %path.display(), "Loaded grid options");
        Ok(options)
    }

    /// Load options from `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> GridResult<Self> {
        if !path.exists() {
            info!(path = %path.display(), "No options file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Write options to `path` atomically, creating parent directories.
    pub fn save(&self, path: &Path) -> GridResult<()> {
        self.validate()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(self)?;
        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(path)?;

        debug!(path = %path.display(), "Saved grid options");
        Ok(())
    }
}

/// Default location of the options file: `<config dir>/gridboard/options.json`.
pub fn default_options_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gridboard").join("options.json"))
}
