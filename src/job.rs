use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    foundation::core::{Canvas, Region},
    foundation::error::{OrbitmapError, OrbitmapResult},
    palette::Palette,
};

/// Everything one render run needs, minus the output path.
///
/// Jobs deserialize from JSON (the `orbitmap job` subcommand) or are built in
/// code; either way [`RenderJob::validate`] runs before any pixel is sampled.
///
/// ```json
/// {
///   "canvas": { "width": 1920, "height": 1080 },
///   "region": { "min_x": -2.0, "max_x": 1.0, "min_y": -1.5, "max_y": 1.5 },
///   "max_iter": 400,
///   "palette": "twilight"
/// }
/// ```
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct RenderJob {
    /// Output pixel dimensions.
    pub canvas: Canvas,
    /// Plane window to sample.
    pub region: Region,
    /// Iteration cap per pixel.
    pub max_iter: u32,
    /// Count-to-color mapping.
    #[serde(default)]
    pub palette: Palette,
}

impl Default for RenderJob {
    fn default() -> Self {
        Self {
            canvas: Canvas {
                width: 1920,
                height: 1080,
            },
            region: Region {
                min_x: -2.0,
                max_x: 1.0,
                min_y: -1.5,
                max_y: 1.5,
            },
            max_iter: 400,
            palette: Palette::default(),
        }
    }
}

impl RenderJob {
    /// Load a job description from a JSON file.
    pub fn from_path(path: &Path) -> OrbitmapResult<Self> {
        let f = File::open(path).with_context(|| format!("open job '{}'", path.display()))?;
        let r = BufReader::new(f);
        let job: Self = serde_json::from_reader(r)
            .map_err(|e| OrbitmapError::validation(format!("parse job JSON: {e}")))?;
        Ok(job)
    }

    /// Check the canvas and region invariants.
    pub fn validate(&self) -> OrbitmapResult<()> {
        self.canvas.validate()?;
        self.region.validate()?;
        Ok(())
    }
}
