//! Calibration persistence.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use fencam_core::{BoardRectifier, CornerSet, FrameSize, GeometryError, DEFAULT_CANVAS_SIZE};

#[derive(thiserror::Error, Debug)]
pub enum OrientationIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A calibrated board orientation: the located corners, the frame size
/// they were measured in and the canvas they rectify onto.
///
/// Valid until the camera or the board physically moves; after that the
/// corners must be located again from a fresh frame.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Orientation {
    pub corners: CornerSet,
    pub frame: FrameSize,
    #[serde(default = "default_canvas_size")]
    pub canvas_size: u32,
}

fn default_canvas_size() -> u32 {
    DEFAULT_CANVAS_SIZE
}

impl Orientation {
    pub fn new(corners: CornerSet, frame: FrameSize) -> Self {
        Self {
            corners,
            frame,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }

    /// Build the rectifier for this orientation.
    pub fn rectifier(&self) -> Result<BoardRectifier, GeometryError> {
        BoardRectifier::new(&self.corners, self.canvas_size)
    }

    /// Load an orientation from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, OrientationIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this orientation to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), OrientationIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
