//! Animation compositions and their RON loader.
use crate::core::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::path::Path;

/// An error produced when loading a [`Composition`] document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The composition file does not exist.
    #[error("composition file not found: {0}")]
    NotFound(String),

    /// The composition file could not be read.
    #[error("failed to read composition: {0}")]
    ReadError(String),

    /// The composition document is not a valid composition.
    #[error("failed to parse composition: {0}")]
    ParseError(String),
}

/// A keyframe animation description an indicator can play.
///
/// A composition only describes timing; drawing the frames is up to the
/// renderer. Documents are RON:
///
/// ```ron
/// (
///     name: "pull-arrow",
///     frame_rate: 60.0,
///     frame_count: 90,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Composition {
    /// The name of the composition.
    pub name: String,

    /// The playback speed in frames per second.
    pub frame_rate: f32,

    /// The total amount of frames.
    pub frame_count: u32,
}

impl Composition {
    /// Loads a composition from a RON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|error| LoadError::ReadError(error.to_string()))?;

        Self::from_ron(&content)
    }

    /// Parses a composition from a RON document.
    pub fn from_ron(content: &str) -> Result<Self, LoadError> {
        let composition: Self = ron::from_str(content)
            .map_err(|error| LoadError::ParseError(error.to_string()))?;

        if composition.frame_rate <= 0.0 || composition.frame_count == 0 {
            return Err(LoadError::ParseError(format!(
                "composition {:?} has no playable frames",
                composition.name
            )));
        }

        Ok(composition)
    }

    /// The time one full playback takes.
    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.frame_count as f32 / self.frame_rate)
    }

    /// The index of the last frame.
    pub fn last_frame(&self) -> u32 {
        self.frame_count.saturating_sub(1)
    }

    /// The frame shown at the given playback progress, where 0 is the first
    /// frame and 1 the last.
    pub fn frame_at(&self, progress: f32) -> u32 {
        (progress.clamp(0.0, 1.0) * self.last_frame() as f32).round() as u32
    }
}
