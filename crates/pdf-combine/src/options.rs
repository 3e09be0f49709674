use crate::layout::{FitPolicy, LayoutMode, slide_grid_extent_mm};
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for a combine run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombineOptions {
    // Input, in output order
    pub input_files: Vec<PathBuf>,

    // Layout
    pub layout_mode: LayoutMode,
    pub fit_policy: FitPolicy,

    // Output canvas
    pub paper_size: PaperSize,

    // Flate-compress canvas content streams
    pub compress: bool,
}

impl Default for CombineOptions {
    fn default() -> Self {
        Self {
            input_files: Vec::new(),
            layout_mode: LayoutMode::Single,
            fit_policy: FitPolicy::Contain,
            paper_size: PaperSize::A4,
            compress: true,
        }
    }
}

impl CombineOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| CombineError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| CombineError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_files.is_empty() {
            return Err(CombineError::Config("No input files specified".to_string()));
        }
        self.validate_layout()
    }

    /// Validate only the settings that drive layout, for callers that pass
    /// already loaded documents.
    pub fn validate_layout(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm > 0.0 && height_mm > 0.0) {
            return Err(CombineError::Config(format!(
                "Paper size must be positive, got {} x {} mm",
                width_mm, height_mm
            )));
        }

        if self.layout_mode == LayoutMode::Slides {
            let (paper_w, paper_h) = self
                .paper_size
                .dimensions_with_orientation(self.layout_mode.orientation());
            let (grid_w, grid_h) = slide_grid_extent_mm();
            if paper_w < grid_w || paper_h < grid_h {
                return Err(CombineError::Config(format!(
                    "Slides need at least {} x {} mm of paper, got {} x {} mm",
                    grid_w, grid_h, paper_w, paper_h
                )));
            }
        }

        Ok(())
    }
}
