use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

fn default_density() -> f32 {
    1.0
}

fn default_pixel_ratio() -> f32 {
    1.0
}

/// Display parameters a specification is parsed against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayConfig {
    /// Stable density; multiplies coordinates of a specification that carries `@dp`.
    #[serde(default = "default_density")]
    pub density: f32,
    /// Display width in pixels.
    pub width: i32,
    /// Display height in pixels.
    pub height: i32,
    /// Physical-pixel to display-size ratio applied to the finished result.
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f32,
}

impl DisplayConfig {
    pub fn new(density: f32, width: i32, height: i32) -> Self {
        Self {
            density,
            width,
            height,
            pixel_ratio: default_pixel_ratio(),
        }
    }

    pub fn with_pixel_ratio(mut self, pixel_ratio: f32) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(invalid(format!(
                "density must be a positive number, got {}",
                self.density
            )));
        }
        if !(self.pixel_ratio.is_finite() && self.pixel_ratio > 0.0) {
            return Err(invalid(format!(
                "pixel ratio must be a positive number, got {}",
                self.pixel_ratio
            )));
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(invalid(format!(
                "display size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> Error {
    Error::InvalidDisplay { message }
}
