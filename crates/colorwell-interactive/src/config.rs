use colorwell::{ColorwellError, Result};

/// Size and theme of a color picker
#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    /// Width of the picker (saturation area and bars), in logical pixels
    pub width: f32,
    /// Height of the saturation area. Defaults to `width`.
    pub height: Option<f32>,
    /// Use the dark theme
    pub dark: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            width: 256.0,
            height: None,
            dark: false,
        }
    }
}

impl PickerConfig {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Effective height of the saturation area
    pub fn height(&self) -> f32 {
        self.height.unwrap_or(self.width)
    }

    /// Check that both dimensions are finite and positive
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("width", self.width), ("height", self.height())] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ColorwellError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}
