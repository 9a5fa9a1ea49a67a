// View state of the camera feed inside its wrapper.
use crate::config::Settings;
use crate::state::{PanDirection, ZoomDirection};
use crate::util::css_number;

/// Amount one zoom step changes the scale by.
pub const ZOOM_STEP: f64 = 0.1;
/// Amount one pan step moves the feed by, in percent.
pub const PAN_STEP: f64 = 1.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub offset_x: f64,
    pub offset_y: f64,
    pub zoom_scale: f64,
    pub is_flipped: bool,
    pub is_rounded: bool,
    pub is_clipped: bool,
}

impl ViewState {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            offset_x: settings.anchor_x,
            offset_y: settings.anchor_y,
            zoom_scale: settings.scale,
            is_flipped: settings.flip_horizontal,
            is_rounded: settings.rounded,
            is_clipped: settings.clip_path().is_some(),
        }
    }

    // No clamping: offsets and scale may run past any visible range.
    pub fn pan(&mut self, direction: PanDirection) {
        match direction {
            PanDirection::Up => self.offset_y -= PAN_STEP,
            PanDirection::Down => self.offset_y += PAN_STEP,
            PanDirection::Left => self.offset_x -= PAN_STEP,
            PanDirection::Right => self.offset_x += PAN_STEP,
        }
    }

    pub fn zoom(&mut self, direction: ZoomDirection) {
        match direction {
            ZoomDirection::In => self.zoom_scale += ZOOM_STEP,
            ZoomDirection::Out => self.zoom_scale -= ZOOM_STEP,
        }
    }

    pub fn reset_zoom(&mut self) {
        self.zoom_scale = 1.0;
    }

    pub fn toggle_flip(&mut self) {
        self.is_flipped = !self.is_flipped;
    }

    pub fn toggle_round(&mut self) {
        self.is_rounded = !self.is_rounded;
    }

    pub fn toggle_clip(&mut self) {
        self.is_clipped = !self.is_clipped;
    }

    /// CSS `transform` value for the video element.
    pub fn transform(&self) -> String {
        let mut value = format!(
            "translate({}%, {}%) scale({})",
            css_number(self.offset_x),
            css_number(self.offset_y),
            css_number(self.zoom_scale)
        );
        if self.is_flipped {
            value.push_str(" rotateY(180deg)");
        }
        value
    }
}
