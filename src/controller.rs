//! Camera controller: owns the view state and re-renders it after every action.

use tracing::{debug, trace};

use crate::config::Settings;
use crate::error::CamResult;
use crate::state::{CameraAction, PanDirection, ViewState, ZoomDirection};
use crate::surface::ViewSurface;

pub const BORDER_COLOR_PROPERTY: &str = "--border-color";
pub const CLIP_PATH_PROPERTY: &str = "--clip-path";
pub const HAS_BORDER_CLASS: &str = "has-border";
pub const ROUNDED_CLASS: &str = "rounded";
pub const HAS_CLIP_PATH_CLASS: &str = "has-clip-path";

pub struct CameraController<S: ViewSurface> {
    settings: Settings,
    view: ViewState,
    surface: S,
}

impl<S: ViewSurface> CameraController<S> {
    /// Builds the controller and renders the initial view.
    pub fn new(settings: Settings, surface: S) -> CamResult<Self> {
        let view = ViewState::from_settings(&settings);
        let controller = Self {
            settings,
            view,
            surface,
        };
        controller.render()?;
        Ok(controller)
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn flip_horizontal(&mut self) -> CamResult<()> {
        self.view.toggle_flip();
        debug!(flipped = self.view.is_flipped, "flip");
        self.render()
    }

    pub fn adjust_offset(&mut self, direction: PanDirection) -> CamResult<()> {
        self.view.pan(direction);
        debug!(?direction, x = self.view.offset_x, y = self.view.offset_y, "pan");
        self.render()
    }

    pub fn zoom(&mut self, direction: ZoomDirection) -> CamResult<()> {
        self.view.zoom(direction);
        debug!(?direction, scale = self.view.zoom_scale, "zoom");
        self.render()
    }

    /// Restores the scale to 1. Offsets and flags stay as they are.
    pub fn reset(&mut self) -> CamResult<()> {
        self.view.reset_zoom();
        debug!("reset zoom");
        self.render()
    }

    pub fn round(&mut self) -> CamResult<()> {
        self.view.toggle_round();
        debug!(rounded = self.view.is_rounded, "round");
        self.render()
    }

    pub fn clip(&mut self) -> CamResult<()> {
        self.view.toggle_clip();
        debug!(clipped = self.view.is_clipped, "clip");
        self.render()
    }

    pub fn apply(&mut self, action: CameraAction) -> CamResult<()> {
        match action {
            CameraAction::Flip => self.flip_horizontal(),
            CameraAction::Pan(direction) => self.adjust_offset(direction),
            CameraAction::Zoom(direction) => self.zoom(direction),
            CameraAction::Reset => self.reset(),
            CameraAction::Round => self.round(),
            CameraAction::Clip => self.clip(),
        }
    }

    fn render(&self) -> CamResult<()> {
        self.apply_positioning()?;
        self.apply_border()?;
        self.apply_shape()
    }

    fn apply_positioning(&self) -> CamResult<()> {
        let transform = self.view.transform();
        trace!(%transform, "positioning");
        self.surface.set_transform(&transform)
    }

    // has-border is only ever added here; turning the border off needs a reload.
    fn apply_border(&self) -> CamResult<()> {
        if let Some(color) = self.settings.border_color() {
            self.surface
                .set_custom_property(BORDER_COLOR_PROPERTY, color)?;
        }
        if self.settings.show_border {
            self.surface.add_class(HAS_BORDER_CLASS)?;
        }
        Ok(())
    }

    fn apply_shape(&self) -> CamResult<()> {
        if self.view.is_rounded {
            self.surface.add_class(ROUNDED_CLASS)?;
        } else {
            self.surface.remove_class(ROUNDED_CLASS)?;
        }

        match self.settings.clip_path() {
            Some(path) if self.view.is_clipped => {
                self.surface.add_class(HAS_CLIP_PATH_CLASS)?;
                self.surface.set_custom_property(CLIP_PATH_PROPERTY, path)
            }
            // --clip-path keeps its last value; the class alone gates it.
            _ => self.surface.remove_class(HAS_CLIP_PATH_CLASS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CamError;
    use crate::surface::testing::RecordingSurface;

    fn controller(settings: Settings) -> CameraController<RecordingSurface> {
        CameraController::new(settings, RecordingSurface::default()).unwrap()
    }

    #[test]
    fn initial_render_applies_identity_transform() {
        let c = controller(Settings::default());
        let s = c.surface();
        assert_eq!(
            s.transform().as_deref(),
            Some("translate(0%, 0%) scale(1)")
        );
        assert!(!s.has_class(ROUNDED_CLASS));
        assert!(!s.has_class(HAS_BORDER_CLASS));
        assert!(!s.has_class(HAS_CLIP_PATH_CLASS));
        assert_eq!(s.property(BORDER_COLOR_PROPERTY), None);
    }

    #[test]
    fn border_is_applied_and_survives_rounding() {
        let mut c = controller(Settings {
            show_border: true,
            border_color_css: Some("#ff0000".into()),
            ..Settings::default()
        });
        assert!(c.surface().has_class(HAS_BORDER_CLASS));
        assert_eq!(
            c.surface().property(BORDER_COLOR_PROPERTY).as_deref(),
            Some("#ff0000")
        );

        c.round().unwrap();
        assert!(c.surface().has_class(ROUNDED_CLASS));
        assert!(c.surface().has_class(HAS_BORDER_CLASS));

        c.round().unwrap();
        assert!(!c.surface().has_class(ROUNDED_CLASS));
        assert!(c.surface().has_class(HAS_BORDER_CLASS));
    }

    #[test]
    fn border_color_without_show_border_sets_only_the_property() {
        let c = controller(Settings {
            border_color_css: Some("teal".into()),
            ..Settings::default()
        });
        assert_eq!(
            c.surface().property(BORDER_COLOR_PROPERTY).as_deref(),
            Some("teal")
        );
        assert!(!c.surface().has_class(HAS_BORDER_CLASS));
    }

    #[test]
    fn clipping_requires_a_configured_path() {
        let mut c = controller(Settings::default());
        assert!(!c.view().is_clipped);
        c.clip().unwrap();
        assert!(c.view().is_clipped);
        assert!(!c.surface().has_class(HAS_CLIP_PATH_CLASS));
        assert_eq!(c.surface().property(CLIP_PATH_PROPERTY), None);
    }

    #[test]
    fn clip_toggle_leaves_property_stale() {
        let mut c = controller(Settings {
            clip_path: Some("circle(50%)".into()),
            ..Settings::default()
        });
        assert!(c.view().is_clipped);
        assert!(c.surface().has_class(HAS_CLIP_PATH_CLASS));
        assert_eq!(
            c.surface().property(CLIP_PATH_PROPERTY).as_deref(),
            Some("circle(50%)")
        );

        c.clip().unwrap();
        assert!(!c.surface().has_class(HAS_CLIP_PATH_CLASS));
        assert_eq!(
            c.surface().property(CLIP_PATH_PROPERTY).as_deref(),
            Some("circle(50%)")
        );

        c.clip().unwrap();
        assert!(c.surface().has_class(HAS_CLIP_PATH_CLASS));
    }

    #[test]
    fn every_action_rerenders_the_transform() {
        let mut c = controller(Settings::default());
        c.adjust_offset(PanDirection::Right).unwrap();
        assert_eq!(
            c.surface().transform().as_deref(),
            Some("translate(1%, 0%) scale(1)")
        );
        c.adjust_offset(PanDirection::Up).unwrap();
        c.zoom(ZoomDirection::Out).unwrap();
        assert_eq!(
            c.surface().transform().as_deref(),
            Some("translate(1%, -1%) scale(0.9)")
        );
        c.flip_horizontal().unwrap();
        assert_eq!(
            c.surface().transform().as_deref(),
            Some("translate(1%, -1%) scale(0.9) rotateY(180deg)")
        );
        c.reset().unwrap();
        assert_eq!(
            c.surface().transform().as_deref(),
            Some("translate(1%, -1%) scale(1) rotateY(180deg)")
        );
    }

    #[test]
    fn flip_twice_restores_rendered_transform() {
        let mut c = controller(Settings {
            anchor_x: 5.0,
            ..Settings::default()
        });
        let before = c.surface().transform();
        c.flip_horizontal().unwrap();
        c.flip_horizontal().unwrap();
        assert!(!c.view().is_flipped);
        assert_eq!(c.surface().transform(), before);
    }

    #[test]
    fn apply_dispatches_each_action() {
        let mut c = controller(Settings::default());
        c.apply(CameraAction::Pan(PanDirection::Left)).unwrap();
        c.apply(CameraAction::Pan(PanDirection::Down)).unwrap();
        c.apply(CameraAction::Zoom(ZoomDirection::In)).unwrap();
        c.apply(CameraAction::Flip).unwrap();
        c.apply(CameraAction::Round).unwrap();
        c.apply(CameraAction::Clip).unwrap();
        let v = c.view();
        assert_eq!((v.offset_x, v.offset_y), (-1.0, 1.0));
        assert!((v.zoom_scale - 1.1).abs() < 1e-9);
        assert!(v.is_flipped && v.is_rounded && v.is_clipped);

        c.apply(CameraAction::Reset).unwrap();
        assert_eq!(c.view().zoom_scale, 1.0);
        assert_eq!(c.view().offset_x, -1.0);
    }

    struct BrokenClassList;

    impl ViewSurface for BrokenClassList {
        fn set_transform(&self, _: &str) -> CamResult<()> {
            Ok(())
        }
        fn add_class(&self, _: &str) -> CamResult<()> {
            Err(CamError::Dom {
                op: "wrapper.classList.add",
                message: "boom".into(),
            })
        }
        fn remove_class(&self, _: &str) -> CamResult<()> {
            Ok(())
        }
        fn set_custom_property(&self, _: &str, _: &str) -> CamResult<()> {
            Ok(())
        }
    }

    #[test]
    fn surface_failures_propagate() {
        let mut c = CameraController::new(Settings::default(), BrokenClassList).unwrap();
        let err = c.round().unwrap_err();
        assert_eq!(err.to_string(), "DOM call `wrapper.classList.add` failed: boom");

        let settings = Settings {
            show_border: true,
            ..Settings::default()
        };
        assert!(CameraController::new(settings, BrokenClassList).is_err());
    }
}
