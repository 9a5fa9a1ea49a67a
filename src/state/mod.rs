pub mod action;
pub mod camera;

pub use action::{CameraAction, PanDirection, ZoomDirection};
pub use camera::ViewState;
