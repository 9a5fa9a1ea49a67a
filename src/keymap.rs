// Keyboard shortcuts for the camera controls.
use crate::state::{CameraAction, PanDirection, ZoomDirection};

/// Maps a `KeyboardEvent.key` value to a camera action.
pub fn action_for_key(key: &str) -> Option<CameraAction> {
    let action = match key {
        "ArrowLeft" => CameraAction::Pan(PanDirection::Left),
        "ArrowRight" => CameraAction::Pan(PanDirection::Right),
        "ArrowUp" => CameraAction::Pan(PanDirection::Up),
        "ArrowDown" => CameraAction::Pan(PanDirection::Down),
        "+" | "=" => CameraAction::Zoom(ZoomDirection::In),
        "-" | "_" => CameraAction::Zoom(ZoomDirection::Out),
        "0" => CameraAction::Reset,
        "f" | "F" => CameraAction::Flip,
        "r" | "R" => CameraAction::Round,
        "c" | "C" => CameraAction::Clip,
        _ => return None,
    };
    Some(action)
}
