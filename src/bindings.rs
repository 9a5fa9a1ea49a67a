//! View commands exported to the host page.
//!
//! Scripts on the page can drive the camera with the same commands the
//! buttons and keys use, e.g. `adjustOffset("left")` or `zoom("in")`.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;
use wasm_bindgen::prelude::*;

use crate::controller::CameraController;
use crate::error::{CamError, CamResult};
use crate::state::{CameraAction, PanDirection, ZoomDirection};
use crate::surface::DomSurface;

/// Controller slot shared by the UI and the exported commands.
pub type SharedController = Rc<RefCell<Option<CameraController<DomSurface>>>>;

thread_local! {
    static ACTIVE: RefCell<Option<SharedController>> = const { RefCell::new(None) };
}

/// Makes `controller` the target of the exported commands.
pub fn register(controller: SharedController) {
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(controller));
}

pub fn unregister() {
    ACTIVE.with(|slot| slot.borrow_mut().take());
}

fn run(action: CameraAction) -> CamResult<()> {
    let shared = ACTIVE
        .with(|slot| slot.borrow().clone())
        .ok_or(CamError::NotStarted)?;
    let mut guard = shared.borrow_mut();
    let controller = guard.as_mut().ok_or(CamError::NotStarted)?;
    debug!(?action, "command from page");
    controller.apply(action)
}

fn command(action: CamResult<CameraAction>) -> Result<(), String> {
    action.and_then(run).map_err(|e| e.to_string())
}

#[wasm_bindgen(js_name = flipHorizontal)]
pub fn flip_horizontal() -> Result<(), String> {
    command(Ok(CameraAction::Flip))
}

/// Pans one step; `direction` is `left`, `right`, `up` or `down`.
#[wasm_bindgen(js_name = adjustOffset)]
pub fn adjust_offset(direction: &str) -> Result<(), String> {
    command(direction.parse::<PanDirection>().map(CameraAction::Pan))
}

/// Zooms one step; `direction` is `in` or `out`.
#[wasm_bindgen]
pub fn zoom(direction: &str) -> Result<(), String> {
    command(direction.parse::<ZoomDirection>().map(CameraAction::Zoom))
}

#[wasm_bindgen]
pub fn reset() -> Result<(), String> {
    command(Ok(CameraAction::Reset))
}

#[wasm_bindgen]
pub fn round() -> Result<(), String> {
    command(Ok(CameraAction::Round))
}

#[wasm_bindgen]
pub fn clip() -> Result<(), String> {
    command(Ok(CameraAction::Clip))
}
