use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use super::camera_controls::CameraControls;
use crate::bindings::{self, SharedController};
use crate::config::{self, Settings};
use crate::controller::CameraController;
use crate::error::{CamError, CamResult, ConfigError};
use crate::keymap::action_for_key;
use crate::state::CameraAction;
use crate::surface::{DomSurface, VIDEO_ID, WRAPPER_ID};

fn settings_from_page() -> Result<Settings, ConfigError> {
    let window = web_sys::window().ok_or(ConfigError::MissingGlobal("window"))?;
    config::from_window(&window)
}

fn start_controller(settings: &Settings) -> CamResult<CameraController<DomSurface>> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(CamError::MissingElement("document"))?;
    let surface = DomSurface::from_document(&document)?;
    CameraController::new(settings.clone(), surface)
}

fn dispatch(controller: &SharedController, action: CameraAction) {
    match controller.borrow_mut().as_mut() {
        Some(c) => {
            if let Err(err) = c.apply(action) {
                warn!(%err, ?action, view = ?c.view(), "camera action failed");
            }
        }
        None => debug!(?action, "camera not started; action dropped"),
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_memo((), |_| {
        let loaded = settings_from_page();
        match &loaded {
            Ok(s) => info!(
                width = s.width,
                height = s.height,
                frame_rate = s.frame_rate,
                "camera settings loaded"
            ),
            Err(err) => error!(%err, "camera settings unavailable"),
        }
        loaded
    });
    let controller: SharedController = use_mut_ref(|| None);
    let failure = use_state(|| None::<String>);

    // Start the controller once #wrapper and #video are mounted
    {
        let settings = settings.clone();
        let controller = controller.clone();
        let failure = failure.clone();
        use_effect_with((), move |_| {
            if let Ok(settings) = &*settings {
                match start_controller(settings) {
                    Ok(c) => {
                        *controller.borrow_mut() = Some(c);
                        bindings::register(controller.clone());
                    }
                    Err(err) => {
                        error!(%err, "camera controller could not start");
                        failure.set(Some(err.to_string()));
                    }
                }
            }
            bindings::unregister
        });
    }

    // Keyboard shortcuts
    {
        let controller = controller.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window();
            let key_cb = Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if e.ctrl_key() || e.meta_key() || e.alt_key() {
                    return;
                }
                if let Some(action) = action_for_key(&e.key()) {
                    e.prevent_default();
                    dispatch(&controller, action);
                }
            }) as Box<dyn FnMut(_)>);
            if let Some(w) = &window {
                if let Err(e) =
                    w.add_event_listener_with_callback("keydown", key_cb.as_ref().unchecked_ref())
                {
                    warn!(err = %crate::error::js_message(&e), "keyboard shortcuts unavailable");
                }
            }
            move || {
                if let Some(w) = &window {
                    let _ = w.remove_event_listener_with_callback(
                        "keydown",
                        key_cb.as_ref().unchecked_ref(),
                    );
                }
                drop(key_cb);
            }
        });
    }

    let on_action = {
        let controller = controller.clone();
        Callback::from(move |action: CameraAction| dispatch(&controller, action))
    };

    if let Err(err) = &*settings {
        return html! {
            <div class="startup-error">{ format!("Camera settings unavailable: {err}") }</div>
        };
    }

    html! {
        <>
            <div id={WRAPPER_ID}>
                <video id={VIDEO_ID} autoplay={true} muted={true} />
            </div>
            <CameraControls {on_action} />
            {
                if let Some(msg) = &*failure {
                    html! { <div class="startup-error">{ msg.clone() }</div> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
