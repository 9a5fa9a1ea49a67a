use crate::state::{CameraAction, PanDirection, ZoomDirection};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CameraControlsProps {
    pub on_action: Callback<CameraAction>,
}

fn emit(cb: &Callback<CameraAction>, action: CameraAction) -> Callback<MouseEvent> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(action))
}

#[function_component(CameraControls)]
pub fn camera_controls(props: &CameraControlsProps) -> Html {
    let cb = &props.on_action;
    let zi = emit(cb, CameraAction::Zoom(ZoomDirection::In));
    let zo = emit(cb, CameraAction::Zoom(ZoomDirection::Out));
    let pl = emit(cb, CameraAction::Pan(PanDirection::Left));
    let pr = emit(cb, CameraAction::Pan(PanDirection::Right));
    let pu = emit(cb, CameraAction::Pan(PanDirection::Up));
    let pd = emit(cb, CameraAction::Pan(PanDirection::Down));
    let reset = emit(cb, CameraAction::Reset);
    let flip = emit(cb, CameraAction::Flip);
    let round = emit(cb, CameraAction::Round);
    let clip = emit(cb, CameraAction::Clip);
    html! {<div class="camera-controls" style="position:fixed; left:12px; bottom:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; display:flex; gap:6px; align-items:center;">
        <button title="Zoom out (-)" onclick={zo}> {"-"} </button>
        <button title="Zoom in (+)" onclick={zi}> {"+"} </button>
        <button title="Reset zoom (0)" onclick={reset}> {"1:1"} </button>
        <span style="width:8px;"></span>
        <button title="Move left" onclick={pl}> {"←"} </button>
        <button title="Move up" onclick={pu}> {"↑"} </button>
        <button title="Move down" onclick={pd}> {"↓"} </button>
        <button title="Move right" onclick={pr}> {"→"} </button>
        <span style="width:8px;"></span>
        <button title="Mirror (F)" onclick={flip}> {"Flip"} </button>
        <button title="Rounded corners (R)" onclick={round}> {"Round"} </button>
        <button title="Clip path (C)" onclick={clip}> {"Clip"} </button>
    </div>}
}
