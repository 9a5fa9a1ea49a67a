//! Style surface the controller renders onto.
//!
//! The controller never touches the DOM directly. It writes through
//! [`ViewSurface`], which [`DomSurface`] implements for the live page and
//! tests implement with an in-memory recorder.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::error::{CamError, CamResult};

/// Id of the container whose classes encode border and shape.
pub const WRAPPER_ID: &str = "wrapper";
/// Id of the video element that receives the transform.
pub const VIDEO_ID: &str = "video";

/// Style writes the controller needs.
pub trait ViewSurface {
    /// Sets the video element's inline `transform`.
    fn set_transform(&self, value: &str) -> CamResult<()>;
    /// Adds a marker class to the wrapper. Adding a present class is a no-op.
    fn add_class(&self, class: &str) -> CamResult<()>;
    /// Removes a marker class from the wrapper. Removing an absent class is a no-op.
    fn remove_class(&self, class: &str) -> CamResult<()>;
    /// Sets a CSS custom property on the document root.
    fn set_custom_property(&self, name: &str, value: &str) -> CamResult<()>;
}

/// Handles to the three elements of the live page.
#[derive(Clone, Debug)]
pub struct DomSurface {
    wrapper: HtmlElement,
    video: HtmlElement,
    root: HtmlElement,
}

impl DomSurface {
    pub fn new(wrapper: HtmlElement, video: HtmlElement, root: HtmlElement) -> Self {
        Self {
            wrapper,
            video,
            root,
        }
    }

    /// Looks up `#wrapper`, `#video` and the root element.
    ///
    /// Fails immediately if any of them is missing.
    pub fn from_document(document: &Document) -> CamResult<Self> {
        let wrapper = html_by_id(document, WRAPPER_ID)?;
        let video = html_by_id(document, VIDEO_ID)?;
        let root = document
            .document_element()
            .ok_or(CamError::MissingElement(":root"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| CamError::NotHtmlElement(":root"))?;
        Ok(Self::new(wrapper, video, root))
    }
}

fn html_by_id(document: &Document, id: &'static str) -> CamResult<HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or(CamError::MissingElement(id))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| CamError::NotHtmlElement(id))
}

impl ViewSurface for DomSurface {
    fn set_transform(&self, value: &str) -> CamResult<()> {
        self.video
            .style()
            .set_property("transform", value)
            .map_err(|e| CamError::dom("video.style.setProperty", &e))
    }

    fn add_class(&self, class: &str) -> CamResult<()> {
        self.wrapper
            .class_list()
            .add_1(class)
            .map_err(|e| CamError::dom("wrapper.classList.add", &e))
    }

    fn remove_class(&self, class: &str) -> CamResult<()> {
        self.wrapper
            .class_list()
            .remove_1(class)
            .map_err(|e| CamError::dom("wrapper.classList.remove", &e))
    }

    fn set_custom_property(&self, name: &str, value: &str) -> CamResult<()> {
        self.root
            .style()
            .set_property(name, value)
            .map_err(|e| CamError::dom("root.style.setProperty", &e))
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn from_document_needs_wrapper_and_video() {
        let document = web_sys::window().unwrap().document().unwrap();
        let body = document.body().unwrap();
        assert!(matches!(
            DomSurface::from_document(&document),
            Err(CamError::MissingElement(WRAPPER_ID))
        ));

        let wrapper = document.create_element("div").unwrap();
        wrapper.set_id(WRAPPER_ID);
        body.append_child(&wrapper).unwrap();
        assert!(matches!(
            DomSurface::from_document(&document),
            Err(CamError::MissingElement(VIDEO_ID))
        ));

        let video = document.create_element("video").unwrap();
        video.set_id(VIDEO_ID);
        wrapper.append_child(&video).unwrap();
        let surface = DomSurface::from_document(&document).unwrap();

        surface.add_class("rounded").unwrap();
        assert!(wrapper.class_list().contains("rounded"));
        surface.set_transform("scale(2)").unwrap();
        assert_eq!(
            video.get_attribute("style").as_deref(),
            Some("transform: scale(2);")
        );

        wrapper.remove();
    }
}
