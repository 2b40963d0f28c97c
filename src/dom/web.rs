//! The `web-sys` backed DOM.
use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

use super::ReadyState;
use crate::error::{Error, Result};

/// The browser document.
#[derive(Clone, Debug)]
pub struct Document(web_sys::Document);

impl Document {
    /// Returns the document of the global window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoDocument`] if there is no global window or it has no document, e.g.
    /// when running inside a worker.
    pub fn global() -> Result<Self> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self)
            .ok_or(Error::NoDocument)
    }
}

impl From<web_sys::Document> for Document {
    #[inline]
    fn from(document: web_sys::Document) -> Self {
        Self(document)
    }
}

impl super::Document for Document {
    type Element = Element;

    fn ready_state(&self) -> ReadyState {
        ReadyState::from_dom(&self.0.ready_state())
    }

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.0.get_element_by_id(id).map(Element)
    }

    fn create_element(&self, tag: &'static str) -> Result<Element> {
        self.0
            .create_element(tag)
            .map(Element)
            .map_err(|err| Error::CreateElement {
                tag,
                message: js_message(err),
            })
    }

    fn body(&self) -> Option<Element> {
        self.0.body().map(|body| Element(body.into()))
    }

    fn on_content_loaded(&self, f: Box<dyn FnOnce()>) -> Result<()> {
        EventListener::once(&self.0, "DOMContentLoaded", move |_| f()).forget();
        Ok(())
    }
}

#[derive(Clone, Debug)]
pub struct Element(web_sys::Element);

impl super::Element for Element {
    fn set_attribute(&self, name: &'static str, value: &str) -> Result<()> {
        self.0
            .set_attribute(name, value)
            .map_err(|err| Error::SetAttribute {
                name,
                message: js_message(err),
            })
    }

    fn set_style_property(&self, property: &'static str, value: &str) -> Result<()> {
        let element = match self.0.dyn_ref::<HtmlElement>() {
            Some(element) => element,
            None => {
                return Err(Error::SetStyle {
                    property,
                    message: String::from("not an html element"),
                })
            }
        };

        let style = element.style();
        let res = if value.is_empty() {
            style.remove_property(property).map(|_| ())
        } else {
            style.set_property(property, value)
        };

        res.map_err(|err| Error::SetStyle {
            property,
            message: js_message(err),
        })
    }

    fn set_text_content(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn append_child(&self, child: &Self) -> Result<()> {
        self.0
            .append_child(&child.0)
            .map(|_| ())
            .map_err(|err| Error::AppendChild(js_message(err)))
    }

    fn add_event_listener(&self, event: &'static str, mut f: Box<dyn FnMut()>) -> Result<()> {
        // The launcher is never removed, so the listener is leaked together with it.
        EventListener::new(&self.0, event, move |_| f()).forget();
        Ok(())
    }
}

fn js_message(value: JsValue) -> String {
    match value.as_string() {
        Some(s) => s,
        None => format!("{:?}", value),
    }
}
