//! A minimal view of the host DOM.
//!
//! The injector only talks to the DOM through [`Document`] and [`Element`]. In the browser these
//! are implemented by [`web`] on top of `web-sys`.
#[cfg(test)]
pub mod mock;
pub mod web;

use crate::error::Result;
use crate::style::Style;

/// The ready state of a document.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReadyState {
    /// The document is still being parsed. `DOMContentLoaded` has not fired yet.
    Loading,
    Interactive,
    Complete,
}

impl ReadyState {
    /// Maps the value of `document.readyState`. Unknown values are treated as
    /// [`ReadyState::Complete`].
    pub fn from_dom(state: &str) -> Self {
        match state {
            "loading" => Self::Loading,
            "interactive" => Self::Interactive,
            _ => Self::Complete,
        }
    }

    #[inline]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }
}

pub trait Document: Clone + 'static {
    type Element: Element;

    fn ready_state(&self) -> ReadyState;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn create_element(&self, tag: &'static str) -> Result<Self::Element>;

    /// Returns the `<body>` element, if the document has one yet.
    fn body(&self) -> Option<Self::Element>;

    /// Calls `f` once the `DOMContentLoaded` event is dispatched on the document.
    fn on_content_loaded(&self, f: Box<dyn FnOnce()>) -> Result<()>;
}

pub trait Element: Clone + 'static {
    fn set_attribute(&self, name: &'static str, value: &str) -> Result<()>;

    /// Sets a single inline style property. An empty `value` removes the property.
    fn set_style_property(&self, property: &'static str, value: &str) -> Result<()>;

    fn set_text_content(&self, text: &str);

    fn append_child(&self, child: &Self) -> Result<()>;

    /// Calls `f` every time `event` is dispatched on the element. The listener lives as long as
    /// the page.
    fn add_event_listener(&self, event: &'static str, f: Box<dyn FnMut()>) -> Result<()>;

    fn set_style(&self, style: &Style) -> Result<()> {
        for (property, value) in style.iter() {
            self.set_style_property(property, value)?;
        }

        Ok(())
    }
}
