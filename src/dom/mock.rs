//! An in-memory DOM for tests.
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::ReadyState;
use crate::error::{Error, Result};

#[derive(Clone)]
pub struct Document {
    inner: Rc<RefCell<DocumentInner>>,
}

struct DocumentInner {
    ready_state: ReadyState,
    body: Option<Element>,
    on_content_loaded: Vec<Box<dyn FnOnce()>>,
    /// Tag names for which `create_element` fails.
    failing_tags: Vec<&'static str>,
}

impl Document {
    pub fn new(ready_state: ReadyState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(DocumentInner {
                ready_state,
                body: Some(Element::new("body")),
                on_content_loaded: Vec::new(),
                failing_tags: Vec::new(),
            })),
        }
    }

    /// Creates a document without a `<body>`.
    pub fn without_body(ready_state: ReadyState) -> Self {
        let this = Self::new(ready_state);
        this.inner.borrow_mut().body = None;
        this
    }

    pub fn fail_on(&self, tag: &'static str) {
        self.inner.borrow_mut().failing_tags.push(tag);
    }

    pub fn set_body(&self, body: Option<Element>) {
        self.inner.borrow_mut().body = body;
    }

    /// Finishes parsing and dispatches `DOMContentLoaded`.
    pub fn dispatch_content_loaded(&self) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.ready_state = ReadyState::Interactive;
            std::mem::take(&mut inner.on_content_loaded)
        };

        for f in listeners {
            f();
        }
    }

    pub fn pending_listeners(&self) -> usize {
        self.inner.borrow().on_content_loaded.len()
    }

    /// Returns the number of attached elements with the given id.
    pub fn count_by_id(&self, id: &str) -> usize {
        match &self.inner.borrow().body {
            Some(body) => body.count_by_id(id),
            None => 0,
        }
    }
}

impl super::Document for Document {
    type Element = Element;

    fn ready_state(&self) -> ReadyState {
        self.inner.borrow().ready_state
    }

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.inner.borrow().body.as_ref()?.find_by_id(id)
    }

    fn create_element(&self, tag: &'static str) -> Result<Element> {
        if self.inner.borrow().failing_tags.contains(&tag) {
            return Err(Error::CreateElement {
                tag,
                message: String::from("NotSupportedError"),
            });
        }

        Ok(Element::new(tag))
    }

    fn body(&self) -> Option<Element> {
        self.inner.borrow().body.clone()
    }

    fn on_content_loaded(&self, f: Box<dyn FnOnce()>) -> Result<()> {
        self.inner.borrow_mut().on_content_loaded.push(f);
        Ok(())
    }
}

#[derive(Clone)]
pub struct Element {
    inner: Rc<RefCell<ElementInner>>,
}

struct ElementInner {
    tag: &'static str,
    attributes: BTreeMap<&'static str, String>,
    style: BTreeMap<&'static str, String>,
    text: Option<String>,
    children: Vec<Element>,
    listeners: HashMap<&'static str, Vec<Box<dyn FnMut()>>>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ElementInner {
                tag,
                attributes: BTreeMap::new(),
                style: BTreeMap::new(),
                text: None,
                children: Vec::new(),
                listeners: HashMap::new(),
            })),
        }
    }

    pub fn tag(&self) -> &'static str {
        self.inner.borrow().tag
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.inner.borrow().attributes.get(name).cloned()
    }

    pub fn style(&self, property: &str) -> Option<String> {
        self.inner.borrow().style.get(property).cloned()
    }

    pub fn text(&self) -> Option<String> {
        self.inner.borrow().text.clone()
    }

    pub fn children(&self) -> Vec<Element> {
        self.inner.borrow().children.clone()
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.inner
            .borrow()
            .listeners
            .get(event)
            .map(Vec::len)
            .unwrap_or(0)
    }

    /// Dispatches `event` on the element, calling all its listeners.
    pub fn dispatch(&self, event: &'static str) {
        let mut listeners = match self.inner.borrow_mut().listeners.remove(event) {
            Some(listeners) => listeners,
            None => return,
        };

        for f in listeners.iter_mut() {
            f();
        }

        self.inner.borrow_mut().listeners.insert(event, listeners);
    }

    fn find_by_id(&self, id: &str) -> Option<Element> {
        let inner = self.inner.borrow();
        if inner.attributes.get("id").map(String::as_str) == Some(id) {
            return Some(self.clone());
        }

        inner.children.iter().find_map(|child| child.find_by_id(id))
    }

    fn count_by_id(&self, id: &str) -> usize {
        let inner = self.inner.borrow();
        let this = usize::from(inner.attributes.get("id").map(String::as_str) == Some(id));

        this + inner
            .children
            .iter()
            .map(|child| child.count_by_id(id))
            .sum::<usize>()
    }
}

impl super::Element for Element {
    fn set_attribute(&self, name: &'static str, value: &str) -> Result<()> {
        self.inner
            .borrow_mut()
            .attributes
            .insert(name, value.to_owned());
        Ok(())
    }

    fn set_style_property(&self, property: &'static str, value: &str) -> Result<()> {
        let mut inner = self.inner.borrow_mut();
        if value.is_empty() {
            inner.style.remove(property);
        } else {
            inner.style.insert(property, value.to_owned());
        }

        Ok(())
    }

    fn set_text_content(&self, text: &str) {
        self.inner.borrow_mut().text = Some(text.to_owned());
    }

    fn append_child(&self, child: &Self) -> Result<()> {
        if Rc::ptr_eq(&self.inner, &child.inner) {
            return Err(Error::AppendChild(String::from("HierarchyRequestError")));
        }

        self.inner.borrow_mut().children.push(child.clone());
        Ok(())
    }

    fn add_event_listener(&self, event: &'static str, f: Box<dyn FnMut()>) -> Result<()> {
        self.inner
            .borrow_mut()
            .listeners
            .entry(event)
            .or_default()
            .push(f);
        Ok(())
    }
}
