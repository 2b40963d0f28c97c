//! Idempotent insertion of the feedback launcher.
//!
//! The launcher is attached to the `<body>` at most once per document. Every insertion attempt,
//! immediate or deferred until `DOMContentLoaded`, checks for the reserved id first.
use crate::config::Config;
use crate::dom::{Document, Element};
use crate::error::Result;
use crate::launcher::FeedbackLauncher;

/// The result of an injection attempt.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The launcher was attached to the body.
    Inserted,
    /// The document is still loading. The launcher is attached once `DOMContentLoaded` fires.
    Deferred,
    /// A launcher already exists in the document. Nothing was changed.
    AlreadyPresent,
    /// The document has finished loading but has no body.
    NoBody,
    /// Building or inserting the launcher failed. The error was logged.
    Failed,
}

impl Outcome {
    /// Returns `true` if the launcher was attached by this call.
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Ensures the document contains the feedback launcher.
///
/// This never fails: errors are logged and reported as [`Outcome::Failed`]. Calling this any
/// number of times on the same document results in exactly one launcher.
pub fn ensure_feedback_button<D>(document: &D, config: &Config) -> Outcome
where
    D: Document,
{
    match initialize_once(document, config) {
        Ok(outcome) => {
            log_outcome(outcome);
            outcome
        }
        Err(err) => {
            log::error!("gb_feedback init error: {}", err);
            Outcome::Failed
        }
    }
}

/// Builds the launcher and attaches it to the body of `document`, or schedules the attachment
/// if the document is still loading.
pub fn initialize_once<D>(document: &D, config: &Config) -> Result<Outcome>
where
    D: Document,
{
    let launcher = FeedbackLauncher::new(config);

    if document.get_element_by_id(launcher.id).is_some() {
        return Ok(Outcome::AlreadyPresent);
    }

    let element = build(document, &launcher)?;

    if document.ready_state().is_loading() {
        let doc = document.clone();
        let id = launcher.id;

        document.on_content_loaded(Box::new(move || match attach(&doc, id, &element) {
            Ok(outcome) => log_outcome(outcome),
            Err(err) => log::error!("gb_feedback init error: {}", err),
        }))?;

        return Ok(Outcome::Deferred);
    }

    attach(document, launcher.id, &element)
}

fn log_outcome(outcome: Outcome) {
    match outcome {
        Outcome::NoBody => log::warn!("Cannot insert feedback launcher: document has no body"),
        outcome => log::debug!("feedback launcher: {:?}", outcome),
    }
}

/// Appends `element` to the body unless an element with `id` already exists.
fn attach<D>(document: &D, id: &str, element: &D::Element) -> Result<Outcome>
where
    D: Document,
{
    let body = match document.body() {
        Some(body) => body,
        None => return Ok(Outcome::NoBody),
    };

    if document.get_element_by_id(id).is_some() {
        return Ok(Outcome::AlreadyPresent);
    }

    body.append_child(element)?;
    Ok(Outcome::Inserted)
}

/// Creates the detached launcher element with all its children and listeners.
fn build<D>(document: &D, launcher: &FeedbackLauncher) -> Result<D::Element>
where
    D: Document,
{
    let anchor = document.create_element("a")?;
    anchor.set_attribute("id", launcher.id)?;
    anchor.set_attribute("href", launcher.href())?;
    anchor.set_attribute("title", launcher.title)?;
    anchor.set_attribute("aria-label", launcher.aria_label())?;
    anchor.set_style(&launcher.style)?;

    let icon = document.create_element("img")?;
    icon.set_attribute("src", launcher.icon.src)?;
    icon.set_attribute("alt", launcher.icon.alt)?;
    icon.set_style(&launcher.icon.style)?;
    anchor.append_child(&icon)?;

    let label = document.create_element("span")?;
    label.set_text_content(launcher.label.text);
    label.set_style(&launcher.label.style)?;
    anchor.append_child(&label)?;

    if let Some(hover) = &launcher.hover {
        let enter = hover.enter.clone();
        let target = anchor.clone();
        anchor.add_event_listener(
            "mouseenter",
            Box::new(move || {
                if let Err(err) = target.set_style(&enter) {
                    log::error!("Failed to apply hover style: {}", err);
                }
            }),
        )?;

        let leave = hover.leave.clone();
        let target = anchor.clone();
        anchor.add_event_listener(
            "mouseleave",
            Box::new(move || {
                if let Err(err) = target.set_style(&leave) {
                    log::error!("Failed to revert hover style: {}", err);
                }
            }),
        )?;
    }

    Ok(anchor)
}
