//! Compile-time constants of the feedback launcher.
//!
//! These are fixed for every page the launcher is injected into. Visual options that differ
//! between pages live in [`Config`](crate::Config) instead.

/// The reserved id of the launcher element. An element with this id is never inserted twice.
pub const ELEMENT_ID: &str = "gb-feedback";

/// The address that receives the feedback mails.
pub const RECIPIENT: &str = "detlefdev@gmail.com";

/// The unencoded subject line of the feedback mail.
pub const SUBJECT: &str = "Feedback zur Karte Gebäudebrüter in Berlin";

/// Used for the `title`, the `aria-label` and the offscreen label.
pub const LABEL: &str = "Feedback senden";

/// Path of the icon, relative to the host page.
pub const ICON_SRC: &str = "images/edit.png";

pub const ICON_ALT: &str = "Feedback";

/// Stacking order of the launcher. Must stay above the map controls.
pub const Z_INDEX: u32 = 10050;

pub const BORDER_RADIUS: &str = "8px";
pub const PADDING: &str = "6px";
pub const TRANSITION: &str = "transform 0.12s ease, box-shadow 0.12s ease";
pub const HOVER_TRANSFORM: &str = "translateY(-2px) scale(1.06)";

/// Offset used to move the screen reader label out of the viewport.
pub const OFFSCREEN_LEFT: &str = "-9999px";
