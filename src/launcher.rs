//! The description of the feedback launcher element.
//!
//! [`FeedbackLauncher`] holds everything the injector needs to build the element: its
//! attributes, inline styles, children and hover styles. It never touches the DOM itself.
use crate::config::Config;
use crate::consts::{
    BORDER_RADIUS, ELEMENT_ID, HOVER_TRANSFORM, ICON_ALT, ICON_SRC, LABEL, OFFSCREEN_LEFT,
    PADDING, RECIPIENT, SUBJECT, TRANSITION, Z_INDEX,
};
use crate::mailto::MailtoUri;
use crate::style::Style;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackLauncher {
    pub id: &'static str,
    href: String,
    pub title: &'static str,
    pub style: Style,
    pub icon: Icon,
    pub label: OffscreenLabel,
    /// `None` if the hover effect is disabled.
    pub hover: Option<Hover>,
}

impl FeedbackLauncher {
    pub fn new(config: &Config) -> Self {
        let href = MailtoUri::new(RECIPIENT).subject(SUBJECT).to_string();

        let size = format!("{}px", config.size);
        let offset = format!("{}px", config.position.offset);
        let (vertical, horizontal) = config.position.corner.properties();
        let shadow = baseline_shadow(config);

        let mut style = Style::new()
            .set("position", "fixed")
            .set(horizontal, &offset)
            .set(vertical, &offset)
            .set("z-index", Z_INDEX)
            .set("display", "inline-block")
            .set("width", &size)
            .set("height", &size)
            .set("background", &config.colors.background)
            .set("border-radius", BORDER_RADIUS)
            .set("box-shadow", &shadow)
            .set("padding", PADDING)
            .set("text-decoration", "none")
            .set("cursor", "pointer")
            .set("border", format!("1px solid {}", config.colors.border));

        let hover = if config.hover_effect_enabled {
            style = style.set("transition", TRANSITION);

            Some(Hover {
                enter: Style::new()
                    .set("transform", HOVER_TRANSFORM)
                    .set(
                        "box-shadow",
                        format!("0 6px 18px {}", config.colors.hover_shadow),
                    ),
                leave: Style::new()
                    .set("transform", "")
                    .set("box-shadow", shadow),
            })
        } else {
            None
        };

        Self {
            id: ELEMENT_ID,
            href,
            title: LABEL,
            style,
            icon: Icon::default(),
            label: OffscreenLabel::default(),
            hover,
        }
    }

    /// Returns the mail-compose URI the launcher opens. It is fixed once the launcher is built.
    #[inline]
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Returns the `aria-label` of the launcher. This is always the same as the title.
    #[inline]
    pub fn aria_label(&self) -> &'static str {
        self.title
    }
}

fn baseline_shadow(config: &Config) -> String {
    format!("0 3px 10px {}", config.colors.shadow)
}

/// The icon filling the launcher. Pointer events pass through to the anchor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Icon {
    pub src: &'static str,
    pub alt: &'static str,
    pub style: Style,
}

impl Default for Icon {
    fn default() -> Self {
        Self {
            src: ICON_SRC,
            alt: ICON_ALT,
            style: Style::new()
                .set("width", "100%")
                .set("height", "100%")
                .set("display", "block")
                .set("object-fit", "contain")
                .set("pointer-events", "none"),
        }
    }
}

/// A label for screen readers, moved out of the viewport instead of being hidden.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffscreenLabel {
    pub text: &'static str,
    pub style: Style,
}

impl Default for OffscreenLabel {
    fn default() -> Self {
        Self {
            text: LABEL,
            style: Style::new()
                .set("position", "absolute")
                .set("left", OFFSCREEN_LEFT),
        }
    }
}

/// Styles applied on `mouseenter` and `mouseleave`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hover {
    pub enter: Style,
    pub leave: Style,
}
