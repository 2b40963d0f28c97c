use log::LevelFilter;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::error::{Error, Result};

/// Options of the launcher passed by the host page.
///
/// Every field is optional. A missing field takes the value of the canonical launcher, see
/// [`Config::default`].
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Width and height of the launcher in pixels.
    pub size: u32,
    pub position: Position,
    pub colors: Colors,
    /// Lift and scale the launcher while the pointer is over it.
    pub hover_effect_enabled: bool,
    pub log_level: LevelFilter,
}

impl Config {
    /// Parses the config passed to [`run`](crate::run). `undefined` and `null` select the
    /// default config.
    pub fn from_js(value: JsValue) -> Result<Self> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }

        serde_wasm_bindgen::from_value(value).map_err(|err| Error::Config(err.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 48,
            position: Position::default(),
            colors: Colors::default(),
            hover_effect_enabled: true,
            log_level: LevelFilter::Warn,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Position {
    pub corner: Corner,
    /// Distance from both edges of the corner in pixels.
    pub offset: u32,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            corner: Corner::TopLeft,
            offset: 10,
        }
    }
}

/// The viewport corner the launcher is pinned to.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Corner {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Returns the vertical and horizontal CSS properties of the corner.
    pub fn properties(self) -> (&'static str, &'static str) {
        match self {
            Self::TopLeft => ("top", "left"),
            Self::TopRight => ("top", "right"),
            Self::BottomLeft => ("bottom", "left"),
            Self::BottomRight => ("bottom", "right"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Colors {
    pub background: String,
    pub border: String,
    pub shadow: String,
    pub hover_shadow: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            background: String::from("#ffffff"),
            border: String::from("rgba(0,0,0,0.08)"),
            shadow: String::from("rgba(0,0,0,0.18)"),
            hover_shadow: String::from("rgba(0,0,0,0.22)"),
        }
    }
}
