//! Style resolution for the selector.
//!
//! Two total lookups: a semantic type key to a [`Palette`], and a size key to
//! [`FontMetrics`]. Unknown keys resolve to the defaults below instead of
//! failing, so hosts can pass through whatever string their own config holds.
//!
//! | key         | foreground | background | foreground_inverse |
//! |-------------|------------|------------|--------------------|
//! | *(default)* | `#FFFFFF`  | `#2196F3`  | `#333333`          |
//! | `primary`   | `#FFFFFF`  | `#3F51B5`  | `#3F51B5`          |
//! | `secondary` | `#FFFFFF`  | `#6C757D`  | `#6C757D`          |
//! | `success`   | `#FFFFFF`  | `#28A745`  | `#28A745`          |
//! | `danger`    | `#FFFFFF`  | `#DC3545`  | `#DC3545`          |
//! | `warning`   | `#FFFFFF`  | `#FFC107`  | `#8A6D00`          |
//! | `info`      | `#FFFFFF`  | `#17A2B8`  | `#17A2B8`          |
//! | `light`     | `#343A40`  | `#F8F9FA`  | `#6C757D`          |
//! | `dark`      | `#343A40`  | `#343A40`  | `#F8F9FA`          |
//!
//! How the widget reads a palette: the track is painted with `foreground`,
//! the slider with `background`, the selected label with `foreground` and
//! the others with `foreground_inverse`.

use serde::{Deserialize, Serialize};

use crate::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum StyleType {
    #[default]
    Default,
    Primary,
    Secondary,
    Success,
    Danger,
    Warning,
    Info,
    Light,
    Dark,
}

impl StyleType {
    /// Case-insensitive, total.
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "primary" => StyleType::Primary,
            "secondary" => StyleType::Secondary,
            "success" => StyleType::Success,
            "danger" => StyleType::Danger,
            "warning" => StyleType::Warning,
            "info" => StyleType::Info,
            "light" => StyleType::Light,
            "dark" => StyleType::Dark,
            _ => StyleType::Default,
        }
    }
}

impl From<&str> for StyleType {
    fn from(key: &str) -> Self {
        StyleType::from_key(key)
    }
}

impl From<String> for StyleType {
    fn from(key: String) -> Self {
        StyleType::from_key(&key)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum SizeKey {
    XSmall,
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl SizeKey {
    pub fn from_key(key: &str) -> Self {
        match key.trim().to_ascii_lowercase().as_str() {
            "xsmall" | "xs" => SizeKey::XSmall,
            "small" | "sm" => SizeKey::Small,
            "large" | "lg" => SizeKey::Large,
            "xlarge" | "xl" => SizeKey::XLarge,
            _ => SizeKey::Medium,
        }
    }
}

impl From<&str> for SizeKey {
    fn from(key: &str) -> Self {
        SizeKey::from_key(key)
    }
}

impl From<String> for SizeKey {
    fn from(key: String) -> Self {
        SizeKey::from_key(&key)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub foreground: Color,
    pub background: Color,
    pub foreground_inverse: Color,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontMetrics {
    pub font_size: f32,
    pub line_height: f32,
}

/// Font size of the selector's button text, used to pick the default family.
pub const BUTTON_FONT_SIZE: f32 = 14.0;

pub fn resolve(style: StyleType) -> Palette {
    let (fg, bg, inv) = match style {
        StyleType::Default => ("#FFFFFF", "#2196F3", "#333333"),
        StyleType::Primary => ("#FFFFFF", "#3F51B5", "#3F51B5"),
        StyleType::Secondary => ("#FFFFFF", "#6C757D", "#6C757D"),
        StyleType::Success => ("#FFFFFF", "#28A745", "#28A745"),
        StyleType::Danger => ("#FFFFFF", "#DC3545", "#DC3545"),
        StyleType::Warning => ("#FFFFFF", "#FFC107", "#8A6D00"),
        StyleType::Info => ("#FFFFFF", "#17A2B8", "#17A2B8"),
        StyleType::Light => ("#343A40", "#F8F9FA", "#6C757D"),
        StyleType::Dark => ("#343A40", "#343A40", "#F8F9FA"),
    };
    Palette {
        foreground: Color::from_hex(fg),
        background: Color::from_hex(bg),
        foreground_inverse: Color::from_hex(inv),
    }
}

pub fn resolve_size(size: SizeKey) -> FontMetrics {
    let (font_size, line_height) = match size {
        SizeKey::XSmall => (10.0, 14.0),
        SizeKey::Small => (12.0, 16.0),
        SizeKey::Medium => (14.0, 20.0),
        SizeKey::Large => (18.0, 24.0),
        SizeKey::XLarge => (22.0, 30.0),
    };
    FontMetrics {
        font_size,
        line_height,
    }
}

/// Family for text drawn at `font_size`; larger text switches to the medium
/// weight.
pub fn font_family_for(font_size: f32) -> &'static str {
    if font_size >= 18.0 {
        "System-Medium"
    } else {
        "System"
    }
}
