//! Content of one option band: an optional icon followed by the label text.

use std::fmt;
use std::rc::Rc;

use selector_core::*;

use crate::selector::SelectorOption;
use crate::{Image, ImageExt, Text, TextExt};

/// Host-supplied icon. A factory is called with whether the option is
/// selected, so it can swap artwork.
#[derive(Clone)]
pub enum CustomIcon {
    View(View),
    Factory(Rc<dyn Fn(bool) -> View>),
}

impl fmt::Debug for CustomIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CustomIcon::View(v) => f.debug_tuple("View").field(&v.kind).finish(),
            CustomIcon::Factory(_) => f.write_str("Factory(<fn>)"),
        }
    }
}

/// Resolved look of a label in one selection state.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub color: Color,
    pub icon_tint: Color,
    pub icon_width: f32,
    pub icon_height: f32,
    pub font_size: f32,
    pub line_height: f32,
    pub font_family: String,
}

pub fn OptionLabel<T>(option: &SelectorOption<T>, selected: bool, style: &LabelStyle) -> Vec<View> {
    let icon = match (&option.custom_icon, &option.image_icon) {
        (Some(CustomIcon::View(v)), _) => Some(v.clone()),
        (Some(CustomIcon::Factory(make)), _) => Some(make(selected)),
        (None, Some(source)) => Some(
            Image(
                Modifier::new().size(style.icon_width, style.icon_height),
                source.clone(),
            )
            .image_tint(style.icon_tint),
        ),
        (None, None) => None,
    };

    let text = Text(option.label.clone())
        .color(style.color)
        .size(style.font_size)
        .line_height(style.line_height)
        .font_family(style.font_family.clone());

    icon.into_iter().chain(std::iter::once(text)).collect()
}
