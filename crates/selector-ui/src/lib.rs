#![allow(non_snake_case)]
//! The switch selector widget and the small set of view builders it renders
//! with.
//!
//! ```rust
//! use selector_ui::*;
//!
//! let props = SelectorProps::new(vec![
//!     SelectorOption::new("Off", false),
//!     SelectorOption::new("On", true),
//! ])
//! .on_press(|sel: Selection<bool>| println!("now {}", sel.value()));
//!
//! let mut selector = SwitchSelector::new(props).unwrap();
//! selector.measure(200.0).unwrap();
//! selector.select_by_tap(1);
//! assert_eq!(selector.selected_index(), 1);
//! ```

pub mod gestures;
pub mod label;
pub mod layout;
pub mod selector;

mod tests;

pub use gestures::{GestureOutcome, GestureState, PanResponder, SwipeDirection};
pub use label::{CustomIcon, LabelStyle, OptionLabel};
pub use layout::{HitRegion, LayoutResult, layout};
pub use selector::{
    ImageStyle, SelectorOption, SelectorPhase, SelectorProps, SelectorStyle, Selection,
    SwitchSelector, TextStyle,
};

use selector_core::*;

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: Color::WHITE,
            font_size: 14.0,
            line_height: 20.0,
            font_family: style::font_family_for(style::BUTTON_FONT_SIZE).to_string(),
        },
    )
}

pub fn Image(modifier: Modifier, source: ImageSource) -> View {
    View::new(0, ViewKind::Image { source, tint: None }).modifier(modifier)
}

pub trait TextExt {
    fn color(self, c: Color) -> View;
    fn size(self, font_size: f32) -> View;
    fn line_height(self, line_height: f32) -> View;
    fn font_family(self, family: impl Into<String>) -> View;
}

impl TextExt for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, s: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = s;
        }
        self
    }
    fn line_height(mut self, lh: f32) -> View {
        if let ViewKind::Text { line_height, .. } = &mut self.kind {
            *line_height = lh;
        }
        self
    }
    fn font_family(mut self, family: impl Into<String>) -> View {
        if let ViewKind::Text { font_family, .. } = &mut self.kind {
            *font_family = family.into();
        }
        self
    }
}

pub trait ImageExt {
    fn image_tint(self, c: Color) -> View;
}

impl ImageExt for View {
    fn image_tint(mut self, c: Color) -> View {
        if let ViewKind::Image { tint, .. } = &mut self.kind {
            *tint = Some(c);
        }
        self
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
