//! # Composition locals
//!
//! Ambient UI parameters that are not worth threading through every widget
//! constructor:
//!
//! - `TextDirection`: LTR or RTL. Rows reverse and the selector slider runs
//!   towards negative offsets under RTL.
//! - `Density`: dp→px scale factor used by layout.
//!
//! Override them for a subtree with `with_text_direction` / `with_density`:
//!
//! ```rust
//! use selector_core::*;
//!
//! let dir = with_text_direction(TextDirection::Rtl, text_direction);
//! assert_eq!(dir, TextDirection::Rtl);
//! assert_eq!(text_direction(), TextDirection::Ltr);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

impl TextDirection {
    pub fn is_rtl(self) -> bool {
        self == TextDirection::Rtl
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}

impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

fn with_locals_frame<R>(f: impl FnOnce() -> R) -> R {
    // pops on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn provide<T: Any>(value: T) {
    LOCALS_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(TypeId::of::<T>(), Box::new(value));
        }
    });
}

fn current<T: Any + Copy + Default>() -> T {
    LOCALS_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Some(t) = v.downcast_ref::<T>()
            {
                return *t;
            }
        }
        T::default()
    })
}

pub fn with_text_direction<R>(dir: TextDirection, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        provide(dir);
        f()
    })
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    with_locals_frame(|| {
        provide(density);
        f()
    })
}

pub fn text_direction() -> TextDirection {
    current::<TextDirection>()
}

pub fn density() -> Density {
    current::<Density>()
}

/// Converts a dp value to physical pixels with the current `Density`.
pub fn dp_to_px(dp: f32) -> f32 {
    dp * density().scale
}
