//! # selector-core
//!
//! Building blocks for the switch selector widget in `selector-ui`:
//!
//! - [`View`] / [`Modifier`]: the declarative tree a widget renders to.
//! - [`animation`]: easing curves and [`AnimatedValue`], advanced from a
//!   [`Clock`] so tweens run on their own timeline.
//! - [`input`]: raw pointer events fed to gesture handling.
//! - [`style`]: the total palette and font-size lookups.
//! - [`locals`]: ambient text direction and density.
//!
//! ```rust
//! use selector_core::*;
//! use web_time::Instant;
//!
//! let clock = ManualClock::new(Instant::now());
//! let mut pos = AnimatedValue::new(0.0f32, AnimationSpec::tween_ms(100, Easing::Linear));
//! pos.animate(0.0, 0.5, clock.now());
//! clock.advance_ms(50);
//! assert!(pos.update(clock.now()));
//! assert!((*pos.get() - 0.25).abs() < 1e-4);
//! ```

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod input;
pub mod locals;
pub mod modifier;
pub mod semantics;
pub mod style;
pub mod view;


pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use input::*;
pub use locals::*;
pub use modifier::*;
pub use semantics::*;
pub use style::{FontMetrics, Palette, SizeKey, StyleType};
pub use view::*;
