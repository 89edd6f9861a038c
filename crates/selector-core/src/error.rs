use thiserror::Error;

/// Errors surfaced by the selector crates.
///
/// Interaction guards (disabled, out of range index, single option, unmeasured
/// track) never produce one of these; they are silent no-ops.
#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("switch selector needs at least one option")]
    NoOptions,
    #[error("invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("layout failed: {0}")]
    Layout(#[from] taffy::TaffyError),
}
