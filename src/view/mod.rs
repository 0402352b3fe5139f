//! View layer
//!
//! `model` maps a value snapshot to the structured panel view. `markup`
//! renders it as an HTML document; `panel` and `controls` render it in the
//! terminal and handle keyboard interaction.

pub mod markup;
pub mod model;

#[cfg(feature = "runtime")]
pub mod controls;
#[cfg(feature = "runtime")]
pub mod panel;
