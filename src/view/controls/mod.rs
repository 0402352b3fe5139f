//! Reusable form controls for the settings panel
//!
//! Each control lives in its own module with state (`mod.rs`), rendering
//! (`render.rs`) and keyboard handling (`input.rs`).

pub mod dropdown;
pub mod number_input;
pub mod toggle;

/// Focus state shared by all controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Normal,
    Focused,
}
