//! Settings panel core
//!
//! ## Architecture
//!
//! - `catalog.rs` - The static list of exposed settings and their groups
//! - `options.rs` - Resolve choice lists (themes, fonts, enums) at render time
//! - `snapshot.rs` - Join descriptors with current values from the store
//! - `message.rs` - Messages the panel posts back to the core
//! - `sync.rs` - Coerce change events and write them to the store
//! - `host.rs` - Traits for the store, extension discovery and host actions
//!
//! Data flows catalog → options → snapshot → view for the initial paint, and
//! view → message → sync → store for every change. The store is never
//! watched; external edits show up on the next render.

pub mod catalog;
pub mod error;
pub mod host;
pub mod message;
pub mod options;
pub mod snapshot;
pub mod sync;

pub use catalog::{Catalog, ControlType, SettingDescriptor, SettingGroup, COLOR_THEME_KEY};
pub use error::SettingsError;
pub use host::{ConfigTarget, ConfigurationStore, ExtensionRegistry, HostActions};
pub use message::{ChangeEvent, PanelMessage, RawValue};
pub use options::{OptionResolver, ResolvedOptions};
pub use snapshot::{build_snapshot, GroupSnapshot, RenderedSetting, SettingValue};
pub use sync::{SyncController, SyncOutcome};
