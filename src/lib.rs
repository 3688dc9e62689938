pub mod cli;
pub mod commands;
pub mod display;
pub mod error;
pub mod logging;
pub mod paths;
pub mod registry;
pub mod store;
pub mod types;

pub use display::{Layout, render_shortcuts};
pub use error::{Result, ShortkeysError};
pub use registry::Registry;
pub use store::{FsStore, PersistOutcome, ShortcutStore, Store};
pub use types::{Entry, FALLBACK_POOL, KeyFile, KeyRecord, RESERVED_SHORTCUT};
