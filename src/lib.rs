//! Symbols: a launcher plugin to search HTML and typographic symbols by name
//! and copy the glyph, its code point, or one of its HTML/CSS codes.
//!
//! The host drives everything through [`Plugin`]; [`SymbolsPlugin`] is the
//! implementation backed by the bundled symbol table.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod item;
pub mod plugin;
pub mod symbols;

pub use config::Settings;
pub use dispatch::NavigationState;
pub use error::{LoadError, LookupError};
pub use host::{ClipboardSink, Plugin};
pub use item::{Item, Suggestions, Target};
pub use plugin::SymbolsPlugin;
pub use symbols::{SymbolField, SymbolRecord, SymbolTable};
