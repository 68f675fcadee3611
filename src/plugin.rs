/// The symbols plugin instance: settings plus the table loaded from them.
use crate::config::{self, Settings};
use crate::dispatch;
use crate::error::LookupError;
use crate::host::{ClipboardSink, Plugin};
use crate::item::{Item, Suggestions};
use crate::symbols::{self, BUNDLED_SYMBOLS, SymbolTable};
use std::borrow::Cow;
use std::path::Path;

pub struct SymbolsPlugin {
    resource: Cow<'static, str>,
    settings: Settings,
    table: SymbolTable,
}

impl Default for SymbolsPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl SymbolsPlugin {
    /// Plugin backed by the bundled symbol data. Nothing is loaded until
    /// `on_start`.
    pub fn new() -> Self {
        Self::with_resource(BUNDLED_SYMBOLS)
    }

    /// Plugin backed by different symbol data (same JSON layout).
    pub fn with_resource(resource: impl Into<Cow<'static, str>>) -> Self {
        Self {
            resource: resource.into(),
            settings: Settings::default(),
            table: SymbolTable::default(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Start from the settings file at `path`, creating the commented default
    /// file first if there is none. A broken file falls back to defaults.
    pub fn start_with_settings_file(&mut self, path: &Path) {
        if let Err(e) = config::write_default_if_missing(path) {
            log::warn!("Could not write default settings to {}: {e:#}", path.display());
        }
        let settings = Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{e:#}; using default settings");
            Settings::default()
        });
        self.on_start(&settings);
    }

    fn reload_table(&mut self) {
        self.table = match symbols::load(&self.resource) {
            Ok(table) => table,
            Err(e) => {
                log::error!("Failed to load symbols.json. Error: {e}");
                SymbolTable::default()
            }
        };
    }
}

impl Plugin for SymbolsPlugin {
    fn on_start(&mut self, settings: &Settings) {
        self.settings = settings.clone();
        log::info!("Display items in root [{}]", self.settings.display_items_in_root);
        self.reload_table();
    }

    fn on_catalog(&self) -> Vec<Item> {
        dispatch::build_initial_options(&self.table, self.settings.display_items_in_root)
    }

    fn on_suggest(
        &self,
        user_input: &str,
        items_chain: &[Item],
    ) -> Result<Option<Suggestions>, LookupError> {
        dispatch::suggest(user_input, items_chain, &self.table)
    }

    fn on_execute(&self, item: &Item, clipboard: &mut dyn ClipboardSink) {
        log::debug!("Executing item [{}] with target {:?}", item.label, item.target);
        match dispatch::resolve_execution(item) {
            Some(value) => {
                log::debug!("Copying symbol to clipboard [{value}]");
                clipboard.set_clipboard(value);
            }
            None => log::warn!("Item [{}] has nothing to copy", item.label),
        }
    }

    fn on_stop(&mut self) {
        self.table = SymbolTable::default();
    }
}
