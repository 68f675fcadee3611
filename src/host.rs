/// Host contract: the hooks a launcher calls on a plugin, and the clipboard
/// it lends back.
///
/// The host owns the process, the UI, matching/scoring and the clipboard.
/// Calls arrive one at a time, in lifecycle order:
/// `on_start` → `on_catalog` → (`on_suggest` / `on_execute`)* → `on_stop`.
use crate::config::Settings;
use crate::error::LookupError;
use crate::item::{Item, Suggestions};

/// Where a copied value goes. Writes are fire-and-forget.
pub trait ClipboardSink {
    fn set_clipboard(&mut self, text: &str);
}

impl<F: FnMut(&str)> ClipboardSink for F {
    fn set_clipboard(&mut self, text: &str) {
        self(text)
    }
}

pub trait Plugin {
    /// (Re)initialise from fresh settings. May be called again on reload.
    fn on_start(&mut self, settings: &Settings);

    /// Items for the launcher's root catalog.
    fn on_catalog(&self) -> Vec<Item>;

    /// Suggestions for `user_input`, given the items selected so far.
    /// `Ok(None)` leaves matching to the host.
    fn on_suggest(
        &self,
        user_input: &str,
        items_chain: &[Item],
    ) -> Result<Option<Suggestions>, LookupError>;

    fn on_execute(&self, item: &Item, clipboard: &mut dyn ClipboardSink);

    fn on_activated(&mut self) {}

    fn on_deactivated(&mut self) {}

    /// Release everything built in `on_start`.
    fn on_stop(&mut self) {}
}
