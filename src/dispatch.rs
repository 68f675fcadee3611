/// Selection dispatcher: turns the host's navigation state into item lists.
///
/// Navigation runs `Root → ListAll → SymbolSelected → Terminal`. The host keeps
/// the chain of selected items and replays it on every keystroke, so nothing
/// here holds state beyond the table it is given.
use crate::error::LookupError;
use crate::item::{ArgsHint, HitHint, Item, ItemCategory, MatchMethod, SortMethod, Suggestions, Target};
use crate::symbols::{SymbolField, SymbolRecord, SymbolTable};

/// Prefix on every symbol label, and the label of the search entry point.
pub const ITEM_LABEL_PREFIX: &str = "Symbol: ";

/// Input prefixes that list every symbol without going through the catalog.
pub const TRIGGER_WORDS: [&str; 2] = ["symbol", "smbl"];

// ── Navigation state ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationState {
    Root,
    ListAll,
    SymbolSelected(String),
    Terminal(String),
}

impl NavigationState {
    /// State implied by the host's selection chain; the last item decides.
    pub fn from_chain(items_chain: &[Item]) -> Self {
        match items_chain.last().map(|item| &item.target) {
            None => NavigationState::Root,
            Some(Target::SearchAll) => NavigationState::ListAll,
            Some(Target::Symbol { key, .. }) => NavigationState::SymbolSelected(key.clone()),
            Some(Target::Copy { value, .. }) => NavigationState::Terminal(value.clone()),
        }
    }

    /// Terminal state reached by executing `item`, if it copies anything.
    pub fn for_execution(item: &Item) -> Option<Self> {
        resolve_execution(item).map(|value| NavigationState::Terminal(value.to_string()))
    }
}

// ── Item builders ─────────────────────────────────────────────────────────────

/// One item per symbol. Shared by the root catalog, the trigger-word
/// suggestions and the search entry point.
pub fn symbol_items(table: &SymbolTable) -> Vec<Item> {
    table.iter().map(symbol_item).collect()
}

fn symbol_item(record: &SymbolRecord) -> Item {
    Item {
        category: ItemCategory::Keyword,
        label: format!("{ITEM_LABEL_PREFIX}{} {}", record.name, record.glyph),
        short_desc: format!("Copy {}. Press tab for more options", record.glyph),
        target: Target::Symbol {
            key: record.key.clone(),
            value: record.glyph.clone(),
        },
        args_hint: ArgsHint::Accepted,
        hit_hint: HitHint::NoArgs,
    }
}

fn search_item() -> Item {
    Item {
        category: ItemCategory::Reference,
        label: ITEM_LABEL_PREFIX.trim_end().to_string(),
        short_desc: "Search through all symbols".to_string(),
        target: Target::SearchAll,
        args_hint: ArgsHint::Required,
        hit_hint: HitHint::NoArgs,
    }
}

/// The six copy actions for one symbol, in `SymbolField::ALL` order.
pub fn field_items(record: &SymbolRecord) -> Vec<Item> {
    SymbolField::ALL
        .iter()
        .map(|&field| {
            let value = record.field(field);
            Item {
                category: ItemCategory::Result,
                label: field.label().to_string(),
                short_desc: format!("Copy {value}"),
                target: Target::Copy {
                    field,
                    value: value.to_string(),
                },
                args_hint: ArgsHint::Forbidden,
                hit_hint: HitHint::Ignore,
            }
        })
        .collect()
}

// ── Operations ────────────────────────────────────────────────────────────────

/// Catalog entries: every symbol, or a single search entry point.
pub fn build_initial_options(table: &SymbolTable, display_all_in_root: bool) -> Vec<Item> {
    if display_all_in_root {
        symbol_items(table)
    } else {
        vec![search_item()]
    }
}

/// Every symbol when the input starts with a trigger word, otherwise None so
/// the host matches against the catalog itself.
pub fn filter_by_prefix(user_input: &str, table: &SymbolTable) -> Option<Vec<Item>> {
    let input = user_input.to_lowercase();
    TRIGGER_WORDS
        .iter()
        .any(|word| input.starts_with(word))
        .then(|| symbol_items(table))
}

/// Items offered after `selected` was chosen.
///
/// A copy action is terminal and expands to nothing.
pub fn expand_selection(selected: &Item, table: &SymbolTable) -> Result<Vec<Item>, LookupError> {
    match &selected.target {
        Target::SearchAll => Ok(symbol_items(table)),
        Target::Symbol { key, .. } => Ok(field_items(table.lookup(key)?)),
        Target::Copy { .. } => Ok(Vec::new()),
    }
}

/// The literal clipboard value of an executed item, untouched.
pub fn resolve_execution(selected: &Item) -> Option<&str> {
    selected.target.value()
}

/// Suggestions for the current input and selection chain.
pub fn suggest(
    user_input: &str,
    items_chain: &[Item],
    table: &SymbolTable,
) -> Result<Option<Suggestions>, LookupError> {
    let Some(current) = items_chain.last() else {
        return Ok(filter_by_prefix(user_input, table).map(Suggestions::new));
    };

    let items = expand_selection(current, table)?;
    let suggestions = match NavigationState::from_chain(items_chain) {
        // Field order is meaningful; let the host filter but not reorder.
        NavigationState::SymbolSelected(_) => Suggestions {
            items,
            match_method: MatchMethod::Fuzzy,
            sort_method: SortMethod::None,
        },
        _ => Suggestions::new(items),
    };
    Ok(Some(suggestions))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
