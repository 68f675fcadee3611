/// Items: the selectable entries handed to the host for display.
///
/// Every item carries a typed `Target` so a selection coming back from the
/// host can be matched without re-parsing strings. Hosts that can only store
/// an opaque string per item use `Target::encode` / `Target::decode`.
use crate::symbols::SymbolField;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

// ── Hints ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCategory {
    /// A symbol that can be copied directly or expanded.
    Keyword,
    /// The "search all symbols" entry point.
    Reference,
    /// One copyable representation of a selected symbol.
    Result,
}

/// Whether the host should let the user type arguments after the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgsHint {
    Forbidden,
    Accepted,
    Required,
}

/// Whether selecting the item should be remembered in the host's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitHint {
    Ignore,
    NoArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMethod {
    /// Host default matching.
    #[default]
    Default,
    Fuzzy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMethod {
    #[default]
    Default,
    /// Keep the order the items were produced in.
    None,
}

// ── Target ────────────────────────────────────────────────────────────────────

/// What an item refers to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Target {
    /// Enter search mode: list every symbol.
    SearchAll,
    /// A whole symbol. Executing it copies `value` (the glyph); expanding it
    /// lists the copyable fields of `key`.
    Symbol { key: String, value: String },
    /// One field of a symbol, copied verbatim.
    Copy { field: SymbolField, value: String },
}

impl Target {
    /// Opaque string form for hosts that round-trip a target string.
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to encode item target")
    }

    pub fn decode(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).with_context(|| format!("Invalid item target: {raw}"))
    }

    /// The literal clipboard value, if selecting this target copies something.
    pub fn value(&self) -> Option<&str> {
        match self {
            Target::SearchAll => None,
            Target::Symbol { value, .. } | Target::Copy { value, .. } => Some(value.as_str()),
        }
    }
}

// ── Item ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub category: ItemCategory,
    pub label: String,
    pub short_desc: String,
    pub target: Target,
    pub args_hint: ArgsHint,
    pub hit_hint: HitHint,
}

/// A suggestion list plus how the host should match and order it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Suggestions {
    pub items: Vec<Item>,
    pub match_method: MatchMethod,
    pub sort_method: SortMethod,
}

impl Suggestions {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_encode_decode() {
        let targets = [
            Target::SearchAll,
            Target::Symbol {
                key: "comma".to_string(),
                value: ",".to_string(),
            },
            Target::Copy {
                field: SymbolField::HtmlEntity,
                value: "&copy;".to_string(),
            },
        ];
        for target in targets {
            let encoded = target.encode().unwrap();
            assert_eq!(Target::decode(&encoded).unwrap(), target, "via {encoded}");
        }
    }

    #[test]
    fn test_target_encoding_is_tagged() {
        let encoded = Target::Copy {
            field: SymbolField::CssCode,
            value: "\\00A9".to_string(),
        }
        .encode()
        .unwrap();
        assert!(encoded.contains(r#""action":"copy""#));
        assert!(encoded.contains(r#""field":"css_code""#));
    }

    #[test]
    fn test_target_decode_rejects_legacy_string() {
        let err = Target::decode("copysymbol,©").unwrap_err();
        assert!(err.to_string().contains("Invalid item target"));
    }

    #[test]
    fn test_target_value() {
        assert_eq!(Target::SearchAll.value(), None);
        let symbol = Target::Symbol {
            key: "rarr".to_string(),
            value: "→".to_string(),
        };
        assert_eq!(symbol.value(), Some("→"));
    }
}
