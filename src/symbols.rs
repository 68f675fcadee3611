/// Symbol table: the bundled JSON data parsed into fixed-shape records.
///
/// The data file is an object keyed by symbol identifier. Each value is an
/// object whose field names are hyphenated (`html-entity`, `css-code`, ...);
/// they are normalised to camelCase and matched against the known fields.
/// Anything else in the entry is ignored.
///
/// The table is built once per plugin start and never mutated afterwards.
use crate::error::{LoadError, LookupError};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The symbol data shipped with the plugin.
pub const BUNDLED_SYMBOLS: &str = include_str!("../resources/symbols.json");

// ── Record ────────────────────────────────────────────────────────────────────

/// One symbol and every textual representation of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolRecord {
    /// Top-level key in the data file, unique within the table.
    pub key: String,
    pub name: String,
    /// The literal character(s). Stored as `symbol` in the data file.
    pub glyph: String,
    /// Code point, e.g. `U+00A9`.
    pub unicode: String,
    pub hex_code: String,
    pub html_code: String,
    /// Named entity such as `&copy;`. Empty when HTML has none.
    pub html_entity: String,
    pub css_code: String,
    /// Rarely present in the data.
    pub ascii_code: String,
}

impl SymbolRecord {
    /// Value of one copyable field.
    pub fn field(&self, field: SymbolField) -> &str {
        match field {
            SymbolField::Glyph => &self.glyph,
            SymbolField::Unicode => &self.unicode,
            SymbolField::HexCode => &self.hex_code,
            SymbolField::HtmlCode => &self.html_code,
            SymbolField::HtmlEntity => &self.html_entity,
            SymbolField::CssCode => &self.css_code,
        }
    }

    /// Storage for a normalised field name, or None for names we don't keep.
    fn slot_mut(&mut self, normalized: &str) -> Option<&mut String> {
        match normalized {
            "symbol" => Some(&mut self.glyph),
            "name" => Some(&mut self.name),
            "unicode" => Some(&mut self.unicode),
            "hexCode" => Some(&mut self.hex_code),
            "htmlCode" => Some(&mut self.html_code),
            "htmlEntity" => Some(&mut self.html_entity),
            "cssCode" => Some(&mut self.css_code),
            "asciiCode" => Some(&mut self.ascii_code),
            _ => None,
        }
    }
}

// ── Copyable fields ───────────────────────────────────────────────────────────

/// The representations a user can copy, in the order they are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolField {
    Glyph,
    Unicode,
    HexCode,
    HtmlCode,
    HtmlEntity,
    CssCode,
}

impl SymbolField {
    pub const ALL: [SymbolField; 6] = [
        SymbolField::Glyph,
        SymbolField::Unicode,
        SymbolField::HexCode,
        SymbolField::HtmlCode,
        SymbolField::HtmlEntity,
        SymbolField::CssCode,
    ];

    /// Label shown for the copy action.
    pub fn label(self) -> &'static str {
        match self {
            SymbolField::Glyph => "Copy",
            SymbolField::Unicode => "Copy Unicode",
            SymbolField::HexCode => "Copy HEX Code",
            SymbolField::HtmlCode => "Copy HTML Code",
            SymbolField::HtmlEntity => "Copy HTML Entity",
            SymbolField::CssCode => "Copy CSS Code",
        }
    }
}

// ── Table ─────────────────────────────────────────────────────────────────────

/// Loaded symbols keyed by `SymbolRecord::key`, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    records: BTreeMap<String, SymbolRecord>,
}

impl SymbolTable {
    pub fn get(&self, key: &str) -> Option<&SymbolRecord> {
        self.records.get(key)
    }

    /// Like `get`, but a missing key is an error. Keys handed back by the host
    /// always come from items this table produced, so a miss is a bug.
    pub fn lookup(&self, key: &str) -> Result<&SymbolRecord, LookupError> {
        self.records.get(key).ok_or_else(|| LookupError::UnknownSymbol {
            key: key.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &SymbolRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

/// `html-entity` → `htmlEntity`: every part after the first is capitalised
/// (first char upper, rest lower) and the parts are joined.
pub fn normalize_field_name(raw: &str) -> String {
    let mut parts = raw.split('-');
    let mut out = parts.next().unwrap_or_default().to_string();
    for part in parts {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Parse symbol data. Fails as a whole: no partial table is ever returned.
pub fn load(resource: &str) -> Result<SymbolTable, LoadError> {
    let data: Value = serde_json::from_str(resource)?;
    let Value::Object(entries) = data else {
        return Err(LoadError::NotAnObject);
    };

    let mut records = BTreeMap::new();
    for (key, value) in &entries {
        records.insert(key.clone(), record_from_entry(key, value)?);
    }
    Ok(SymbolTable { records })
}

/// Read and parse a symbol file from disk.
pub fn load_file(path: &Path) -> Result<SymbolTable, LoadError> {
    let raw = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    load(&raw)
}

fn record_from_entry(key: &str, value: &Value) -> Result<SymbolRecord, LoadError> {
    let Value::Object(fields) = value else {
        return Err(LoadError::InvalidEntry { key: key.to_string() });
    };

    let mut record = SymbolRecord {
        key: key.to_string(),
        ..Default::default()
    };
    for (raw_name, raw_value) in fields {
        let name = normalize_field_name(raw_name);
        let Some(slot) = record.slot_mut(&name) else {
            log::debug!("Ignoring unknown field '{raw_name}' on symbol '{key}'");
            continue;
        };
        match raw_value {
            Value::String(s) => *slot = s.clone(),
            Value::Null => {}
            _ => {
                return Err(LoadError::InvalidField {
                    key: key.to_string(),
                    field: name,
                });
            }
        }
    }
    Ok(record)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
