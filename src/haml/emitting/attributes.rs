//! Attribute map
//!
//! Insertion-ordered mapping from attribute name to a pre-quoted value
//! string. Values are stored exactly as they will appear after the `=` in
//! the output, surrounding quotes included. Overwriting a key replaces the
//! value but keeps the key's original position, so a synthetic `id`/`class`
//! entry stays ahead of explicitly declared attributes even when the block
//! redefines it.

/// Insertion-ordered attribute map with pre-quoted values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    pub fn new() -> Self {
        AttributeMap::default()
    }

    /// Insert or overwrite an attribute. Last write wins for the value;
    /// first write wins for the position.
    pub fn set(&mut self, key: &str, value: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key.to_string(), value));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as the attribute suffix of an opening tag: one leading space
    /// before every `key=value` pair, in map order. Empty map renders as
    /// the empty string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.entries {
            out.push(' ');
            out.push_str(key);
            out.push('=');
            out.push_str(value);
        }
        out
    }
}
