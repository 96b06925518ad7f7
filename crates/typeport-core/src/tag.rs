//! Conventional struct tags.
//!
//! A struct tag is a space-separated list of `key:"value"` pairs attached to
//! a field, e.g. `json:"nickname,omitempty" db:"nick"`. Values are quoted
//! strings with backslash escapes. Malformed input stops the scan: anything
//! after the first malformed pair is invisible to `lookup`.

use std::borrow::Cow;

/// Raw struct tag of a field.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct StructTag(String);

impl StructTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Value associated with `key`.
    ///
    /// Returns `Some("")` when the key is present with an empty value and
    /// `None` when it is absent or the tag is malformed before reaching it.
    pub fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        let mut rest = self.0.as_str();

        loop {
            rest = rest.trim_start_matches(' ');
            if rest.is_empty() {
                return None;
            }

            let name_len = rest
                .bytes()
                .take_while(|&b| b > b' ' && b != b':' && b != b'"' && b != 0x7f)
                .count();
            let bytes = rest.as_bytes();
            if name_len == 0
                || name_len + 1 >= bytes.len()
                || bytes[name_len] != b':'
                || bytes[name_len + 1] != b'"'
            {
                return None;
            }
            let name = &rest[..name_len];
            rest = &rest[name_len + 1..];

            // Find the closing quote, skipping escaped characters.
            let bytes = rest.as_bytes();
            let mut i = 1;
            while i < bytes.len() && bytes[i] != b'"' {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            if i >= bytes.len() {
                return None;
            }
            let quoted = &rest[..=i];
            rest = &rest[i + 1..];

            if name == key {
                return unquote(quoted);
            }
        }
    }
}

impl From<&str> for StructTag {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for StructTag {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

/// Strip the surrounding quotes and resolve escapes.
fn unquote(quoted: &str) -> Option<Cow<'_, str>> {
    let inner = quoted.strip_prefix('"')?.strip_suffix('"')?;
    if !inner.contains('\\') {
        return Some(Cow::Borrowed(inner));
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let escaped = match chars.next()? {
            '\\' => '\\',
            '"' => '"',
            '\'' => '\'',
            'n' => '\n',
            't' => '\t',
            'r' => '\r',
            _ => return None,
        };
        out.push(escaped);
    }
    Some(Cow::Owned(out))
}
