//! Field projection: output name and optionality from struct tags.

use typeport_core::Field;

/// How a struct field appears in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct FieldProjection {
    pub(crate) name: String,
    pub(crate) optional: bool,
}

impl FieldProjection {
    /// Project `field` through the tag under `tag_key`.
    ///
    /// The first tag segment renames the field unless empty; `omitempty`
    /// among the remaining segments makes it optional.
    pub(crate) fn of(field: &Field, tag_key: &str) -> Self {
        let Some(value) = field.tag().lookup(tag_key) else {
            return Self {
                name: field.name().to_string(),
                optional: false,
            };
        };

        let mut segments = value.split(',');
        let rename = segments.next().unwrap_or_default();
        let optional = segments.any(|s| s == "omitempty");
        let name = if rename.is_empty() {
            field.name()
        } else {
            rename
        };

        Self {
            name: name.to_string(),
            optional,
        }
    }

    /// `name?: text;`
    pub(crate) fn render(&self, text: &str) -> String {
        let marker = if self.optional { "?" } else { "" };
        format!("{}{}: {};", property_key(&self.name), marker, text)
    }
}

/// Property keys that are not identifiers are written as string literals.
fn property_key(name: &str) -> String {
    if is_identifier(name) {
        return name.to_string();
    }

    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for c in name.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}
