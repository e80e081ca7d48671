//! Minimal INI reader for MicroSIP configuration files.
//!
//! Understands `[section]` headers, `key=value` and `key: value` options,
//! `#`/`;` comment lines and indented continuation lines. Option names are
//! case-insensitive. Options before the first section are ignored.

/// One `[section]` with its options in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    options: Vec<(String, String)>,
}

impl IniSection {
    /// Section name as written between the brackets.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value of the first option named `key` (case-insensitive).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}

/// A parsed INI document: sections in file order.
///
/// Repeated section names are kept as separate sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    /// Parses INI text. Lines that fit no known shape are ignored.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut sections: Vec<IniSection> = Vec::new();
        let mut continuing = false;

        for raw in text.lines() {
            // Stray byte-order marks from concatenated UTF-16 files
            let line = raw.trim_start_matches('\u{feff}');
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
                continuing = false;
                continue;
            }

            if line.starts_with([' ', '\t']) && continuing {
                if let Some((_, value)) = sections.last_mut().and_then(|s| s.options.last_mut()) {
                    value.push('\n');
                    value.push_str(trimmed);
                }
                continue;
            }

            if let Some(name) = trimmed.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
                sections.push(IniSection {
                    name: name.trim().to_string(),
                    options: Vec::new(),
                });
                continuing = false;
                continue;
            }

            continuing = false;
            let Some(section) = sections.last_mut() else {
                continue;
            };
            if let Some(split) = trimmed.find(['=', ':']) {
                let key = trimmed[..split].trim().to_string();
                let value = trimmed[split + 1..].trim().to_string();
                section.options.push((key, value));
                continuing = true;
            }
        }

        Self { sections }
    }

    /// Sections in file order.
    pub fn sections(&self) -> impl Iterator<Item = &IniSection> {
        self.sections.iter()
    }
}
