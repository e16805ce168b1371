//! Scanner for `{{name|key=value|...}}` templates in wiki markup.
//!
//! Only enough of the markup grammar is understood to find templates and
//! split their parameters: `{{ }}` and `[[ ]]` nest, `|` and `=` are only
//! significant at the top level of a template body, and HTML comments are
//! dropped. Nothing is expanded or rendered.

/// A single template parameter. Positional parameters get keys `"1"`, `"2"`, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub key: String,
    /// Raw value text, untrimmed.
    pub value: String,
}

/// A template found in a markup document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    name: String,
    params: Vec<Param>,
}

impl Template {
    /// Template name with surrounding whitespace removed, original casing.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lowercased, trimmed name used for matching.
    pub fn match_name(&self) -> String {
        self.name.trim().to_lowercase()
    }

    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Raw value of `key`, or `None` when the template has no such key.
    ///
    /// When a key is repeated the last occurrence wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .rev()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

/// Parse every template in `markup`, nested ones included, in document order
/// of their opening braces.
///
/// Unbalanced braces are tolerated: an unclosed `{{` is ignored and a stray
/// `}}` closes nothing.
///
/// # Examples
///
/// ```
/// use itemwiki_markup::template::parse_templates;
///
/// let t = parse_templates("{{Infobox Item|name=Bones|weight=0.5{{kg}}}}");
/// assert_eq!(t.len(), 2);
/// assert_eq!(t[0].name(), "Infobox Item");
/// assert_eq!(t[0].get("weight"), Some("0.5{{kg}}"));
/// assert_eq!(t[1].name(), "kg");
/// ```
pub fn parse_templates(markup: &str) -> Vec<Template> {
    let text = strip_comments(markup);
    let bytes = text.as_bytes();
    let mut open: Vec<usize> = Vec::new();
    let mut found: Vec<(usize, usize)> = Vec::new();

    let mut i = 0;
    while i + 1 < bytes.len() {
        match (bytes[i], bytes[i + 1]) {
            (b'{', b'{') => {
                open.push(i);
                i += 2;
            }
            (b'}', b'}') => {
                if let Some(start) = open.pop() {
                    found.push((start, i));
                }
                i += 2;
            }
            _ => i += 1,
        }
    }

    found.sort_by_key(|&(start, _)| start);
    found
        .into_iter()
        .filter_map(|(start, end)| build_template(&text[start + 2..end]))
        .collect()
}

fn build_template(body: &str) -> Option<Template> {
    let mut parts = split_top_level(body, '|').into_iter();
    let name = parts.next()?.trim().to_string();
    // `{{{param}}}` argument references and `{{#if:}}` parser functions are not templates.
    if name.is_empty() || name.starts_with('{') || name.starts_with('#') {
        return None;
    }

    let mut params = Vec::new();
    let mut positional = 0u32;
    for part in parts {
        match find_top_level(part, '=') {
            Some(eq) => params.push(Param {
                key: part[..eq].trim().to_string(),
                value: part[eq + 1..].to_string(),
            }),
            None => {
                positional += 1;
                params.push(Param {
                    key: positional.to_string(),
                    value: part.to_string(),
                });
            }
        }
    }

    Some(Template { name, params })
}

/// Split on `sep` wherever it is outside nested `{{ }}` and `[[ ]]`.
fn split_top_level(body: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    let mut pos = 0;
    while let Some(idx) = find_top_level(&body[pos..], sep) {
        let abs = pos + idx;
        parts.push(&body[last..abs]);
        last = abs + sep.len_utf8();
        pos = last;
    }
    parts.push(&body[last..]);
    parts
}

/// Byte index of the first top-level `target` in `s`.
fn find_top_level(s: &str, target: char) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut braces = 0u32;
    let mut links = 0u32;
    let mut chars = s.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        let next = bytes.get(i + 1).copied();
        match (ch, next) {
            ('{', Some(b'{')) => {
                braces += 1;
                chars.next();
            }
            ('}', Some(b'}')) if braces > 0 => {
                braces -= 1;
                chars.next();
            }
            ('[', Some(b'[')) => {
                links += 1;
                chars.next();
            }
            (']', Some(b']')) if links > 0 => {
                links -= 1;
                chars.next();
            }
            (c, _) if c == target && braces == 0 && links == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Remove `<!-- ... -->` comments. An unterminated comment runs to the end.
fn strip_comments(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(end) => rest = &rest[start + 4 + end + 3..],
            None => {
                rest = "";
                break;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "tests/template_tests.rs"]
mod tests;
