use super::{strip_emphasis, strip_links};

/// List separators, tried in order; the first one present in the text is used.
const SEPARATORS: &[&str] = &[
    ", <br>",
    ",<br>",
    ",<br/>",
    ", <br/>",
    ",<br />",
    ", <br />",
    "<br>",
    "<br >",
    "<br/>",
    "<br />",
    "&",
    "\n",
];

/// Whole-field values meaning the item is not tied to a named quest.
const NOT_QUEST_TIED: &[&str] = &["yes", "no"];

const SUFFIXES: &[&str] = &["(miniquest)", "(quest)"];

/// Fragments that name two quests at once.
const CONJOINED: &[(&str, &[&str])] = &[
    (
        "Fairy Tale I - Growing Pains and Fairy Tale II - Cure a Queen",
        &["Fairy Tale I - Growing Pains", "Fairy Tale II - Cure a Queen"],
    ),
    (
        "Growing Pains and Fairy Tale II",
        &["Fairy Tale I - Growing Pains", "Fairy Tale II - Cure a Queen"],
    ),
];

/// Normalize a quest association into an ordered list of quest names.
///
/// `yes` and `no` (any case) are `None`: neither names a quest. After the
/// separator split, any text containing a comma is split again on commas,
/// even when a comma-bearing separator already did the work.
///
/// # Examples
///
/// ```
/// use itemwiki_markup::normalize::normalize_quest;
///
/// assert_eq!(normalize_quest("no"), None);
/// assert_eq!(
///     normalize_quest("[[Dragon Slayer]], <br>[[Monkey Madness]]"),
///     Some(vec!["Dragon Slayer".to_string(), "Monkey Madness".to_string()])
/// );
/// ```
pub fn normalize_quest(raw: &str) -> Option<Vec<String>> {
    let stripped = strip_links(raw);
    let text = stripped.trim();
    if text.is_empty() || NOT_QUEST_TIED.contains(&text.to_lowercase().as_str()) {
        return None;
    }

    let mut fragments: Vec<&str> = match SEPARATORS.iter().find(|sep| text.contains(**sep)) {
        Some(sep) => text.split(*sep).collect(),
        None => vec![text],
    };
    if text.contains(',') {
        fragments = fragments.into_iter().flat_map(|f| f.split(',')).collect();
    }

    let quests: Vec<String> = fragments.into_iter().flat_map(clean_fragment).collect();
    if quests.is_empty() { None } else { Some(quests) }
}

fn clean_fragment(fragment: &str) -> Vec<String> {
    let text = strip_emphasis(fragment);
    // piped link: keep the target
    let mut name = text.split('|').next().unwrap_or_default().trim().to_string();

    let lower = name.to_lowercase();
    if let Some(suffix) = SUFFIXES.iter().find(|s| lower.ends_with(**s)) {
        name.truncate(name.len() - suffix.len());
        name = name.trim_end().to_string();
    }
    if name.is_empty() {
        return Vec::new();
    }

    if let Some((_, quests)) = CONJOINED.iter().find(|(joined, _)| *joined == name) {
        return quests.iter().map(|q| q.to_string()).collect();
    }

    if name.starts_with("various") {
        name.replace_range(..1, "V");
    }
    vec![name]
}
