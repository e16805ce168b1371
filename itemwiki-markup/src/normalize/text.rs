use itemwiki_core::cast::int_from_text;

use super::strip_links;

/// Variant markers for examine and seller text, in priority order.
const VARIANT_MARKERS: &[&str] = &["!", " and ", " or "];

/// Stray footnote and annotation text seen in seller fields.
const SELLER_ARTIFACTS: &[&str] = &["41,600", "l/c", "l/o"];

/// Split on the first variant marker present and trim each piece.
///
/// Empty pieces are dropped, so a trailing `!` does not produce an empty
/// variant.
pub fn split_variants(text: &str) -> Vec<String> {
    let pieces: Vec<&str> = match VARIANT_MARKERS.iter().find(|m| text.contains(**m)) {
        Some(marker) => text.split(*marker).collect(),
        None => vec![text],
    };
    pieces
        .into_iter()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalize examine text into its context-dependent variants.
pub fn normalize_examine(raw: &str) -> Option<Vec<String>> {
    let variants = split_variants(&strip_links(raw));
    if variants.is_empty() { None } else { Some(variants) }
}

/// Normalize a store price. Blank or non-numeric text is `None`.
pub fn normalize_store_price(raw: &str) -> Option<i64> {
    let text = strip_links(raw);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    int_from_text(&text.replace(',', ""))
}

/// Normalize a seller field into vendor names.
pub fn normalize_seller(raw: &str) -> Option<Vec<String>> {
    let mut text = strip_links(raw).trim().to_string();
    if text.is_empty() || text.eq_ignore_ascii_case("no") {
        return None;
    }
    for artifact in SELLER_ARTIFACTS {
        text = text.replace(artifact, "");
    }
    let sellers = split_variants(&text);
    if sellers.is_empty() { None } else { Some(sellers) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(items: &[&str]) -> Option<Vec<String>> {
        Some(items.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn examine_single_variant() {
        assert_eq!(normalize_examine("A weapon from the abyss."), v(&["A weapon from the abyss."]));
    }

    #[test]
    fn examine_splits_on_exclamation() {
        assert_eq!(
            normalize_examine("A sword! A very sharp sword!"),
            v(&["A sword", "A very sharp sword"])
        );
    }

    #[test]
    fn examine_marker_priority() {
        // "!" is checked before " and ", so " and " stays inside a variant.
        assert_eq!(
            normalize_examine("Salt and pepper! Hot!"),
            v(&["Salt and pepper", "Hot"])
        );
        assert_eq!(
            normalize_examine("Unlit. and Lit."),
            v(&["Unlit.", "Lit."])
        );
        assert_eq!(
            normalize_examine("Empty. or Full."),
            v(&["Empty.", "Full."])
        );
    }

    #[test]
    fn examine_empty_is_none() {
        assert_eq!(normalize_examine("  "), None);
        assert_eq!(normalize_examine("!"), None);
    }

    #[test]
    fn examine_is_stable() {
        let once = normalize_examine("A sword! A very sharp sword!").unwrap();
        for variant in &once {
            assert_eq!(normalize_examine(variant), Some(vec![variant.clone()]));
        }
    }

    #[test]
    fn store_price() {
        assert_eq!(normalize_store_price(" 150 "), Some(150));
        assert_eq!(normalize_store_price("1,200"), Some(1200));
        assert_eq!(normalize_store_price("   "), None);
        assert_eq!(normalize_store_price("No"), None);
        assert_eq!(normalize_store_price("[[Coins|15]]"), None);
    }

    #[test]
    fn seller_no_is_none() {
        assert_eq!(normalize_seller("No"), None);
        assert_eq!(normalize_seller("no"), None);
        assert_eq!(normalize_seller(""), None);
    }

    #[test]
    fn seller_splits_vendors() {
        assert_eq!(
            normalize_seller("[[Bob's Brilliant Axes]] and [[Lumbridge General Store]]"),
            v(&["Bob's Brilliant Axes", "Lumbridge General Store"])
        );
    }

    #[test]
    fn seller_artifacts_are_removed() {
        assert_eq!(normalize_seller("[[Grand Exchange]]l/c"), v(&["Grand Exchange"]));
        assert_eq!(normalize_seller("[[Zaff]] 41,600 or [[Horvik]]l/o"), v(&["Zaff", "Horvik"]));
    }
}
