use itemwiki_core::CastError;
use itemwiki_core::cast::float_from_text;

/// Inventory and equipped weight in kg.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub inventory: f64,
    pub equipped: f64,
}

/// Normalize a weight value.
///
/// The `kg` unit is dropped wherever it appears. Text mentioning
/// `Inventory` carries two values separated by `<br>`
/// (`'''Inventory:''' 0.3{{kg}}<br> '''Equipped:''' -4.5`); anything else is
/// a single value used for both. Malformed numbers are a [`CastError`].
pub fn normalize_weight(raw: &str) -> Result<Weight, CastError> {
    let mut text = raw.trim().to_string();
    if text.ends_with(" kg") {
        text = text.replace(" kg", "");
    }
    if text.ends_with("kg") {
        text = text.replace("kg", "");
    }
    if text.contains("kg") {
        text = text.replace("kg", "");
    }
    // what remains of a `{{kg}}` unit template
    text = text.replace("{{}}", "");

    if !text.contains("Inventory") {
        let value = float_from_text(text.trim())?;
        return Ok(Weight {
            inventory: value,
            equipped: value,
        });
    }

    let text = text.replace("'''", "").replace(['{', '}'], "");
    let mut halves = text.splitn(2, "<br>");
    let inventory = halves.next().unwrap_or_default().replace("Inventory:", "");
    let equipped = halves
        .next()
        .ok_or_else(|| CastError::float(raw.trim()))?
        .replace("Equipped:", "");

    Ok(Weight {
        inventory: float_from_text(inventory.trim())?,
        equipped: float_from_text(equipped.trim())?,
    })
}
