use itemwiki_core::cast::int_from_text;
use itemwiki_core::{BonusError, BonusSet, CombatModifiers, Slot};

use super::strip_links;
use crate::template::Template;

/// Wiki keys of the combat modifiers, in output order.
pub const BONUS_KEYS: &[&str] = &[
    "astab", "aslash", "acrush", "amagic", "arange", "dstab", "dslash", "dcrush", "dmagic",
    "drange", "str", "rstr", "mdmg", "prayer",
];

/// A modifier that was left null, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModifierNote {
    Absent(&'static str),
    Unparseable { key: &'static str, text: String },
}

/// A bonus block plus notes on modifiers that could not be filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BonusExtraction {
    pub bonuses: BonusSet,
    pub notes: Vec<ModifierNote>,
}

/// Parse a signed modifier such as `+5`, `-3` or `+15%`.
pub fn modifier_from_text(raw: &str) -> Option<i64> {
    let text = strip_links(raw);
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let text = text.strip_suffix('%').unwrap_or(text).trim();
    int_from_text(text)
}

/// Extract a combat-bonus block from a bonuses template.
///
/// The slot is mandatory: without a recognizable slot the whole extraction
/// fails. Weapon slots additionally need `aspeed`. Missing or malformed
/// modifiers are left null and reported in the notes.
pub fn extract_bonuses(template: &Template) -> Result<BonusExtraction, BonusError> {
    let slot_text = template
        .get("slot")
        .map(|s| strip_links(s).trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .ok_or(BonusError::SlotUndetermined)?;
    let slot: Slot = slot_text
        .parse()
        .map_err(|_| BonusError::UnknownSlot(slot_text.clone()))?;

    let mut notes = Vec::new();
    let values: Vec<Option<i64>> = BONUS_KEYS
        .iter()
        .map(|&key| match template.get(key) {
            None => {
                notes.push(ModifierNote::Absent(key));
                None
            }
            Some(raw) => {
                let value = modifier_from_text(raw);
                if value.is_none() {
                    notes.push(ModifierNote::Unparseable {
                        key,
                        text: raw.trim().to_string(),
                    });
                }
                value
            }
        })
        .collect();
    let modifiers = CombatModifiers {
        attack_stab: values[0],
        attack_slash: values[1],
        attack_crush: values[2],
        attack_magic: values[3],
        attack_ranged: values[4],
        defence_stab: values[5],
        defence_slash: values[6],
        defence_crush: values[7],
        defence_magic: values[8],
        defence_ranged: values[9],
        melee_strength: values[10],
        ranged_strength: values[11],
        magic_damage: values[12],
        prayer: values[13],
    };

    let attack_speed = template.get("aspeed").and_then(|s| int_from_text(strip_links(s).trim()));
    let bonuses = BonusSet::new(modifiers, slot, attack_speed)?;

    Ok(BonusExtraction { bonuses, notes })
}

#[cfg(test)]
#[path = "../tests/bonuses_tests.rs"]
mod tests;
