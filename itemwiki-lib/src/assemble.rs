//! Ordered JSON output.
//!
//! Field order is part of the output contract, so records are built into an
//! insertion-ordered map by hand rather than derived.

use itemwiki_core::ItemRecord;
use serde_json::{Map, Value};

use crate::schema::{ExamineFormat, SchemaProfile};

/// Build the output object for `record` under `profile`.
///
/// The `bonuses` block is emitted only for equipable records that carry one.
pub fn to_json(
    record: &ItemRecord,
    profile: &SchemaProfile,
) -> serde_json::Result<Map<String, Value>> {
    let mut out = Map::new();
    out.insert("id".into(), record.id.into());
    out.insert("name".into(), record.name.clone().into());
    out.insert("members".into(), record.members.into());
    out.insert("tradeable".into(), record.tradeable.into());
    out.insert("stackable".into(), record.stackable.into());
    out.insert("noted".into(), record.noted.into());
    out.insert("noteable".into(), record.noteable.into());
    out.insert("equipable".into(), record.equipable.into());
    out.insert("cost".into(), record.cost.into());
    out.insert("lowalch".into(), record.lowalch.into());
    out.insert("highalch".into(), record.highalch.into());
    out.insert("weight".into(), float(record.weight));
    if profile.split_weight && record.is_equipable() {
        out.insert("weight_equipped".into(), float(record.weight_equipped));
    }
    out.insert("buy_limit".into(), record.buy_limit.into());
    out.insert("quest_item".into(), list(record.quest_item.as_deref()));
    out.insert("release_date".into(), record.release_date.clone().into());
    if profile.store_fields {
        out.insert("store_price".into(), record.store_price.into());
        out.insert("seller".into(), list(record.seller.as_deref()));
    }
    out.insert("examine".into(), examine(record.examine.as_deref(), profile.examine));
    out.insert("url".into(), record.url.clone().into());

    if let Some(bonuses) = record.bonuses().filter(|_| record.is_equipable()) {
        out.insert("bonuses".into(), Value::Object(bonuses.to_json()?));
    }
    Ok(out)
}

pub fn to_json_string(
    record: &ItemRecord,
    profile: &SchemaProfile,
    pretty: bool,
) -> serde_json::Result<String> {
    let value = Value::Object(to_json(record, profile)?);
    if pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    }
}

// Non-finite floats have no JSON form and become null.
fn float(v: Option<f64>) -> Value {
    v.and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

fn list(items: Option<&[String]>) -> Value {
    match items {
        Some(items) if !items.is_empty() => items.to_vec().into(),
        _ => Value::Null,
    }
}

fn examine(items: Option<&[String]>, format: ExamineFormat) -> Value {
    match (items, format) {
        (Some([single]), ExamineFormat::CollapseSingle) => single.clone().into(),
        (items, _) => list(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaVersion;
    use itemwiki_core::{BonusSet, CombatModifiers, Slot};

    fn keys(map: &Map<String, Value>) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    fn bones() -> ItemRecord {
        ItemRecord::builder(526, "Bones")
            .equipable(false)
            .weight(Some(0.5), Some(0.5))
            .examine(Some(vec!["Bones are for burying!".into()]))
            .store(Some(1), Some(vec!["General store".into()]))
            .build()
    }

    fn whip() -> ItemRecord {
        let mut record = ItemRecord::builder(4151, "Abyssal whip")
            .equipable(true)
            .weight(Some(0.453), Some(0.4))
            .examine(Some(vec!["A weapon from the abyss.".into()]))
            .build();
        let modifiers = CombatModifiers {
            attack_slash: Some(82),
            melee_strength: Some(82),
            ..CombatModifiers::default()
        };
        record
            .set_bonuses(BonusSet::new(modifiers, Slot::Weapon, Some(4)).unwrap())
            .unwrap();
        record
    }

    #[test]
    fn current_order_without_bonuses() {
        let map = to_json(&bones(), &SchemaProfile::default()).unwrap();
        assert_eq!(
            keys(&map),
            [
                "id", "name", "members", "tradeable", "stackable", "noted", "noteable",
                "equipable", "cost", "lowalch", "highalch", "weight", "buy_limit", "quest_item",
                "release_date", "examine", "url",
            ]
        );
        assert_eq!(map["examine"], serde_json::json!(["Bones are for burying!"]));
    }

    #[test]
    fn current_order_with_bonuses() {
        let map = to_json(&whip(), &SchemaProfile::default()).unwrap();
        assert_eq!(keys(&map).last(), Some(&"bonuses"));
        assert_eq!(map.len(), 18);
        let bonuses = map["bonuses"].as_object().unwrap();
        assert_eq!(bonuses.keys().next().map(String::as_str), Some("attack_stab"));
        assert_eq!(bonuses["slot"], "weapon");
        assert_eq!(bonuses["attack_speed"], 4);
    }

    #[test]
    fn legacy_adds_split_weight_and_store_fields() {
        let profile = SchemaVersion::Legacy.profile();
        let map = to_json(&whip(), &profile).unwrap();
        let k = keys(&map);
        let pos = |key: &str| k.iter().position(|x| *x == key).unwrap();
        assert_eq!(pos("weight_equipped"), pos("weight") + 1);
        assert_eq!(pos("store_price"), pos("release_date") + 1);
        assert_eq!(pos("seller"), pos("store_price") + 1);
        assert_eq!(pos("examine"), pos("seller") + 1);
        assert_eq!(map["weight_equipped"], 0.4);
        assert_eq!(map["examine"], "A weapon from the abyss.");
    }

    #[test]
    fn legacy_split_weight_only_for_equipable() {
        let map = to_json(&bones(), &SchemaVersion::Legacy.profile()).unwrap();
        assert!(!map.contains_key("weight_equipped"));
        assert_eq!(map["seller"], serde_json::json!(["General store"]));
    }

    #[test]
    fn legacy_keeps_multiple_examine_variants_as_list() {
        let record = ItemRecord::builder(1, "Thing")
            .examine(Some(vec!["One".into(), "Two".into()]))
            .build();
        let map = to_json(&record, &SchemaVersion::Legacy.profile()).unwrap();
        assert_eq!(map["examine"], serde_json::json!(["One", "Two"]));
    }

    #[test]
    fn pretty_and_compact_strings() {
        let compact = to_json_string(&bones(), &SchemaProfile::default(), false).unwrap();
        assert!(compact.starts_with("{\"id\":526,\"name\":\"Bones\""));
        let pretty = to_json_string(&bones(), &SchemaProfile::default(), true).unwrap();
        assert!(pretty.contains("\n  \"id\": 526,"));
    }
}
