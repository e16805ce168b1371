//! Item record data model.
//!
//! An [`ItemRecord`] starts life as a verbatim cast of the scraped JSON
//! payload and is then enriched by the markup pass. A [`BonusSet`] can only
//! be built with a valid slot, and only attached to an equipable record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::cast::{self, Truth};
use crate::error::{BonusError, RecordError};
use crate::slot::Slot;

/// Keys every scraped payload must carry (values may be null).
pub const BASE_KEYS: &[&str] = &[
    "id",
    "name",
    "members",
    "tradeable",
    "stackable",
    "noted",
    "noteable",
    "equipable",
    "cost",
    "lowalch",
    "highalch",
    "weight",
    "buy_limit",
    "quest_item",
    "release_date",
    "examine",
    "url",
];

/// One normalized game item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRecord {
    pub id: i64,
    pub name: String,
    pub members: Option<bool>,
    pub tradeable: Option<bool>,
    pub stackable: Option<bool>,
    pub noted: Option<bool>,
    pub noteable: Option<bool>,
    pub equipable: Option<bool>,
    pub cost: Option<i64>,
    pub lowalch: Option<i64>,
    pub highalch: Option<i64>,
    /// Inventory weight in kg.
    pub weight: Option<f64>,
    /// Equipped weight in kg; only differs from `weight` for items whose wiki
    /// infobox lists both.
    pub weight_equipped: Option<f64>,
    pub buy_limit: Option<i64>,
    /// Quests the item is tied to. Never an empty list.
    pub quest_item: Option<Vec<String>>,
    /// Canonical `DD Month YYYY` text.
    pub release_date: Option<String>,
    /// Examine text variants. Never an empty list.
    pub examine: Option<Vec<String>>,
    pub store_price: Option<i64>,
    /// Vendors selling the item. Never an empty list.
    pub seller: Option<Vec<String>>,
    pub url: Option<String>,
    bonuses: Option<BonusSet>,
}

/// Result of casting a scraped payload: the record plus any boolean fields
/// whose literal was not recognized (kept as `None`).
#[derive(Debug, Clone)]
pub struct ScrapedItem {
    pub record: ItemRecord,
    pub unrecognized: Vec<(&'static str, String)>,
}

impl ItemRecord {
    /// Start a record that has its identity and nothing else.
    pub fn builder(id: i64, name: impl Into<String>) -> ItemRecordBuilder {
        ItemRecordBuilder {
            record: ItemRecord {
                id,
                name: name.into(),
                members: None,
                tradeable: None,
                stackable: None,
                noted: None,
                noteable: None,
                equipable: None,
                cost: None,
                lowalch: None,
                highalch: None,
                weight: None,
                weight_equipped: None,
                buy_limit: None,
                quest_item: None,
                release_date: None,
                examine: None,
                store_price: None,
                seller: None,
                url: None,
                bonuses: None,
            },
        }
    }

    /// Cast a scraped payload into a base record.
    ///
    /// Every key in [`BASE_KEYS`] must be present; a missing key is a
    /// [`RecordError::SchemaMismatch`] for this item.
    pub fn from_scraped(payload: &Value) -> Result<ScrapedItem, RecordError> {
        let obj = payload.as_object().ok_or(RecordError::NotAnObject)?;
        if let Some(missing) = BASE_KEYS.iter().find(|k| !obj.contains_key(**k)) {
            return Err(RecordError::schema_mismatch(*missing));
        }

        let id = cast::to_int(&obj["id"]).ok_or(RecordError::MissingIdentity("id"))?;
        let name = cast::to_string(&obj["name"])
            .filter(|n| !n.trim().is_empty())
            .ok_or(RecordError::MissingIdentity("name"))?;

        let mut unrecognized = Vec::new();
        let mut flag = |key: &'static str| -> Option<bool> {
            match cast::to_bool(&obj[key]) {
                Some(Truth::Unrecognized) => {
                    unrecognized.push((key, obj[key].to_string()));
                    None
                }
                other => other.and_then(Truth::as_bool),
            }
        };

        let members = flag("members");
        let tradeable = flag("tradeable");
        let stackable = flag("stackable");
        let noted = flag("noted");
        let noteable = flag("noteable");
        let equipable = flag("equipable");

        let weight =
            cast::to_float(&obj["weight"]).map_err(|e| RecordError::cast("weight", e))?;
        let release_date = cast::to_date(&obj["release_date"])
            .map_err(|e| RecordError::cast("release_date", e))?;

        let record = ItemRecord::builder(id, name)
            .flags(members, tradeable, stackable, noted, noteable, equipable)
            .prices(
                cast::to_int(&obj["cost"]),
                cast::to_int(&obj["lowalch"]),
                cast::to_int(&obj["highalch"]),
            )
            .weight(weight, weight)
            .buy_limit(cast::to_int(&obj["buy_limit"]))
            .quest_item(cast::to_string_list(&obj["quest_item"]))
            .release_date(release_date)
            .examine(cast::to_string_list(&obj["examine"]))
            .url(cast::to_string(&obj["url"]))
            .build();

        Ok(ScrapedItem {
            record,
            unrecognized,
        })
    }

    pub fn is_equipable(&self) -> bool {
        self.equipable == Some(true)
    }

    pub fn bonuses(&self) -> Option<&BonusSet> {
        self.bonuses.as_ref()
    }

    /// Attach a bonus block. Only equipable items may carry one.
    pub fn set_bonuses(&mut self, bonuses: BonusSet) -> Result<(), RecordError> {
        if !self.is_equipable() {
            return Err(RecordError::NotEquipable(self.id));
        }
        self.bonuses = Some(bonuses);
        Ok(())
    }

    /// Slot of the attached bonus block, if any.
    pub fn slot(&self) -> Option<Slot> {
        self.bonuses.as_ref().map(|b| b.slot())
    }
}

/// Builder for [`ItemRecord`]. Identity is fixed at construction so a built
/// record is never missing `id` or `name`.
#[derive(Debug, Clone)]
pub struct ItemRecordBuilder {
    record: ItemRecord,
}

impl ItemRecordBuilder {
    pub fn flags(
        mut self,
        members: Option<bool>,
        tradeable: Option<bool>,
        stackable: Option<bool>,
        noted: Option<bool>,
        noteable: Option<bool>,
        equipable: Option<bool>,
    ) -> Self {
        self.record.members = members;
        self.record.tradeable = tradeable;
        self.record.stackable = stackable;
        self.record.noted = noted;
        self.record.noteable = noteable;
        self.record.equipable = equipable;
        self
    }

    pub fn equipable(mut self, equipable: bool) -> Self {
        self.record.equipable = Some(equipable);
        self
    }

    pub fn tradeable(mut self, tradeable: bool) -> Self {
        self.record.tradeable = Some(tradeable);
        self
    }

    pub fn prices(mut self, cost: Option<i64>, lowalch: Option<i64>, highalch: Option<i64>) -> Self {
        self.record.cost = cost;
        self.record.lowalch = lowalch;
        self.record.highalch = highalch;
        self
    }

    pub fn weight(mut self, inventory: Option<f64>, equipped: Option<f64>) -> Self {
        self.record.weight = inventory;
        self.record.weight_equipped = equipped;
        self
    }

    pub fn buy_limit(mut self, buy_limit: Option<i64>) -> Self {
        self.record.buy_limit = buy_limit;
        self
    }

    pub fn quest_item(mut self, quests: Option<Vec<String>>) -> Self {
        self.record.quest_item = quests.filter(|q| !q.is_empty());
        self
    }

    pub fn release_date(mut self, date: Option<String>) -> Self {
        self.record.release_date = date;
        self
    }

    pub fn examine(mut self, examine: Option<Vec<String>>) -> Self {
        self.record.examine = examine.filter(|e| !e.is_empty());
        self
    }

    pub fn store(mut self, store_price: Option<i64>, seller: Option<Vec<String>>) -> Self {
        self.record.store_price = store_price;
        self.record.seller = seller.filter(|s| !s.is_empty());
        self
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.record.url = url;
        self
    }

    pub fn build(self) -> ItemRecord {
        self.record
    }
}

/// The fourteen numeric combat modifiers, in output order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatModifiers {
    pub attack_stab: Option<i64>,
    pub attack_slash: Option<i64>,
    pub attack_crush: Option<i64>,
    pub attack_magic: Option<i64>,
    pub attack_ranged: Option<i64>,
    pub defence_stab: Option<i64>,
    pub defence_slash: Option<i64>,
    pub defence_crush: Option<i64>,
    pub defence_magic: Option<i64>,
    pub defence_ranged: Option<i64>,
    pub melee_strength: Option<i64>,
    pub ranged_strength: Option<i64>,
    pub magic_damage: Option<i64>,
    pub prayer: Option<i64>,
}

/// Combat bonuses of an equipable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusSet {
    #[serde(flatten)]
    modifiers: CombatModifiers,
    slot: Slot,
    #[serde(skip_serializing_if = "Option::is_none")]
    attack_speed: Option<i64>,
}

impl BonusSet {
    /// Build a bonus block.
    ///
    /// Weapon slots must have an attack speed. For every other slot the
    /// speed is discarded.
    pub fn new(
        modifiers: CombatModifiers,
        slot: Slot,
        attack_speed: Option<i64>,
    ) -> Result<Self, BonusError> {
        let attack_speed = if slot.requires_attack_speed() {
            Some(attack_speed.ok_or(BonusError::MissingAttackSpeed(slot))?)
        } else {
            None
        };
        Ok(Self {
            modifiers,
            slot,
            attack_speed,
        })
    }

    pub fn modifiers(&self) -> &CombatModifiers {
        &self.modifiers
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn attack_speed(&self) -> Option<i64> {
        self.attack_speed
    }

    /// Ordered JSON object for this block.
    pub fn to_json(&self) -> serde_json::Result<Map<String, Value>> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "bonus block serialized to {}, expected an object",
                other
            ))),
        }
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
