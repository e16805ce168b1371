use serde::{Deserialize, Serialize};

/// Equipment slots an equipable item can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Weapon,
    #[serde(rename = "2h")]
    TwoHanded,
    Head,
    Cape,
    Neck,
    Ammo,
    Body,
    Legs,
    Hands,
    Feet,
    Ring,
    Shield,
}

/// All slot variants in output order.
const ALL_SLOTS: &[Slot] = &[
    Slot::Weapon,
    Slot::TwoHanded,
    Slot::Head,
    Slot::Cape,
    Slot::Neck,
    Slot::Ammo,
    Slot::Body,
    Slot::Legs,
    Slot::Hands,
    Slot::Feet,
    Slot::Ring,
    Slot::Shield,
];

impl Slot {
    /// Canonical lowercase name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weapon => "weapon",
            Self::TwoHanded => "2h",
            Self::Head => "head",
            Self::Cape => "cape",
            Self::Neck => "neck",
            Self::Ammo => "ammo",
            Self::Body => "body",
            Self::Legs => "legs",
            Self::Hands => "hands",
            Self::Feet => "feet",
            Self::Ring => "ring",
            Self::Shield => "shield",
        }
    }

    /// Alternative spellings seen in wiki markup.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::TwoHanded => &["two-handed", "two handed", "2-handed"],
            _ => &[],
        }
    }

    pub fn all() -> &'static [Slot] {
        ALL_SLOTS
    }

    /// Weapon slots carry an attack speed; every other slot ignores it.
    pub fn requires_attack_speed(&self) -> bool {
        matches!(self, Self::Weapon | Self::TwoHanded)
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string cannot be parsed into a `Slot`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotParseError(pub String);

impl std::fmt::Display for SlotParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown slot: '{}'", self.0)
    }
}

impl std::error::Error for SlotParseError {}

impl std::str::FromStr for Slot {
    type Err = SlotParseError;

    /// Parse a slot from its canonical name or an alias (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        for &slot in ALL_SLOTS {
            if slot.as_str() == lower || slot.aliases().contains(&lower.as_str()) {
                return Ok(slot);
            }
        }
        Err(SlotParseError(s.to_string()))
    }
}
