use super::*;
use crate::template::parse_templates;

fn template(markup: &str) -> Template {
    parse_templates(markup).into_iter().next().unwrap()
}

const WHIP: &str = "{{Infobox Bonuses
|astab = 0
|aslash = +82
|acrush = 0
|amagic = 0
|arange = 0
|dstab = 0
|dslash = 0
|dcrush = 0
|dmagic = 0
|drange = 0
|str = +82
|rstr = 0
|mdmg = 0%
|prayer = 0
|slot = Weapon
|aspeed = 4
}}";

#[test]
fn full_weapon_block() {
    let extraction = extract_bonuses(&template(WHIP)).unwrap();
    let b = &extraction.bonuses;
    assert_eq!(b.slot(), Slot::Weapon);
    assert_eq!(b.attack_speed(), Some(4));
    assert_eq!(b.modifiers().attack_slash, Some(82));
    assert_eq!(b.modifiers().melee_strength, Some(82));
    assert_eq!(b.modifiers().defence_ranged, Some(0));
    assert_eq!(b.modifiers().magic_damage, Some(0));
    assert!(extraction.notes.is_empty());
}

#[test]
fn ring_without_speed_is_valid() {
    let extraction = extract_bonuses(&template("{{Infobox Bonuses|prayer=+1|slot=ring}}")).unwrap();
    assert_eq!(extraction.bonuses.slot(), Slot::Ring);
    assert_eq!(extraction.bonuses.attack_speed(), None);
    assert_eq!(extraction.bonuses.modifiers().prayer, Some(1));
    assert_eq!(extraction.notes.len(), BONUS_KEYS.len() - 1);
    assert!(extraction.notes.contains(&ModifierNote::Absent("astab")));
}

#[test]
fn weapon_without_speed_fails() {
    let err = extract_bonuses(&template("{{Infobox Bonuses|aslash=+5|slot=weapon}}")).unwrap_err();
    assert_eq!(err, BonusError::MissingAttackSpeed(Slot::Weapon));
}

#[test]
fn two_handed_without_speed_fails() {
    let err = extract_bonuses(&template("{{Infobox Bonuses|slot=2h|aspeed=}}")).unwrap_err();
    assert_eq!(err, BonusError::MissingAttackSpeed(Slot::TwoHanded));
}

#[test]
fn missing_slot_is_undetermined() {
    let err = extract_bonuses(&template("{{Infobox Bonuses|astab=+1}}")).unwrap_err();
    assert_eq!(err, BonusError::SlotUndetermined);

    let err = extract_bonuses(&template("{{Infobox Bonuses|slot= }}")).unwrap_err();
    assert_eq!(err, BonusError::SlotUndetermined);
}

#[test]
fn unknown_slot_is_reported() {
    let err = extract_bonuses(&template("{{Infobox Bonuses|slot=pocket}}")).unwrap_err();
    assert_eq!(err, BonusError::UnknownSlot("pocket".to_string()));
}

#[test]
fn slot_is_lowercased_and_unlinked() {
    let extraction = extract_bonuses(&template("{{Infobox Bonuses|slot=[[Shield]]}}")).unwrap();
    assert_eq!(extraction.bonuses.slot(), Slot::Shield);
}

#[test]
fn unparseable_modifier_is_noted() {
    let extraction =
        extract_bonuses(&template("{{Infobox Bonuses|astab=?|slot=head}}")).unwrap();
    assert_eq!(extraction.bonuses.modifiers().attack_stab, None);
    assert!(extraction.notes.contains(&ModifierNote::Unparseable {
        key: "astab",
        text: "?".to_string()
    }));
}

#[test]
fn modifier_text_forms() {
    assert_eq!(modifier_from_text("+5"), Some(5));
    assert_eq!(modifier_from_text("-3"), Some(-3));
    assert_eq!(modifier_from_text(" +15% "), Some(15));
    assert_eq!(modifier_from_text("0"), Some(0));
    assert_eq!(modifier_from_text(""), None);
    assert_eq!(modifier_from_text("+"), None);
}
