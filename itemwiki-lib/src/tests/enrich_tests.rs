use super::*;
use crate::corpus::Corpus;
use crate::diagnostics::Severity;
use itemwiki_core::Slot;
use serde_json::json;

const WHIP_PAGE: &str = "{{Infobox Item
|name = Abyssal whip
|quest = No
|weight = 0.453
|release = [[24 January]] [[2005]]
|examine = A weapon from the abyss.
}}
{{Infobox Bonuses
|aslash = +82
|str = +82
|slot = weapon
|aspeed = 4
}}";

fn payload(id: i64, name: &str, equipable: bool, tradeable: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "members": true,
        "tradeable": tradeable,
        "stackable": false,
        "noted": false,
        "noteable": true,
        "equipable": equipable,
        "cost": 120001,
        "lowalch": 48000,
        "highalch": 72000,
        "weight": 1.0,
        "buy_limit": null,
        "quest_item": null,
        "release_date": null,
        "examine": "Scraped examine.",
        "url": "https://scraped.example/item"
    })
}

fn enricher(items: &[(&str, &str)], bonuses: &[(&str, &str)], limits: &[(&str, i64)]) -> Enricher {
    let corpora = Corpora {
        items: items.iter().copied().collect::<Corpus>(),
        bonuses: bonuses.iter().copied().collect::<Corpus>(),
        buy_limits: limits.iter().copied().collect(),
    };
    let config = EngineConfig {
        wiki_base_url: "https://wiki.example/w/".into(),
        ..EngineConfig::default()
    };
    Enricher::new(Arc::new(corpora), &config)
}

#[test]
fn no_page_keeps_scraped_fields() {
    let e = enricher(&[], &[], &[]);
    let out = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(out.outcome, Outcome::NoWikiPage);
    assert_eq!(out.record.url.as_deref(), Some("https://scraped.example/item"));
    assert_eq!(out.record.examine, Some(vec!["Scraped examine.".to_string()]));
    assert!(!out.needs_review());
    assert!(!out.diagnostics.needs_review());
}

#[test]
fn equipable_without_page_is_flagged() {
    let e = enricher(&[], &[], &[]);
    let out = e.enrich(4151, &payload(4151, "Abyssal whip", true, true)).unwrap();
    assert_eq!(out.outcome, Outcome::NoWikiPage);
    assert!(out.needs_review());
    assert!(out.diagnostics.needs_review());
    assert!(out.record.bonuses().is_none());
}

#[test]
fn page_without_infobox() {
    let e = enricher(&[("Bones", "Just prose, {{Stub}}.")], &[], &[]);
    let out = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(out.outcome, Outcome::NoInfobox);
    assert_eq!(out.record.url.as_deref(), Some("https://wiki.example/w/Bones"));
    assert_eq!(out.diagnostics.at_least(Severity::Warning).count(), 1);
}

#[test]
fn infobox_fields_override_scraped_values() {
    let e = enricher(&[("Abyssal whip", WHIP_PAGE)], &[], &[]);
    let out = e.enrich(4151, &payload(4151, "Abyssal whip", true, true)).unwrap();
    let r = &out.record;
    assert_eq!(r.url.as_deref(), Some("https://wiki.example/w/Abyssal_whip"));
    assert_eq!(r.weight, Some(0.453));
    assert_eq!(r.weight_equipped, Some(0.453));
    assert_eq!(r.quest_item, None);
    assert_eq!(r.release_date.as_deref(), Some("24 January 2005"));
    assert_eq!(r.examine, Some(vec!["A weapon from the abyss.".to_string()]));
}

#[test]
fn bonuses_fall_back_to_item_page() {
    let e = enricher(&[("Abyssal whip", WHIP_PAGE)], &[], &[]);
    let out = e.enrich(4151, &payload(4151, "Abyssal whip", true, true)).unwrap();
    assert_eq!(out.outcome, Outcome::WithBonuses);
    let bonuses = out.record.bonuses().unwrap();
    assert_eq!(bonuses.slot(), Slot::Weapon);
    assert_eq!(bonuses.attack_speed(), Some(4));
    assert_eq!(bonuses.modifiers().attack_slash, Some(82));
    assert!(!out.needs_review());
}

#[test]
fn bonuses_corpus_takes_precedence() {
    let e = enricher(
        &[("Abyssal whip", WHIP_PAGE)],
        &[("Abyssal whip", "{{Infobox Bonuses|aslash=+90|slot=weapon|aspeed=4}}")],
        &[],
    );
    let out = e.enrich(4151, &payload(4151, "Abyssal whip", true, true)).unwrap();
    assert_eq!(out.record.bonuses().unwrap().modifiers().attack_slash, Some(90));
}

#[test]
fn weapon_without_speed_is_flagged() {
    let page = "{{Infobox Item|name=Training sword}}{{Infobox Bonuses|astab=+4|slot=weapon}}";
    let e = enricher(&[("Training sword", page)], &[], &[]);
    let out = e.enrich(9703, &payload(9703, "Training sword", true, false)).unwrap();
    assert_eq!(out.outcome, Outcome::BonusesMissing);
    assert!(out.needs_review());
    assert!(out.record.bonuses().is_none());
}

#[test]
fn ring_without_speed_has_bonuses() {
    let page = "{{Infobox Item|name=Ring of wealth}}{{Infobox Bonuses|prayer=+1|slot=ring}}";
    let e = enricher(&[("Ring of wealth", page)], &[], &[]);
    let out = e.enrich(2572, &payload(2572, "Ring of wealth", true, true)).unwrap();
    assert_eq!(out.outcome, Outcome::WithBonuses);
    assert_eq!(out.record.bonuses().unwrap().attack_speed(), None);
}

#[test]
fn not_equipable_never_gets_bonuses() {
    let page = "{{Infobox Item|name=Bones}}{{Infobox Bonuses|slot=weapon|aspeed=4}}";
    let e = enricher(&[("Bones", page)], &[], &[]);
    let out = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(out.outcome, Outcome::Finalized);
    assert!(out.record.bonuses().is_none());
}

#[test]
fn invalid_weight_keeps_scraped_value() {
    let e = enricher(&[("Bones", "{{Infobox Item|weight=a lot}}")], &[], &[]);
    let out = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(out.record.weight, Some(1.0));
    assert!(
        out.diagnostics
            .at_least(Severity::Warning)
            .any(|d| d.reason.contains("'weight' unusable"))
    );
}

#[test]
fn duplicate_infobox_is_noted() {
    let page = "{{Infobox Item|weight=1}}{{Infobox Item|weight=2}}";
    let e = enricher(&[("Bones", page)], &[], &[]);
    let out = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(out.record.weight, Some(1.0));
    assert!(
        out.diagnostics
            .entries()
            .iter()
            .any(|d| d.reason.contains("2 item infoboxes"))
    );
}

#[test]
fn buy_limit_policy() {
    let page = "{{Infobox Item|name=x}}";
    let e = enricher(
        &[("Bones", page), ("Coins", page), ("Ashes", page), ("Quest key", page)],
        &[],
        &[("Bones", 10000)],
    );

    let tradeable_in_table = e.enrich(526, &payload(526, "Bones", false, true)).unwrap();
    assert_eq!(tradeable_in_table.record.buy_limit, Some(10000));

    let mut scraped = payload(995, "Coins", false, true);
    scraped["buy_limit"] = json!(25000);
    let tradeable_scraped = e.enrich(995, &scraped).unwrap();
    assert_eq!(tradeable_scraped.record.buy_limit, Some(25000));

    let tradeable_unknown = e.enrich(592, &payload(592, "Ashes", false, true)).unwrap();
    assert_eq!(tradeable_unknown.record.buy_limit, Some(UNKNOWN_BUY_LIMIT));

    let mut untradeable = payload(1, "Quest key", false, false);
    untradeable["buy_limit"] = json!(5);
    let out = e.enrich(1, &untradeable).unwrap();
    assert_eq!(out.record.buy_limit, None);
}

#[test]
fn missing_key_fails_only_this_item() {
    let e = enricher(&[], &[], &[]);
    let mut bad = payload(526, "Bones", false, true);
    bad.as_object_mut().unwrap().remove("highalch");
    let err = e.enrich(526, &bad).unwrap_err();
    assert_eq!(err.id, "526");
    assert_eq!(err.stage, Stage::Scraped);
    assert!(err.reason.contains("highalch"));
}

#[test]
fn unrecognized_flag_is_reported() {
    let e = enricher(&[], &[], &[]);
    let mut p = payload(526, "Bones", false, true);
    p["members"] = json!("maybe");
    let out = e.enrich(526, &p).unwrap();
    assert_eq!(out.record.members, None);
    assert!(
        out.diagnostics
            .at_least(Severity::Warning)
            .any(|d| d.reason.contains("members"))
    );
}

#[test]
fn key_is_kept_when_payload_id_differs() {
    let e = enricher(&[], &[], &[]);
    let out = e.enrich(100, &payload(7, "Bones", false, true)).unwrap();
    assert_eq!(out.key, 100);
    assert_eq!(out.record.id, 7);
    assert!(
        out.diagnostics
            .at_least(Severity::Warning)
            .any(|d| d.reason.contains("differs from its key 100"))
    );
}

#[test]
fn page_url_replaces_spaces() {
    let e = enricher(&[], &[], &[]);
    assert_eq!(
        e.page_url("Dragon dagger(p++)"),
        "https://wiki.example/w/Dragon_dagger(p++)"
    );
    assert_eq!(e.page_url("Rune platebody (g)"), "https://wiki.example/w/Rune_platebody_(g)");
}
