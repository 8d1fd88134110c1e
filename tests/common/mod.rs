//! Shared test fixtures for the deck synergy integration tests.
//!
//! Provides a mono-red burn deck whose expected scores are worked out by hand,
//! an engine whose knowledge base tags every spell in that deck, and a small
//! helper for building deck cards.

#![allow(dead_code)]

use deck_synergy::{Deck, DeckCard, SynergyEngine};

/// Build a deck card with an optional type line and mana cost.
pub fn card(name: &str, quantity: u32, type_line: &str, mana_cost: Option<&str>) -> DeckCard {
    let card = DeckCard::new(name, quantity).with_type_line(type_line);
    match mana_cost {
        Some(cost) => card.with_mana_cost(cost),
        None => card,
    }
}

/// 20 Mountains, 16 Lightning Bolt and 24 more burn spells at CMC 1-3.
///
/// Curve: `[0, 28, 6, 6, 0, 0, 0]`, colors: `{R: 46}`, types:
/// `{Land: 20, Instant: 22, Sorcery: 18}`.
pub fn burn_deck() -> Deck {
    Deck::new(
        "Mono Red Burn",
        vec![
            card("Mountain", 20, "Basic Land — Mountain", None),
            card("Lightning Bolt", 16, "Instant", Some("{R}")),
            card("Lava Spike", 6, "Sorcery — Arcane", Some("{R}")),
            card("Chain Lightning", 6, "Sorcery", Some("{R}")),
            card("Searing Blaze", 6, "Instant", Some("{R}{R}")),
            card("Skewer the Critics", 6, "Sorcery", Some("{2}{R}")),
        ],
    )
}

/// Seeded engine with the burn spells missing from the seed tables tagged `burn`.
pub fn burn_engine() -> SynergyEngine {
    let mut engine = SynergyEngine::builder().build().unwrap();
    for name in ["Chain Lightning", "Searing Blaze", "Skewer the Critics"] {
        engine.add_tags(name, ["burn"]);
    }
    engine
}

/// Two burn spells plus nine singleton cards from unrelated archetypes.
///
/// `burn` ties with `direct-damage` at weight 8 and wins as the first seen tag.
pub fn off_theme_deck() -> Deck {
    Deck::new(
        "Pile",
        vec![
            card("Lightning Bolt", 4, "Instant", Some("{R}")),
            card("Lava Spike", 4, "Sorcery — Arcane", Some("{R}")),
            card("Counterspell", 1, "Instant", Some("{U}{U}")),
            card("Wrath of God", 1, "Sorcery", Some("{2}{W}{W}")),
            card("Snapcaster Mage", 1, "Creature — Human Wizard", Some("{1}{U}")),
            card("Splinter Twin", 1, "Enchantment — Aura", Some("{2}{R}{R}")),
            card("Birds of Paradise", 1, "Creature — Bird", Some("{G}")),
            card("Llanowar Elves", 1, "Creature — Elf Druid", Some("{G}")),
            card("Cranial Plating", 1, "Artifact — Equipment", Some("{2}")),
            card("Ornithopter", 1, "Artifact Creature — Thopter", Some("{0}")),
            card("Goblin Guide", 1, "Creature — Goblin Scout", Some("{R}")),
        ],
    )
}

pub fn empty_deck() -> Deck {
    Deck::new("Empty", Vec::new())
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
