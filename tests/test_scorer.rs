//! Synergy scoring tests.

mod common;

use common::{approx_eq, burn_deck, burn_engine, card, empty_deck, off_theme_deck};
use deck_synergy::scorer::{color_consistency, curve_quality, type_balance};
use deck_synergy::{
    Breakdown, Deck, DeckStats, SynergyEngine, SynergyError, SynergyKnowledgeBase, SynergyScorer,
    TieBreak, Weights,
};
use std::collections::HashMap;

fn spread(entries: &[(&str, u32)]) -> HashMap<String, u32> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), *v))
        .collect()
}

// ---------------------------------------------------------------------------
// Whole-deck scoring
// ---------------------------------------------------------------------------

#[test]
fn empty_deck_scores_zero() {
    let engine = SynergyEngine::builder().build().unwrap();
    assert_eq!(engine.score(&empty_deck()), 0);
    assert_eq!(engine.breakdown(&empty_deck()), Breakdown::default());
}

#[test]
fn burn_deck_scores_well() {
    let engine = burn_engine();
    let deck = burn_deck();

    let scorer = engine.scorer();
    assert_eq!(scorer.dominant_tag(&deck.cards).as_deref(), Some("burn"));
    assert!(scorer.cohesion_ratio(&deck.cards) > 0.8);

    let score = engine.score(&deck);
    assert!(score >= 60, "score was {}", score);
}

#[test]
fn burn_deck_breakdown() {
    let engine = burn_engine();
    let breakdown = engine.breakdown(&burn_deck());

    assert_eq!(
        breakdown,
        Breakdown {
            cohesion: 83,
            interaction: 50,
            curve: 100,
            color: 100,
            types: 50,
        }
    );
}

#[test]
fn scoring_is_idempotent() {
    let engine = burn_engine();
    let deck = burn_deck();
    let before = deck.clone();

    assert_eq!(engine.score(&deck), engine.score(&deck));
    assert_eq!(engine.analyze(&deck), engine.analyze(&deck));
    assert_eq!(deck, before);
}

#[test]
fn scores_stay_within_bounds() {
    let engine = burn_engine();
    for deck in [burn_deck(), off_theme_deck(), empty_deck()] {
        let score = engine.score(&deck);
        assert!(score <= 100);
        let b = engine.breakdown(&deck);
        for sub in [b.cohesion, b.interaction, b.curve, b.color, b.types] {
            assert!(sub <= 100);
        }
    }
}

#[test]
fn untagged_unrelated_deck_scores_only_stats() {
    let engine = SynergyEngine::builder().empty_knowledge_base().build().unwrap();
    let deck = burn_deck();

    let breakdown = engine.breakdown(&deck);
    assert_eq!(breakdown.cohesion, 0);
    assert_eq!(breakdown.interaction, 0);
    // curve 20 + color 15 + types 5
    assert_eq!(engine.score(&deck), 40);
}

#[test]
fn custom_weights_change_the_score() {
    let weights = Weights {
        cohesion: 0,
        interaction: 0,
        curve: 0,
        color: 100,
        types: 0,
    };
    let engine = SynergyEngine::builder().weights(weights).build().unwrap();
    assert_eq!(engine.score(&burn_deck()), 100);
}

#[test]
fn weights_must_sum_to_one_hundred() {
    let weights = Weights {
        cohesion: 50,
        ..Weights::default()
    };
    let result = SynergyEngine::builder().weights(weights).build();
    assert!(matches!(result, Err(SynergyError::InvalidArgument(_))));
}

// ---------------------------------------------------------------------------
// Cohesion / interaction
// ---------------------------------------------------------------------------

#[test]
fn dominant_tag_weights_by_quantity() {
    let kb = SynergyKnowledgeBase::seeded();
    let scorer = SynergyScorer::new(&kb);
    let cards = vec![
        card("Counterspell", 1, "Instant", Some("{U}{U}")),
        card("Goblin Guide", 4, "Creature — Goblin Scout", Some("{R}")),
    ];
    assert_eq!(scorer.dominant_tag(&cards).as_deref(), Some("aggro"));
}

#[test]
fn dominant_tag_tie_goes_to_first_seen() {
    let kb = SynergyKnowledgeBase::seeded();
    let scorer = SynergyScorer::new(&kb);
    let cards = off_theme_deck().cards;

    let weights = scorer.tag_weights(&cards);
    assert_eq!(weights[0], ("burn".to_string(), 8));
    assert!(weights.contains(&("direct-damage".to_string(), 8)));
    assert_eq!(scorer.dominant_tag(&cards).as_deref(), Some("burn"));
}

#[test]
fn cohesion_counts_entries_not_copies() {
    let kb = SynergyKnowledgeBase::seeded();
    let scorer = SynergyScorer::new(&kb);
    let cards = vec![
        card("Lightning Bolt", 40, "Instant", Some("{R}")),
        card("Counterspell", 1, "Instant", Some("{U}{U}")),
    ];
    assert!(approx_eq(scorer.cohesion_ratio(&cards), 0.5));
}

#[test]
fn cohesion_is_zero_without_tags() {
    let kb = SynergyKnowledgeBase::empty();
    let scorer = SynergyScorer::new(&kb);
    assert!(approx_eq(scorer.cohesion_ratio(&burn_deck().cards), 0.0));
    assert_eq!(scorer.dominant_tag(&burn_deck().cards), None);
}

#[test]
fn interaction_counts_relations_from_either_side() {
    let kb = SynergyKnowledgeBase::seeded();
    let scorer = SynergyScorer::new(&kb);
    // Only Snapcaster Mage lists the other card.
    let cards = vec![
        card("Snapcaster Mage", 1, "Creature — Human Wizard", Some("{1}{U}")),
        card("Lightning Bolt", 1, "Instant", Some("{R}")),
    ];
    assert!(approx_eq(scorer.interaction_ratio(&cards), 1.0));
}

#[test]
fn adding_a_relation_never_lowers_interaction() {
    let mut kb = SynergyKnowledgeBase::empty();
    let cards = vec![
        card("Thing in the Ice", 2, "Creature — Horror", Some("{1}{U}")),
        card("Brazen Borrower", 2, "Creature — Faerie Rogue", Some("{1}{U}{U}")),
        card("Island", 10, "Basic Land — Island", None),
    ];

    let before = SynergyScorer::new(&kb).interaction_ratio(&cards);
    kb.add_relation("Thing in the Ice", "Brazen Borrower");
    let after = SynergyScorer::new(&kb).interaction_ratio(&cards);

    assert!(after >= before);
    assert!(approx_eq(after, 2.0 / 3.0));
}

// ---------------------------------------------------------------------------
// Stats-only sub-scores
// ---------------------------------------------------------------------------

#[test]
fn curve_quality_rewards_low_peak_and_one_drops() {
    assert!(approx_eq(curve_quality(&[0, 8, 10, 6, 4, 2, 0]), 1.0));
}

#[test]
fn curve_quality_penalizes_top_heavy_curves() {
    assert!(approx_eq(curve_quality(&[0, 0, 0, 0, 2, 5, 5]), 0.3));
}

#[test]
fn curve_quality_of_empty_curve_is_zero() {
    assert!(approx_eq(curve_quality(&[0; 7]), 0.0));
}

#[test]
fn color_consistency_tiers() {
    assert!(approx_eq(color_consistency(&spread(&[("W", 10)])), 1.0));
    assert!(approx_eq(color_consistency(&spread(&[("W", 5), ("U", 5)])), 0.8));
    assert!(approx_eq(
        color_consistency(&spread(&[("W", 5), ("U", 5), ("B", 5)])),
        0.6
    ));
    assert!(approx_eq(
        color_consistency(&spread(&[("W", 5), ("U", 5), ("B", 5), ("R", 5), ("G", 1)])),
        0.4
    ));
}

#[test]
fn color_consistency_ignores_colorless() {
    assert!(approx_eq(
        color_consistency(&spread(&[("R", 20), ("Colorless", 8)])),
        1.0
    ));
    assert!(approx_eq(color_consistency(&spread(&[("Colorless", 8)])), 1.0));
}

#[test]
fn color_consistency_without_data_is_neutral() {
    assert!(approx_eq(color_consistency(&HashMap::new()), 1.0));
}

#[test]
fn type_balance_rewards_healthy_land_and_creature_ratios() {
    let types = spread(&[("Land", 24), ("Creature", 20), ("Instant", 16)]);
    assert!(approx_eq(type_balance(&types), 1.0));
}

#[test]
fn type_balance_penalizes_missing_lands() {
    let types = spread(&[("Instant", 10)]);
    assert!(approx_eq(type_balance(&types), 0.3));
}

#[test]
fn type_balance_of_empty_breakdown_is_zero() {
    assert!(approx_eq(type_balance(&HashMap::new()), 0.0));
    assert!(approx_eq(type_balance(&spread(&[("Land", 0)])), 0.0));
}

#[test]
fn host_supplied_stats_are_used_as_given() {
    let engine = SynergyEngine::builder().empty_knowledge_base().build().unwrap();
    let stats = DeckStats {
        mana_curve: [0, 0, 0, 0, 0, 0, 0],
        ..DeckStats::default()
    };
    let deck = Deck::with_stats(
        "No stats",
        vec![card("Mystery Card", 1, "", None)],
        stats,
    );

    // Only the neutral color sub-score contributes.
    assert_eq!(engine.score(&deck), 15);
}

// ---------------------------------------------------------------------------
// Large counts
// ---------------------------------------------------------------------------

#[test]
fn huge_quantities_saturate_instead_of_overflowing() {
    let engine = burn_engine();
    let deck = Deck::new(
        "Huge",
        vec![
            card("Lightning Bolt", 4_000_000_000, "Instant", Some("{R}")),
            card("Chain Lightning", 4_000_000_000, "Sorcery", Some("{R}")),
        ],
    );

    assert_eq!(deck.stats.total_cards, u32::MAX);
    assert_eq!(deck.stats.curve_total(), u64::from(u32::MAX));

    // burn saturates at u32::MAX and still outweighs aggro at 4e9.
    let scorer = engine.scorer();
    assert_eq!(scorer.dominant_tag(&deck.cards).as_deref(), Some("burn"));
    assert!(engine.score(&deck) <= 100);
}

#[test]
fn huge_host_supplied_counts_score_normally() {
    let engine = burn_engine();
    let deck = Deck::from_value(serde_json::json!({
        "name": "Huge stats",
        "cards": [
            { "name": "Goblin Guide", "qty": 4_000_000_000u32, "type": "Creature — Goblin Scout" }
        ],
        "stats": {
            "manaCurve": [0, 4_000_000_000u32, 0, 0, 0, 4_000_000_000u32, 0],
            "typeBreakdown": { "Land": 4_000_000_000u32, "Creature": 4_000_000_000u32 }
        }
    }))
    .unwrap();

    assert!(approx_eq(curve_quality(&deck.stats.mana_curve), 0.8));
    assert!(approx_eq(type_balance(&deck.stats.type_breakdown), 0.7));

    let breakdown = engine.breakdown(&deck);
    assert_eq!(breakdown.curve, 80);
    assert_eq!(breakdown.types, 70);
    assert!(engine.score(&deck) <= 100);
    assert!(!engine.suggest(&deck).is_empty());
}

// ---------------------------------------------------------------------------
// Engine configuration
// ---------------------------------------------------------------------------

#[test]
fn engine_exposes_its_configuration() {
    let weights = Weights {
        cohesion: 20,
        interaction: 20,
        curve: 20,
        color: 20,
        types: 20,
    };
    let engine = SynergyEngine::builder()
        .weights(weights)
        .tie_break(TieBreak::Jitter { seed: 7 })
        .build()
        .unwrap();

    assert_eq!(engine.weights(), weights);
    assert_eq!(engine.tie_break(), TieBreak::Jitter { seed: 7 });
    let default_engine = SynergyEngine::builder().build().unwrap();
    assert_eq!(default_engine.tie_break(), TieBreak::Lexicographic);
    assert_eq!(default_engine.weights(), Weights::default());
}
