//! Weighted multi-factor deck synergy scoring.
//!
//! The score combines five sub-scores, each a ratio in `[0, 1]`:
//!
//! | Sub-score   | Default weight | Source                                   |
//! |-------------|----------------|------------------------------------------|
//! | cohesion    | 30             | share of cards carrying the dominant tag |
//! | interaction | 25             | share of cards with a partner in the deck|
//! | curve       | 20             | mana curve shape                         |
//! | color       | 15             | number of colors                         |
//! | types       | 10             | land / creature balance                  |
//!
//! The weighted sum is rounded and clamped to `0..=100`. An empty deck scores 0.

use std::collections::HashMap;

use crate::config::{Weights, CURVE_BUCKETS};
use crate::knowledge::SynergyKnowledgeBase;
use crate::models::{color_count, Breakdown, CardCategory, Deck, DeckCard};

// ---------------------------------------------------------------------------
// SynergyScorer
// ---------------------------------------------------------------------------

/// Scores decks against a borrowed [`SynergyKnowledgeBase`].
pub struct SynergyScorer<'a> {
    kb: &'a SynergyKnowledgeBase,
    weights: Weights,
}

impl<'a> SynergyScorer<'a> {
    /// Create a scorer with the default weights.
    pub fn new(kb: &'a SynergyKnowledgeBase) -> Self {
        Self::with_weights(kb, Weights::default())
    }

    /// Create a scorer with custom weights.
    ///
    /// The weights are used as given; validate them with
    /// [`Weights::validate`] first if they come from user input.
    pub fn with_weights(kb: &'a SynergyKnowledgeBase, weights: Weights) -> Self {
        Self { kb, weights }
    }

    /// Overall synergy score for a deck, in `0..=100`.
    pub fn score(&self, deck: &Deck) -> u8 {
        if deck.is_empty() {
            return 0;
        }

        let ratios = self.ratios(deck);
        let w = &self.weights;
        let total = ratios.cohesion * f64::from(w.cohesion)
            + ratios.interaction * f64::from(w.interaction)
            + ratios.curve * f64::from(w.curve)
            + ratios.color * f64::from(w.color)
            + ratios.types * f64::from(w.types);

        let score = total.round().clamp(0.0, 100.0) as u8;
        tracing::debug!(deck = %deck.name, score, "scored deck");
        score
    }

    /// Each sub-score independently scaled to `0..=100`.
    ///
    /// An empty deck yields an all-zero breakdown.
    pub fn breakdown(&self, deck: &Deck) -> Breakdown {
        if deck.is_empty() {
            return Breakdown::default();
        }

        let ratios = self.ratios(deck);
        let breakdown = Breakdown {
            cohesion: to_percent(ratios.cohesion),
            interaction: to_percent(ratios.interaction),
            curve: to_percent(ratios.curve),
            color: to_percent(ratios.color),
            types: to_percent(ratios.types),
        };
        tracing::debug!(
            deck = %deck.name,
            cohesion = breakdown.cohesion,
            interaction = breakdown.interaction,
            curve = breakdown.curve,
            color = breakdown.color,
            types = breakdown.types,
            "computed score breakdown"
        );
        breakdown
    }

    fn ratios(&self, deck: &Deck) -> Ratios {
        Ratios {
            cohesion: self.cohesion_ratio(&deck.cards),
            interaction: self.interaction_ratio(&deck.cards),
            curve: curve_quality(&deck.stats.mana_curve),
            color: color_consistency(&deck.stats.color_spread),
            types: type_balance(&deck.stats.type_breakdown),
        }
    }

    // -- Archetype cohesion ---------------------------------------------------

    /// Tag weights summed over the deck, each card's tags weighted by quantity.
    ///
    /// Returned in first-seen order (card order, then tag order).
    pub fn tag_weights(&self, cards: &[DeckCard]) -> Vec<(String, u32)> {
        let mut weights: Vec<(String, u32)> = Vec::new();
        for card in cards {
            for tag in self.kb.tags_of(&card.name) {
                match weights.iter_mut().find(|(t, _)| t == tag) {
                    Some((_, w)) => *w = w.saturating_add(card.quantity),
                    None => weights.push((tag.clone(), card.quantity)),
                }
            }
        }
        weights
    }

    /// The tag with the highest total weight; the first-seen tag wins ties.
    ///
    /// Returns `None` when no card in the list has a tag.
    pub fn dominant_tag(&self, cards: &[DeckCard]) -> Option<String> {
        let mut best: Option<(String, u32)> = None;
        for (tag, weight) in self.tag_weights(cards) {
            let better = best.as_ref().map_or(true, |(_, w)| weight > *w);
            if better {
                best = Some((tag, weight));
            }
        }
        best.map(|(tag, _)| tag)
    }

    /// Fraction of card entries whose tags include the dominant tag.
    ///
    /// Entries are counted once each, regardless of quantity.
    pub fn cohesion_ratio(&self, cards: &[DeckCard]) -> f64 {
        if cards.is_empty() {
            return 0.0;
        }
        let Some(dominant) = self.dominant_tag(cards) else {
            return 0.0;
        };

        let hits = cards
            .iter()
            .filter(|c| self.kb.tags_of(&c.name).contains(&dominant))
            .count();
        hits as f64 / cards.len() as f64
    }

    // -- Card interactions ----------------------------------------------------

    /// Fraction of card entries related to at least one other card in the deck.
    ///
    /// A relation recorded on either card counts.
    pub fn interaction_ratio(&self, cards: &[DeckCard]) -> f64 {
        if cards.is_empty() {
            return 0.0;
        }

        let hits = cards
            .iter()
            .filter(|c| {
                cards.iter().any(|other| {
                    other.name != c.name && self.kb.are_partners(&c.name, &other.name)
                })
            })
            .count();
        hits as f64 / cards.len() as f64
    }
}

struct Ratios {
    cohesion: f64,
    interaction: f64,
    curve: f64,
    color: f64,
    types: f64,
}

fn to_percent(ratio: f64) -> u8 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

// ---------------------------------------------------------------------------
// Stats-only sub-scores
// ---------------------------------------------------------------------------

/// Rate the shape of a mana curve in `[0, 1]`.
///
/// Starts at 0.5; +0.3 when the tallest bucket (first on ties) is CMC 1-3,
/// -0.2 when more than 30% of spells cost 5 or more, +0.2 with any 1-drop.
/// An empty curve rates 0.
pub fn curve_quality(curve: &[u32; CURVE_BUCKETS]) -> f64 {
    if curve_total(curve) == 0 {
        return 0.0;
    }

    let mut peak = 0;
    for (i, &count) in curve.iter().enumerate() {
        if count > curve[peak] {
            peak = i;
        }
    }

    let mut quality: f64 = 0.5;
    if (1..=3).contains(&peak) {
        quality += 0.3;
    }
    if high_cost_ratio(curve) > 0.3 {
        quality -= 0.2;
    }
    if curve[1] > 0 {
        quality += 0.2;
    }
    quality.clamp(0.0, 1.0)
}

/// Share of the curve in the CMC 5 and 6+ buckets.
pub fn high_cost_ratio(curve: &[u32; CURVE_BUCKETS]) -> f64 {
    let total = curve_total(curve);
    if total == 0 {
        return 0.0;
    }
    (u64::from(curve[5]) + u64::from(curve[6])) as f64 / total as f64
}

/// Sum of all curve buckets, widened so caller-supplied counts cannot overflow.
pub fn curve_total(curve: &[u32; CURVE_BUCKETS]) -> u64 {
    curve.iter().map(|&count| u64::from(count)).sum()
}

/// Rate color consistency in `[0, 1]` from the number of colors played.
///
/// One color or fewer rates 1.0, two 0.8, three 0.6, four or more 0.4.
/// An empty spread carries no penalty.
pub fn color_consistency(color_spread: &HashMap<String, u32>) -> f64 {
    if color_spread.is_empty() {
        return 1.0;
    }
    match color_count(color_spread) {
        0 | 1 => 1.0,
        2 => 0.8,
        3 => 0.6,
        _ => 0.4,
    }
}

/// Rate the land / creature balance in `[0, 1]`.
///
/// Ratios are taken against the sum of the breakdown. Starts at 0.5; +0.3
/// for 35-45% lands, -0.2 below 30% or above 50%, +0.2 for 20-60% creatures.
/// An empty breakdown rates 0.
pub fn type_balance(type_breakdown: &HashMap<String, u32>) -> f64 {
    let total: u64 = type_breakdown.values().map(|&count| u64::from(count)).sum();
    if total == 0 {
        return 0.0;
    }

    let count = |category: CardCategory| {
        f64::from(type_breakdown.get(category.as_str()).copied().unwrap_or(0))
    };
    let total = total as f64;
    let land_ratio = count(CardCategory::Land) / total;
    let creature_ratio = count(CardCategory::Creature) / total;

    let mut balance: f64 = 0.5;
    if (0.35..=0.45).contains(&land_ratio) {
        balance += 0.3;
    } else if !(0.3..=0.5).contains(&land_ratio) {
        balance -= 0.2;
    }
    if (0.2..=0.6).contains(&creature_ratio) {
        balance += 0.2;
    }
    balance.clamp(0.0, 1.0)
}
