//! Deck improvement suggestions.
//!
//! Rules run in a fixed order and their output is concatenated, then capped at
//! [`MAX_SUGGESTIONS`]:
//!
//! 1. off-theme cards (tagged, but without the dominant tag)
//! 2. the strongest missing synergy partners (at most three)
//! 3. mana curve issues
//! 4. color fixing issues

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::{
    CURVE_BUCKETS, JITTER_RANGE, MAX_SUGGESTIONS, MAX_SYNERGY_SUGGESTIONS, SHARED_TAG_STRENGTH,
};
use crate::knowledge::SynergyKnowledgeBase;
use crate::models::{color_count, Deck, Suggestion};
use crate::scorer::{curve_total, high_cost_ratio, SynergyScorer};

// ---------------------------------------------------------------------------
// TieBreak
// ---------------------------------------------------------------------------

/// How missing-synergy candidates with equal strength are ordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TieBreak {
    /// Partner name, then source card name, ascending.
    #[default]
    Lexicographic,
    /// Add a random `0..5` jitter to each strength, drawn from an RNG seeded
    /// with `seed` on every call. Remaining ties fall back to lexicographic.
    Jitter { seed: u64 },
}

/// A synergy partner missing from the deck.
#[derive(Debug, Clone, PartialEq)]
pub struct SynergyCandidate {
    /// The card to add.
    pub partner: String,
    /// The deck card it synergizes with.
    pub source: String,
    pub strength: f64,
}

// ---------------------------------------------------------------------------
// SuggestionGenerator
// ---------------------------------------------------------------------------

/// Derives improvement suggestions for a deck from a borrowed knowledge base.
///
/// Generation is pure: the same deck, knowledge base and tie-break always
/// yield the same list.
pub struct SuggestionGenerator<'a> {
    kb: &'a SynergyKnowledgeBase,
    tie_break: TieBreak,
}

impl<'a> SuggestionGenerator<'a> {
    pub fn new(kb: &'a SynergyKnowledgeBase) -> Self {
        Self::with_tie_break(kb, TieBreak::default())
    }

    pub fn with_tie_break(kb: &'a SynergyKnowledgeBase, tie_break: TieBreak) -> Self {
        Self { kb, tie_break }
    }

    /// Suggestions rendered as text, at most [`MAX_SUGGESTIONS`].
    pub fn suggest(&self, deck: &Deck) -> Vec<String> {
        self.suggestions(deck)
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Structured suggestions, at most [`MAX_SUGGESTIONS`].
    ///
    /// An empty deck yields a single [`Suggestion::AddCards`].
    pub fn suggestions(&self, deck: &Deck) -> Vec<Suggestion> {
        if deck.is_empty() {
            return vec![Suggestion::AddCards];
        }

        let mut out = self.off_theme(deck);
        out.extend(
            self.missing_synergies(deck)
                .into_iter()
                .take(MAX_SYNERGY_SUGGESTIONS)
                .map(|c| Suggestion::AddPartner {
                    partner: c.partner,
                    source: c.source,
                }),
        );
        out.extend(curve_issues(&deck.stats.mana_curve));
        out.extend(color_issues(&deck.stats.color_spread));
        out.truncate(MAX_SUGGESTIONS);
        out
    }

    /// Tagged cards that do not carry the deck's dominant tag.
    pub fn off_theme(&self, deck: &Deck) -> Vec<Suggestion> {
        let scorer = SynergyScorer::new(self.kb);
        let Some(dominant) = scorer.dominant_tag(&deck.cards) else {
            return Vec::new();
        };

        deck.cards
            .iter()
            .filter(|card| {
                let tags = self.kb.tags_of(&card.name);
                !tags.is_empty() && !tags.contains(&dominant)
            })
            .map(|card| Suggestion::ReplaceOffTheme {
                card: card.name.clone(),
                archetype: dominant.clone(),
            })
            .collect()
    }

    /// Every synergy partner missing from the deck, strongest first.
    ///
    /// Strength is ten points per archetype tag shared with the source card.
    pub fn missing_synergies(&self, deck: &Deck) -> Vec<SynergyCandidate> {
        let names = deck.card_names();
        let mut candidates: Vec<SynergyCandidate> = Vec::new();

        for card in &deck.cards {
            for partner in self.kb.partners_of(&card.name) {
                if names.contains(partner.as_str()) {
                    continue;
                }
                let shared = self.kb.shared_tag_count(&card.name, partner);
                candidates.push(SynergyCandidate {
                    partner: partner.clone(),
                    source: card.name.clone(),
                    strength: shared as f64 * SHARED_TAG_STRENGTH,
                });
            }
        }

        if let TieBreak::Jitter { seed } = self.tie_break {
            let mut rng = StdRng::seed_from_u64(seed);
            for candidate in &mut candidates {
                candidate.strength += rng.gen_range(0.0..JITTER_RANGE);
            }
        }

        candidates.sort_by(compare_candidates);
        tracing::debug!(
            deck = %deck.name,
            candidates = candidates.len(),
            "ranked missing synergy partners"
        );
        candidates
    }
}

fn compare_candidates(a: &SynergyCandidate, b: &SynergyCandidate) -> Ordering {
    b.strength
        .total_cmp(&a.strength)
        .then_with(|| a.partner.cmp(&b.partner))
        .then_with(|| a.source.cmp(&b.source))
}

// ---------------------------------------------------------------------------
// Stats-only rules
// ---------------------------------------------------------------------------

/// Mana curve problems, in rule order.
///
/// * more than 30% of spells at CMC 5+
/// * no 1-drops and fewer than 20% of spells at CMC 2
/// * the first empty bucket among CMC 1-3, only for more than ten spells
pub fn curve_issues(curve: &[u32; CURVE_BUCKETS]) -> Vec<Suggestion> {
    let total = curve_total(curve);
    if total == 0 {
        return Vec::new();
    }

    let mut issues = Vec::new();
    if high_cost_ratio(curve) > 0.3 {
        issues.push(Suggestion::ReduceHighCost);
    }
    if curve[1] == 0 && f64::from(curve[2]) < total as f64 * 0.2 {
        issues.push(Suggestion::AddEarlyGame);
    }
    if total > 10 {
        if let Some(cmc) = (1..=3).find(|&i| curve[i] == 0) {
            issues.push(Suggestion::FillCurveGap { cmc });
        }
    }
    issues
}

/// Color fixing hints for decks with three or more colors.
pub fn color_issues(color_spread: &HashMap<String, u32>) -> Vec<Suggestion> {
    let colors = color_count(color_spread);
    let mut issues = Vec::new();
    if colors >= 3 {
        issues.push(Suggestion::AddManaFixing);
    }
    if colors >= 4 {
        issues.push(Suggestion::ManyColors);
    }
    issues
}
