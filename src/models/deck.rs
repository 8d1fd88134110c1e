use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{HashMap, HashSet};

use super::card::{CardCategory, DeckCard};
use crate::classify::mana_symbols;
use crate::config::{COLORLESS, CURVE_BUCKETS};
use crate::error::{Result, SynergyError};

const COLOR_LETTERS: [&str; 5] = ["W", "U", "B", "R", "G"];

// ---------------------------------------------------------------------------
// DeckStats — Aggregated snapshot consumed by the scorer
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeckStats {
    /// Non-land card counts by CMC, index = min(cmc, 6).
    pub mana_curve: [u32; CURVE_BUCKETS],
    /// Colored symbol counts keyed by `W`, `U`, `B`, `R`, `G` or `Colorless`.
    pub color_spread: HashMap<String, u32>,
    /// Card counts keyed by [`CardCategory`] name.
    pub type_breakdown: HashMap<String, u32>,
    pub total_cards: u32,
    pub creatures: u32,
    pub spells: u32,
    pub lands: u32,
    #[serde(alias = "avgCMC")]
    pub avg_cmc: f64,
}

impl DeckStats {
    /// Aggregate statistics from a card list.
    ///
    /// Hosts that already track these numbers may build a [`DeckStats`]
    /// directly instead; the scorer only relies on the field semantics.
    pub fn from_cards(cards: &[DeckCard]) -> Self {
        let mut stats = DeckStats::default();
        let mut total_cmc: u64 = 0;
        let mut non_land: u64 = 0;

        for card in cards {
            let qty = card.quantity;
            let category = card.category();
            stats.total_cards = stats.total_cards.saturating_add(qty);
            add_count(&mut stats.type_breakdown, category.as_str(), qty);

            let counter = match category {
                CardCategory::Land => Some(&mut stats.lands),
                CardCategory::Creature => Some(&mut stats.creatures),
                CardCategory::Instant | CardCategory::Sorcery => Some(&mut stats.spells),
                _ => None,
            };
            if let Some(counter) = counter {
                *counter = counter.saturating_add(qty);
            }

            if category != CardCategory::Land {
                let cmc = card.cmc();
                let bucket = (cmc as usize).min(CURVE_BUCKETS - 1);
                stats.mana_curve[bucket] = stats.mana_curve[bucket].saturating_add(qty);
                total_cmc = total_cmc.saturating_add(u64::from(cmc) * u64::from(qty));
                non_land = non_land.saturating_add(u64::from(qty));
            }

            add_colors(&mut stats.color_spread, card.mana_cost.as_deref(), qty);
        }

        stats.avg_cmc = if non_land > 0 {
            total_cmc as f64 / non_land as f64
        } else {
            0.0
        };
        stats
    }

    /// Total number of non-land cards on the mana curve.
    pub fn curve_total(&self) -> u64 {
        self.mana_curve.iter().map(|&count| u64::from(count)).sum()
    }

    /// Number of distinct non-colorless colors with a positive count.
    pub fn color_count(&self) -> usize {
        color_count(&self.color_spread)
    }
}

/// Number of distinct non-colorless colors with a positive count.
pub fn color_count(color_spread: &HashMap<String, u32>) -> usize {
    color_spread
        .iter()
        .filter(|&(color, &count)| color.as_str() != COLORLESS && count > 0)
        .count()
}

fn add_colors(spread: &mut HashMap<String, u32>, mana_cost: Option<&str>, qty: u32) {
    let Some(cost) = mana_cost else {
        return;
    };

    let mut colored = false;
    for symbol in mana_symbols(cost) {
        for part in symbol.split('/') {
            if COLOR_LETTERS.contains(&part) {
                add_count(spread, part, qty);
                colored = true;
            }
        }
    }

    if !colored && cost.contains('{') {
        add_count(spread, COLORLESS, qty);
    }
}

fn add_count(counts: &mut HashMap<String, u32>, key: &str, qty: u32) {
    let count = counts.entry(key.to_string()).or_insert(0);
    *count = count.saturating_add(qty);
}

// ---------------------------------------------------------------------------
// Deck — Named card list plus its statistics snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    #[serde(default)]
    pub name: String,
    pub cards: Vec<DeckCard>,
    pub stats: DeckStats,
}

impl Deck {
    /// Build a deck and aggregate its statistics with [`DeckStats::from_cards`].
    pub fn new(name: impl Into<String>, cards: Vec<DeckCard>) -> Self {
        let stats = DeckStats::from_cards(&cards);
        Self {
            name: name.into(),
            cards,
            stats,
        }
    }

    /// Build a deck with a host-supplied statistics snapshot.
    pub fn with_stats(name: impl Into<String>, cards: Vec<DeckCard>, stats: DeckStats) -> Self {
        Self {
            name: name.into(),
            cards,
            stats,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Set of card names present in the deck.
    pub fn card_names(&self) -> HashSet<&str> {
        self.cards.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cards.iter().any(|c| c.name == name)
    }

    /// Parse and validate a deck from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Validate the shape of a JSON deck object and convert it.
    ///
    /// The object must carry a `cards` array and a `stats` object. Each card
    /// needs a non-empty `name` and a `quantity` (or `qty`) of at least 1.
    /// Missing `stats` subfields default to zero or empty, but a `manaCurve`
    /// that is present must have exactly seven buckets.
    pub fn from_value(value: Value) -> Result<Self> {
        validate_shape(&value).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected deck");
        })?;

        let deck: Deck = serde_json::from_value(value).map_err(|e| {
            tracing::warn!(error = %e, "rejected deck");
            SynergyError::InvalidDeck(e.to_string())
        })?;

        if let Some(card) = deck.cards.iter().find(|c| c.quantity == 0) {
            return Err(SynergyError::InvalidDeck(format!(
                "card '{}' has quantity 0",
                card.name
            )));
        }
        if let Some(idx) = deck.cards.iter().position(|c| c.name.trim().is_empty()) {
            return Err(SynergyError::InvalidDeck(format!(
                "card at index {} has an empty name",
                idx
            )));
        }

        Ok(deck)
    }
}

fn validate_shape(value: &Value) -> Result<()> {
    let obj = value
        .as_object()
        .ok_or_else(|| SynergyError::InvalidDeck("deck must be a JSON object".to_string()))?;

    match obj.get("cards") {
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(SynergyError::InvalidDeck("`cards` must be an array".to_string()));
        }
        None => return Err(SynergyError::InvalidDeck("missing `cards`".to_string())),
    }

    let stats = match obj.get("stats") {
        Some(Value::Object(stats)) => stats,
        Some(_) => {
            return Err(SynergyError::InvalidDeck("`stats` must be an object".to_string()));
        }
        None => return Err(SynergyError::InvalidDeck("missing `stats`".to_string())),
    };

    if let Some(curve) = stats.get("manaCurve") {
        let len = curve.as_array().map(|a| a.len());
        if len != Some(CURVE_BUCKETS) {
            return Err(SynergyError::InvalidDeck(format!(
                "`manaCurve` must have exactly {} buckets",
                CURVE_BUCKETS
            )));
        }
    }

    Ok(())
}
