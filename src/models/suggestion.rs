use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Suggestion — A single deck improvement hint
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Suggestion {
    /// A tagged card that does not carry the deck's dominant archetype tag.
    ReplaceOffTheme { card: String, archetype: String },
    /// A synergy partner of `source` that is missing from the deck.
    AddPartner { partner: String, source: String },
    ReduceHighCost,
    AddEarlyGame,
    /// No cards at this CMC (1 to 3) in a deck of more than ten spells.
    FillCurveGap { cmc: usize },
    AddManaFixing,
    ManyColors,
    /// Placeholder for an empty deck.
    AddCards,
}

impl Suggestion {
    pub fn priority(&self) -> SuggestionPriority {
        match self {
            Suggestion::ReplaceOffTheme { .. } => SuggestionPriority::High,
            Suggestion::AddPartner { .. } => SuggestionPriority::Medium,
            _ => SuggestionPriority::Low,
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Suggestion::ReplaceOffTheme { card, archetype } => write!(
                f,
                "Consider replacing {}: it doesn't support your {} strategy.",
                card, archetype
            ),
            Suggestion::AddPartner { partner, source } => {
                write!(f, "Add {} to boost synergy with {}.", partner, source)
            }
            Suggestion::ReduceHighCost => {
                f.write_str("Consider reducing high-cost cards for better consistency.")
            }
            Suggestion::AddEarlyGame => {
                f.write_str("Add more low-cost cards for early game presence.")
            }
            Suggestion::FillCurveGap { cmc } => {
                write!(f, "Consider adding {}-cost cards to smooth your curve.", cmc)
            }
            Suggestion::AddManaFixing => f.write_str(
                "Consider adding dual lands or mana fixing for your multicolor deck.",
            ),
            Suggestion::ManyColors => f.write_str(
                "Your deck has many colors - ensure you have enough mana sources for each.",
            ),
            Suggestion::AddCards => f.write_str("Add cards to your deck to get suggestions!"),
        }
    }
}

// ---------------------------------------------------------------------------
// SuggestionPriority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SuggestionPriority {
    Low,
    Medium,
    High,
}

impl SuggestionPriority {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionPriority::High => "High",
            SuggestionPriority::Medium => "Medium",
            SuggestionPriority::Low => "Low",
        }
    }
}
