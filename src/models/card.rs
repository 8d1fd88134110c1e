use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DeckCard — One entry of a deck list
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckCard {
    pub name: String,
    #[serde(alias = "qty")]
    pub quantity: u32,
    #[serde(default, alias = "type")]
    pub type_line: Option<String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
}

impl DeckCard {
    pub fn new(name: impl Into<String>, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            type_line: None,
            mana_cost: None,
        }
    }

    pub fn with_type_line(mut self, type_line: impl Into<String>) -> Self {
        self.type_line = Some(type_line.into());
        self
    }

    pub fn with_mana_cost(mut self, mana_cost: impl Into<String>) -> Self {
        self.mana_cost = Some(mana_cost.into());
        self
    }

    /// Coarse category of this card's type line.
    pub fn category(&self) -> CardCategory {
        crate::classify::classify_type(self.type_line.as_deref())
    }

    /// Converted mana cost of this card's mana cost string.
    pub fn cmc(&self) -> u32 {
        crate::classify::compute_cmc(self.mana_cost.as_deref())
    }
}

// ---------------------------------------------------------------------------
// CardCategory — Coarse card type used for deck statistics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    Land,
    Creature,
    Artifact,
    Enchantment,
    Planeswalker,
    Instant,
    Sorcery,
    /// Type line present but none of the recognized types found.
    Other,
    /// No type line at all.
    Unknown,
}

impl CardCategory {
    /// Recognized categories in the order a type line is tested against them.
    pub const PRECEDENCE: [CardCategory; 7] = [
        CardCategory::Land,
        CardCategory::Creature,
        CardCategory::Artifact,
        CardCategory::Enchantment,
        CardCategory::Planeswalker,
        CardCategory::Instant,
        CardCategory::Sorcery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CardCategory::Land => "Land",
            CardCategory::Creature => "Creature",
            CardCategory::Artifact => "Artifact",
            CardCategory::Enchantment => "Enchantment",
            CardCategory::Planeswalker => "Planeswalker",
            CardCategory::Instant => "Instant",
            CardCategory::Sorcery => "Sorcery",
            CardCategory::Other => "Other",
            CardCategory::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
