use serde::{Deserialize, Serialize};

use crate::error::{Result, SynergyError};

/// Number of mana curve buckets (CMC 0 through 6+).
pub const CURVE_BUCKETS: usize = 7;

/// Maximum number of suggestions returned for a deck.
pub const MAX_SUGGESTIONS: usize = 8;

/// Maximum number of "add partner" suggestions returned for a deck.
pub const MAX_SYNERGY_SUGGESTIONS: usize = 3;

/// Label used in a color spread for cards without colored mana symbols.
pub const COLORLESS: &str = "Colorless";

/// Upper bound (exclusive) of the random jitter added by [`TieBreak::Jitter`](crate::suggest::TieBreak::Jitter).
pub const JITTER_RANGE: f64 = 5.0;

/// Points of synergy strength per archetype tag shared by two cards.
pub const SHARED_TAG_STRENGTH: f64 = 10.0;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Relative weight of each sub-score in the final 0-100 synergy score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub cohesion: u32,
    pub interaction: u32,
    pub curve: u32,
    pub color: u32,
    pub types: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            cohesion: 30,
            interaction: 25,
            curve: 20,
            color: 15,
            types: 10,
        }
    }
}

impl Weights {
    pub fn total(&self) -> u32 {
        [self.interaction, self.curve, self.color, self.types]
            .iter()
            .fold(self.cohesion, |acc, w| acc.saturating_add(*w))
    }

    /// Check that the weights add up to exactly 100.
    pub fn validate(&self) -> Result<()> {
        let total = self.total();
        if total != 100 {
            return Err(SynergyError::InvalidArgument(format!(
                "synergy weights must sum to 100, got {}",
                total
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Built-in knowledge tables
// ---------------------------------------------------------------------------

/// Built-in synergy adjacency: card name to the cards it works well with.
pub const SEED_SYNERGIES: &[(&str, &[&str])] = &[
    // Goblin tribal
    (
        "Goblin Guide",
        &["Goblin Chieftain", "Goblin King", "Goblin Wardriver", "Goblin Bushwhacker"],
    ),
    (
        "Goblin Chieftain",
        &["Goblin Guide", "Goblin King", "Goblin Wardriver", "Mogg War Marshal"],
    ),
    (
        "Goblin King",
        &["Goblin Guide", "Goblin Chieftain", "Goblin Wardriver", "Mogg War Marshal"],
    ),
    // Burn
    (
        "Lightning Bolt",
        &["Lava Spike", "Rift Bolt", "Chain Lightning", "Monastery Swiftspear"],
    ),
    (
        "Lava Spike",
        &["Lightning Bolt", "Rift Bolt", "Chain Lightning", "Monastery Swiftspear"],
    ),
    // Prowess
    (
        "Monastery Swiftspear",
        &["Lightning Bolt", "Lava Spike", "Manamorphose", "Mutagenic Growth"],
    ),
    (
        "Soul-Scar Mage",
        &["Lightning Bolt", "Lava Spike", "Monastery Swiftspear", "Manamorphose"],
    ),
    // Artifacts
    (
        "Cranial Plating",
        &["Ornithopter", "Signal Pest", "Vault Skirge", "Memnite"],
    ),
    (
        "Ornithopter",
        &["Cranial Plating", "Signal Pest", "Springleaf Drum", "Ensoul Artifact"],
    ),
    // Combo
    (
        "Splinter Twin",
        &["Deceiver Exarch", "Pestermite", "Village Bell-Ringer"],
    ),
    (
        "Deceiver Exarch",
        &["Splinter Twin", "Kiki-Jiki, Mirror Breaker"],
    ),
    // Control
    (
        "Counterspell",
        &["Snapcaster Mage", "Cryptic Command", "Force of Negation"],
    ),
    (
        "Snapcaster Mage",
        &["Lightning Bolt", "Counterspell", "Path to Exile", "Cryptic Command"],
    ),
];

/// Built-in archetype tags: card name to its ordered tag list.
pub const SEED_ARCHETYPE_TAGS: &[(&str, &[&str])] = &[
    // Aggro / burn
    ("Lightning Bolt", &["burn", "aggro", "direct-damage"]),
    ("Goblin Guide", &["aggro", "tribal-goblin", "hasty-creature"]),
    ("Monastery Swiftspear", &["aggro", "prowess", "hasty-creature"]),
    ("Lava Spike", &["burn", "direct-damage"]),
    ("Eidolon of the Great Revel", &["burn", "aggro", "damage-trigger"]),
    // Tribal
    ("Goblin Chieftain", &["tribal-goblin", "lord", "anthem"]),
    ("Goblin King", &["tribal-goblin", "lord", "anthem"]),
    ("Lord of Atlantis", &["tribal-merfolk", "lord", "anthem"]),
    // Control
    ("Counterspell", &["control", "permission", "instant"]),
    ("Wrath of God", &["control", "board-wipe", "sorcery"]),
    ("Snapcaster Mage", &["control", "value", "flash"]),
    // Combo
    ("Splinter Twin", &["combo", "enchantment", "infinite"]),
    ("Deceiver Exarch", &["combo", "creature", "tap-untap"]),
    // Ramp
    ("Birds of Paradise", &["ramp", "mana-dork", "fixing"]),
    ("Llanowar Elves", &["ramp", "mana-dork", "green"]),
    // Artifacts
    ("Cranial Plating", &["artifact", "equipment", "aggro"]),
    ("Ornithopter", &["artifact", "creature", "free"]),
    // Lands
    ("Mountain", &["land", "basic", "red"]),
    ("Island", &["land", "basic", "blue"]),
    ("Forest", &["land", "basic", "green"]),
    ("Plains", &["land", "basic", "white"]),
    ("Swamp", &["land", "basic", "black"]),
];
