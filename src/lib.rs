//! Deck synergy scoring for Magic: The Gathering deck builders.
//!
//! Scores a deck list from 0 to 100 by combining archetype cohesion, card
//! interactions, mana curve shape, color consistency and type balance, and
//! derives human-readable improvement suggestions. Card relations and
//! archetype tags live in an owned [`SynergyKnowledgeBase`] that can be grown
//! at runtime or merged from a JSON file.
//!
//! # Quick start
//!
//! ```
//! use deck_synergy::{Deck, DeckCard, SynergyEngine};
//!
//! let engine = SynergyEngine::builder().build().unwrap();
//!
//! let deck = Deck::new(
//!     "Burn",
//!     vec![
//!         DeckCard::new("Lightning Bolt", 4).with_type_line("Instant").with_mana_cost("{R}"),
//!         DeckCard::new("Lava Spike", 4).with_type_line("Sorcery").with_mana_cost("{R}"),
//!         DeckCard::new("Mountain", 12).with_type_line("Basic Land — Mountain"),
//!     ],
//! );
//!
//! let report = engine.analyze(&deck);
//! assert!(report.score <= 100);
//! assert!(report.suggestions.len() <= 8);
//! ```

pub mod classify;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod meter;
pub mod models;
pub mod scorer;
pub mod suggest;

pub use classify::{classify_type, compute_cmc};
pub use config::Weights;
pub use error::{Result, SynergyError};
pub use knowledge::SynergyKnowledgeBase;
pub use meter::{MeterRenderer, MeterView, SynergyMeter};
pub use models::{
    color_for, title_for, Breakdown, CardCategory, ColorTier, Deck, DeckCard, DeckStats,
    Suggestion, SuggestionPriority, SynergyReport, SynergyTier,
};
pub use scorer::SynergyScorer;
pub use suggest::{SuggestionGenerator, TieBreak};

use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// SynergyEngineBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`SynergyEngine`].
///
/// Use [`SynergyEngine::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](SynergyEngineBuilder::build) to create the engine.
pub struct SynergyEngineBuilder {
    weights: Weights,
    tie_break: TieBreak,
    knowledge: Option<SynergyKnowledgeBase>,
    knowledge_files: Vec<PathBuf>,
}

impl Default for SynergyEngineBuilder {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            tie_break: TieBreak::default(),
            knowledge: None,
            knowledge_files: Vec::new(),
        }
    }
}

impl SynergyEngineBuilder {
    /// Set the sub-score weights. They must sum to 100.
    ///
    /// Defaults to cohesion 30, interaction 25, curve 20, color 15, types 10.
    pub fn weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Set how equally strong missing-synergy candidates are ordered.
    ///
    /// Defaults to [`TieBreak::Lexicographic`].
    pub fn tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Start from a caller-supplied knowledge base instead of the built-in seed.
    pub fn knowledge_base(mut self, kb: SynergyKnowledgeBase) -> Self {
        self.knowledge = Some(kb);
        self
    }

    /// Start from an empty knowledge base instead of the built-in seed.
    pub fn empty_knowledge_base(self) -> Self {
        self.knowledge_base(SynergyKnowledgeBase::empty())
    }

    /// Merge a JSON knowledge file into the knowledge base at build time.
    ///
    /// May be called several times; files are merged in call order. See
    /// [`SynergyKnowledgeBase::merge_json_file`] for the file layout.
    pub fn knowledge_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.knowledge_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Build the engine, validating the weights and loading knowledge files.
    pub fn build(self) -> Result<SynergyEngine> {
        self.weights.validate()?;

        let mut kb = self.knowledge.unwrap_or_else(SynergyKnowledgeBase::seeded);
        for path in &self.knowledge_files {
            kb.merge_json_file(path)?;
        }

        Ok(SynergyEngine {
            kb,
            weights: self.weights,
            tie_break: self.tie_break,
        })
    }
}

// ---------------------------------------------------------------------------
// SynergyEngine
// ---------------------------------------------------------------------------

/// The main entry point for deck synergy analysis.
///
/// Owns the [`SynergyKnowledgeBase`] and hands out lightweight borrowing
/// views ([`SynergyScorer`], [`SuggestionGenerator`]) over it. Scoring only
/// needs `&self`, so one engine can serve concurrent readers; growing the
/// knowledge base needs `&mut self`.
///
/// Created via [`SynergyEngine::builder()`].
#[derive(Debug, Clone)]
pub struct SynergyEngine {
    kb: SynergyKnowledgeBase,
    weights: Weights,
    tie_break: TieBreak,
}

impl SynergyEngine {
    /// Create a new builder for configuring the engine.
    pub fn builder() -> SynergyEngineBuilder {
        SynergyEngineBuilder::default()
    }

    // -- Borrowing views ----------------------------------------------------

    /// Access the scorer, configured with this engine's weights.
    pub fn scorer(&self) -> SynergyScorer<'_> {
        SynergyScorer::with_weights(&self.kb, self.weights)
    }

    /// Access the suggestion generator, configured with this engine's tie-break.
    pub fn suggestion_generator(&self) -> SuggestionGenerator<'_> {
        SuggestionGenerator::with_tie_break(&self.kb, self.tie_break)
    }

    // -- Analysis -----------------------------------------------------------

    /// Overall synergy score in `0..=100`; 0 for an empty deck.
    pub fn score(&self, deck: &Deck) -> u8 {
        self.scorer().score(deck)
    }

    /// Per-category sub-scores, each in `0..=100`.
    pub fn breakdown(&self, deck: &Deck) -> Breakdown {
        self.scorer().breakdown(deck)
    }

    /// Up to eight improvement suggestions as text.
    pub fn suggest(&self, deck: &Deck) -> Vec<String> {
        self.suggestion_generator().suggest(deck)
    }

    /// Up to eight structured improvement suggestions.
    pub fn suggestions(&self, deck: &Deck) -> Vec<Suggestion> {
        self.suggestion_generator().suggestions(deck)
    }

    /// Score, breakdown and suggestions in one report.
    pub fn analyze(&self, deck: &Deck) -> SynergyReport {
        SynergyReport {
            score: self.score(deck),
            breakdown: self.breakdown(deck),
            suggestions: self.suggest(deck),
        }
    }

    // -- Knowledge base -----------------------------------------------------

    /// Record a symmetric synergy between two cards.
    pub fn add_relation(&mut self, a: &str, b: &str) {
        self.kb.add_relation(a, b);
    }

    /// Union archetype tags into a card's tag list.
    pub fn add_tags<I, S>(&mut self, name: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.kb.add_tags(name, tags);
    }

    pub fn knowledge(&self) -> &SynergyKnowledgeBase {
        &self.kb
    }

    pub fn knowledge_mut(&mut self) -> &mut SynergyKnowledgeBase {
        &mut self.kb
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for SynergyEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = &self.weights;
        write!(
            f,
            "SynergyEngine(weights=[{}/{}/{}/{}/{}], relations={}, tagged={}, tie_break={:?})",
            w.cohesion,
            w.interaction,
            w.curve,
            w.color,
            w.types,
            self.kb.relation_count(),
            self.kb.tagged_count(),
            self.tie_break
        )
    }
}
