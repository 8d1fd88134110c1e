//! Synergy graph and archetype tag tables.
//!
//! The knowledge base is an owned value rather than global state: a scorer
//! borrows it immutably, and only an explicit `&mut` borrow can grow it. Both
//! tables are keyed by the card's name and only ever grow; there is no removal.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::config;
use crate::error::Result;

/// On-disk / wire layout of a knowledge base.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct KnowledgeFile {
    #[serde(default)]
    synergies: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    tags: BTreeMap<String, Vec<String>>,
}

/// Card synergy adjacency plus archetype tags, keyed by card name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynergyKnowledgeBase {
    synergies: HashMap<String, Vec<String>>,
    tags: HashMap<String, Vec<String>>,
}

impl SynergyKnowledgeBase {
    /// A knowledge base with no relations and no tags.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A knowledge base seeded with the built-in tables from [`config`].
    ///
    /// Seed relations are inserted as listed, so a one-sided seed entry stays
    /// one-sided; use [`are_partners`](Self::are_partners) for symmetric checks.
    pub fn seeded() -> Self {
        let mut kb = Self::empty();
        for (card, partners) in config::SEED_SYNERGIES {
            let entry = kb.synergies.entry((*card).to_string()).or_default();
            for partner in partners.iter() {
                push_unique(entry, partner);
            }
        }
        for (card, tags) in config::SEED_ARCHETYPE_TAGS {
            kb.add_tags(card, tags.iter().copied());
        }
        kb
    }

    // -- Lookups ------------------------------------------------------------

    /// Cards recorded as synergy partners of `name`, in insertion order.
    ///
    /// Returns an empty slice for unknown cards.
    pub fn partners_of(&self, name: &str) -> &[String] {
        self.synergies.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Archetype tags of `name`, in first-seen order.
    ///
    /// Returns an empty slice for unknown cards.
    pub fn tags_of(&self, name: &str) -> &[String] {
        self.tags.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `a` and `b` are related, looking at the adjacency of either card.
    pub fn are_partners(&self, a: &str, b: &str) -> bool {
        self.partners_of(a).iter().any(|p| p == b) || self.partners_of(b).iter().any(|p| p == a)
    }

    /// Number of archetype tags `a` and `b` have in common.
    pub fn shared_tag_count(&self, a: &str, b: &str) -> usize {
        let other = self.tags_of(b);
        self.tags_of(a).iter().filter(|t| other.contains(*t)).count()
    }

    /// Number of cards with at least one recorded synergy partner.
    pub fn relation_count(&self) -> usize {
        self.synergies.values().filter(|p| !p.is_empty()).count()
    }

    /// Number of cards with at least one archetype tag.
    pub fn tagged_count(&self) -> usize {
        self.tags.values().filter(|t| !t.is_empty()).count()
    }

    // -- Mutation -----------------------------------------------------------

    /// Record a symmetric synergy between `a` and `b`.
    ///
    /// Idempotent. A card is never recorded as its own partner.
    pub fn add_relation(&mut self, a: &str, b: &str) {
        if a == b {
            tracing::debug!(card = a, "ignoring self synergy relation");
            return;
        }
        push_unique(self.synergies.entry(a.to_string()).or_default(), b);
        push_unique(self.synergies.entry(b.to_string()).or_default(), a);
    }

    /// Union `tags` into the tag list of `name`, keeping first-seen order.
    pub fn add_tags<I, S>(&mut self, name: &str, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entry = self.tags.entry(name.to_string()).or_default();
        for tag in tags {
            push_unique(entry, tag.as_ref());
        }
    }

    // -- Persistence --------------------------------------------------------

    /// Merge relations and tags from a JSON document.
    ///
    /// Expects `{"synergies": {card: [partner, ...]}, "tags": {card: [tag, ...]}}`;
    /// either key may be omitted. Relations are added symmetrically.
    pub fn merge_json_str(&mut self, json: &str) -> Result<()> {
        let file: KnowledgeFile = serde_json::from_str(json)?;
        for (card, partners) in &file.synergies {
            for partner in partners {
                self.add_relation(card, partner);
            }
        }
        for (card, tags) in &file.tags {
            self.add_tags(card, tags);
        }
        Ok(())
    }

    /// Merge relations and tags from a JSON file on disk.
    pub fn merge_json_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        self.merge_json_str(&data)?;
        tracing::info!(
            path = %path.display(),
            relations = self.relation_count(),
            tagged = self.tagged_count(),
            "loaded synergy knowledge file"
        );
        Ok(())
    }

    /// Export both tables as pretty-printed JSON with sorted keys.
    pub fn to_json_string(&self) -> Result<String> {
        let file = KnowledgeFile {
            synergies: self
                .synergies
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            tags: self
                .tags
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
