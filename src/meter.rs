//! Synergy meter presentation adapter.
//!
//! Recomputes a deck's report on every [`SynergyMeter::update`] and hands a
//! ready-to-draw [`MeterView`] to a [`MeterRenderer`]. The only state kept
//! between updates is the last displayed score, used as the starting point
//! of the score animation.

use serde::{Deserialize, Serialize};

use crate::models::{
    Breakdown, ColorTier, Deck, Suggestion, SuggestionPriority, SynergyReport, SynergyTier,
};
use crate::SynergyEngine;

/// Default number of frames in a score animation.
pub const DEFAULT_ANIMATION_FRAMES: usize = 60;

// ---------------------------------------------------------------------------
// View types
// ---------------------------------------------------------------------------

/// Highlight effect for high-scoring decks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GlowEffect {
    Arcane,
    Powerful,
    Legendary,
}

impl GlowEffect {
    pub fn for_score(score: u8) -> Option<Self> {
        match score {
            90.. => Some(GlowEffect::Legendary),
            80..=89 => Some(GlowEffect::Powerful),
            70..=79 => Some(GlowEffect::Arcane),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionView {
    pub text: String,
    pub priority: SuggestionPriority,
}

/// Everything a renderer needs to draw the meter once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterView {
    pub score: u8,
    /// Score shown before this update; animations run from here to `score`.
    pub previous_score: u8,
    pub tier: SynergyTier,
    pub color: ColorTier,
    pub breakdown: Breakdown,
    pub suggestions: Vec<SuggestionView>,
    pub glow: Option<GlowEffect>,
}

impl MeterView {
    pub fn title(&self) -> &'static str {
        self.tier.title()
    }

    /// Interpolated scores from `previous_score` to `score`.
    pub fn frames(&self, steps: usize) -> Vec<u8> {
        animation_frames(self.previous_score, self.score, steps)
    }

    /// [`frames`](Self::frames) over [`DEFAULT_ANIMATION_FRAMES`] steps.
    pub fn default_frames(&self) -> Vec<u8> {
        self.frames(DEFAULT_ANIMATION_FRAMES)
    }
}

// ---------------------------------------------------------------------------
// MeterRenderer
// ---------------------------------------------------------------------------

/// Drawing backend for a [`SynergyMeter`].
pub trait MeterRenderer {
    fn render(&mut self, view: &MeterView);
}

impl<F: FnMut(&MeterView)> MeterRenderer for F {
    fn render(&mut self, view: &MeterView) {
        (*self)(view)
    }
}

// ---------------------------------------------------------------------------
// SynergyMeter
// ---------------------------------------------------------------------------

pub struct SynergyMeter<'a, R> {
    engine: &'a SynergyEngine,
    renderer: R,
    displayed: u8,
}

impl<'a, R: MeterRenderer> SynergyMeter<'a, R> {
    pub fn new(engine: &'a SynergyEngine, renderer: R) -> Self {
        Self {
            engine,
            renderer,
            displayed: 0,
        }
    }

    /// Recompute the deck's report, render it, and return it.
    pub fn update(&mut self, deck: &Deck) -> SynergyReport {
        let score = self.engine.score(deck);
        let breakdown = self.engine.breakdown(deck);
        let suggestions = self.engine.suggestions(deck);

        let view = MeterView {
            score,
            previous_score: self.displayed,
            tier: SynergyTier::from_score(score),
            color: ColorTier::from_score(score),
            breakdown,
            suggestions: suggestions.iter().map(suggestion_view).collect(),
            glow: GlowEffect::for_score(score),
        };
        self.renderer.render(&view);
        self.displayed = score;

        SynergyReport {
            score,
            breakdown,
            suggestions: view.suggestions.into_iter().map(|s| s.text).collect(),
        }
    }

    /// Score shown after the most recent update.
    pub fn displayed_score(&self) -> u8 {
        self.displayed
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

fn suggestion_view(suggestion: &Suggestion) -> SuggestionView {
    SuggestionView {
        text: suggestion.to_string(),
        priority: suggestion.priority(),
    }
}

/// Ease-out-cubic interpolation of a score change over `steps` frames.
///
/// The last frame is always `to`; `steps == 0` yields just `[to]`.
pub fn animation_frames(from: u8, to: u8, steps: usize) -> Vec<u8> {
    if steps == 0 {
        return vec![to];
    }

    let (from, to) = (f64::from(from), f64::from(to));
    (1..=steps)
        .map(|i| {
            let progress = i as f64 / steps as f64;
            let eased = 1.0 - (1.0 - progress).powi(3);
            (from + (to - from) * eased).round().clamp(0.0, 100.0) as u8
        })
        .collect()
}
