use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Breakdown — Per-category sub-scores, each 0-100
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    pub cohesion: u8,
    pub interaction: u8,
    pub curve: u8,
    pub color: u8,
    pub types: u8,
}

// ---------------------------------------------------------------------------
// SynergyReport — Everything a presentation layer needs for one deck
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynergyReport {
    pub score: u8,
    pub breakdown: Breakdown,
    pub suggestions: Vec<String>,
}

// ---------------------------------------------------------------------------
// SynergyTier — Named score bands used for labelling
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SynergyTier {
    None,
    Poor,
    Weak,
    Decent,
    Good,
    Strong,
    Powerful,
    Legendary,
}

impl SynergyTier {
    /// Tier for a score; each tier includes its lower bound.
    pub fn from_score(score: u8) -> Self {
        match score {
            90.. => SynergyTier::Legendary,
            80..=89 => SynergyTier::Powerful,
            70..=79 => SynergyTier::Strong,
            60..=69 => SynergyTier::Good,
            50..=59 => SynergyTier::Decent,
            40..=49 => SynergyTier::Weak,
            30..=39 => SynergyTier::Poor,
            _ => SynergyTier::None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SynergyTier::None => "No Synergy",
            SynergyTier::Poor => "Poor Synergy",
            SynergyTier::Weak => "Weak Synergy",
            SynergyTier::Decent => "Decent Synergy",
            SynergyTier::Good => "Good Synergy",
            SynergyTier::Strong => "Strong Synergy",
            SynergyTier::Powerful => "Powerful Synergy",
            SynergyTier::Legendary => "Legendary Synergy",
        }
    }
}

impl fmt::Display for SynergyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

// ---------------------------------------------------------------------------
// ColorTier — Four display bands for meter colors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorTier {
    Low,
    Moderate,
    High,
    Exceptional,
}

impl ColorTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => ColorTier::Exceptional,
            60..=79 => ColorTier::High,
            40..=59 => ColorTier::Moderate,
            _ => ColorTier::Low,
        }
    }

    /// Default hex color for the tier. Renderers are free to ignore it.
    pub fn hex(&self) -> &'static str {
        match self {
            ColorTier::Exceptional => "#e74c3c",
            ColorTier::High => "#f39c12",
            ColorTier::Moderate => "#f1c40f",
            ColorTier::Low => "#95a5a6",
        }
    }
}

/// Display title for a score, e.g. `"Good Synergy"` for 60-69.
pub fn title_for(score: u8) -> &'static str {
    SynergyTier::from_score(score).title()
}

/// Display color tier for a score.
pub fn color_for(score: u8) -> ColorTier {
    ColorTier::from_score(score)
}
