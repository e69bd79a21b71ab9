//! # Weights, Tiers and the Tier Ladder
//!
//! Two orthogonal notions of authority:
//!
//! - [`Weight`] is the fixed two-level order: binding outranks persuasive.
//! - [`AuthorityTier`] names the kind of instrument (statute, regulation,
//!   agency guidance, ...). Each tier carries a default weight, and a
//!   [`TierLadder`] orders tiers into levels of co-equal authority.
//!
//! ## Standard ladder
//!
//! ```text
//! 0  constitutional
//! 1  federal_statute  treaty          (co-equal: later-in-time, not decidable here)
//! 2  federal_regulation
//! 3  state_statute
//! 4  agency_guidance
//! 5  judicial_interpretation
//! 6  form_instruction
//! 7  publication
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AuthorityError;

// ─── Weight ──────────────────────────────────────────────────────────

/// Binding force of a source. Exactly two values exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Mandatory legal force; controls over lesser sources.
    Binding,
    /// Informs interpretation; never overrides binding authority.
    Persuasive,
}

impl Weight {
    /// Lower rank is stronger.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Binding => 0,
            Self::Persuasive => 1,
        }
    }

    /// Identifier matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binding => "binding",
            Self::Persuasive => "persuasive",
        }
    }
}

impl std::fmt::Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Authority Tier ──────────────────────────────────────────────────

/// Named instrument tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorityTier {
    /// Constitutional provision.
    Constitutional,
    /// Federal statute (e.g. the Internal Revenue Code).
    FederalStatute,
    /// Ratified treaty.
    Treaty,
    /// Federal regulation (e.g. Treasury Regulations).
    FederalRegulation,
    /// State statute.
    StateStatute,
    /// Agency guidance such as revenue rulings and procedures.
    AgencyGuidance,
    /// Court decision interpreting a higher source.
    JudicialInterpretation,
    /// Instructions accompanying an official form.
    FormInstruction,
    /// Informal agency publication.
    Publication,
}

impl AuthorityTier {
    /// All tiers, strongest first under the standard ladder.
    pub fn all() -> &'static [AuthorityTier] {
        &[
            Self::Constitutional,
            Self::FederalStatute,
            Self::Treaty,
            Self::FederalRegulation,
            Self::StateStatute,
            Self::AgencyGuidance,
            Self::JudicialInterpretation,
            Self::FormInstruction,
            Self::Publication,
        ]
    }

    /// Identifier matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constitutional => "constitutional",
            Self::FederalStatute => "federal_statute",
            Self::Treaty => "treaty",
            Self::FederalRegulation => "federal_regulation",
            Self::StateStatute => "state_statute",
            Self::AgencyGuidance => "agency_guidance",
            Self::JudicialInterpretation => "judicial_interpretation",
            Self::FormInstruction => "form_instruction",
            Self::Publication => "publication",
        }
    }

    /// Weight a source of this tier carries unless stated otherwise.
    pub fn default_weight(&self) -> Weight {
        match self {
            Self::Constitutional
            | Self::FederalStatute
            | Self::Treaty
            | Self::FederalRegulation
            | Self::StateStatute => Weight::Binding,
            Self::AgencyGuidance
            | Self::JudicialInterpretation
            | Self::FormInstruction
            | Self::Publication => Weight::Persuasive,
        }
    }
}

impl std::fmt::Display for AuthorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorityTier {
    type Err = AuthorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| AuthorityError::InvalidLadder(format!("unknown tier \"{s}\"")))
    }
}

// ─── Tier Ladder ─────────────────────────────────────────────────────

/// Ordered levels of co-equal tiers; level 0 is the strongest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierLadder {
    levels: Vec<Vec<AuthorityTier>>,
}

impl TierLadder {
    /// Build a custom ladder.
    ///
    /// # Errors
    ///
    /// [`AuthorityError::InvalidLadder`] for an empty ladder, an empty level,
    /// or a tier listed more than once.
    pub fn new(levels: Vec<Vec<AuthorityTier>>) -> Result<Self, AuthorityError> {
        if levels.is_empty() {
            return Err(AuthorityError::InvalidLadder("ladder has no levels".into()));
        }
        let mut seen = Vec::new();
        for (i, level) in levels.iter().enumerate() {
            if level.is_empty() {
                return Err(AuthorityError::InvalidLadder(format!("level {i} is empty")));
            }
            for tier in level {
                if seen.contains(tier) {
                    return Err(AuthorityError::InvalidLadder(format!(
                        "tier {tier} listed more than once"
                    )));
                }
                seen.push(*tier);
            }
        }
        Ok(Self { levels })
    }

    /// The standard ladder.
    pub fn standard() -> Self {
        use AuthorityTier::*;
        Self {
            levels: vec![
                vec![Constitutional],
                vec![FederalStatute, Treaty],
                vec![FederalRegulation],
                vec![StateStatute],
                vec![AgencyGuidance],
                vec![JudicialInterpretation],
                vec![FormInstruction],
                vec![Publication],
            ],
        }
    }

    /// Level of a tier, if the ladder ranks it. Lower is stronger.
    pub fn level_of(&self, tier: AuthorityTier) -> Option<usize> {
        self.levels.iter().position(|level| level.contains(&tier))
    }

    /// Levels, strongest first.
    pub fn levels(&self) -> &[Vec<AuthorityTier>] {
        &self.levels
    }
}

impl Default for TierLadder {
    fn default() -> Self {
        Self::standard()
    }
}
