//! The fixed specialist table.
//!
//! Four medical specialists, each paired with a fixed system instruction.
//! The set is defined at compile time and never changes at runtime.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────
// Specialist
// ─────────────────────────────────────────────────────────────────

/// The four medical specialists a question can be addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Specialist {
    /// 外科医 — surgery
    Surgeon,
    /// 内科医 — general internal medicine
    Internist,
    /// 小児科医 — pediatrics
    Pediatrician,
    /// 整形外科医 — bones, joints, and muscles
    Orthopedist,
}

impl Specialist {
    /// Slug used in CLI args and config values.
    pub fn slug(&self) -> &'static str {
        match self {
            Specialist::Surgeon => "surgeon",
            Specialist::Internist => "internist",
            Specialist::Pediatrician => "pediatrician",
            Specialist::Orthopedist => "orthopedist",
        }
    }

    /// Canonical Japanese label shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Specialist::Surgeon => "外科医",
            Specialist::Internist => "内科医",
            Specialist::Pediatrician => "小児科医",
            Specialist::Orthopedist => "整形外科医",
        }
    }

    /// Short English description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Specialist::Surgeon => "Surgery — operative and perioperative questions",
            Specialist::Internist => "Internal medicine — general adult health",
            Specialist::Pediatrician => "Pediatrics — children's health",
            Specialist::Orthopedist => "Orthopedics — bones, joints, and muscles",
        }
    }

    /// The fixed system instruction sent as the first message of every
    /// consultation with this specialist.
    pub fn instruction(&self) -> &'static str {
        match self {
            Specialist::Surgeon => {
                "あなたは経験豊富な外科医です。医学的な知識を活用して、患者の質問に対して適切なアドバイスを提供してください。"
            }
            Specialist::Internist => {
                "あなたは経験豊富な内科医です。内科全般の医学的知識を活用して、患者の質問に対して適切なアドバイスを提供してください。"
            }
            Specialist::Pediatrician => {
                "あなたは経験豊富な小児科医です。小児医療の専門知識を活用して、子どもの健康に関する質問に適切なアドバイスを提供してください。"
            }
            Specialist::Orthopedist => {
                "あなたは経験豊富な整形外科医です。骨、関節、筋肉に関する専門知識を活用して、患者の質問に対して適切なアドバイスを提供してください。"
            }
        }
    }

    /// All specialists in display order.
    pub fn all() -> &'static [Specialist] {
        &[
            Specialist::Surgeon,
            Specialist::Internist,
            Specialist::Pediatrician,
            Specialist::Orthopedist,
        ]
    }
}

impl fmt::Display for Specialist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Specialist {
    type Err = crate::error::Error;

    /// Accepts the slug or the canonical Japanese label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "surgeon" | "外科医" => Ok(Specialist::Surgeon),
            "internist" | "内科医" => Ok(Specialist::Internist),
            "pediatrician" | "小児科医" => Ok(Specialist::Pediatrician),
            "orthopedist" | "整形外科医" => Ok(Specialist::Orthopedist),
            _ => Err(crate::error::Error::unknown_specialist(s.trim())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Listings
// ─────────────────────────────────────────────────────────────────

/// Summary row for the `specialist list` command.
#[derive(Debug, Clone)]
pub struct SpecialistListing {
    pub specialist: Specialist,
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// List all specialists with their display metadata.
pub fn list_specialists() -> Vec<SpecialistListing> {
    Specialist::all()
        .iter()
        .map(|s| SpecialistListing {
            specialist: *s,
            slug: s.slug(),
            label: s.label(),
            description: s.description(),
        })
        .collect()
}

// ─────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────
