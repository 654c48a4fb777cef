//! Cost centers
//!
//! The nine fixed operational expense categories of the livestock
//! operation. The persisted label is the Portuguese name used in the field.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel filter value meaning "every cost center"
pub const ALL_CENTERS: &str = "Todos";

/// One of the fixed operational cost centers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCenter {
    /// Ranch hand wages (Peão)
    Labor,
    /// Veterinarian visits and fees
    Veterinary,
    /// Vaccination, deworming and other herd health handling
    HealthManagement,
    /// Mineral salt
    Salt,
    /// Electricity bill
    Electricity,
    /// Internet service
    Internet,
    /// Fence repairs
    FenceMaintenance,
    /// Feed and supplements
    Feed,
    /// Anything else
    Other,
}

impl CostCenter {
    /// All cost centers in their canonical order
    pub const ALL: [CostCenter; 9] = [
        Self::Labor,
        Self::Veterinary,
        Self::HealthManagement,
        Self::Salt,
        Self::Electricity,
        Self::Internet,
        Self::FenceMaintenance,
        Self::Feed,
        Self::Other,
    ];

    /// The label written to the costs file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Labor => "Peão",
            Self::Veterinary => "Veterinário",
            Self::HealthManagement => "Manejo Sanitário",
            Self::Salt => "Sal",
            Self::Electricity => "Energia Elétrica",
            Self::Internet => "Internet",
            Self::FenceMaintenance => "Manutenção de Cercas",
            Self::Feed => "Alimentação",
            Self::Other => "Outros",
        }
    }

    /// Short English name accepted on the command line
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Labor => "labor",
            Self::Veterinary => "veterinary",
            Self::HealthManagement => "health",
            Self::Salt => "salt",
            Self::Electricity => "electricity",
            Self::Internet => "internet",
            Self::FenceMaintenance => "fence",
            Self::Feed => "feed",
            Self::Other => "other",
        }
    }

    /// Parse a cost center from its label or English slug (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        Self::ALL.into_iter().find(|center| {
            center.label().to_lowercase() == needle || center.slug() == needle
        })
    }

    /// Check whether a persisted label belongs to the fixed set
    pub fn is_known_label(label: &str) -> bool {
        Self::ALL.iter().any(|center| center.label() == label.trim())
    }
}

impl fmt::Display for CostCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
