//! Human Design placeholder: type-driven guidance plus a synthetic daily gate.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The five Human Design types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HumanDesignType {
    #[default]
    Generator,
    #[serde(rename = "Manifesting Generator")]
    ManifestingGenerator,
    Projector,
    Manifestor,
    Reflector,
}

impl HumanDesignType {
    pub const ALL: [HumanDesignType; 5] = [
        HumanDesignType::Generator,
        HumanDesignType::ManifestingGenerator,
        HumanDesignType::Projector,
        HumanDesignType::Manifestor,
        HumanDesignType::Reflector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            HumanDesignType::Generator => "Generator",
            HumanDesignType::ManifestingGenerator => "Manifesting Generator",
            HumanDesignType::Projector => "Projector",
            HumanDesignType::Manifestor => "Manifestor",
            HumanDesignType::Reflector => "Reflector",
        }
    }

    pub fn strategy(&self) -> &'static str {
        match self {
            HumanDesignType::Generator => "Wait to respond",
            HumanDesignType::ManifestingGenerator => "Wait to respond, then inform",
            HumanDesignType::Projector => "Wait for the invitation",
            HumanDesignType::Manifestor => "Inform before acting",
            HumanDesignType::Reflector => "Wait a lunar cycle",
        }
    }

    pub fn authority(&self) -> &'static str {
        match self {
            HumanDesignType::Generator | HumanDesignType::ManifestingGenerator => "Sacral",
            HumanDesignType::Projector => "Splenic or Emotional",
            HumanDesignType::Manifestor => "Emotional or Splenic",
            HumanDesignType::Reflector => "Lunar",
        }
    }

    pub fn signature(&self) -> &'static str {
        match self {
            HumanDesignType::Generator | HumanDesignType::ManifestingGenerator => "Satisfaction",
            HumanDesignType::Projector => "Success",
            HumanDesignType::Manifestor => "Peace",
            HumanDesignType::Reflector => "Surprise",
        }
    }

    pub fn not_self_warning(&self) -> &'static str {
        match self {
            HumanDesignType::Generator => "Watch for frustration if forcing actions",
            HumanDesignType::ManifestingGenerator => {
                "Watch for frustration and anger if not responding"
            }
            HumanDesignType::Projector => "Watch for bitterness if not recognized",
            HumanDesignType::Manifestor => "Watch for anger if meeting resistance",
            HumanDesignType::Reflector => "Watch for disappointment if rushing decisions",
        }
    }
}

impl std::fmt::Display for HumanDesignType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for HumanDesignType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HumanDesignType::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown Human Design type '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateData {
    pub gate_number: u32,
    pub gate_name: String,
    pub line: u32,
    pub planet: String,
    pub theme: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanDesignData {
    #[serde(rename = "type")]
    pub hd_type: HumanDesignType,
    pub strategy: String,
    pub authority: String,
    pub active_gates: Vec<GateData>,
    pub active_channels: Vec<String>,
    pub defined_centers_today: Vec<String>,
    pub decision_cue: String,
    pub energy_management: String,
    pub signature_theme: String,
    pub not_self_warning: String,
}

impl HumanDesignData {
    /// Gate activated by the Sun, falling back to the first listed gate.
    pub fn sun_gate(&self) -> Option<&GateData> {
        self.active_gates
            .iter()
            .find(|g| g.planet == "Sun")
            .or_else(|| self.active_gates.first())
    }
}

/// Synthetic gate `((day_of_year × 7) mod 64) + 1`.
pub fn daily_gate(day_of_year: u32) -> u32 {
    ((day_of_year * 7) % 64) + 1
}

/// Synthetic line `(day_of_year mod 6) + 1`.
pub fn daily_line(day_of_year: u32) -> u32 {
    (day_of_year % 6) + 1
}

/// Builds the day's record. Strategy always comes from the type; only an
/// explicit authority on the profile replaces the type default.
pub fn human_design_for(
    date: NaiveDate,
    hd_type: Option<HumanDesignType>,
    authority: Option<&str>,
) -> HumanDesignData {
    let hd_type = hd_type.unwrap_or_default();
    let day_of_year = date.ordinal();
    let gate = daily_gate(day_of_year);

    HumanDesignData {
        hd_type,
        strategy: hd_type.strategy().to_string(),
        authority: authority.unwrap_or(hd_type.authority()).to_string(),
        active_gates: vec![GateData {
            gate_number: gate,
            gate_name: format!("Gate {}", gate),
            line: daily_line(day_of_year),
            planet: "Sun".to_string(),
            theme: "Daily activation".to_string(),
        }],
        active_channels: Vec::new(),
        defined_centers_today: Vec::new(),
        decision_cue: format!("Trust your {} response", hd_type.authority()),
        energy_management: "Honor your energy type's natural rhythm".to_string(),
        signature_theme: hd_type.signature().to_string(),
        not_self_warning: hd_type.not_self_warning().to_string(),
    }
}
