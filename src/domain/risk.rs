//! Multi-domain risk scoring from moon, biorhythm and numerology readings.

use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::{round1, BiorhythmData};
use crate::domain::lunar::MoonData;
use crate::domain::numerology::NumerologyData;

const MOON_VOC_WEIGHT: u32 = 3;
const BIORHYTHM_CRITICAL_WEIGHT: u32 = 4;
const BIORHYTHM_LOW_WEIGHT: u32 = 2;
const INTELLECTUAL_CRITICAL_WEIGHT: u32 = 2;
const INTELLECTUAL_LOW_WEIGHT: u32 = 1;
const NUMEROLOGY_WEIGHT: u32 = 1;

const LOW_CYCLE_THRESHOLD: f64 = -50.0;
const MAX_DOMAIN_SCORE: u32 = 10;
const ELEVATED_DOMAIN_SCORE: u32 = 3;
const MAX_PROTECTIVE_PRACTICES: usize = 4;

const SPIRITUAL_PRACTICES: [&str; 4] = [
    "Morning grounding meditation",
    "Protective visualization",
    "Energy clearing",
    "Intention setting",
];
const EMOTIONAL_PRACTICES: [&str; 4] = [
    "Journaling",
    "Breathwork",
    "Self-compassion practice",
    "Connecting with supportive people",
];
const PHYSICAL_PRACTICES: [&str; 4] = [
    "Gentle stretching",
    "Adequate hydration",
    "Extra rest",
    "Mindful movement",
];
const DEFAULT_PRACTICES: [&str; 2] = ["Standard self-care practices", "Mindful awareness"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskDomain {
    Spiritual,
    Emotional,
    Physical,
}

impl std::fmt::Display for RiskDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskDomain::Spiritual => write!(f, "Spiritual"),
            RiskDomain::Emotional => write!(f, "Emotional"),
            RiskDomain::Physical => write!(f, "Physical"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Caution,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Caution => write!(f, "Caution"),
            Severity::Warning => write!(f, "Warning"),
        }
    }
}

/// Banded composite risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    Elevated,
    High,
}

impl RiskLevel {
    /// `<25 Low`, `<50 Moderate`, `<75 Elevated`, else `High`.
    pub fn from_score(score: f64) -> Self {
        if score < 25.0 {
            RiskLevel::Low
        } else if score < 50.0 {
            RiskLevel::Moderate
        } else if score < 75.0 {
            RiskLevel::Elevated
        } else {
            RiskLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Elevated => "Elevated",
            RiskLevel::High => "High",
        }
    }

    pub fn grounding_techniques(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => &["5-minute breathing", "Brief nature walk"],
            RiskLevel::Moderate => &["10-minute meditation", "Grounding visualization", "Body scan"],
            RiskLevel::Elevated => &[
                "20-minute meditation",
                "Earth connection exercise",
                "Cold water on wrists",
            ],
            RiskLevel::High => &[
                "Extended meditation",
                "Nature immersion",
                "Digital detox",
                "Early bedtime",
            ],
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskWarning {
    pub domain: RiskDomain,
    pub source: String,
    pub message: String,
    pub severity: Severity,
}

impl RiskWarning {
    fn new(domain: RiskDomain, source: &str, message: &str, severity: Severity) -> Self {
        Self {
            domain,
            source: source.to_string(),
            message: message.to_string(),
            severity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysisData {
    pub spiritual_risk: u32,
    pub emotional_risk: u32,
    pub physical_risk: u32,
    pub overall_risk_level: RiskLevel,
    pub risk_score: f64,
    pub warnings: Vec<RiskWarning>,
    pub protective_practices: Vec<String>,
    pub grounding_techniques: Vec<String>,
}

#[derive(Default)]
struct Scores {
    spiritual: u32,
    emotional: u32,
    physical: u32,
    warnings: Vec<RiskWarning>,
}

impl Scores {
    fn add(&mut self, domain: RiskDomain, weight: u32) {
        match domain {
            RiskDomain::Spiritual => self.spiritual += weight,
            RiskDomain::Emotional => self.emotional += weight,
            RiskDomain::Physical => self.physical += weight,
        }
    }

    fn warn(&mut self, domain: RiskDomain, source: &str, message: &str, severity: Severity) {
        self.warnings.push(RiskWarning::new(domain, source, message, severity));
    }
}

/// Scores the day across spiritual, emotional and physical domains.
pub fn analyze_risk(
    moon: &MoonData,
    biorhythm: &BiorhythmData,
    numerology: &NumerologyData,
) -> RiskAnalysisData {
    let mut s = Scores::default();

    if moon.moon_void_of_course {
        s.add(RiskDomain::Spiritual, MOON_VOC_WEIGHT);
        s.add(RiskDomain::Emotional, MOON_VOC_WEIGHT);
        s.warn(
            RiskDomain::Spiritual,
            "Moon Void of Course",
            "Avoid initiating new projects or making major decisions",
            Severity::Caution,
        );
    }

    if biorhythm.physical_critical {
        s.add(RiskDomain::Physical, BIORHYTHM_CRITICAL_WEIGHT);
        s.warn(
            RiskDomain::Physical,
            "Physical Biorhythm Critical",
            "Take extra care with physical activities; accident risk elevated",
            Severity::Warning,
        );
    }
    if biorhythm.physical < LOW_CYCLE_THRESHOLD {
        s.add(RiskDomain::Physical, BIORHYTHM_LOW_WEIGHT);
        s.warn(
            RiskDomain::Physical,
            "Physical Biorhythm Low",
            "Energy is depleted; prioritize rest over exertion",
            Severity::Caution,
        );
    }

    if biorhythm.emotional_critical {
        s.add(RiskDomain::Emotional, BIORHYTHM_CRITICAL_WEIGHT);
        s.warn(
            RiskDomain::Emotional,
            "Emotional Biorhythm Critical",
            "Emotional sensitivity heightened; practice extra self-care",
            Severity::Warning,
        );
    }
    if biorhythm.emotional < LOW_CYCLE_THRESHOLD {
        s.add(RiskDomain::Emotional, BIORHYTHM_LOW_WEIGHT);
        s.warn(
            RiskDomain::Emotional,
            "Emotional Biorhythm Low",
            "Emotional resilience reduced; avoid difficult conversations",
            Severity::Caution,
        );
    }

    // Mental clarity counts toward the spiritual domain.
    if biorhythm.intellectual_critical {
        s.add(RiskDomain::Spiritual, INTELLECTUAL_CRITICAL_WEIGHT);
        s.warn(
            RiskDomain::Spiritual,
            "Intellectual Biorhythm Critical",
            "Mental clarity fluctuating; double-check important decisions",
            Severity::Caution,
        );
    }
    if biorhythm.intellectual < LOW_CYCLE_THRESHOLD {
        s.add(RiskDomain::Spiritual, INTELLECTUAL_LOW_WEIGHT);
        s.warn(
            RiskDomain::Spiritual,
            "Intellectual Biorhythm Low",
            "Mental energy depleted; postpone complex analysis",
            Severity::Caution,
        );
    }

    match numerology.personal_day {
        4 => {
            s.add(RiskDomain::Physical, NUMEROLOGY_WEIGHT);
            s.warn(
                RiskDomain::Physical,
                "Personal Day 4",
                "Structure-heavy day; pace yourself and keep routines simple",
                Severity::Caution,
            );
        }
        7 => {
            s.add(RiskDomain::Spiritual, NUMEROLOGY_WEIGHT);
            s.warn(
                RiskDomain::Spiritual,
                "Personal Day 7",
                "Solitude is needed; protect quiet time for reflection",
                Severity::Caution,
            );
        }
        9 => {
            s.add(RiskDomain::Emotional, NUMEROLOGY_WEIGHT);
            s.warn(
                RiskDomain::Emotional,
                "Personal Day 9",
                "Endings and release are in focus; be gentle with goodbyes",
                Severity::Caution,
            );
        }
        _ => {}
    }

    let spiritual = s.spiritual.min(MAX_DOMAIN_SCORE);
    let emotional = s.emotional.min(MAX_DOMAIN_SCORE);
    let physical = s.physical.min(MAX_DOMAIN_SCORE);

    let mean = f64::from(spiritual + emotional + physical) / 3.0;
    let risk_score = round1(mean * 10.0);
    let level = RiskLevel::from_score(risk_score);

    RiskAnalysisData {
        spiritual_risk: spiritual,
        emotional_risk: emotional,
        physical_risk: physical,
        overall_risk_level: level,
        risk_score,
        warnings: s.warnings,
        protective_practices: protective_practices(spiritual, emotional, physical),
        grounding_techniques: level
            .grounding_techniques()
            .iter()
            .map(|t| t.to_string())
            .collect(),
    }
}

fn protective_practices(spiritual: u32, emotional: u32, physical: u32) -> Vec<String> {
    let practices: Vec<String> = [
        (spiritual, &SPIRITUAL_PRACTICES),
        (emotional, &EMOTIONAL_PRACTICES),
        (physical, &PHYSICAL_PRACTICES),
    ]
    .into_iter()
    .filter(|(score, _)| *score >= ELEVATED_DOMAIN_SCORE)
    .flat_map(|(_, list)| list.iter().take(2))
    .take(MAX_PROTECTIVE_PRACTICES)
    .map(|p| p.to_string())
    .collect();

    if practices.is_empty() {
        DEFAULT_PRACTICES.iter().map(|p| p.to_string()).collect()
    } else {
        practices
    }
}
