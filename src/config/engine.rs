//! Calculation engine selection

use serde::Deserialize;

/// Which moon engine computes lunar positions.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MoonEngineKind {
    #[default]
    Simplified,
    Ephemeris,
}

impl std::str::FromStr for MoonEngineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "simplified" => Ok(MoonEngineKind::Simplified),
            "ephemeris" => Ok(MoonEngineKind::Ephemeris),
            other => Err(format!("unknown moon engine '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub moon: MoonEngineKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_defaults_to_simplified() {
        assert_eq!(EngineConfig::default().moon, MoonEngineKind::Simplified);
    }

    #[test]
    fn test_engine_deserialization() {
        let config: EngineConfig = serde_json::from_str(r#"{"moon": "ephemeris"}"#).unwrap();
        assert_eq!(config.moon, MoonEngineKind::Ephemeris);
        assert!(serde_json::from_str::<EngineConfig>(r#"{"moon": "swiss"}"#).is_err());
    }

    #[test]
    fn test_engine_from_str() {
        assert_eq!("Ephemeris".parse::<MoonEngineKind>(), Ok(MoonEngineKind::Ephemeris));
        assert!("other".parse::<MoonEngineKind>().is_err());
    }
}
