//! I Ching placeholder keyed on the day's Sun gate.

use serde::{Deserialize, Serialize};

use super::human_design::HumanDesignData;

const TRIGRAMS: [&str; 8] = [
    "Heaven", "Earth", "Thunder", "Water", "Mountain", "Wind", "Fire", "Lake",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IChingData {
    pub hexagram_number: u32,
    pub hexagram_name: String,
    pub trigram_above: String,
    pub trigram_below: String,
    pub judgment: String,
    pub image: String,
    pub changing_lines: Vec<u32>,
    pub moving_to: Option<u32>,
    pub daily_wisdom: String,
    pub action_guidance: String,
    pub caution: String,
}

pub fn hexagram_name(number: u32) -> String {
    match number {
        1 => "The Creative".to_string(),
        2 => "The Receptive".to_string(),
        n => format!("Hexagram {}", n),
    }
}

/// Upper and lower trigram names for hexagram 1-64.
pub fn trigrams(number: u32) -> (&'static str, &'static str) {
    let index = number.clamp(1, 64) - 1;
    (TRIGRAMS[(index / 8) as usize], TRIGRAMS[(index % 8) as usize])
}

pub fn i_ching_for(human_design: &HumanDesignData) -> IChingData {
    let sun_gate = human_design.sun_gate();
    let number = sun_gate.map(|g| g.gate_number).unwrap_or(1);
    let (above, below) = trigrams(number);

    IChingData {
        hexagram_number: number,
        hexagram_name: hexagram_name(number),
        trigram_above: above.to_string(),
        trigram_below: below.to_string(),
        judgment: "Contemplate the day's energy and act accordingly".to_string(),
        image: "The wise one aligns with natural rhythms".to_string(),
        changing_lines: sun_gate.map(|g| vec![g.line]).unwrap_or_default(),
        moving_to: None,
        daily_wisdom: "Flow with today's energy rather than against it".to_string(),
        action_guidance: "Take aligned action when the moment is right".to_string(),
        caution: "Avoid forcing outcomes".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calendar::human_design::human_design_for;
    use chrono::NaiveDate;

    #[test]
    fn trigram_index_arithmetic() {
        assert_eq!(trigrams(1), ("Heaven", "Heaven"));
        assert_eq!(trigrams(2), ("Heaven", "Earth"));
        assert_eq!(trigrams(9), ("Earth", "Heaven"));
        assert_eq!(trigrams(64), ("Lake", "Lake"));
    }

    #[test]
    fn hexagram_reuses_sun_gate() {
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let hd = human_design_for(date, None, None);
        let iching = i_ching_for(&hd);
        assert_eq!(iching.hexagram_number, 42);
        assert_eq!(iching.hexagram_name, "Hexagram 42");
        assert_eq!(iching.changing_lines, vec![4]);
        assert_eq!(iching.moving_to, None);
    }

    #[test]
    fn named_hexagrams() {
        assert_eq!(hexagram_name(1), "The Creative");
        assert_eq!(hexagram_name(2), "The Receptive");
    }
}
