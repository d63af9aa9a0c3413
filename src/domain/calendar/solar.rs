//! Solar transit placeholder: calendar sun sign and a rotating house focus.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::zodiac::ZodiacSign;

/// Last calendar day of each sign that ends in the given month.
const SUN_SIGN_ENDS: [(u32, u32, ZodiacSign); 12] = [
    (1, 20, ZodiacSign::Capricorn),
    (2, 19, ZodiacSign::Aquarius),
    (3, 20, ZodiacSign::Pisces),
    (4, 20, ZodiacSign::Aries),
    (5, 21, ZodiacSign::Taurus),
    (6, 21, ZodiacSign::Gemini),
    (7, 22, ZodiacSign::Cancer),
    (8, 23, ZodiacSign::Leo),
    (9, 23, ZodiacSign::Virgo),
    (10, 23, ZodiacSign::Libra),
    (11, 22, ZodiacSign::Scorpio),
    (12, 22, ZodiacSign::Sagittarius),
];

const HOUSE_THEMES: [&str; 12] = [
    "Self & Identity",
    "Resources & Values",
    "Communication & Learning",
    "Home & Foundation",
    "Creativity & Joy",
    "Health & Service",
    "Partnerships & Relationships",
    "Transformation & Shared Resources",
    "Expansion & Philosophy",
    "Career & Public Image",
    "Community & Aspirations",
    "Spirituality & Release",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTransitData {
    pub sun_sign: ZodiacSign,
    pub house_focus: u32,
    pub house_theme: String,
    pub planetary_aspects: Vec<String>,
    pub transit_message: String,
}

/// Sun sign from fixed calendar boundaries; late December wraps to Capricorn.
pub fn sun_sign_for(date: NaiveDate) -> ZodiacSign {
    let (month, day) = (date.month(), date.day());
    SUN_SIGN_ENDS
        .iter()
        .find(|(end_month, end_day, _)| month < *end_month || (month == *end_month && day <= *end_day))
        .map(|(_, _, sign)| *sign)
        .unwrap_or(ZodiacSign::Capricorn)
}

/// House 1-12, advancing every 30 days of the year.
pub fn house_focus_for(day_of_year: u32) -> u32 {
    ((day_of_year.saturating_sub(1)) / 30) % 12 + 1
}

pub fn house_theme(house: u32) -> &'static str {
    HOUSE_THEMES[((house.max(1) - 1) % 12) as usize]
}

pub fn solar_transit_for(date: NaiveDate) -> SolarTransitData {
    let house_focus = house_focus_for(date.ordinal());
    let theme = house_theme(house_focus);

    SolarTransitData {
        sun_sign: sun_sign_for(date),
        house_focus,
        house_theme: theme.to_string(),
        planetary_aspects: Vec::new(),
        transit_message: format!("Focus on {} matters today", theme.to_lowercase()),
    }
}
