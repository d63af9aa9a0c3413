//! Per-sign moon themes.

use crate::domain::zodiac::ZodiacSign;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoonSignTheme {
    pub theme: &'static str,
    pub optimal: &'static [&'static str],
    pub avoid: &'static [&'static str],
}

pub fn moon_sign_theme(sign: ZodiacSign) -> MoonSignTheme {
    match sign {
        ZodiacSign::Aries => MoonSignTheme {
            theme: "Action & Initiative",
            optimal: &["Starting new projects", "Physical activity", "Quick decisions"],
            avoid: &["Patience-required tasks", "Delicate negotiations", "Long-term planning"],
        },
        ZodiacSign::Taurus => MoonSignTheme {
            theme: "Stability & Comfort",
            optimal: &["Financial planning", "Enjoying nature", "Cooking", "Sensual pleasures"],
            avoid: &["Rushing", "Sudden changes", "Skipping meals"],
        },
        ZodiacSign::Gemini => MoonSignTheme {
            theme: "Communication & Curiosity",
            optimal: &["Writing", "Learning", "Short trips", "Networking"],
            avoid: &["Detailed analysis", "Emotional depth", "Long-term commitments"],
        },
        ZodiacSign::Cancer => MoonSignTheme {
            theme: "Nurturing & Emotional Depth",
            optimal: &["Family time", "Home projects", "Self-care", "Emotional conversations"],
            avoid: &["Confrontations", "Major business decisions", "Excessive socializing"],
        },
        ZodiacSign::Leo => MoonSignTheme {
            theme: "Creativity & Self-Expression",
            optimal: &["Creative projects", "Leadership", "Romance", "Public speaking"],
            avoid: &["Humility tasks", "Background roles", "Criticism"],
        },
        ZodiacSign::Virgo => MoonSignTheme {
            theme: "Analysis & Service",
            optimal: &["Organizing", "Health routines", "Detail work", "Helping others"],
            avoid: &["Big picture thinking", "Spontaneity", "Overlooking details"],
        },
        ZodiacSign::Libra => MoonSignTheme {
            theme: "Harmony & Partnership",
            optimal: &["Relationships", "Negotiations", "Art appreciation", "Social events"],
            avoid: &["Confrontation", "Solo decisions", "Unbalanced situations"],
        },
        ZodiacSign::Scorpio => MoonSignTheme {
            theme: "Transformation & Depth",
            optimal: &["Deep research", "Psychological work", "Intimacy", "Endings/Beginnings"],
            avoid: &["Superficial interactions", "Avoiding emotions", "Control issues"],
        },
        ZodiacSign::Sagittarius => MoonSignTheme {
            theme: "Expansion & Adventure",
            optimal: &["Travel", "Philosophy", "Higher learning", "Optimism"],
            avoid: &["Details", "Confinement", "Pessimistic people"],
        },
        ZodiacSign::Capricorn => MoonSignTheme {
            theme: "Achievement & Structure",
            optimal: &["Career planning", "Long-term goals", "Discipline", "Authority"],
            avoid: &["Spontaneity", "Emotional displays", "Shortcuts"],
        },
        ZodiacSign::Aquarius => MoonSignTheme {
            theme: "Innovation & Humanity",
            optimal: &[
                "Technology",
                "Social causes",
                "Unconventional ideas",
                "Group activities",
            ],
            avoid: &["Tradition for tradition's sake", "Emotional demands", "Routine"],
        },
        ZodiacSign::Pisces => MoonSignTheme {
            theme: "Intuition & Compassion",
            optimal: &["Meditation", "Creative arts", "Spiritual practices", "Compassion"],
            avoid: &["Harsh reality", "Strict boundaries", "Confrontation"],
        },
    }
}
