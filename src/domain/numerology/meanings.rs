//! Static meaning table for numerology numbers.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Descriptors attached to a numerology number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMeaning {
    pub theme: &'static str,
    pub quality: &'static str,
    pub keywords: &'static [&'static str],
    pub favorable: &'static [&'static str],
    pub challenging: &'static [&'static str],
    /// Present only for master numbers.
    pub master_message: Option<&'static str>,
}

/// Entry for 1, also the fallback for numbers outside the table.
const NEW_BEGINNINGS: NumberMeaning = NumberMeaning {
    theme: "New Beginnings & Independence",
    quality: "Active",
    keywords: &["initiative", "leadership", "independence", "pioneering"],
    favorable: &["Starting projects", "Taking initiative", "Self-promotion"],
    challenging: &["Teamwork", "Patience", "Following others"],
    master_message: None,
};

static NUMBER_MEANINGS: Lazy<HashMap<u32, NumberMeaning>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(1, NEW_BEGINNINGS);
    table.insert(
        2,
        NumberMeaning {
            theme: "Partnership & Balance",
            quality: "Receptive",
            keywords: &["cooperation", "diplomacy", "sensitivity", "patience"],
            favorable: &["Collaboration", "Listening", "Mediation", "Details"],
            challenging: &["Quick decisions", "Standing alone", "Confrontation"],
            master_message: None,
        },
    );
    table.insert(
        3,
        NumberMeaning {
            theme: "Expression & Creativity",
            quality: "Creative",
            keywords: &["communication", "joy", "creativity", "self-expression"],
            favorable: &["Creative work", "Social events", "Writing", "Speaking"],
            challenging: &["Routine tasks", "Discipline", "Serious matters"],
            master_message: None,
        },
    );
    table.insert(
        4,
        NumberMeaning {
            theme: "Foundation & Structure",
            quality: "Stable",
            keywords: &["discipline", "organization", "hard work", "foundation"],
            favorable: &["Planning", "Building", "Organization", "Practical tasks"],
            challenging: &["Spontaneity", "Change", "Taking risks"],
            master_message: None,
        },
    );
    table.insert(
        5,
        NumberMeaning {
            theme: "Change & Freedom",
            quality: "Dynamic",
            keywords: &["freedom", "adventure", "change", "versatility"],
            favorable: &["Travel", "Variety", "Adaptability", "New experiences"],
            challenging: &["Routine", "Commitment", "Long-term planning"],
            master_message: None,
        },
    );
    table.insert(
        6,
        NumberMeaning {
            theme: "Responsibility & Nurturing",
            quality: "Nurturing",
            keywords: &["home", "family", "responsibility", "service"],
            favorable: &["Family matters", "Home projects", "Caregiving", "Teaching"],
            challenging: &["Personal freedom", "Saying no", "Self-focus"],
            master_message: None,
        },
    );
    table.insert(
        7,
        NumberMeaning {
            theme: "Introspection & Wisdom",
            quality: "Spiritual",
            keywords: &["analysis", "spirituality", "wisdom", "solitude"],
            favorable: &["Research", "Meditation", "Study", "Reflection"],
            challenging: &["Social events", "Quick decisions", "Surface matters"],
            master_message: None,
        },
    );
    table.insert(
        8,
        NumberMeaning {
            theme: "Abundance & Power",
            quality: "Material",
            keywords: &["success", "power", "abundance", "manifestation"],
            favorable: &["Business", "Financial matters", "Authority", "Achievement"],
            challenging: &["Letting go", "Emotional matters", "Spiritual pursuits"],
            master_message: None,
        },
    );
    table.insert(
        9,
        NumberMeaning {
            theme: "Completion & Humanitarianism",
            quality: "Universal",
            keywords: &["completion", "humanitarianism", "wisdom", "endings"],
            favorable: &["Finishing projects", "Giving", "Release", "Global thinking"],
            challenging: &["New beginnings", "Personal gain", "Attachment"],
            master_message: None,
        },
    );
    table.insert(
        11,
        NumberMeaning {
            theme: "Illumination & Intuition (Master Number)",
            quality: "Inspirational",
            keywords: &["intuition", "inspiration", "illumination", "idealism"],
            favorable: &["Spiritual work", "Inspiration", "Teaching", "Healing"],
            challenging: &["Grounding", "Practical matters", "Self-doubt"],
            master_message: Some(
                "Master Number 11 active - heightened intuition and spiritual insight available. Trust your inner guidance.",
            ),
        },
    );
    table.insert(
        22,
        NumberMeaning {
            theme: "Master Builder (Master Number)",
            quality: "Manifesting",
            keywords: &["vision", "practical idealism", "large projects", "legacy"],
            favorable: &["Large-scale projects", "Manifestation", "Building systems"],
            challenging: &["Small thinking", "Impatience", "Overwhelm"],
            master_message: Some(
                "Master Number 22 active - potential for manifesting grand visions into reality. Think big but act practically.",
            ),
        },
    );
    table.insert(
        33,
        NumberMeaning {
            theme: "Master Teacher (Master Number)",
            quality: "Compassionate",
            keywords: &["compassion", "healing", "teaching", "selfless service"],
            favorable: &["Teaching", "Healing", "Compassionate service", "Guidance"],
            challenging: &["Self-care", "Boundaries", "Personal needs"],
            master_message: Some(
                "Master Number 33 active - profound healing and teaching energy available. Serve with love but maintain boundaries.",
            ),
        },
    );
    table
});

/// Looks up the meaning of a number, falling back to the entry for 1.
pub fn number_meaning(number: u32) -> &'static NumberMeaning {
    NUMBER_MEANINGS.get(&number).unwrap_or(&NEW_BEGINNINGS)
}
