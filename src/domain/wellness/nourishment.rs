use serde::{Deserialize, Serialize};

use crate::domain::biorhythm::{BiorhythmData, OverallEnergy};
use crate::domain::lunar::MoonData;
use crate::domain::zodiac::Element;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NourishmentGuidance {
    pub element_focus: String,
    pub foods_emphasized: Vec<String>,
    pub foods_minimize: Vec<String>,
    pub hydration_focus: String,
    pub meal_timing: String,
    pub breakfast_suggestion: String,
    pub lunch_suggestion: String,
    pub dinner_suggestion: String,
    pub snack_suggestions: Vec<String>,
}

struct ElementDiet {
    focus: &'static str,
    emphasized: &'static [&'static str],
    minimize: &'static [&'static str],
    hydration: &'static str,
    breakfast: &'static str,
    lunch: &'static str,
    dinner: &'static str,
    snacks: &'static [&'static str],
}

fn element_diet(element: Element) -> ElementDiet {
    match element {
        Element::Fire => ElementDiet {
            focus: "Cooling and light",
            emphasized: &["Fresh salads", "Fruits", "Cucumber", "Mint", "Coconut water"],
            minimize: &["Heavy meats", "Spicy foods", "Alcohol", "Excessive caffeine"],
            hydration: "Extra water and cooling beverages",
            breakfast: "Fresh fruit smoothie with greens",
            lunch: "Large colorful salad with light protein",
            dinner: "Grilled fish with steamed vegetables",
            snacks: &["Fresh fruit", "Coconut", "Cooling herbal tea"],
        },
        Element::Earth => ElementDiet {
            focus: "Grounding and nourishing",
            emphasized: &["Root vegetables", "Whole grains", "Legumes", "Nuts", "Mushrooms"],
            minimize: &["Processed foods", "Excessive sugar", "Light/airy foods"],
            hydration: "Warm herbal teas, room temperature water",
            breakfast: "Warm oatmeal with nuts and seeds",
            lunch: "Hearty grain bowl with roasted vegetables",
            dinner: "Root vegetable stew with whole grain bread",
            snacks: &["Trail mix", "Hummus with vegetables", "Whole grain crackers"],
        },
        Element::Air => ElementDiet {
            focus: "Light and varied",
            emphasized: &["Leafy greens", "Light proteins", "Seeds", "Sprouts", "Berries"],
            minimize: &["Heavy, dense foods", "Large portions", "Fried foods"],
            hydration: "Consistent hydration throughout day",
            breakfast: "Light yogurt parfait with granola",
            lunch: "Variety of small dishes, tapas style",
            dinner: "Light stir-fry with diverse vegetables",
            snacks: &["Seeds", "Light crackers", "Fresh berries"],
        },
        Element::Water => ElementDiet {
            focus: "Warming and comforting",
            emphasized: &["Soups", "Stews", "Ginger", "Cinnamon", "Warming spices"],
            minimize: &["Cold foods", "Raw foods", "Excessive dairy", "Ice water"],
            hydration: "Warm water, ginger tea, herbal infusions",
            breakfast: "Warm porridge with cinnamon and honey",
            lunch: "Nourishing soup with whole grain bread",
            dinner: "Comforting stew or curry",
            snacks: &["Warm spiced milk", "Baked apple", "Ginger cookies"],
        },
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Food emphasis by moon element; meal timing by the physical cycle.
pub fn nourishment_guidance(moon: &MoonData, biorhythm: &BiorhythmData) -> NourishmentGuidance {
    let diet = element_diet(moon.sign_element);

    let meal_timing = if biorhythm.physical < 0.0 {
        "Earlier, lighter dinner recommended (by 6:30 PM)"
    } else if biorhythm.overall_energy == OverallEnergy::High {
        "Normal timing with adequate portions for activity"
    } else {
        "Standard timing, moderate portions"
    };

    NourishmentGuidance {
        element_focus: diet.focus.to_string(),
        foods_emphasized: strings(diet.emphasized),
        foods_minimize: strings(diet.minimize),
        hydration_focus: diet.hydration.to_string(),
        meal_timing: meal_timing.to_string(),
        breakfast_suggestion: diet.breakfast.to_string(),
        lunch_suggestion: diet.lunch.to_string(),
        dinner_suggestion: diet.dinner.to_string(),
        snack_suggestions: strings(diet.snacks),
    }
}
