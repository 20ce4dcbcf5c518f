// Static option lists offered by the planning form

use serde::{Deserialize, Serialize};

// Budget slider bounds (per person, INR)
pub const BUDGET_MIN: u32 = 5_000;
pub const BUDGET_MAX: u32 = 100_000;
pub const BUDGET_STEP: u32 = 5_000;

pub const GROUP_SIZE_OPTIONS: [u32; 4] = [1, 2, 4, 6];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Destination {
    pub name: String,
    pub state: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestTag {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
}

impl BudgetRange {
    pub fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }
}

const DESTINATIONS: [(&str, &str, &str); 10] = [
    ("Delhi", "Delhi", "Historical"),
    ("Mumbai", "Maharashtra", "Metropolitan"),
    ("Goa", "Goa", "Beach"),
    ("Jaipur", "Rajasthan", "Heritage"),
    ("Kerala", "Kerala", "Nature"),
    ("Agra", "Uttar Pradesh", "Historical"),
    ("Manali", "Himachal Pradesh", "Adventure"),
    ("Rishikesh", "Uttarakhand", "Spiritual"),
    ("Udaipur", "Rajasthan", "Heritage"),
    ("Darjeeling", "West Bengal", "Hill Station"),
];

pub static INTEREST_TAGS: [InterestTag; 8] = [
    InterestTag {
        id: "heritage",
        name: "Heritage & History",
        icon: "🏛️",
    },
    InterestTag {
        id: "adventure",
        name: "Adventure",
        icon: "🏔️",
    },
    InterestTag {
        id: "spiritual",
        name: "Spiritual",
        icon: "🕉️",
    },
    InterestTag {
        id: "beaches",
        name: "Beaches",
        icon: "🏖️",
    },
    InterestTag {
        id: "food",
        name: "Food & Cuisine",
        icon: "🍛",
    },
    InterestTag {
        id: "wildlife",
        name: "Wildlife",
        icon: "🐅",
    },
    InterestTag {
        id: "culture",
        name: "Art & Culture",
        icon: "🎭",
    },
    InterestTag {
        id: "shopping",
        name: "Shopping",
        icon: "🛍️",
    },
];

pub static BUDGET_RANGES: [BudgetRange; 4] = [
    BudgetRange {
        min: 5_000,
        max: 15_000,
        label: "Budget (₹5K - ₹15K)",
    },
    BudgetRange {
        min: 15_001,
        max: 35_000,
        label: "Comfort (₹15K - ₹35K)",
    },
    BudgetRange {
        min: 35_001,
        max: 70_000,
        label: "Premium (₹35K - ₹70K)",
    },
    BudgetRange {
        min: 70_001,
        max: 100_000,
        label: "Luxury (₹70K - ₹1L+)",
    },
];

// Destinations the form offers when the service list is unavailable
pub fn default_destinations() -> Vec<Destination> {
    DESTINATIONS
        .iter()
        .map(|(name, state, kind)| Destination {
            name: name.to_string(),
            state: state.to_string(),
            kind: kind.to_string(),
        })
        .collect()
}

pub fn interest_tag(id: &str) -> Option<&'static InterestTag> {
    INTEREST_TAGS.iter().find(|tag| tag.id == id)
}

// Label of the range containing `value`, or the plain rupee amount
pub fn budget_label(value: u32) -> String {
    BUDGET_RANGES
        .iter()
        .find(|range| range.contains(value))
        .map(|range| range.label.to_string())
        .unwrap_or_else(|| format!("₹{}", group_thousands(value)))
}

fn group_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
