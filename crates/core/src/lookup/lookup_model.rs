//! Lookup descriptor models and their built-in seed rows.
//!
//! Descriptors are purely presentational; events reference them by id.

use serde::{Deserialize, Serialize};

/// Broad feed category a feed descriptor belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FeedCategory {
    Nursing,
    Formula,
    Solids,
}

impl FeedCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedCategory::Nursing => "nursing",
            FeedCategory::Formula => "formula",
            FeedCategory::Solids => "solids",
        }
    }

    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "formula" => FeedCategory::Formula,
            "solids" => FeedCategory::Solids,
            _ => FeedCategory::Nursing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category: FeedCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SleepType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DiaperType {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

fn feed_type(id: &str, name: &str, description: &str, category: FeedCategory) -> FeedType {
    FeedType {
        id: id.to_string(),
        name: name.to_string(),
        description: Some(description.to_string()),
        category,
    }
}

/// Seed rows for the `feed_types` table.
pub fn default_feed_types() -> Vec<FeedType> {
    vec![
        feed_type("1", "Regular feed", "Everyday nursing", FeedCategory::Nursing),
        feed_type("2", "Dream feed", "Nursing while asleep", FeedCategory::Nursing),
        feed_type("3", "Comfort feed", "Nursing to soothe", FeedCategory::Nursing),
        feed_type("4", "Regular formula", "Standard formula", FeedCategory::Formula),
        feed_type(
            "5",
            "Special formula",
            "Hypoallergenic or otherwise special formula",
            FeedCategory::Formula,
        ),
        feed_type("6", "Fruit puree", "Pureed fruit", FeedCategory::Solids),
        feed_type("7", "Vegetable puree", "Pureed vegetables", FeedCategory::Solids),
        feed_type("8", "Cereal", "Grain-based solids", FeedCategory::Solids),
    ]
}

/// Seed rows for the `sleep_types` table.
pub fn default_sleep_types() -> Vec<SleepType> {
    vec![
        SleepType {
            id: "1".to_string(),
            name: "Nap".to_string(),
            description: Some("Short rest, usually under 30 minutes".to_string()),
        },
        SleepType {
            id: "2".to_string(),
            name: "Day sleep".to_string(),
            description: Some("Longer daytime sleep".to_string()),
        },
        SleepType {
            id: "3".to_string(),
            name: "Night sleep".to_string(),
            description: Some("Main overnight sleep".to_string()),
        },
    ]
}

/// Seed rows for the `diaper_types` table.
pub fn default_diaper_types() -> Vec<DiaperType> {
    vec![
        DiaperType {
            id: "1".to_string(),
            name: "Wet".to_string(),
            description: Some("Urine only".to_string()),
        },
        DiaperType {
            id: "2".to_string(),
            name: "Dirty".to_string(),
            description: Some("Stool only".to_string()),
        },
        DiaperType {
            id: "3".to_string(),
            name: "Mixed".to_string(),
            description: Some("Urine and stool".to_string()),
        },
        DiaperType {
            id: "4".to_string(),
            name: "Dry".to_string(),
            description: Some("Routine change, diaper was dry".to_string()),
        },
    ]
}
