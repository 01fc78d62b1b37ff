use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// The signed-in (or guest) user shown across the site.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct User {
    pub name: String,
    #[serde(deserialize_with = "points_or_zero")]
    pub points: u32,
}

// A points value that is not a non-negative integer counts as zero; the name
// is kept.
fn points_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0))
}

impl Default for User {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            points: 0,
        }
    }
}

impl User {
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn with_bonus(&self, amount: u32) -> Self {
        Self {
            name: self.name.clone(),
            points: self.points.saturating_add(amount),
        }
    }
}

/// One logged plant. Plants have no id; the list position is the identity.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Plant {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub week: String,
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} — {} ({}🍃)", self.rank, self.name, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_defaults_to_guest() {
        assert_eq!(User::default(), User::new("Guest", 0));
    }

    #[test]
    fn test_user_missing_points_parse_as_zero() {
        let user: User = serde_json::from_str(r#"{"name":"Mia"}"#).unwrap();
        assert_eq!(user, User::new("Mia", 0));
    }

    #[test]
    fn test_bad_points_keep_the_name() {
        for raw in [
            r#"{"name":"Ann","points":-4}"#,
            r#"{"name":"Ann","points":"12"}"#,
            r#"{"name":"Ann","points":null}"#,
            r#"{"name":"Ann","points":2.5}"#,
        ] {
            let user: User = serde_json::from_str(raw).unwrap();
            assert_eq!(user, User::new("Ann", 0), "{}", raw);
        }
    }

    #[test]
    fn test_plant_kind_serializes_as_type() {
        let plant = Plant {
            kind: "Basil".into(),
            name: "Bas".into(),
            week: "Week 2".into(),
            image: String::new(),
        };
        let json = serde_json::to_value(&plant).unwrap();
        assert_eq!(json["type"], "Basil");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_bonus_saturates() {
        let user = User::new("Max", u32::MAX - 1);
        assert_eq!(user.with_bonus(5).points, u32::MAX);
    }

    #[test]
    fn test_rank_entry_display() {
        let entry = RankEntry {
            rank: 1,
            name: "Aldo".into(),
            points: 220,
        };
        assert_eq!(entry.to_string(), "1 — Aldo (220🍃)");
    }
}
