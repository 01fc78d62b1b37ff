use crate::types::{Plant, User};

/// Plants "logged by the community" before anyone used this browser.
pub const COMMUNITY_BASELINE: usize = 1500;

/// Each local plant stands in for this many community plants.
pub const COMMUNITY_MULTIPLIER: usize = 10;

/// How many plants the home page previews.
pub const PREVIEW_LEN: usize = 3;

pub fn community_plants(local_count: usize) -> usize {
    local_count
        .saturating_mul(COMMUNITY_MULTIPLIER)
        .saturating_add(COMMUNITY_BASELINE)
}

pub fn preview(plants: &[Plant]) -> &[Plant] {
    &plants[..plants.len().min(PREVIEW_LEN)]
}

pub fn preview_line(plant: &Plant) -> String {
    format!("{} ({})", plant.name, plant.week)
}

pub fn points_label(user: &User) -> String {
    format!("{} 🍃", user.points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(name: &str, week: &str) -> Plant {
        Plant {
            kind: "Herb".into(),
            name: name.into(),
            week: week.into(),
            image: String::new(),
        }
    }

    #[test]
    fn test_community_plants() {
        assert_eq!(community_plants(0), 1500);
        assert_eq!(community_plants(4), 1540);
    }

    #[test]
    fn test_preview_takes_first_three() {
        let plants: Vec<Plant> = ["a", "b", "c", "d"].iter().map(|n| plant(n, "W1")).collect();
        let names: Vec<&str> = preview(&plants).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["a", "b", "c"]);
        assert!(preview(&[]).is_empty());
    }

    #[test]
    fn test_labels() {
        assert_eq!(preview_line(&plant("Fern", "Week 2")), "Fern (Week 2)");
        assert_eq!(points_label(&User::new("Ann", 155)), "155 🍃");
    }
}
