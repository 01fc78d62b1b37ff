use crate::types::{RankEntry, User};

/// Sample players shown around the current user.
pub const SAMPLE_ROSTER: [(&str, u32); 9] = [
    ("Aldo", 220),
    ("Bea", 185),
    ("Ciri", 170),
    ("Dana", 120),
    ("Eli", 110),
    ("Fay", 100),
    ("Gio", 90),
    ("Hana", 80),
    ("Ivy", 70),
];

// The current user is slotted in after Ciri before sorting.
const USER_SLOT: usize = 3;

pub fn rank(mut players: Vec<(String, u32)>) -> Vec<RankEntry> {
    // Stable, so ties keep roster order.
    players.sort_by(|a, b| b.1.cmp(&a.1));
    players
        .into_iter()
        .enumerate()
        .map(|(i, (name, points))| RankEntry {
            rank: i + 1,
            name,
            points,
        })
        .collect()
}

pub fn build_leaderboard(user: &User) -> Vec<RankEntry> {
    let mut players: Vec<(String, u32)> = SAMPLE_ROSTER
        .iter()
        .map(|&(name, points)| (name.to_string(), points))
        .collect();
    players.insert(USER_SLOT, (user.name.clone(), user.points));
    rank(players)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(entries: &[RankEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.points).collect()
    }

    #[test]
    fn test_rank_sorts_descending_for_any_user_score() {
        for x in [0, 100, 185, 200, 500] {
            let ranked = rank(vec![
                ("A".into(), 220),
                ("B".into(), 185),
                ("Me".into(), x),
            ]);
            let pts = points(&ranked);
            assert!(pts.windows(2).all(|w| w[0] >= w[1]), "{:?}", pts);
            assert_eq!(ranked.iter().map(|e| e.rank).collect::<Vec<_>>(), [1, 2, 3]);
        }
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let ranked = rank(vec![("B".into(), 185), ("Me".into(), 185)]);
        assert_eq!(ranked[0].name, "B");
        assert_eq!(ranked[1].name, "Me");
    }

    #[test]
    fn test_guest_lands_last() {
        let board = build_leaderboard(&User::default());
        assert_eq!(board.len(), 10);
        assert_eq!(board[0].to_string(), "1 — Aldo (220🍃)");
        assert_eq!(board[9].to_string(), "10 — Guest (0🍃)");
    }

    #[test]
    fn test_new_login_ranks_fourth() {
        let board = build_leaderboard(&User::new("Janedoe", 150));
        assert_eq!(board[3].name, "Janedoe");
        assert_eq!(board[3].rank, 4);
    }

    #[test]
    fn test_high_scorer_takes_first() {
        let board = build_leaderboard(&User::new("Top", 300));
        assert_eq!(board[0].name, "Top");
        assert_eq!(board[1].name, "Aldo");
    }
}
