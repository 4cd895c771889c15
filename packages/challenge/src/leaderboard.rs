//! Leaderboard ordering.

use serde::{Deserialize, Serialize};

use crate::Badge;

/// A user's point total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// Display name.
    pub name: String,
    /// Accumulated points.
    pub points: u64,
}

/// A leaderboard row with its rank and badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// 1-based dense rank; equal points share a rank.
    pub rank: u32,
    /// Display name.
    pub name: String,
    /// Accumulated points.
    pub points: u64,
    /// Badge for the point total.
    pub badge: Badge,
}

/// Sorts entries by points (highest first), then by name, and assigns
/// dense ranks.
#[must_use]
pub fn rank_leaderboard(mut entries: Vec<LeaderboardEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));

    let mut ranked = Vec::with_capacity(entries.len());
    let mut rank = 0u32;
    let mut previous: Option<u64> = None;

    for entry in entries {
        if previous != Some(entry.points) {
            rank += 1;
            previous = Some(entry.points);
        }
        ranked.push(RankedEntry {
            rank,
            badge: Badge::for_points(entry.points),
            name: entry.name,
            points: entry.points,
        });
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, points: u64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            points,
        }
    }

    #[test]
    fn ties_share_a_rank() {
        let ranked = rank_leaderboard(vec![
            entry("carol", 120),
            entry("alice", 300),
            entry("bob", 120),
            entry("dave", 5),
        ]);

        let rows: Vec<(u32, &str)> = ranked.iter().map(|r| (r.rank, r.name.as_str())).collect();
        assert_eq!(rows, vec![(1, "alice"), (2, "bob"), (2, "carol"), (3, "dave")]);
        assert_eq!(ranked[0].badge, Badge::Sapling);
        assert_eq!(ranked[3].badge, Badge::Seedling);
    }

    #[test]
    fn empty_board() {
        assert!(rank_leaderboard(Vec::new()).is_empty());
    }
}
