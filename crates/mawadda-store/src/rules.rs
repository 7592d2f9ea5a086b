//! Stat-update rules, shared by both backends. Pure functions over
//! `UserStats` taking `now` explicitly so the time windows are testable.

use chrono::{DateTime, Duration, Utc};

use mawadda_types::models::UserStats;

/// Hearts granted for viewing a random message.
pub const VIEW_REWARD_HEARTS: i64 = 3;
/// Hearts granted for saving a favorite.
pub const FAVORITE_REWARD_HEARTS: i64 = 5;
/// Minimum gap between two heart grants.
pub const HEART_COOLDOWN_HOURS: i64 = 2;

/// Registers a visit at `now`.
///
/// Elapsed days are the floor of the duration since the last visit, not a
/// calendar-day comparison: exactly one day continues the streak, more than
/// one resets it to 1, less than one (same day) leaves it alone. A first
/// visit starts the streak at 1. `last_visit` always moves to `now` and the
/// viewed counter always advances.
pub fn apply_visit(stats: &mut UserStats, now: DateTime<Utc>) {
    match stats.last_visit {
        Some(last) => {
            let days = (now - last).num_days();
            if days == 1 {
                stats.current_streak += 1;
            } else if days > 1 {
                stats.current_streak = 1;
            }
        }
        None => stats.current_streak = 1,
    }
    stats.last_visit = Some(now);
    stats.messages_viewed += 1;
}

/// Grants `amount` hearts at `now` unless a grant already happened within
/// the cooldown window. Returns whether the grant was applied.
pub fn apply_heart_grant(stats: &mut UserStats, amount: i64, now: DateTime<Utc>) -> bool {
    if let Some(last) = stats.last_heart_increment {
        if now - last < Duration::hours(HEART_COOLDOWN_HOURS) {
            return false;
        }
    }
    stats.total_hearts += amount;
    stats.last_heart_increment = Some(now);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn at(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, hour, 0, 0).unwrap()
    }

    fn stats() -> UserStats {
        UserStats::fresh(Uuid::new_v4())
    }

    #[test]
    fn first_visit_starts_streak_at_one() {
        let mut s = stats();
        apply_visit(&mut s, at(9));
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.last_visit, Some(at(9)));
        assert_eq!(s.messages_viewed, 1);
    }

    #[test]
    fn same_day_visit_leaves_streak_unchanged() {
        let mut s = stats();
        apply_visit(&mut s, at(9));
        apply_visit(&mut s, at(15));
        assert_eq!(s.current_streak, 1);
        assert_eq!(s.last_visit, Some(at(15)));
        assert_eq!(s.messages_viewed, 2);
    }

    #[test]
    fn next_day_visit_increments_streak() {
        let mut s = stats();
        s.current_streak = 4;
        s.last_visit = Some(at(9));
        apply_visit(&mut s, at(9) + Duration::days(1));
        assert_eq!(s.current_streak, 5);
    }

    #[test]
    fn gap_resets_streak_to_one() {
        let mut s = stats();
        s.current_streak = 9;
        s.last_visit = Some(at(9));
        apply_visit(&mut s, at(9) + Duration::days(3));
        assert_eq!(s.current_streak, 1);
    }

    #[test]
    fn twenty_three_hours_is_still_the_same_day() {
        // Floor arithmetic: 23h elapsed floors to 0 days.
        let mut s = stats();
        s.current_streak = 2;
        s.last_visit = Some(at(0));
        apply_visit(&mut s, at(23));
        assert_eq!(s.current_streak, 2);
    }

    #[test]
    fn heart_grant_applies_outside_cooldown() {
        let mut s = stats();
        assert!(apply_heart_grant(&mut s, 3, at(9)));
        assert_eq!(s.total_hearts, 3);
        assert_eq!(s.last_heart_increment, Some(at(9)));
    }

    #[test]
    fn second_grant_within_two_hours_is_a_noop() {
        let mut s = stats();
        assert!(apply_heart_grant(&mut s, 3, at(9)));
        assert!(!apply_heart_grant(&mut s, 5, at(10)));
        assert_eq!(s.total_hearts, 3);
        // The cooldown anchor must not move on a rejected grant.
        assert_eq!(s.last_heart_increment, Some(at(9)));
    }

    #[test]
    fn grant_exactly_at_two_hours_applies() {
        let mut s = stats();
        assert!(apply_heart_grant(&mut s, 3, at(9)));
        assert!(apply_heart_grant(&mut s, 5, at(11)));
        assert_eq!(s.total_hearts, 8);
        assert_eq!(s.last_heart_increment, Some(at(11)));
    }

    #[test]
    fn hearts_never_decrease() {
        let mut s = stats();
        let mut prev = s.total_hearts;
        for hour in [0, 1, 3, 6, 7, 12] {
            apply_heart_grant(&mut s, 3, at(hour));
            assert!(s.total_hearts >= prev);
            prev = s.total_hearts;
        }
    }
}
