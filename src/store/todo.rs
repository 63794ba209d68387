//! The local task record.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::api::RemoteTodo;

/// A task as held and displayed locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub user_id: Option<u64>,
    pub title: String,
    pub completed: bool,
    /// Local-only; the remote does not track creation time.
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn from_remote(remote: RemoteTodo, created_at: DateTime<Utc>) -> Self {
        Self {
            id: remote.id,
            user_id: remote.user_id,
            title: remote.title,
            completed: remote.completed,
            created_at,
        }
    }
}

/// A creation date uniformly drawn from `[now - max_age_ms, now]`, clamped to
/// the earliest representable instant.
pub fn synthetic_created_at<R: Rng>(
    now: DateTime<Utc>,
    max_age_ms: u64,
    rng: &mut R,
) -> DateTime<Utc> {
    if max_age_ms == 0 {
        return now;
    }
    let age = rng.gen_range(0..max_age_ms);
    i64::try_from(age)
        .ok()
        .and_then(Duration::try_milliseconds)
        .and_then(|age| now.checked_sub_signed(age))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthetic_dates_stay_in_window() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let created = synthetic_created_at(now, 10_000_000_000, &mut rng);
            assert!(created <= now);
            assert!(created > now - Duration::milliseconds(10_000_000_000));
        }
    }

    #[test]
    fn test_zero_window_is_now() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(synthetic_created_at(now, 0, &mut rng), now);
    }

    #[test]
    fn test_huge_window_clamps_instead_of_overflowing() {
        let now = Utc::now();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let created = synthetic_created_at(now, u64::MAX, &mut rng);
            assert!(created <= now);
            assert!(created >= DateTime::<Utc>::MIN_UTC);
        }
    }

    #[test]
    fn test_from_remote_keeps_fields() {
        let now = Utc::now();
        let todo = Todo::from_remote(
            RemoteTodo {
                user_id: Some(2),
                id: 21,
                title: "suscipit repellat esse".into(),
                completed: true,
            },
            now,
        );
        assert_eq!(todo.id, 21);
        assert_eq!(todo.user_id, Some(2));
        assert!(todo.completed);
        assert_eq!(todo.created_at, now);
    }
}
