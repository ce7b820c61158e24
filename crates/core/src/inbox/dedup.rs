//! Notification identity and duplicate suppression.
//!
//! Identity is `(profile, date, kind, discriminator)`. Profile and date are
//! fixed for a generation run, so within a run the identity reduces to a
//! stable string key stored in `notifications.dedup_key`.

use std::collections::HashSet;

use crate::inbox::kinds::NotificationKind;
use crate::inbox::Candidate;
use crate::types::DbId;

/// Render the per-day identity key: `kind` or `kind:discriminator`.
pub fn dedup_key(kind: NotificationKind, discriminator: Option<DbId>) -> String {
    match discriminator {
        Some(id) => format!("{}:{id}", kind.as_str()),
        None => kind.as_str().to_string(),
    }
}

/// Drop candidates whose key is already in `existing`, and any repeat of a
/// key within `candidates` itself.
///
/// Returns the survivors (original order kept) and how many were dropped.
pub fn drop_existing(
    candidates: Vec<Candidate>,
    existing: &HashSet<String>,
) -> (Vec<Candidate>, usize) {
    let before = candidates.len();
    let mut seen = HashSet::with_capacity(before);
    let kept: Vec<Candidate> = candidates
        .into_iter()
        .filter(|c| {
            let key = c.dedup_key();
            !existing.contains(&key) && seen.insert(key)
        })
        .collect();
    let dropped = before - kept.len();
    (kept, dropped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(kind: NotificationKind, discriminator: Option<DbId>) -> Candidate {
        Candidate::new(kind, discriminator, "t".into(), "b".into())
    }

    #[test]
    fn keys_include_discriminator_only_when_present() {
        assert_eq!(dedup_key(NotificationKind::MorningCheckin, None), "checkin_morning");
        assert_eq!(dedup_key(NotificationKind::Workout, Some(12)), "workout:12");
    }

    #[test]
    fn existing_keys_are_dropped() {
        let existing: HashSet<String> = ["workout:1".to_string(), "low_sleep".to_string()].into();
        let (kept, dropped) = drop_existing(
            vec![
                candidate(NotificationKind::Workout, Some(1)),
                candidate(NotificationKind::Workout, Some(2)),
                candidate(NotificationKind::LowSleep, None),
            ],
            &existing,
        );
        assert_eq!(dropped, 2);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].discriminator, Some(2));
    }

    #[test]
    fn repeats_within_a_batch_are_dropped() {
        let (kept, dropped) = drop_existing(
            vec![
                candidate(NotificationKind::Vitamins, Some(3)),
                candidate(NotificationKind::Vitamins, Some(3)),
            ],
            &HashSet::new(),
        );
        assert_eq!((kept.len(), dropped), (1, 1));
    }
}
