//! Status classification.
//!
//! Maps a raw candidate to its newcomer/returner flags and a validated
//! job id. Classification is a pure function of the candidate's current
//! state: the same input within one poll yields the same output, and
//! implementations retain no state between calls (entity handles are not
//! stable across frames, so memoizing by identity would alias unrelated
//! players).

use crate::jobs;
use crate::world::{Candidate, RawStatus};

/// Result of classifying one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Classification {
    pub is_newcomer: bool,
    pub is_returning: bool,
    pub job_id: u32,
}

impl Classification {
    /// Definite "could not determine" result. Returned instead of an
    /// error whenever source data is missing or invalid: an unknown
    /// player simply drops out of the filtered views, it never fails the
    /// refresh.
    pub const UNKNOWN: Self = Self {
        is_newcomer: false,
        is_returning: false,
        job_id: 0,
    };
}

/// Classification strategy the pipeline depends on.
///
/// Injected into the passes so hosts can plug in whatever detection
/// their UI state supports, and so tests can supply fixed results.
pub trait Classifier {
    fn classify(&self, candidate: &Candidate) -> Classification;
}

/// Default classifier reading the host's status badge word.
///
/// Flag positions are documented on [`RawStatus`]. The raw job id is
/// validated against the job table; out-of-range ids degrade to 0 so the
/// presentation layer falls back to its placeholder icon.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusWordClassifier;

impl Classifier for StatusWordClassifier {
    fn classify(&self, candidate: &Candidate) -> Classification {
        if candidate.raw_status.contains(RawStatus::UNREADABLE) {
            tracing::warn!(
                "[CLASSIFY] unreadable status word for entity {:?}",
                candidate.handle
            );
            return Classification::UNKNOWN;
        }

        let job_id = if jobs::is_known_job(candidate.raw_job_id) {
            candidate.raw_job_id
        } else {
            tracing::warn!(
                "[CLASSIFY] unknown job id {} on {:?}, substituting placeholder",
                candidate.raw_job_id,
                candidate.handle
            );
            0
        };

        Classification {
            is_newcomer: candidate.raw_status.contains(RawStatus::NEWCOMER),
            is_returning: candidate.raw_status.contains(RawStatus::RETURNER),
            job_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_candidate;
    use glam::Vec3;

    #[test]
    fn unreadable_status_degrades_to_unknown() {
        let candidate = make_candidate(
            7,
            "Someone",
            Vec3::ZERO,
            RawStatus(RawStatus::UNREADABLE | RawStatus::NEWCOMER),
            21,
        );
        let result = StatusWordClassifier.classify(&candidate);
        assert_eq!(result, Classification::UNKNOWN);
    }

    #[test]
    fn badge_bits_map_to_flags() {
        let candidate = make_candidate(
            7,
            "Someone",
            Vec3::ZERO,
            RawStatus(RawStatus::NEWCOMER | RawStatus::RETURNER),
            24,
        );
        let result = StatusWordClassifier.classify(&candidate);
        assert!(result.is_newcomer);
        assert!(result.is_returning);
        assert_eq!(result.job_id, 24);
    }

    #[test]
    fn out_of_range_job_substitutes_placeholder() {
        let candidate = make_candidate(7, "Someone", Vec3::ZERO, RawStatus(RawStatus::NEWCOMER), 999);
        let result = StatusWordClassifier.classify(&candidate);
        assert!(result.is_newcomer);
        assert_eq!(result.job_id, 0);
    }

    #[test]
    fn classification_is_stable_within_a_poll() {
        let candidate = make_candidate(3, "Someone", Vec3::ZERO, RawStatus(RawStatus::RETURNER), 33);
        let first = StatusWordClassifier.classify(&candidate);
        let second = StatusWordClassifier.classify(&candidate);
        assert_eq!(first, second);
    }
}
