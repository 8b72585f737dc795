//! Static, non-personalised training advice.

use crate::domain::model::{Reps, SetsReps};

pub const DEFAULT_SETS_REPS: SetsReps = SetsReps {
    sets: 3,
    reps: Reps::Count(10),
};

pub const DEFAULT_TIP: &str = "Stay hydrated and maintain proper form.";

const SETS_REPS: &[(&str, SetsReps)] = &[
    (
        "beginner",
        SetsReps {
            sets: 3,
            reps: Reps::Range("10-12"),
        },
    ),
    (
        "intermediate",
        SetsReps {
            sets: 4,
            reps: Reps::Range("8-10"),
        },
    ),
    (
        "expert",
        SetsReps {
            sets: 5,
            reps: Reps::Range("6-8"),
        },
    ),
];

const TIPS: &[(&str, &str)] = &[
    (
        "strength",
        "Focus on form over weight. Lift heavier but with control.",
    ),
    (
        "strongman",
        "Focus on lifting heavy whilst also maintaining control of the weight to reduce risk of injury.",
    ),
    (
        "powerlifting",
        "Hold stretches for at least 30 seconds, don't rush.",
    ),
    (
        "chest",
        "Ensure proper range of motion and avoid bouncing weights off the chest.",
    ),
    (
        "lats",
        "Engage the lats throughout and maintain a neutral spine.",
    ),
];

/// Exact, case-sensitive lookup; anything else gets [`DEFAULT_SETS_REPS`],
/// whose reps is a bare count rather than a range.
pub fn recommended_sets_reps(difficulty: &str) -> SetsReps {
    SETS_REPS
        .iter()
        .find(|(key, _)| *key == difficulty)
        .map(|(_, advice)| *advice)
        .unwrap_or(DEFAULT_SETS_REPS)
}

pub fn exercise_tip(exercise_type: &str) -> &'static str {
    TIPS.iter()
        .find(|(key, _)| *key == exercise_type)
        .map(|(_, tip)| *tip)
        .unwrap_or(DEFAULT_TIP)
}
