use crate::core::advisory::{exercise_tip, recommended_sets_reps};
use crate::domain::model::{DayPlan, ExerciseRecord, SplitPlan, WorkoutPlan};
use std::fmt::Write;

pub const NO_EXERCISES_FOUND: &str = "No exercises found for the selected criteria.";

fn write_exercise(out: &mut String, indent: &str, exercise: &ExerciseRecord) {
    let _ = writeln!(out, "{}Name: {}", indent, exercise.name);
    let _ = writeln!(out, "{}Type: {}", indent, exercise.exercise_type);
    let _ = writeln!(out, "{}Muscle: {}", indent, exercise.muscle);
    let _ = writeln!(out, "{}Difficulty: {}", indent, exercise.difficulty);
    let _ = writeln!(out, "{}Instructions: {}", indent, exercise.instructions.trim());
}

fn write_workout(out: &mut String, indent: &str, plan: &WorkoutPlan) {
    let nested = format!("{}    ", indent);
    for (muscle, exercises) in plan.iter() {
        let _ = writeln!(out, "{}{}", indent, muscle);
        if exercises.is_empty() {
            let _ = writeln!(out, "{}(no exercises)", nested);
        }
        for exercise in exercises {
            write_exercise(out, &nested, exercise);
            out.push('\n');
        }
    }
}

/// Exercise list followed by sets/reps for `difficulty` and the tip for
/// `exercise_type`; advice is only shown when something matched.
pub fn render_exercises(exercises: &[ExerciseRecord], exercise_type: &str, difficulty: &str) -> String {
    if exercises.is_empty() {
        return format!("{}\n", NO_EXERCISES_FOUND);
    }

    let mut out = String::new();
    for exercise in exercises {
        write_exercise(&mut out, "", exercise);
        out.push('\n');
    }

    let advice = recommended_sets_reps(difficulty);
    let _ = writeln!(out, "Recommended Sets: {}", advice.sets);
    let _ = writeln!(out, "Recommended Reps: {}", advice.reps);
    let _ = writeln!(out, "Exercise Tips: {}", exercise_tip(exercise_type));
    out
}

pub fn render_workout(plan: &WorkoutPlan) -> String {
    let mut out = String::new();
    write_workout(&mut out, "", plan);
    out
}

pub fn render_split(plan: &SplitPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} Workout Plan", capitalize(&plan.name));
    for (label, day) in plan.days() {
        match day {
            DayPlan::Rest => {
                let _ = writeln!(out, "\n{}: {}", label, crate::domain::model::REST_DAY);
            }
            DayPlan::Workout(workout) => {
                let muscles: Vec<&str> = workout.muscles().collect();
                let _ = writeln!(out, "\n{}: {}", label, muscles.join(", "));
                write_workout(&mut out, "  ", workout);
            }
        }
    }
    out
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
