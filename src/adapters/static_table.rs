use crate::domain::model::{ExerciseQuery, ExerciseRecord};
use crate::domain::ports::ExerciseSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

struct TableEntry {
    name: &'static str,
    exercise_type: &'static str,
    equipment: &'static str,
    difficulty: &'static str,
    instructions: &'static str,
}

const SHOULDER_EXERCISES: &[TableEntry] = &[
    TableEntry {
        name: "Overhead Press",
        exercise_type: "Strength",
        equipment: "Dumbbells",
        difficulty: "Expert",
        instructions: "There are multiple variations of this exercise where you can either use a shoulder press machine, where you press the weight upwards. This is best for intermediate lifters. Then there is the overhead press with either dumbells or a bar which if you are pressing a lot of weight can easily lead to bad form or injury which is why this exercise is classed in expert. You do this exercise by sitting up right on a bench and then pressing the dumbbells/Barbell above your head.",
    },
    TableEntry {
        name: "Lateral Raise",
        exercise_type: "Strength",
        equipment: "Dumbbells",
        difficulty: "Intermediate",
        instructions: "The lateral raise can either be done whilst standing or sitting up right on a bench. Grab some reasonably light dumbells and lift the dumbells laterally, activating your posterior deltoids and upper back muscles.  ",
    },
    TableEntry {
        name: "Cable Lateral Raise",
        exercise_type: "Strength",
        equipment: "Cable Machine",
        difficulty: "Beginner",
        instructions: "Using an appropriate one handed handle, attach it to the cable machine and drop the handel to the lowest point. After that use reasonably light weight and lift it laterally. You should be standing side on to the cable machine when lifting.",
    },
    TableEntry {
        name: "Front Raise",
        exercise_type: "Powerlifting",
        equipment: "Dumbbells",
        difficulty: "Beginner",
        instructions: "The front raise exercise is used in weight training. It primarily works the anterior deltoid and the clavicular head of the pectoralis major through the use of arm abduction and flexion through the frontal plane. Grab two reasonably light dumbbells and hold them with your palms facind down. Holding them at your hips lift them vertically up without bending your arms.",
    },
    TableEntry {
        name: "Arnold Press",
        exercise_type: "Powerlifting",
        equipment: "Dumbbells",
        difficulty: "Intermediate",
        instructions: "The Arnold Press is a variation of the military press, but one that more effectively hits all three heads (the front, lateral, and rear) of your deltoids. Grab two dumbbells and whilst standing lift them above your shoudlers. After that press up the way, similar to an overhead press.",
    },
    TableEntry {
        name: "Circus Dumbbell Press",
        exercise_type: "Strongman",
        equipment: "Dumbbell",
        difficulty: "Expert",
        instructions: "First is the clean to the shoulder. Grab the dumbbell with either one or both hands (if you need the extra stability). Keep your feet shoulder-width apart or slightly further out for more stability. From here, bend your knees and pull the dumbbell to your shoulder, using the momentum from your hips. Take your other hand off the dumbbell and use it as a counter weight.Once you have yourself steady, take a breath to brace your core, then press the dumbbell overhead and lock out your elbow. As the weight of the dumbbell goes up, you will need to adopt a push press or split jerk stance. I would recommend a push press unless you have a solid Olympic lifting background.",
    },
    TableEntry {
        name: "Viking Press",
        exercise_type: "Strongman",
        equipment: "Barbell/Machine",
        difficulty: "Intermediate",
        instructions: "The viking press is usually a rep-based event in a given time frame, typically 60 seconds. It's a neutral grip press, meaning your hands face inward. It's hard to find a gym with equipment specific to the viking press, even in strongman gyms. But fear not! You can easily mimic this movement with a power rack, two barbells and safety bars.At your power rack, set one side of the safety pins at shoulder height and the other side at the next lowest setting. On the lower setting, sandwich the safety pin between two 5kg (10lb) plates with collars on each end. There will be a space between the two plates where the barbell sits on the safety bar. On the higher side, stand outside the power rack and load the plates for your desired weight.From here, use the ends of the two barbells as handles. You can either strict press or push press the weight up. A \u{201c}good lift\u{201d} is given once the body is straight, elbows locked and head through.",
    },
    TableEntry {
        name: "Barbell Military Press",
        exercise_type: "Powerlifting",
        equipment: "Barbell",
        difficulty: "Expert",
        instructions: " Adjust the barbell to just below shoulder height then load the desired weight onto the bar. Assume a shoulder width stance and place your hands at (or just outside of) shoulder width with a pronated grip on the bar. Step underneath the bar and unrack it while keeping the spine in a neutral position. Take two steps back, inhale, brace, tuck the chin, then press the bar to lockout overhead. Exhale once the bar gets to lockout and reverse the movement slowly while controlling the bar back to your chest. Repeat for the desired number of repetitions",
    },
];

/// Offline exercise table, filtered in memory instead of queried remotely.
/// Results keep the table's declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSource {
    name: String,
    records: Vec<ExerciseRecord>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>, records: Vec<ExerciseRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }

    /// The built-in shoulder table.
    pub fn shoulders() -> Self {
        let records = SHOULDER_EXERCISES
            .iter()
            .map(|entry| ExerciseRecord {
                name: entry.name.to_string(),
                exercise_type: entry.exercise_type.to_string(),
                muscle: "Shoulders".to_string(),
                equipment: entry.equipment.to_string(),
                difficulty: entry.difficulty.to_string(),
                instructions: entry.instructions.to_string(),
            })
            .collect();
        Self::new("shoulders", records)
    }

    /// Loads a JSON array of exercise records.
    pub fn from_json_file<P: AsRef<Path>>(name: impl Into<String>, path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        let records: Vec<ExerciseRecord> = serde_json::from_str(&content)?;
        let source = Self::new(name, records);
        tracing::debug!(
            "Loaded offline table '{}' with {} exercises from {}",
            source.name,
            source.records.len(),
            path.as_ref().display()
        );
        Ok(source)
    }

    pub fn filter(&self, query: &ExerciseQuery) -> Vec<ExerciseRecord> {
        self.records
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect()
    }

    pub fn records(&self) -> &[ExerciseRecord] {
        &self.records
    }
}

#[async_trait]
impl ExerciseSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>> {
        let matches = self.filter(query);
        tracing::debug!(
            "Offline table '{}' matched {} of {} exercises",
            self.name,
            matches.len(),
            self.records.len()
        );
        Ok(matches)
    }
}
