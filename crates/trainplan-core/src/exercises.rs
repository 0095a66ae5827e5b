//! Reference exercise library, grouped by category.

use crate::{Exercise, ExerciseCategory};

/// Column headers above each category's exercises
pub static EXERCISE_HEADERS: [&str; 5] = ["Exercise", "Sets", "Reps/Duration", "Rest", "Notes"];

/// Categories in the order they appear on the library sheet
pub static EXERCISE_LIBRARY: [ExerciseCategory; 4] = [
    ExerciseCategory {
        name: "Strength - Upper Body",
        exercises: &[
            Exercise::new("Push-ups", "3", "8-12", "60s", "Modify on knees if needed"),
            Exercise::new("Pull-ups/Lat Pulldowns", "3", "6-10", "90s", "Use assistance if needed"),
            Exercise::new("Overhead Press", "3", "8-10", "90s", "Dumbbells or barbell"),
            Exercise::new("Rows", "3", "10-12", "60s", "Cable, dumbbell, or barbell"),
            Exercise::new("Chest Press", "3", "8-12", "90s", "Bench press or dumbbells"),
        ],
    },
    ExerciseCategory {
        name: "Strength - Lower Body",
        exercises: &[
            Exercise::new("Squats", "3", "12-15", "90s", "Bodyweight or weighted"),
            Exercise::new("Deadlifts", "3", "8-10", "120s", "Focus on form"),
            Exercise::new("Lunges", "3", "10 each leg", "60s", "Forward or reverse"),
            Exercise::new("Leg Press", "3", "12-15", "90s", "Machine exercise"),
            Exercise::new("Calf Raises", "3", "15-20", "45s", "Single or double leg"),
        ],
    },
    ExerciseCategory {
        name: "Core & Stability",
        exercises: &[
            Exercise::new("Plank", "3", "30-60s", "60s", "Hold position"),
            Exercise::new("Dead Bug", "3", "10 each side", "45s", "Slow and controlled"),
            Exercise::new("Bird Dog", "3", "10 each side", "45s", "Hold 2-3 seconds"),
            Exercise::new("Side Plank", "2", "20-45s each", "60s", "Each side"),
            Exercise::new("Russian Twists", "3", "20", "45s", "With or without weight"),
        ],
    },
    ExerciseCategory {
        name: "Cardio Options",
        exercises: &[
            Exercise::new("Running/Jogging", "1", "20-40 min", "-", "Adjust pace to intensity"),
            Exercise::new("Cycling", "1", "25-45 min", "-", "Indoor or outdoor"),
            Exercise::new("Swimming", "1", "20-35 min", "-", "Full body cardio"),
            Exercise::new("HIIT Circuit", "4-6", "30s work/30s rest", "2 min", "High intensity"),
            Exercise::new("Walking", "1", "30-60 min", "-", "Low impact option"),
        ],
    },
];
