//! The fixed 4-week program.

use crate::SessionKind::{Assessment, Cardio, Flexibility, Strength};
use crate::{Session, TrainingWeek};

/// The four program weeks in order
pub static TRAINING_WEEKS: [TrainingWeek; 4] = [
    TrainingWeek {
        number: 1,
        focus: "Foundation Building",
        sessions: [
            Session::new("Monday", Strength, "45 min", "Low", "Full body compound movements"),
            Session::new("Tuesday", Cardio, "30 min", "Moderate", "Steady state running"),
            Session::rest("Wednesday", "Active recovery or complete rest"),
            Session::new("Thursday", Strength, "45 min", "Low", "Upper body focus"),
            Session::new("Friday", Cardio, "25 min", "Low", "Easy pace walk/jog"),
            Session::new("Saturday", Flexibility, "30 min", "Low", "Yoga or stretching"),
            Session::rest("Sunday", "Complete rest"),
        ],
    },
    TrainingWeek {
        number: 2,
        focus: "Strength Development",
        sessions: [
            Session::new("Monday", Strength, "50 min", "Moderate", "Progressive overload"),
            Session::new("Tuesday", Cardio, "35 min", "Moderate", "Interval training"),
            Session::rest("Wednesday", "Light stretching"),
            Session::new("Thursday", Strength, "50 min", "Moderate", "Lower body focus"),
            Session::new("Friday", Cardio, "30 min", "Moderate", "Cross-training"),
            Session::new("Saturday", Strength, "40 min", "Low", "Core and stability"),
            Session::rest("Sunday", "Complete rest"),
        ],
    },
    TrainingWeek {
        number: 3,
        focus: "Intensity Building",
        sessions: [
            Session::new("Monday", Strength, "55 min", "High", "Heavy compound lifts"),
            Session::new("Tuesday", Cardio, "40 min", "High", "HIIT training"),
            Session::rest("Wednesday", "Active recovery"),
            Session::new("Thursday", Strength, "55 min", "High", "Push/pull focus"),
            Session::new("Friday", Cardio, "35 min", "Moderate", "Steady state cardio"),
            Session::new("Saturday", Strength, "45 min", "Moderate", "Functional movements"),
            Session::rest("Sunday", "Complete rest"),
        ],
    },
    TrainingWeek {
        number: 4,
        focus: "Recovery & Assessment",
        sessions: [
            Session::new("Monday", Strength, "40 min", "Low", "Deload week - light weights"),
            Session::new("Tuesday", Cardio, "25 min", "Low", "Easy recovery run"),
            Session::rest("Wednesday", "Complete rest"),
            Session::new("Thursday", Strength, "40 min", "Low", "Movement quality focus"),
            Session::new("Friday", Cardio, "30 min", "Low", "Light activity"),
            Session::new(
                "Saturday",
                Assessment,
                "60 min",
                "Moderate",
                "Fitness testing & measurements",
            ),
            Session::rest("Sunday", "Complete rest"),
        ],
    },
];

/// Column headers above each week's sessions
pub static SESSION_HEADERS: [&str; 5] = ["Day", "Training Type", "Duration", "Intensity", "Notes"];

/// Column headers of the progress-tracking grid
pub static PROGRESS_HEADERS: [&str; 6] = [
    "Week",
    "Weight (lbs)",
    "Body Fat %",
    "Cardio Time",
    "Strength Level",
    "Notes",
];

/// Advisory notes listed at the bottom of the schedule sheet
pub static IMPORTANT_NOTES: [&str; 6] = [
    "• Always warm up for 5-10 minutes before training",
    "• Cool down and stretch after each session",
    "• Stay hydrated throughout your workouts",
    "• Listen to your body - adjust intensity if needed",
    "• Track your progress weekly",
    "• Consult a healthcare provider before starting any new exercise program",
];
