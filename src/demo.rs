//! Demo fixtures matching the mock rows the frontend was developed against.

use chrono::{Duration, Utc};

use crate::models::{
    Goal, GoalCategory, JournalEntry, Language, Mood, UserSettings, VoiceType,
};
use crate::AppState;

/// Seeds the stores with the `user-1` demo records. Ids are fixed so the
/// frontend's deep links keep working across restarts.
pub async fn seed_demo_data(state: &AppState) {
    let now = Utc::now();

    state
        .entries
        .seed(vec![
            JournalEntry {
                id: "entry-1".to_string(),
                user_id: "user-1".to_string(),
                date: now - Duration::days(1),
                content: "Today I felt a sense of accomplishment after completing my project. \
                          The weather was nice and I took a walk in the park."
                    .to_string(),
                mood: Mood::Happy,
            },
            JournalEntry {
                id: "entry-2".to_string(),
                user_id: "user-1".to_string(),
                date: now - Duration::days(2),
                content: "I had a busy day with meetings. Nothing special happened, but I \
                          managed to get through my to-do list."
                    .to_string(),
                mood: Mood::Neutral,
            },
            JournalEntry {
                id: "entry-3".to_string(),
                user_id: "user-1".to_string(),
                date: now - Duration::days(3),
                content: "Feeling a bit down today. The rainy weather didn't help my mood. \
                          Hope tomorrow will be better."
                    .to_string(),
                mood: Mood::Sad,
            },
        ])
        .await;

    state
        .goals
        .seed(vec![
            Goal {
                id: "goal-1".to_string(),
                user_id: "user-1".to_string(),
                title: "Meditate for 10 minutes".to_string(),
                description: Some("Take time each day for mindfulness".to_string()),
                completed: false,
                due_date: None,
                category: GoalCategory::Health,
                created_at: now,
            },
            Goal {
                id: "goal-2".to_string(),
                user_id: "user-1".to_string(),
                title: "Read 20 pages".to_string(),
                description: Some("Continue reading my current book".to_string()),
                completed: true,
                due_date: None,
                category: GoalCategory::Personal,
                created_at: now - Duration::days(1),
            },
            Goal {
                id: "goal-3".to_string(),
                user_id: "user-1".to_string(),
                title: "Finish the hooks tutorial".to_string(),
                description: Some("Complete the online course module".to_string()),
                completed: false,
                due_date: Some(now + Duration::weeks(1)),
                category: GoalCategory::Learning,
                created_at: now - Duration::days(2),
            },
        ])
        .await;

    state
        .settings
        .seed(vec![UserSettings {
            user_id: "user-1".to_string(),
            voice_type: VoiceType::Female,
            child_mode: false,
            notifications_enabled: true,
            language: Language::En,
            auto_theme_change: true,
        }])
        .await;
}
