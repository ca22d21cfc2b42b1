use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::Latency;
use crate::models::{CreateGoalInput, Goal, UpdateGoalInput};

/// In-memory goal store. Same shape as [`EntryStore`](super::EntryStore) plus
/// the completion toggle.
pub struct GoalStore {
    goals: RwLock<Vec<Goal>>,
    latency: Latency,
}

impl GoalStore {
    pub fn new(latency: Latency) -> Self {
        Self {
            goals: RwLock::new(Vec::new()),
            latency,
        }
    }

    /// Inserts fixture records as-is, bypassing id generation and latency.
    pub async fn seed(&self, records: Vec<Goal>) {
        self.goals.write().await.extend(records);
    }

    pub async fn list_by_user(&self, user_id: &str) -> Vec<Goal> {
        self.latency.simulate().await;
        self.goals
            .read()
            .await
            .iter()
            .filter(|goal| goal.user_id == user_id)
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: &str) -> Option<Goal> {
        self.latency.simulate().await;
        self.goals
            .read()
            .await
            .iter()
            .find(|goal| goal.id == id)
            .cloned()
    }

    pub async fn add(&self, input: CreateGoalInput) -> Goal {
        self.latency.simulate().await;
        let goal = Goal {
            id: format!("goal-{}", Uuid::new_v4()),
            user_id: input.user_id,
            title: input.title,
            description: input.description,
            completed: input.completed,
            due_date: input.due_date,
            category: input.category,
            created_at: Utc::now(),
        };
        self.goals.write().await.insert(0, goal.clone());
        goal
    }

    pub async fn update(&self, id: &str, updates: UpdateGoalInput) -> Option<Goal> {
        self.latency.simulate().await;
        let mut goals = self.goals.write().await;
        let goal = goals.iter_mut().find(|goal| goal.id == id)?;

        if let Some(title) = updates.title {
            goal.title = title;
        }
        if let Some(description) = updates.description {
            goal.description = Some(description);
        }
        if let Some(completed) = updates.completed {
            goal.completed = completed;
        }
        if let Some(due_date) = updates.due_date {
            goal.due_date = Some(due_date);
        }
        if let Some(category) = updates.category {
            goal.category = category;
        }

        Some(goal.clone())
    }

    /// Reads the current completion flag and negates it. Racing togglers on
    /// the same id land last-write-wins; two in a row cancel out.
    pub async fn toggle_completion(&self, id: &str) -> Option<Goal> {
        self.latency.simulate().await;
        let mut goals = self.goals.write().await;
        let goal = goals.iter_mut().find(|goal| goal.id == id)?;
        goal.completed = !goal.completed;
        Some(goal.clone())
    }

    /// Total number of stored goals across all users.
    pub async fn count(&self) -> usize {
        self.goals.read().await.len()
    }

    pub async fn delete(&self, id: &str) -> bool {
        self.latency.simulate().await;
        let mut goals = self.goals.write().await;
        let before = goals.len();
        goals.retain(|goal| goal.id != id);
        goals.len() < before
    }
}
