use rand::seq::SliceRandom;

use super::Latency;

/// Affirmation pool the daily pick is drawn from.
const AFFIRMATIONS: [&str; 5] = [
    "You are capable of amazing things.",
    "Today is full of possibilities.",
    "You have the power to create change.",
    "Your potential is limitless.",
    "You are enough just as you are.",
];

/// Reflection prompts, returned verbatim on every call. A stand-in for a
/// future generation service; deliberately not shuffled.
const REFLECTION_PROMPTS: [&str; 5] = [
    "What made you smile today?",
    "What was challenging about your day?",
    "Did you learn something new today?",
    "What are you grateful for today?",
    "How did you take care of yourself today?",
];

/// Stateless generator serving affirmations and reflection prompts from fixed
/// pools.
pub struct ContentGenerator {
    latency: Latency,
}

impl ContentGenerator {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }

    /// A uniformly random pick from the affirmation pool.
    pub async fn daily_affirmation(&self) -> &'static str {
        self.latency.simulate().await;
        AFFIRMATIONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(AFFIRMATIONS[0])
    }

    /// The full prompt pool, fixed order.
    pub async fn reflection_prompts(&self) -> &'static [&'static str] {
        self.latency.simulate().await;
        &REFLECTION_PROMPTS
    }
}
