pub mod entry;
pub mod entry_input;
pub mod goal;
pub mod goal_input;
pub mod settings;
pub mod settings_input;
pub mod user;
pub mod user_input;

pub use entry::{JournalEntry, Mood};
pub use entry_input::{CreateEntryInput, MutationResponse, UpdateEntryInput};
pub use goal::{Goal, GoalCategory};
pub use goal_input::{CreateGoalInput, UpdateGoalInput};
pub use settings::{Language, UserSettings, VoiceType};
pub use settings_input::UpdateSettingsInput;
pub use user::{ThemeMode, User};
pub use user_input::{LoginInput, RegisterInput, ThemeInput, ThemeResponse};
