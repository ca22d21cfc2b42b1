use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Companio API",
        version = "1.0.0",
        description = "Backend API for the Companio wellness companion",
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Auth
        crate::handlers::auth_handler::login,
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::logout,
        crate::handlers::auth_handler::get_me,

        // Journal entries
        crate::handlers::entries_handler::list_entries,
        crate::handlers::entries_handler::get_entry,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::update_entry,
        crate::handlers::entries_handler::delete_entry,

        // Goals
        crate::handlers::goals_handler::list_goals,
        crate::handlers::goals_handler::get_goal,
        crate::handlers::goals_handler::create_goal,
        crate::handlers::goals_handler::update_goal,
        crate::handlers::goals_handler::toggle_goal,
        crate::handlers::goals_handler::delete_goal,

        // Settings
        crate::handlers::settings_handler::get_settings,
        crate::handlers::settings_handler::update_settings,

        // Generated content
        crate::handlers::content_handler::get_affirmation,
        crate::handlers::content_handler::get_prompts,

        // Theme
        crate::handlers::theme_handler::get_theme,
        crate::handlers::theme_handler::set_theme,
        crate::handlers::theme_handler::toggle_theme,
    ),
    components(
        schemas(
            // Core models
            crate::models::JournalEntry,
            crate::models::Mood,
            crate::models::Goal,
            crate::models::GoalCategory,
            crate::models::UserSettings,
            crate::models::VoiceType,
            crate::models::Language,
            crate::models::User,
            crate::models::ThemeMode,

            // Input models
            crate::models::CreateEntryInput,
            crate::models::UpdateEntryInput,
            crate::models::CreateGoalInput,
            crate::models::UpdateGoalInput,
            crate::models::UpdateSettingsInput,
            crate::models::MutationResponse,
            crate::models::LoginInput,
            crate::models::RegisterInput,
            crate::models::ThemeInput,
            crate::models::ThemeResponse,

            // Content types
            crate::handlers::content_handler::AffirmationResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "auth", description = "Session identity endpoints"),
        (name = "entries", description = "Journal entry management"),
        (name = "goals", description = "Goal tracking"),
        (name = "settings", description = "Per-user settings"),
        (name = "content", description = "Affirmations and reflection prompts"),
        (name = "theme", description = "Theme preference"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "debug_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Debug-Key"))),
            )
        }
    }
}
