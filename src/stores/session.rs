use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::Latency;
use crate::error::AppError;
use crate::models::User;
use crate::storage::KvStorage;

/// Identity stand-in: fabricates a user record from an email with no
/// credential verification and keeps it durable across restarts.
///
/// The persisted identity is read exactly once, at construction; `current` is
/// a memory read from then on.
pub struct SessionStore {
    current: RwLock<Option<User>>,
    storage: Arc<KvStorage>,
    latency: Latency,
}

impl SessionStore {
    pub fn new(storage: Arc<KvStorage>, latency: Latency) -> Self {
        let current = storage.user();
        Self {
            current: RwLock::new(current),
            storage,
            latency,
        }
    }

    /// Ignores the password; any non-empty email succeeds. The display name is
    /// the email's local part.
    pub async fn login(&self, email: &str, _password: &str) -> Result<User, AppError> {
        self.latency.simulate().await;
        let name = email.split('@').next().unwrap_or("").to_string();
        self.establish(email, name).await
    }

    /// Same as login but with a caller-supplied display name.
    pub async fn register(
        &self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<User, AppError> {
        self.latency.simulate().await;
        self.establish(email, name.to_string()).await
    }

    /// Clears the session in memory and in durable storage.
    pub async fn logout(&self) -> Result<(), AppError> {
        self.latency.simulate().await;
        *self.current.write().await = None;
        self.storage.clear_user()?;
        Ok(())
    }

    /// The in-memory identity, absent when nobody is logged in.
    pub async fn current(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    async fn establish(&self, email: &str, name: String) -> Result<User, AppError> {
        if email.trim().is_empty() {
            return Err(AppError::BadRequest("email must not be empty".to_string()));
        }

        let user = User {
            id: format!("user-{}", Uuid::new_v4()),
            email: email.to_string(),
            name,
        };
        self.storage.set_user(&user)?;
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage(dir: &tempfile::TempDir) -> Arc<KvStorage> {
        Arc::new(KvStorage::load(dir.path().join("storage.json")).unwrap())
    }

    #[tokio::test]
    async fn test_login_derives_name_from_email_local_part() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(storage(&dir), Latency::none());

        let user = store.login("ada@example.com", "ignored").await.unwrap();

        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@example.com");
        assert!(user.id.starts_with("user-"));
        assert_eq!(store.current().await, Some(user));
    }

    #[tokio::test]
    async fn test_register_uses_supplied_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(storage(&dir), Latency::none());

        let user = store
            .register("ada@example.com", "ignored", "Ada Lovelace")
            .await
            .unwrap();

        assert_eq!(user.name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_empty_email_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(storage(&dir), Latency::none());

        assert!(store.login("", "pw").await.is_err());
        assert!(store.login("   ", "pw").await.is_err());
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn test_identity_survives_restart_until_logout() {
        let dir = tempfile::tempdir().unwrap();
        let kv = storage(&dir);

        let store = SessionStore::new(kv.clone(), Latency::none());
        let user = store.login("sam@example.com", "pw").await.unwrap();

        // A store constructed over the same storage sees the persisted identity.
        let restarted = SessionStore::new(kv.clone(), Latency::none());
        assert_eq!(restarted.current().await, Some(user));

        restarted.logout().await.unwrap();
        let after_logout = SessionStore::new(kv, Latency::none());
        assert!(after_logout.current().await.is_none());
    }
}
