use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use super::{StoreError, UserStore};
use crate::models::{User, UserChanges};

/// In-memory `UserStore` for tests. Keeps insertion order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<Vec<User>>>,
    delay: Option<Duration>,
    failing: Arc<AtomicBool>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation sleeps first, to exercise timeouts
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    /// Makes every operation fail like a lost connection
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    async fn enter(&self) -> Result<(), StoreError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.failing.load(Ordering::SeqCst) {
            let closed =
                std::io::Error::new(std::io::ErrorKind::ConnectionAborted, "connection closed");
            return Err(StoreError::from(mongodb::error::Error::from(closed)));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert_one(&self, user: &User) -> Result<ObjectId, StoreError> {
        self.enter().await?;
        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        self.users.write().await.push(stored);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        self.enter().await?;
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == Some(id)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        self.enter().await?;
        Ok(self.users.read().await.clone())
    }

    async fn update_by_id(&self, id: ObjectId, changes: &UserChanges) -> Result<u64, StoreError> {
        self.enter().await?;
        let mut users = self.users.write().await;
        match users.iter_mut().find(|u| u.id == Some(id)) {
            Some(user) => {
                user.name = changes.name.clone();
                user.avatar_url = changes.avatar_url.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StoreError> {
        self.enter().await?;
        let mut users = self.users.write().await;
        let before = users.len();
        users.retain(|u| u.id != Some(id));
        Ok((before - users.len()) as u64)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.enter().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str) -> User {
        User {
            id: None,
            name: name.to_string(),
            avatar_url: None,
        }
    }

    #[tokio::test]
    async fn test_insert_mints_distinct_ids_and_keeps_order() {
        let store = InMemoryUserStore::new();

        let first = store.insert_one(&user("Ada")).await.unwrap();
        let second = store.insert_one(&user("Grace")).await.unwrap();
        assert_ne!(first, second);

        let all = store.find_all().await.unwrap();
        let names: Vec<_> = all.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_report_counts() {
        let store = InMemoryUserStore::new();
        let id = store.insert_one(&user("Ada")).await.unwrap();

        let changes = UserChanges { name: "Ada L.".into(), avatar_url: None };
        assert_eq!(store.update_by_id(id, &changes).await.unwrap(), 1);
        assert_eq!(store.update_by_id(ObjectId::new(), &changes).await.unwrap(), 0);

        assert_eq!(store.delete_by_id(id).await.unwrap(), 1);
        assert_eq!(store.delete_by_id(id).await.unwrap(), 0);
        assert!(store.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failing_store_errors() {
        let store = InMemoryUserStore::new();
        store.set_failing(true);
        assert!(matches!(store.find_all().await, Err(StoreError::Mongo(_))));
        assert!(matches!(store.ping().await, Err(StoreError::Mongo(_))));
    }
}
