// ==================== USER SERVICE ====================
// Cada operação roda sob um único timeout, mesmo quando toca o banco mais de uma vez.
// Validação acontece antes de qualquer acesso ao banco.

use mongodb::bson::oid::ObjectId;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

use crate::database::UserStore;
use crate::models::{InsertResult, UserRequest, UserResponse};
use crate::utils::AppError;

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn UserStore>,
    timeout: Duration,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, timeout: Duration) -> Self {
        Self { store, timeout }
    }

    /// Um único timeout cobre toda a operação, mesmo com mais de uma chamada ao banco
    async fn bounded<T, E, F>(&self, operation: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<AppError>,
    {
        match tokio::time::timeout(self.timeout, operation).await {
            Ok(result) => result.map_err(Into::into),
            Err(_) => Err(AppError::Timeout(self.timeout)),
        }
    }

    pub async fn create_user(&self, request: UserRequest) -> Result<InsertResult, AppError> {
        validate(&request)?;

        let user = request.into_new_user();
        let id = self.bounded(self.store.insert_one(&user)).await?;

        log::info!("✅ User created: {}", id);
        Ok(InsertResult::from(id))
    }

    pub async fn get_user(&self, id: ObjectId) -> Result<UserResponse, AppError> {
        self.bounded(self.store.find_by_id(id))
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(id.to_hex()))
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.bounded(self.store.find_all()).await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn update_user(
        &self,
        id: ObjectId,
        request: UserRequest,
    ) -> Result<UserResponse, AppError> {
        validate(&request)?;

        let changes = request.into_changes();
        let updated = self
            .bounded(async {
                let matched = self.store.update_by_id(id, &changes).await?;
                if matched != 1 {
                    return Err(AppError::NotFound(id.to_hex()));
                }
                let user = self
                    .store
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::NotFound(id.to_hex()))?;
                Ok::<_, AppError>(user)
            })
            .await?;

        log::info!("✅ User updated: {}", id);
        Ok(UserResponse::from(updated))
    }

    pub async fn delete_user(&self, id: ObjectId) -> Result<(), AppError> {
        let deleted = self.bounded(self.store.delete_by_id(id)).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(id.to_hex()));
        }

        log::info!("🗑️  User deleted: {}", id);
        Ok(())
    }

    /// Liveness do storage, usado pelo health check
    pub async fn ping(&self) -> Result<(), AppError> {
        self.bounded(self.store.ping()).await
    }
}

fn validate(request: &UserRequest) -> Result<(), AppError> {
    request
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}

/// Id de path em hex (24 chars) para ObjectId
pub fn parse_user_id(raw: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(raw).map_err(|_| AppError::InvalidId(raw.to_string()))
}
