use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::Collection;
use thiserror::Error;

use super::MongoDB;
use crate::models::{User, UserChanges};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("storage returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

/// Operações de persistência de usuários; uma chamada ao banco cada
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insere e devolve o id gerado pelo storage
    async fn insert_one(&self, user: &User) -> Result<ObjectId, StoreError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError>;

    /// Todos os documentos, na ordem natural da collection
    async fn find_all(&self) -> Result<Vec<User>, StoreError>;

    /// `$set` de name/avatarUrl; devolve o matched count
    async fn update_by_id(&self, id: ObjectId, changes: &UserChanges) -> Result<u64, StoreError>;

    /// Devolve o deleted count
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;
}

/// `UserStore` sobre a collection `users` do MongoDB
#[derive(Clone)]
pub struct MongoUserStore {
    collection: Collection<User>,
    db: MongoDB,
}

impl MongoUserStore {
    pub fn new(collection: Collection<User>, db: MongoDB) -> Self {
        Self { collection, db }
    }
}

fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

fn update_document(changes: &UserChanges) -> Document {
    match &changes.avatar_url {
        Some(avatar_url) => doc! {
            "$set": { "name": &changes.name, "avatarUrl": avatar_url }
        },
        None => doc! {
            "$set": { "name": &changes.name },
            "$unset": { "avatarUrl": "" }
        },
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert_one(&self, user: &User) -> Result<ObjectId, StoreError> {
        let result = self.collection.insert_one(user).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<User>, StoreError> {
        Ok(self.collection.find_one(by_id(id)).await?)
    }

    async fn find_all(&self) -> Result<Vec<User>, StoreError> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn update_by_id(&self, id: ObjectId, changes: &UserChanges) -> Result<u64, StoreError> {
        let result = self
            .collection
            .update_one(by_id(id), update_document(changes))
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StoreError> {
        let result = self.collection.delete_one(by_id(id)).await?;
        Ok(result.deleted_count)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.ping().await
    }
}
