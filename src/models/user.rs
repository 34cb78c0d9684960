use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Usuário (armazenado no MongoDB, collection `users`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Gerado pelo MongoDB no insert, nunca enviado pelo cliente
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    pub name: String,

    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Body de create e update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    // Ausente vira "" para cair na validação, não no parse
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[serde(rename = "avatarUrl", default)]
    pub avatar_url: Option<String>,
}

/// Campos mutáveis de um usuário; o id nunca muda
#[derive(Debug, Clone, PartialEq)]
pub struct UserChanges {
    pub name: String,
    pub avatar_url: Option<String>,
}

impl UserRequest {
    pub fn into_new_user(self) -> User {
        User {
            id: None,
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }

    pub fn into_changes(self) -> UserChanges {
        UserChanges {
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}

/// Usuário como exposto na API (id em hex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    #[serde(rename = "avatarUrl", default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id.map(|id| id.to_hex()).unwrap_or_default(),
            name: u.name,
            avatar_url: u.avatar_url,
        }
    }
}

/// Referência ao documento inserido, devolvida pelo create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InsertResult {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

impl From<ObjectId> for InsertResult {
    fn from(id: ObjectId) -> Self {
        InsertResult { inserted_id: id.to_hex() }
    }
}
