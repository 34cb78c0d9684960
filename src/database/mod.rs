mod user_store;

#[cfg(test)]
pub mod memory;

pub use user_store::*;

use mongodb::bson::doc;
use mongodb::{Client, Database};
use std::error::Error;
use std::time::Duration;

pub const DATABASE_NAME: &str = "stanza";
pub const USERS_COLLECTION: &str = "users";

#[derive(Clone)]
pub struct MongoDB {
    client: Client,
    db: Database,
}

impl MongoDB {
    /// Conecta e faz ping; qualquer falha aqui é fatal para o processo
    pub async fn new(uri: &str, timeout: Duration) -> Result<Self, Box<dyn Error>> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(timeout);
        client_options.server_selection_timeout = Some(timeout);

        let client = Client::with_options(client_options)?;
        let db = client.database(DATABASE_NAME);

        let mongodb = Self { client, db };
        mongodb.ping().await?;

        Ok(mongodb)
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        Ok(())
    }

    pub fn users(&self) -> MongoUserStore {
        MongoUserStore::new(self.db.collection(USERS_COLLECTION), self.clone())
    }
}
