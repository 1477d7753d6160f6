//! MongoDB store adapter.
//!
//! Connects once at startup, proves the server is alive with a `ping`, then
//! serves every repository call through a single collection handle.

use super::store::TaskStore;
use crate::libs::config::StoreConfig;
use crate::libs::error::{StoreError, StoreResult};
use crate::libs::task::{Task, TaskFilter, TaskUpdate};
use crate::msg_debug;
use async_trait::async_trait;
use bson::{doc, Document};
use mongodb::{Client, Collection};

pub struct MongoStore {
    collection: Collection<Task>,
}

impl MongoStore {
    /// Connects to `config.uri` and pings `config.database`.
    ///
    /// Either step failing yields [`StoreError::Connection`]. There is no retry.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let uri = redact_uri(&config.uri);
        let connection_error = |source| StoreError::Connection { uri: uri.clone(), source };

        msg_debug!(format!("connecting to {}", uri));
        let client = Client::with_uri_str(&config.uri).await.map_err(connection_error)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await.map_err(connection_error)?;
        msg_debug!(format!("connected, using {}.{}", config.database, config.collection));

        Ok(Self {
            collection: database.collection::<Task>(&config.collection),
        })
    }
}

#[async_trait]
impl TaskStore for MongoStore {
    async fn insert(&self, task: &Task) -> StoreResult<()> {
        self.collection.insert_one(task).await?;
        Ok(())
    }

    async fn find(&self, filter: &TaskFilter) -> StoreResult<Vec<Task>> {
        let mut cursor = self.collection.find(filter_document(filter)).await?;
        let mut tasks = Vec::new();
        while cursor.advance().await? {
            tasks.push(cursor.deserialize_current()?);
        }
        Ok(tasks)
    }

    async fn update_one(&self, filter: &TaskFilter, update: &TaskUpdate) -> StoreResult<u64> {
        let result = self.collection.update_one(filter_document(filter), update_document(update)).await?;
        Ok(result.matched_count)
    }

    async fn delete_one(&self, filter: &TaskFilter) -> StoreResult<u64> {
        let result = self.collection.delete_one(filter_document(filter)).await?;
        Ok(result.deleted_count)
    }
}

fn filter_document(filter: &TaskFilter) -> Document {
    match filter {
        TaskFilter::All => doc! {},
        TaskFilter::ByCompleted(completed) => doc! { "completed": *completed },
        TaskFilter::ByText(text) => doc! { "text": text.as_str() },
        TaskFilter::ById(id) => doc! { "_id": *id },
    }
}

fn update_document(update: &TaskUpdate) -> Document {
    match update {
        TaskUpdate::Complete { at } => doc! {
            "$set": {
                "completed": true,
                "updated_at": bson::DateTime::from_chrono(*at),
            }
        },
    }
}

/// Hides the user-info part of a connection string before it reaches logs or errors.
fn redact_uri(uri: &str) -> String {
    match (uri.find("://"), uri.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => format!("{}://***{}", &uri[..scheme_end], &uri[at..]),
        _ => uri.to_string(),
    }
}
