use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::{db::Database, errors::AppResult, models::domain::Syllabus};

/// A persisted record. The key is chosen at save time from the course name,
/// matching the original store's blob-naming scheme.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StoredSyllabus {
    pub key: String,
    #[serde(flatten)]
    pub syllabus: Syllabus,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait SyllabusRepository: Send + Sync {
    /// Store one record and return the key it was stored under.
    async fn save(&self, syllabus: &Syllabus) -> AppResult<String>;
    async fn find_by_key(&self, key: &str) -> AppResult<Option<StoredSyllabus>>;
}

pub struct MongoSyllabusRepository {
    collection: Collection<StoredSyllabus>,
}

impl MongoSyllabusRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        Self { collection }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for syllabi collection");

        let key_index = IndexModel::builder()
            .keys(doc! { "key": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("key_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(key_index).await?;

        log::info!("Successfully created indexes for syllabi collection");
        Ok(())
    }
}

#[async_trait]
impl SyllabusRepository for MongoSyllabusRepository {
    async fn save(&self, syllabus: &Syllabus) -> AppResult<String> {
        let stored = StoredSyllabus {
            key: syllabus.storage_key(),
            syllabus: syllabus.clone(),
            created_at: Utc::now(),
        };

        self.collection.insert_one(&stored).await?;
        Ok(stored.key)
    }

    async fn find_by_key(&self, key: &str) -> AppResult<Option<StoredSyllabus>> {
        let stored = self.collection.find_one(doc! { "key": key }).await?;
        Ok(stored)
    }
}
