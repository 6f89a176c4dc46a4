use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::app_store::dsl::*;
use crate::store::StoreEntry;
use diesel::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Persistence gateway: string values by key, no schema enforcement.
/// Callers serialize and deserialize their own blobs.
pub trait StoreRepositoryTrait: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

pub struct StoreRepository {
    pool: Arc<DbPool>,
}

impl StoreRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        StoreRepository { pool }
    }
}

impl StoreRepositoryTrait for StoreRepository {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let result = app_store
            .filter(store_key.eq(key))
            .select(store_value)
            .first::<String>(&mut conn);

        match result {
            Ok(value) => Ok(Some(value)),
            Err(diesel::result::Error::NotFound) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::replace_into(app_store)
            .values(StoreEntry {
                store_key: key.to_string(),
                store_value: value.to_string(),
            })
            .execute(&mut conn)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)?;
        diesel::delete(app_store.filter(store_key.eq(key))).execute(&mut conn)?;
        Ok(())
    }
}

/// In-memory store for tests and ephemeral sessions
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoreRepositoryTrait for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().unwrap().remove(key);
        Ok(())
    }
}
