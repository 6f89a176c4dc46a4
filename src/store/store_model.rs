use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// A single key/value row in the app store
#[derive(
    Queryable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::app_store)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct StoreEntry {
    pub store_key: String,
    pub store_value: String,
}
