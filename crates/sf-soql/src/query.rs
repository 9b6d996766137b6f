//! SOQL query result types.

use serde::{Deserialize, Deserializer, Serialize};

/// A single record. Its fields depend on the SELECT list, so it stays untyped.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// One page of a SOQL query response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct QueryResult {
    /// Whether all records are returned (no more pages).
    pub done: bool,

    /// Total number of records matching the query, across all pages.
    #[serde(rename = "totalSize")]
    pub total_size: u64,

    /// The records on this page. `null` reads as no records.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub records: Vec<Record>,

    /// Path of the next page.
    #[serde(
        rename = "nextRecordsUrl",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub next_records_url: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Record>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Record>>::deserialize(deserializer)?.unwrap_or_default())
}

impl QueryResult {
    /// Path to pass to `get_next_page`, if there is one.
    pub fn next_records_path(&self) -> Option<&str> {
        self.next_records_url
            .as_deref()
            .filter(|path| !path.is_empty())
    }

    /// Returns true if another page can be fetched.
    pub fn has_more(&self) -> bool {
        !self.done && self.next_records_path().is_some()
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
