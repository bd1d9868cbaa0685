//! Record store access and the in-memory record collection

mod types;

use crate::config::ClientOptions;
use crate::error::Error;
use crate::fetch::Fetch;
use log::{debug, info, warn};
use reqwest::Client;
use tokio::time::sleep;

pub use types::{
    image_data_uri, RecordDraft, SurgicalRecord, WoundClassification, DRAFT_ID_PREFIX,
};

/// Client for the remote record endpoint.
///
/// One URL, two verbs: GET returns the full JSON array of records, POST
/// appends one record. All error classification for the endpoint lives
/// here; no call is retried automatically, recovery is a caller-triggered
/// refetch.
pub struct RecordStoreClient {
    /// The record endpoint URL
    url: String,

    /// HTTP client
    client: Client,

    /// Client options (write mode, sync delay, timeout)
    options: ClientOptions,
}

impl RecordStoreClient {
    /// Create a new RecordStoreClient
    pub(crate) fn new(url: &str, client: Client, options: ClientOptions) -> Self {
        Self {
            url: url.to_string(),
            client,
            options,
        }
    }

    /// Fetch every record the store holds.
    ///
    /// Failure classification: connection-level failures are access errors,
    /// non-2xx statuses and body-read failures are network errors, and a
    /// body that is not a JSON array of record rows is a format error.
    pub async fn fetch_all(&self) -> Result<Vec<SurgicalRecord>, Error> {
        debug!("fetching records from {}", self.url);

        let response = Fetch::get(&self.client, &self.url)
            .timeout(self.options.request_timeout)
            .execute_raw()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::network(format!(
                "record endpoint returned status {}",
                status
            )));
        }

        let body = response.text().await?;
        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| Error::format(format!("response is not JSON: {}", err)))?;

        if !value.is_array() {
            return Err(Error::format("response is valid JSON but not an array"));
        }

        let records: Vec<SurgicalRecord> = serde_json::from_value(value)
            .map_err(|err| Error::format(format!("row does not match record shape: {}", err)))?;

        info!("fetched {} records", records.len());
        Ok(records)
    }

    /// Append one record and return the refreshed record list.
    ///
    /// With write acknowledgment the endpoint's status is checked and the
    /// refetch happens immediately. Without it (legacy spreadsheet mode)
    /// the response cannot be read: the write is fire-and-forget, the
    /// client waits the configured sync delay for the remote side to finish
    /// processing, then refetches and trusts the store. In that mode a
    /// silently failed write is indistinguishable from a successful one.
    pub async fn append(&self, record: &SurgicalRecord) -> Result<Vec<SurgicalRecord>, Error> {
        debug!("appending record {} ({})", record.id, record.hospital_number);

        let response = Fetch::post(&self.client, &self.url)
            .timeout(self.options.request_timeout)
            .json(record)?
            .execute_raw()
            .await?;

        if self.options.write_acknowledgment {
            let status = response.status();
            if !status.is_success() {
                return Err(Error::network(format!(
                    "record endpoint rejected write with status {}",
                    status
                )));
            }
        } else {
            warn!(
                "write not acknowledged by endpoint; waiting {:?} before refetch",
                self.options.sync_delay
            );
            sleep(self.options.sync_delay).await;
        }

        self.fetch_all().await
    }
}

/// The in-memory record cache: the source of truth for the dashboard and
/// search views between refetches.
///
/// Ordering is whatever the store returned, except that locally inserted
/// records go newest-first. Record ids are unique within the collection.
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: Vec<SurgicalRecord>,
}

impl RecordCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the entire collection with a fresh fetch result
    pub fn hydrate(&mut self, records: Vec<SurgicalRecord>) {
        self.records = records;
    }

    /// Insert a record at the front, newest-first. Rejects duplicate ids.
    pub fn insert_local(&mut self, record: SurgicalRecord) -> Result<(), Error> {
        if self.records.iter().any(|r| r.id == record.id) {
            return Err(Error::record(format!("duplicate record id {}", record.id)));
        }
        self.records.insert(0, record);
        Ok(())
    }

    /// All records in collection order
    pub fn records(&self) -> &[SurgicalRecord] {
        &self.records
    }

    /// Look up one record by id
    pub fn get(&self, id: &str) -> Option<&SurgicalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records held
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> SurgicalRecord {
        SurgicalRecord {
            id: id.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn hydrate_replaces_contents() {
        let mut collection = RecordCollection::new();
        collection.hydrate(vec![record("a"), record("b")]);
        assert_eq!(collection.len(), 2);
        collection.hydrate(vec![record("c")]);
        assert_eq!(collection.len(), 1);
        assert!(collection.get("a").is_none());
    }

    #[test]
    fn local_insert_goes_newest_first() {
        let mut collection = RecordCollection::new();
        collection.hydrate(vec![record("old")]);
        collection.insert_local(record("new")).unwrap();
        assert_eq!(collection.records()[0].id, "new");
        assert_eq!(collection.records()[1].id, "old");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut collection = RecordCollection::new();
        collection.insert_local(record("a")).unwrap();
        assert!(matches!(
            collection.insert_local(record("a")),
            Err(Error::Record(_))
        ));
        assert_eq!(collection.len(), 1);
    }
}
