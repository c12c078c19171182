//! Immutable, shareable workflow catalog.
//!
//! A [`Catalog`] is built once at startup, either from the built-in records
//! or from a JSON file, and is never mutated afterwards. Cloning is cheap:
//! all clones share the same record slice, so request handlers can hold one
//! each without locking.

use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::{
    Error, Result, SearchPage, TRACING_TARGET_CATALOG, WorkflowQuery, WorkflowRecord, mock,
};

/// Read-only collection of [`WorkflowRecord`]s in insertion order.
#[derive(Debug, Clone)]
#[must_use = "catalogs do nothing unless queried"]
pub struct Catalog {
    records: Arc<[WorkflowRecord]>,
}

impl Catalog {
    /// Returns the built-in catalog.
    pub fn builtin() -> Self {
        Self {
            records: mock::builtin_records().into(),
        }
    }

    /// Builds a catalog from `records`, rejecting duplicate ids.
    pub fn from_records(records: Vec<WorkflowRecord>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(records.len());
        if let Some(duplicate) = records.iter().find(|record| !seen.insert(record.id)) {
            return Err(Error::invalid_data(format!(
                "duplicate workflow id {} ({})",
                duplicate.id, duplicate.filename
            )));
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Decodes a JSON array of records.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let records: Vec<WorkflowRecord> = serde_json::from_slice(bytes)?;
        Self::from_records(records)
    }

    /// Reads and decodes a JSON catalog file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(
            target: TRACING_TARGET_CATALOG,
            path = %path.display(),
            "Loading catalog file"
        );

        let bytes = tokio::fs::read(path).await.map_err(|err| {
            Error::io(format!("cannot read catalog file {}", path.display())).with_source(err)
        })?;
        let catalog = Self::from_json_slice(&bytes)?;

        tracing::info!(
            target: TRACING_TARGET_CATALOG,
            path = %path.display(),
            records = catalog.len(),
            "Catalog loaded"
        );

        Ok(catalog)
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the catalog holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all records in insertion order.
    #[inline]
    pub fn records(&self) -> &[WorkflowRecord] {
        &self.records
    }

    /// Looks up a record by exact file name.
    pub fn get(&self, filename: &str) -> Option<&WorkflowRecord> {
        self.records.iter().find(|record| record.filename == filename)
    }

    /// Returns every integration name, de-duplicated and sorted.
    pub fn integrations(&self) -> Vec<&str> {
        self.records
            .iter()
            .flat_map(|record| record.integrations.iter().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Runs a search and returns one page of locale-adjusted results.
    ///
    /// Only records inside the page window are cloned; stored records are
    /// never modified. `trigger` and `complexity` are echoed, not applied.
    pub fn search(&self, query: &WorkflowQuery) -> SearchPage {
        let needle = query.text.to_lowercase();
        let matches: Vec<&WorkflowRecord> = self
            .records
            .iter()
            .filter(|record| !query.active_only || record.active)
            .filter(|record| needle.is_empty() || record.mentions(&needle))
            .collect();

        let pagination = query.pagination;
        let total = matches.len();
        let workflows = matches
            .into_iter()
            .skip(pagination.offset())
            .take(pagination.per_page() as usize)
            .map(|record| record.localized(query.locale))
            .collect();

        SearchPage {
            workflows,
            total,
            page: pagination.page(),
            per_page: pagination.per_page(),
            pages: pagination.page_count(total),
            query: query.text.clone(),
            filters: query.applied_filters(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::{ErrorKind, Locale, Pagination};

    fn inactive_record(id: i64, name: &str) -> WorkflowRecord {
        WorkflowRecord {
            id,
            filename: format!("{}.json", name.to_lowercase().replace(' ', "_")),
            name: name.to_owned(),
            active: false,
            description: "Manual automation that archives files. Uses 2 nodes.".to_owned(),
            trigger_type: "Manual".to_owned(),
            complexity: "low".to_owned(),
            node_count: 2,
            integrations: vec!["Dropbox".to_owned(), "Slack".to_owned()],
            tags: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    fn mixed_catalog() -> Catalog {
        let mut records = mock::builtin_records();
        records.push(inactive_record(3, "Archive Files"));
        Catalog::from_records(records).unwrap()
    }

    #[test]
    fn builtin_catalog_has_two_records() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.records()[0].filename, "telegram_webhook_automation.json");
        assert_eq!(catalog.records()[1].filename, "google_sheets_automation.json");
    }

    #[test]
    fn text_search_finds_telegram() {
        let page = Catalog::builtin().search(&WorkflowQuery::new().with_text("telegram"));

        assert_eq!(page.total, 1);
        assert_eq!(page.pages, 1);
        assert_eq!(page.workflows.len(), 1);
        assert_eq!(page.workflows[0].id, 1);
        assert_eq!(page.query, "telegram");
    }

    #[test]
    fn text_search_matches_description_case_insensitively() {
        let page = Catalog::builtin().search(&WorkflowQuery::new().with_text("SHEETS DATA"));
        assert_eq!(page.total, 1);
        assert_eq!(page.workflows[0].id, 2);

        let page = Catalog::builtin().search(&WorkflowQuery::new().with_text("messaging"));
        assert_eq!(page.total, 1);
        assert_eq!(page.workflows[0].id, 1);
    }

    #[test]
    fn no_match_yields_zero_pages() {
        let page = Catalog::builtin().search(&WorkflowQuery::new().with_text("salesforce"));
        assert_eq!(page.total, 0);
        assert_eq!(page.pages, 0);
        assert!(page.workflows.is_empty());
    }

    #[test]
    fn active_only_drops_inactive_records() {
        let catalog = mixed_catalog();

        let all = catalog.search(&WorkflowQuery::new());
        assert_eq!(all.total, 3);

        let active = catalog.search(&WorkflowQuery::new().with_active_only(true));
        assert_eq!(active.total, 2);
        assert!(active.workflows.iter().all(|record| record.active));
        assert!(active.filters.active_only);
    }

    #[test]
    fn out_of_range_page_is_empty() {
        let query = WorkflowQuery::new().with_pagination(Pagination::new(5, 20));
        let page = Catalog::builtin().search(&query);

        assert_eq!(page.total, 2);
        assert_eq!(page.pages, 1);
        assert_eq!(page.page, 5);
        assert!(page.workflows.is_empty());
    }

    #[test]
    fn page_window_sizes_follow_total() {
        let catalog = mixed_catalog();

        for per_page in 1..=4_i64 {
            for page in 1..=4_i64 {
                let query = WorkflowQuery::new().with_pagination(Pagination::new(page, per_page));
                let result = catalog.search(&query);

                let remaining = (result.total as i64 - (page - 1) * per_page).max(0);
                assert_eq!(result.total, 3);
                assert_eq!(result.workflows.len() as i64, per_page.min(remaining));
                assert_eq!(result.pages, 3_usize.div_ceil(per_page as usize));
            }
        }
    }

    #[test]
    fn trigger_and_complexity_are_echoed_only() {
        let query = WorkflowQuery::new()
            .with_trigger("Webhook")
            .with_complexity("high");
        let page = Catalog::builtin().search(&query);

        assert_eq!(page.total, 2);
        assert_eq!(page.filters.trigger, "Webhook");
        assert_eq!(page.filters.complexity, "high");
    }

    #[test]
    fn chinese_search_leaves_catalog_untouched() {
        let catalog = Catalog::builtin();
        let before = catalog.records().to_vec();

        let page = catalog.search(&WorkflowQuery::new().with_locale(Locale::Zh));
        let sheets = &page.workflows[1];

        assert!(sheets.description.contains("个节点"));
        assert!(sheets.description.contains("个服务"));
        assert_eq!(sheets.name, "Google Sheets Data Processing");
        assert!(
            page.workflows
                .iter()
                .all(|record| !record.description.contains("nodes")
                    && !record.description.contains("services"))
        );
        assert_eq!(catalog.records(), before.as_slice());
    }

    #[test]
    fn integrations_are_sorted_and_unique() {
        let catalog = mixed_catalog();
        let integrations = catalog.integrations();
        assert_eq!(
            integrations,
            vec![
                "Dropbox",
                "Gmail",
                "Google Sheets",
                "HTTP Request",
                "Slack",
                "Telegram",
                "Webhook"
            ]
        );
    }

    #[test]
    fn get_looks_up_by_filename() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get("google_sheets_automation.json").map(|r| r.id),
            Some(2)
        );
        assert!(catalog.get("missing.json").is_none());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = mock::builtin_records();
        records.push(inactive_record(1, "Clash"));

        let error = Catalog::from_records(records).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let error = Catalog::from_json_slice(b"[{\"id\": 1}]").unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Serialization);
    }

    #[tokio::test]
    async fn load_reads_json_file() {
        let records = vec![inactive_record(10, "From File")];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&serde_json::to_vec(&records).unwrap()).unwrap();

        let catalog = Catalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "From File");
    }

    #[tokio::test]
    async fn load_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = Catalog::load(dir.path().join("absent.json"))
            .await
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::Io);
    }
}
