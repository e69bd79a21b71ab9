//! # Content Registry
//!
//! Keyed store of [`ContentRecord`]s. Cloning a registry yields another
//! handle to the same shared state.
//!
//! ## Concurrency
//!
//! Read-mostly. Reads take a shared lock and return clones. Every write
//! performs read-validate-write inside a single write-lock critical section,
//! so two writers to the same slug serialize and neither can observe a
//! half-applied update. Writes are never retried internally; callers that
//! retry use [`ContentRegistry::update_expecting`] so a stale retry fails
//! with [`RegistryError::StaleWrite`] instead of clobbering a newer version.
//!
//! ## History
//!
//! Registration and every accepted update append a [`RevisionEntry`] to the
//! slug's log in the same critical section as the record write. Retirement
//! is a state change, not a revision, and appends nothing.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use parking_lot::RwLock;

use ecl_core::{CitationKey, Slug, Version};

use crate::error::RegistryError;
use crate::record::{ContentRecord, RecordPatch, RecordState};
use crate::revision::{RevisionEntry, RevisionType};

#[derive(Debug, Default)]
struct ContentIndex {
    records: BTreeMap<Slug, ContentRecord>,
    by_citation_key: HashMap<CitationKey, Slug>,
    history: BTreeMap<Slug, Vec<RevisionEntry>>,
}

impl ContentIndex {
    fn append_revision(&mut self, record: &ContentRecord, entry: RevisionEntry) {
        tracing::debug!(
            slug = %record.slug(),
            version = %entry.version,
            revision_type = %entry.revision_type,
            "revision appended"
        );
        self.history.entry(record.slug().clone()).or_default().push(entry);
    }
}

fn revision_of(record: &ContentRecord, patch: &RecordPatch) -> RevisionEntry {
    RevisionEntry {
        version: record.version().clone(),
        date: record.date_modified(),
        author_id: patch.author_id.clone(),
        summary: patch.summary.clone(),
        revision_type: patch.revision_type.unwrap_or_default(),
    }
}

/// Shared handle to the content registry.
#[derive(Debug, Clone, Default)]
pub struct ContentRegistry {
    inner: Arc<RwLock<ContentIndex>>,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a draft record.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::DuplicateSlug`] if the slug exists.
    /// - [`RegistryError::DuplicateCitationKey`] if another record owns the key.
    /// - [`RegistryError::InvalidDates`] if `dateModified < datePublished`.
    /// - [`RegistryError::InvalidTransition`] if the record is not a draft.
    pub fn register(&self, mut record: ContentRecord) -> Result<ContentRecord, RegistryError> {
        let mut index = self.inner.write();
        if index.records.contains_key(record.slug()) {
            return Err(RegistryError::DuplicateSlug(record.slug().to_string()));
        }
        if let Some(owner) = index.by_citation_key.get(record.citation_key()) {
            return Err(RegistryError::DuplicateCitationKey {
                key: record.citation_key().to_string(),
                owner: owner.to_string(),
            });
        }
        if record.state() != RecordState::Draft {
            return Err(RegistryError::InvalidTransition {
                slug: record.slug().to_string(),
                from: record.state(),
                to: RecordState::Published,
            });
        }
        record.check_dates()?;
        record.transition(RecordState::Published)?;

        index
            .by_citation_key
            .insert(record.citation_key().clone(), record.slug().clone());
        index.records.insert(record.slug().clone(), record.clone());
        index.append_revision(
            &record,
            RevisionEntry {
                version: record.version().clone(),
                date: record.date_published(),
                author_id: None,
                summary: None,
                revision_type: RevisionType::Substantive,
            },
        );
        tracing::info!(
            slug = %record.slug(),
            version = %record.version(),
            citation_key = %record.citation_key(),
            "content record registered"
        );
        Ok(record)
    }

    /// Look up a record by slug.
    pub fn get(&self, slug: &Slug) -> Result<ContentRecord, RegistryError> {
        self.inner
            .read()
            .records
            .get(slug)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("content record \"{slug}\"")))
    }

    /// Resolve a citation key to its record, retired or not.
    pub fn get_by_citation_key(&self, key: &CitationKey) -> Result<ContentRecord, RegistryError> {
        let index = self.inner.read();
        index
            .by_citation_key
            .get(key)
            .and_then(|slug| index.records.get(slug))
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(format!("citation key \"{key}\"")))
    }

    /// Apply a patch to a published record and append a revision entry.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotFound`] for an unknown slug.
    /// - [`RegistryError::VersionRegression`] if version or dateModified
    ///   would move backward.
    /// - [`RegistryError::InvalidTransition`] for a retired record.
    pub fn update(&self, slug: &Slug, patch: RecordPatch) -> Result<ContentRecord, RegistryError> {
        self.write_revision(slug, |record| {
            record.apply(&patch)?;
            Ok(revision_of(record, &patch))
        })
    }

    /// Compare-and-swap update: applies only if the stored version equals
    /// `expected`.
    ///
    /// # Errors
    ///
    /// [`RegistryError::StaleWrite`] when the stored version differs, plus
    /// every error of [`update`](Self::update).
    pub fn update_expecting(
        &self,
        slug: &Slug,
        expected: &Version,
        patch: RecordPatch,
    ) -> Result<ContentRecord, RegistryError> {
        self.write_revision(slug, |record| {
            if record.version() != expected {
                return Err(RegistryError::StaleWrite {
                    slug: slug.to_string(),
                    expected: expected.to_string(),
                    actual: record.version().to_string(),
                });
            }
            record.apply(&patch)?;
            Ok(revision_of(record, &patch))
        })
    }

    /// Revision log of a record, oldest first.
    pub fn history(&self, slug: &Slug) -> Result<Vec<RevisionEntry>, RegistryError> {
        let index = self.inner.read();
        if !index.records.contains_key(slug) {
            return Err(RegistryError::NotFound(format!("content record \"{slug}\"")));
        }
        Ok(index.history.get(slug).cloned().unwrap_or_default())
    }

    /// The most recent revision that produced `version`.
    pub fn revision_at(&self, slug: &Slug, version: &Version) -> Result<RevisionEntry, RegistryError> {
        self.history(slug)?
            .into_iter()
            .rev()
            .find(|entry| &entry.version == version)
            .ok_or_else(|| RegistryError::NotFound(format!("revision {version} of \"{slug}\"")))
    }

    /// Move a published record to [`RecordState::Retired`].
    pub fn retire(&self, slug: &Slug) -> Result<ContentRecord, RegistryError> {
        let record = self.write_record(slug, |record| {
            if record.state() != RecordState::Published {
                return Err(RegistryError::InvalidTransition {
                    slug: slug.to_string(),
                    from: record.state(),
                    to: RecordState::Retired,
                });
            }
            record.transition(RecordState::Retired)?;
            Ok(record.clone())
        })?;
        tracing::info!(slug = %slug, citation_key = %record.citation_key(), "content record retired");
        Ok(record)
    }

    /// Published records in slug order. Retired records are excluded.
    pub fn listed(&self) -> Vec<ContentRecord> {
        self.inner
            .read()
            .records
            .values()
            .filter(|r| r.state() == RecordState::Published)
            .cloned()
            .collect()
    }

    /// Every record, retired included, in slug order.
    pub fn records(&self) -> Vec<ContentRecord> {
        self.inner.read().records.values().cloned().collect()
    }

    /// Whether a record exists for the slug.
    pub fn contains(&self, slug: &Slug) -> bool {
        self.inner.read().records.contains_key(slug)
    }

    /// Number of records, retired included.
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Whether the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read-validate-write under one write lock.
    fn write_record<R>(
        &self,
        slug: &Slug,
        f: impl FnOnce(&mut ContentRecord) -> Result<R, RegistryError>,
    ) -> Result<R, RegistryError> {
        let mut index = self.inner.write();
        Self::write_locked(&mut index, slug, f)
    }

    /// [`write_record`](Self::write_record) that also appends the revision
    /// `f` returns, under the same lock.
    fn write_revision(
        &self,
        slug: &Slug,
        f: impl FnOnce(&mut ContentRecord) -> Result<RevisionEntry, RegistryError>,
    ) -> Result<ContentRecord, RegistryError> {
        let mut index = self.inner.write();
        let (record, entry) = Self::write_locked(&mut index, slug, |record| {
            let entry = f(record)?;
            Ok((record.clone(), entry))
        })?;
        index.append_revision(&record, entry);
        Ok(record)
    }

    fn write_locked<R>(
        index: &mut ContentIndex,
        slug: &Slug,
        f: impl FnOnce(&mut ContentRecord) -> Result<R, RegistryError>,
    ) -> Result<R, RegistryError> {
        let record = index
            .records
            .get_mut(slug)
            .ok_or_else(|| RegistryError::NotFound(format!("content record \"{slug}\"")))?;
        let result = f(record);
        if let Err(err) = &result {
            tracing::debug!(slug = %slug, error = %err, "content record write rejected");
        }
        result
    }
}
