use crate::tui::domain::models::{SchemaVersion, Subject, SubjectCreationDetails};
use crate::tui::ui::events::{
    Message, SchemaCreated, SchemaCreationFailed, SchemaListingFailed, SchemasListed,
    SubjectDeleted, SubjectDeletionFailed, SubjectListingFailed, SubjectsListed,
};
use anyhow::{Context, Result, anyhow, bail, ensure};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

// Each operation blocks for as long as it takes and reports its outcome as a
// message; failures are never returned to the caller.

pub trait SubjectLister {
    fn list_subjects(&self) -> Message;
}

pub trait SubjectDeleter {
    fn delete_subject(&self, subject: &str) -> Message;
}

pub trait SchemaCreator {
    fn create_schema(&self, details: SubjectCreationDetails) -> Message;
}

pub trait SchemaLister {
    fn list_schemas(&self, subject: &str) -> Message;
}

/// Everything the pages need from a schema registry.
pub trait Registry: SubjectLister + SubjectDeleter + SchemaCreator + SchemaLister + Send + Sync {}

impl<T> Registry for T where
    T: SubjectLister + SubjectDeleter + SchemaCreator + SchemaLister + Send + Sync
{
}

/// A registry kept in memory, with an artificial delay on every call.
pub struct InMemoryRegistry {
    subjects: Mutex<BTreeMap<String, Vec<SchemaVersion>>>,
    latency: Duration,
    fail_deletes: bool,
}

impl InMemoryRegistry {
    pub fn new(latency: Duration) -> Self {
        Self {
            subjects: Mutex::new(BTreeMap::new()),
            latency,
            fail_deletes: false,
        }
    }

    /// Every deletion fails, for exercising the error banner.
    pub fn with_failing_deletes(mut self, fail: bool) -> Self {
        self.fail_deletes = fail;
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        // owned, so nobody else can be holding the lock
        let store = match self.subjects.get_mut() {
            Ok(store) => store,
            Err(poisoned) => {
                tracing::warn!("registry store lock poisoned, seeding anyway");
                poisoned.into_inner()
            }
        };
        for subject in subjects {
            let versions = subject
                .versions
                .iter()
                .map(|&version| SchemaVersion {
                    version,
                    schema: placeholder_schema(&subject.name, version),
                })
                .collect();
            store.insert(subject.name, versions);
        }
        self
    }

    /// Reads a JSON array of subjects to seed the registry with.
    pub fn load_subjects(path: &Path) -> Result<Vec<Subject>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read subjects file {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse subjects file {}", path.display()))
    }

    /// A handful of subjects so the UI has something to show.
    pub fn demo_subjects() -> Vec<Subject> {
        ["orders-value", "payments-value", "customers-key", "inventory-value"]
            .iter()
            .enumerate()
            .map(|(i, name)| Subject::new(*name, (1..=i as u32 + 1).collect()))
            .collect()
    }

    fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
    }

    fn store(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, Vec<SchemaVersion>>>> {
        self.subjects
            .lock()
            .map_err(|_| anyhow!("registry store lock poisoned"))
    }

    fn try_list_subjects(&self) -> Result<Vec<Subject>> {
        let store = self.store()?;
        Ok(store
            .iter()
            .map(|(name, versions)| {
                Subject::new(name.clone(), versions.iter().map(|v| v.version).collect())
            })
            .collect())
    }

    fn try_delete_subject(&self, subject: &str) -> Result<()> {
        if self.fail_deletes {
            bail!("unable to delete subject");
        }
        let mut store = self.store()?;
        store
            .remove(subject)
            .map(|_| ())
            .ok_or_else(|| anyhow!("subject {subject} not found"))
    }

    fn try_create_schema(&self, details: &SubjectCreationDetails) -> Result<u32> {
        ensure!(!details.subject.trim().is_empty(), "subject cannot be empty");
        ensure!(!details.schema.trim().is_empty(), "schema cannot be empty");
        serde_json::from_str::<serde_json::Value>(&details.schema)
            .context("schema is not valid JSON")?;

        let mut store = self.store()?;
        let versions = store.entry(details.subject.clone()).or_default();
        if versions.iter().any(|v| v.schema == details.schema) {
            bail!("schema already registered under {}", details.subject);
        }
        let version = versions.iter().map(|v| v.version).max().unwrap_or(0) + 1;
        versions.push(SchemaVersion {
            version,
            schema: details.schema.clone(),
        });
        Ok(version)
    }

    fn try_list_schemas(&self, subject: &str) -> Result<Vec<SchemaVersion>> {
        let store = self.store()?;
        store
            .get(subject)
            .cloned()
            .ok_or_else(|| anyhow!("subject {subject} not found"))
    }
}

impl SubjectLister for InMemoryRegistry {
    fn list_subjects(&self) -> Message {
        self.simulate_latency();
        match self.try_list_subjects() {
            Ok(subjects) => SubjectsListed { subjects }.into(),
            Err(e) => SubjectListingFailed {
                reason: format!("{e:#}"),
            }
            .into(),
        }
    }
}

impl SubjectDeleter for InMemoryRegistry {
    fn delete_subject(&self, subject: &str) -> Message {
        self.simulate_latency();
        match self.try_delete_subject(subject) {
            Ok(()) => SubjectDeleted {
                subject: subject.to_string(),
            }
            .into(),
            Err(e) => {
                tracing::warn!(subject, error = %e, "subject deletion failed");
                SubjectDeletionFailed {
                    subject: subject.to_string(),
                    reason: format!("{e:#}"),
                }
                .into()
            }
        }
    }
}

impl SchemaCreator for InMemoryRegistry {
    fn create_schema(&self, details: SubjectCreationDetails) -> Message {
        self.simulate_latency();
        match self.try_create_schema(&details) {
            Ok(version) => SchemaCreated {
                subject: details.subject,
                version,
            }
            .into(),
            Err(e) => {
                tracing::warn!(subject = %details.subject, error = %e, "schema creation failed");
                SchemaCreationFailed {
                    subject: details.subject,
                    reason: format!("{e:#}"),
                }
                .into()
            }
        }
    }
}

impl SchemaLister for InMemoryRegistry {
    fn list_schemas(&self, subject: &str) -> Message {
        self.simulate_latency();
        match self.try_list_schemas(subject) {
            Ok(schemas) => SchemasListed {
                subject: subject.to_string(),
                schemas,
            }
            .into(),
            Err(e) => SchemaListingFailed {
                subject: subject.to_string(),
                reason: format!("{e:#}"),
            }
            .into(),
        }
    }
}

fn placeholder_schema(subject: &str, version: u32) -> String {
    serde_json::json!({
        "type": "record",
        "name": subject.replace('-', "_"),
        "fields": [{ "name": format!("field_v{version}"), "type": "string" }],
    })
    .to_string()
}
