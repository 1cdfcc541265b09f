use serde::Deserialize;

/// The page currently owning the screen.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageId {
    #[default]
    Subjects,
    CreateSchema,
    SchemaDetails,
}

/// A schema-registry subject and the versions registered under it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Subject {
    pub name: String,
    #[serde(default)]
    pub versions: Vec<u32>,
}

impl Subject {
    pub fn new(name: impl Into<String>, versions: Vec<u32>) -> Self {
        Self {
            name: name.into(),
            versions,
        }
    }

    pub fn version_count(&self) -> usize {
        self.versions.len()
    }

    pub fn latest_version(&self) -> Option<u32> {
        self.versions.iter().copied().max()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchemaVersion {
    pub version: u32,
    pub schema: String,
}

// Input for a schema registration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubjectCreationDetails {
    pub subject: String,
    pub schema: String,
}

/// Where a navigation request wants to go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Subjects,
    CreateSchema,
    SchemaDetails(String),
}
