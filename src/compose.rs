//! Compose-shaped output model.
//!
//! These types mirror the long syntax of the Compose file format closely enough
//! that serializing a [`ProjectSpec`] with serde yields a usable `compose.yaml`.
//! Empty collections and unset optional fields are skipped so the document only
//! carries what the running containers actually reported.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Aggregated project: one service per inspected container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProjectSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Project-load metadata; not part of the document body.
    #[serde(skip)]
    pub working_dir: String,
    pub services: BTreeMap<String, ServiceSpec>,
}

impl ProjectSpec {
    pub fn new(name: impl Into<String>, working_dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            working_dir: working_dir.into(),
            services: BTreeMap::new(),
        }
    }

    /// Inserts a service under its own name, returning whatever it displaced.
    pub fn insert_service(&mut self, service: ServiceSpec) -> Option<ServiceSpec> {
        self.services.insert(service.name.clone(), service)
    }

    pub fn contains_service(&self, name: &str) -> bool {
        self.services.contains_key(name)
    }

    pub fn service(&self, name: &str) -> Option<&ServiceSpec> {
        self.services.get(name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceSpec {
    /// Key in [`ProjectSpec::services`]; not repeated inside the service body.
    #[serde(skip)]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entrypoint: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Environment::is_empty")]
    pub environment: Environment,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expose: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<PortConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<MountSpec>,
}

/// Ordered `KEY -> value` mapping where `None` means "declared without a value".
///
/// Serializes as a map; bare keys come out as `null`, which Compose reads as
/// "take the value from the environment at run time".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    entries: Vec<(String, Option<String>)>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key`. A key that is already present keeps its position and takes
    /// the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: Option<String>) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// `None` when the key is absent, `Some(None)` when it is declared bare.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Renders back to the engine's `KEY=VALUE` / bare `KEY` list form.
    pub fn to_env_list(&self) -> Vec<String> {
        self.iter()
            .map(|(key, value)| match value {
                Some(value) => format!("{}={}", key, value),
                None => key.to_string(),
            })
            .collect()
    }
}

impl Serialize for Environment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Published port in long syntax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PortConfig {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub host_ip: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub published: String,
    pub target: u32,
    pub protocol: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountType {
    Bind,
    Volume,
    Tmpfs,
    /// Anything else the engine reports (`npipe`, `cluster`, ...), kept verbatim.
    Other(String),
}

impl MountType {
    pub fn from_engine(kind: &str) -> Self {
        match kind {
            "bind" => MountType::Bind,
            "volume" => MountType::Volume,
            "tmpfs" => MountType::Tmpfs,
            other => MountType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MountType::Bind => "bind",
            MountType::Volume => "volume",
            MountType::Tmpfs => "tmpfs",
            MountType::Other(kind) => kind,
        }
    }
}

impl fmt::Display for MountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for MountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Service volume in long syntax.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MountSpec {
    #[serde(rename = "type")]
    pub kind: MountType,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub consistency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bind: Option<BindSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<VolumeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tmpfs: Option<TmpfsSpec>,
}

impl MountSpec {
    pub fn new(kind: MountType, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            source: source.into(),
            target: target.into(),
            read_only: false,
            consistency: String::new(),
            bind: None,
            volume: None,
            tmpfs: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BindSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub propagation: String,
    #[serde(skip_serializing_if = "is_false")]
    pub create_host_path: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VolumeSpec {
    #[serde(skip_serializing_if = "is_false")]
    pub nocopy: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub subpath: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TmpfsSpec {
    /// Bytes.
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub size: i64,
    #[serde(skip_serializing_if = "is_zero_u32")]
    pub mode: u32,
}

fn is_false(value: &bool) -> bool {
    !*value
}

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}
