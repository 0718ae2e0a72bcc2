use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Runtime snapshot of one container, as printed by `docker inspect`.
///
/// Only the attributes the Compose mapping consumes are modelled; everything
/// else in the engine's document is ignored during deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InspectedContainer {
    #[serde(default, rename = "Id")]
    pub id: String,
    #[serde(default, rename = "Name")]
    pub name: String,
    #[serde(default, rename = "Config")]
    pub config: ContainerConfig,
    #[serde(default, rename = "HostConfig")]
    pub host_config: HostConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerConfig {
    #[serde(default, rename = "Image")]
    pub image: String,
    #[serde(default, rename = "Env", deserialize_with = "null_as_default")]
    pub env: Vec<String>,
    // no null_as_default: a null entrypoint/cmd must stay distinct from []
    #[serde(default, rename = "Entrypoint")]
    pub entrypoint: Option<Vec<String>>,
    #[serde(default, rename = "Cmd")]
    pub cmd: Option<Vec<String>>,
    #[serde(default, rename = "ExposedPorts", deserialize_with = "null_as_default")]
    pub exposed_ports: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default, rename = "PortBindings", deserialize_with = "null_as_default")]
    pub port_bindings: BTreeMap<String, Option<Vec<PortBinding>>>,
    #[serde(default, rename = "Binds", deserialize_with = "null_as_default")]
    pub binds: Vec<String>,
    #[serde(default, rename = "Mounts", deserialize_with = "null_as_default")]
    pub mounts: Vec<Mount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortBinding {
    #[serde(default, rename = "HostIp")]
    pub host_ip: String,
    #[serde(default, rename = "HostPort")]
    pub host_port: String,
}

/// Structured mount descriptor from `HostConfig.Mounts`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mount {
    #[serde(default, rename = "Type")]
    pub kind: String,
    #[serde(default, rename = "Source")]
    pub source: String,
    #[serde(default, rename = "Target")]
    pub target: String,
    #[serde(default, rename = "ReadOnly")]
    pub read_only: bool,
    #[serde(default, rename = "Consistency")]
    pub consistency: String,
    #[serde(default, rename = "BindOptions")]
    pub bind_options: Option<BindOptions>,
    #[serde(default, rename = "VolumeOptions")]
    pub volume_options: Option<VolumeOptions>,
    #[serde(default, rename = "TmpfsOptions")]
    pub tmpfs_options: Option<TmpfsOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BindOptions {
    #[serde(default, rename = "Propagation")]
    pub propagation: String,
    #[serde(default, rename = "CreateMountpoint")]
    pub create_mountpoint: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeOptions {
    #[serde(default, rename = "NoCopy")]
    pub no_copy: bool,
    #[serde(default, rename = "Subpath")]
    pub subpath: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TmpfsOptions {
    #[serde(default, rename = "SizeBytes")]
    pub size_bytes: i64,
    #[serde(default, rename = "Mode")]
    pub mode: u32,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl InspectedContainer {
    /// Parses `inspect` output, which is either a JSON array of records
    /// (what the engines print) or a single record object.
    ///
    /// Only the first record of an array is used.
    pub fn from_inspect_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).context("Failed to parse inspect output as JSON")?;

        let record = match value {
            serde_json::Value::Array(mut records) => {
                if records.is_empty() {
                    return Err(anyhow!("Inspect output contains no container records"));
                }
                records.swap_remove(0)
            }
            object @ serde_json::Value::Object(_) => object,
            _ => return Err(anyhow!("Inspect output is neither an array nor an object")),
        };

        serde_json::from_value(record).context("Failed to decode container inspect record")
    }
}
