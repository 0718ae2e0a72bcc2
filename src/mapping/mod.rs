//! Field mappers: one function family per Compose field.
//!
//! Each mapper reads a slice of an [`crate::inspect::InspectedContainer`] and returns a
//! fragment of the Compose model. None of them fail; anomalies that lose data
//! (malformed bind strings, unparseable port keys) are reported through the
//! [`crate::notifier::Notifier`] and skipped.

pub mod command;
pub mod environment;
pub mod image;
pub mod mounts;
pub mod name;
pub mod ports;

pub use command::{map_command, map_entrypoint};
pub use environment::map_environment;
pub use image::map_image;
pub use mounts::{map_mount, map_volumes, parse_bind};
pub use name::service_name;
pub use ports::{map_ports, PortMapping};
