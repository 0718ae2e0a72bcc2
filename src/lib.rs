pub mod assembler;
pub mod compose;
pub mod emitter;
pub mod inspect;
pub mod mapping;
pub mod notifier;
pub mod processor;
pub mod sources;

// Re-exports for easy access
pub use compose::{MountSpec, MountType, PortConfig, ProjectSpec, ServiceSpec};
pub use emitter::OutputFormat;
pub use inspect::InspectedContainer;
pub use notifier::Notifier;
pub use processor::{CancellationToken, ComposeGenerator, ProjectOptions};
pub use sources::DockerSource;
pub use sources::FileSource;
pub use sources::NerdctlSource;
pub use sources::Source;
