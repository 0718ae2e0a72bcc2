use crate::inspect::ContainerConfig;

/// Entrypoint as reported, including an explicit empty list.
///
/// `None` means the engine reported `null`; `Some(vec![])` means the entrypoint
/// was deliberately cleared and is emitted as `entrypoint: []`.
pub fn map_entrypoint(config: &ContainerConfig) -> Option<Vec<String>> {
    config.entrypoint.clone()
}

/// Command, only when it has at least one argument.
///
/// An empty command is dropped so the service is not started with `command: []`.
pub fn map_command(config: &ContainerConfig) -> Option<Vec<String>> {
    config.cmd.clone().filter(|cmd| !cmd.is_empty())
}
