use crate::inspect::ContainerConfig;

/// The image reference the container was created from, as the engine reports it.
///
/// No tag or digest resolution happens here: if the image was retagged or removed
/// since the container started, the reference may no longer resolve.
pub fn map_image(config: &ContainerConfig) -> String {
    config.image.clone()
}
