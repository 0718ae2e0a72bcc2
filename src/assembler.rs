use crate::compose::ServiceSpec;
use crate::inspect::InspectedContainer;
use crate::mapping;
use crate::notifier::Notifier;

/// Builds the Compose service for one inspected container under `name`.
pub fn assemble_service(
    container: &InspectedContainer,
    name: String,
    notifier: &Notifier,
) -> ServiceSpec {
    let ports = mapping::map_ports(container, notifier);

    let service = ServiceSpec {
        name,
        image: mapping::map_image(&container.config),
        entrypoint: mapping::map_entrypoint(&container.config),
        command: mapping::map_command(&container.config),
        environment: mapping::map_environment(&container.config.env),
        expose: ports.expose,
        ports: ports.published,
        volumes: mapping::map_volumes(&container.host_config, notifier),
    };

    notifier.trace(&format!("Assembled service: {:?}", service));
    service
}
