use crate::compose::PortConfig;
use crate::inspect::InspectedContainer;
use crate::notifier::Notifier;
use std::collections::HashSet;

const DEFAULT_PROTOCOL: &str = "tcp";

/// Published and exposed ports of one service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortMapping {
    pub published: Vec<PortConfig>,
    pub expose: Vec<String>,
}

/// Splits an engine port key (`80/tcp`, `53/udp`, `8080`) into port and protocol.
fn split_port_key(key: &str) -> (&str, &str) {
    match key.split_once('/') {
        Some((port, protocol)) if !protocol.is_empty() => (port, protocol),
        Some((port, _)) => (port, DEFAULT_PROTOCOL),
        None => (key, DEFAULT_PROTOCOL),
    }
}

/// Reconciles host port bindings with the exposed-port set.
///
/// Every host binding of a container port becomes its own published entry (an
/// IPv4 and an IPv6 binding of the same port yield two entries). A port with at
/// least one binding is published, and published ports are never listed again
/// under `expose`; the check is on the bare port number, as the engine's own
/// exposed set does not distinguish further. A present but empty binding list
/// leaves the port unbound.
pub fn map_ports(container: &InspectedContainer, notifier: &Notifier) -> PortMapping {
    let mut mapping = PortMapping::default();
    let mut published_ports: HashSet<&str> = HashSet::new();

    for (key, bindings) in &container.host_config.port_bindings {
        let bindings = match bindings {
            Some(bindings) if !bindings.is_empty() => bindings,
            _ => continue,
        };

        let (port, protocol) = split_port_key(key);
        let target = match port.parse::<u32>() {
            Ok(target) => target,
            Err(_) => {
                notifier.warn(&format!("Skipping port binding with invalid port: {}", key));
                continue;
            }
        };

        for binding in bindings {
            mapping.published.push(PortConfig {
                host_ip: binding.host_ip.clone(),
                published: binding.host_port.clone(),
                target,
                protocol: protocol.to_string(),
            });
        }
        published_ports.insert(port);
    }

    for key in container.config.exposed_ports.keys() {
        let (port, protocol) = split_port_key(key);
        if published_ports.contains(port) {
            continue;
        }

        let token = if protocol == DEFAULT_PROTOCOL {
            port.to_string()
        } else {
            format!("{}/{}", port, protocol)
        };
        mapping.expose.push(token);
    }

    mapping
}
