use crate::compose::{BindSpec, MountSpec, MountType, TmpfsSpec, VolumeSpec};
use crate::inspect::{HostConfig, Mount};
use crate::notifier::Notifier;
use anyhow::{anyhow, Result};

/// Parses a legacy `source:target[:mode]` bind string.
///
/// Binds are read-only unless the mode is exactly `rw`. Other modes (`ro`, `z`,
/// `rw,z`, ...) leave the default in place, and anything past the third field is
/// ignored.
pub fn parse_bind(bind: &str) -> Result<MountSpec> {
    let fields: Vec<&str> = bind.split(':').collect();
    if fields.len() < 2 {
        return Err(anyhow!("unable to process bind mount: {}", bind));
    }

    let mut mount = MountSpec::new(MountType::Bind, fields[0], fields[1]);
    mount.read_only = !(fields.len() == 3 && fields[2] == "rw");
    Ok(mount)
}

/// Maps a structured mount verbatim, carrying whichever option blocks are present.
pub fn map_mount(mount: &Mount) -> MountSpec {
    let mut spec = MountSpec::new(
        MountType::from_engine(&mount.kind),
        mount.source.as_str(),
        mount.target.as_str(),
    );
    spec.read_only = mount.read_only;
    spec.consistency = mount.consistency.clone();

    spec.bind = mount.bind_options.as_ref().map(|options| BindSpec {
        propagation: options.propagation.clone(),
        create_host_path: options.create_mountpoint,
    });
    spec.volume = mount.volume_options.as_ref().map(|options| VolumeSpec {
        nocopy: options.no_copy,
        subpath: options.subpath.clone(),
    });
    spec.tmpfs = mount.tmpfs_options.as_ref().map(|options| TmpfsSpec {
        size: options.size_bytes,
        mode: options.mode,
    });

    spec
}

/// All service volumes: legacy binds first, then structured mounts.
///
/// Malformed bind strings are reported and skipped; they never abort the batch.
pub fn map_volumes(host_config: &HostConfig, notifier: &Notifier) -> Vec<MountSpec> {
    let mut volumes = Vec::with_capacity(host_config.binds.len() + host_config.mounts.len());

    for bind in &host_config.binds {
        match parse_bind(bind) {
            Ok(mount) => volumes.push(mount),
            Err(e) => notifier.warn(&e.to_string()),
        }
    }

    volumes.extend(host_config.mounts.iter().map(map_mount));
    volumes
}
