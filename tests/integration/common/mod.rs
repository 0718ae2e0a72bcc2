//! Common utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// `docker inspect` output of a named nginx container publishing 80/tcp on 8080.
#[allow(dead_code)]
pub const WEB_INSPECT: &str = r#"[
    {
        "Id": "9b1f0c3e7a",
        "Name": "/web",
        "Config": {
            "Image": "nginx:1.25",
            "Env": ["PATH=/usr/local/sbin:/usr/local/bin:/usr/sbin:/usr/bin", "NGINX_VERSION=1.25.3"],
            "Entrypoint": ["/docker-entrypoint.sh"],
            "Cmd": null,
            "ExposedPorts": {"80/tcp": {}}
        },
        "HostConfig": {
            "Binds": ["/srv/site:/usr/share/nginx/html", "/broken"],
            "PortBindings": {"80/tcp": [{"HostIp": "0.0.0.0", "HostPort": "8080"}]},
            "Mounts": null
        }
    }
]"#;

/// A record with no name, running a shell command.
#[allow(dead_code)]
pub const WORKER_INSPECT: &str = r#"{
    "Id": "4d2e8f",
    "Name": "",
    "Config": {
        "Image": "busybox:1.36",
        "Env": ["MODE"],
        "Entrypoint": [],
        "Cmd": ["sh", "-c", "run"],
        "ExposedPorts": {"9000/tcp": {}}
    },
    "HostConfig": {
        "PortBindings": {},
        "Mounts": [
            {
                "Type": "volume",
                "Source": "jobs",
                "Target": "/jobs",
                "VolumeOptions": {"NoCopy": true}
            }
        ]
    }
}"#;

#[allow(dead_code)]
/// Container that definitely doesn't exist
pub const NONEXISTENT_CONTAINER: &str = "container2compose-definitely-does-not-exist";

/// Writes `content` to `dir/name` and returns the path as a string argument.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> String {
    let path: PathBuf = dir.join(name);
    fs::write(&path, content).expect("Should write fixture");
    path.to_str().expect("Fixture path should be UTF-8").to_string()
}
