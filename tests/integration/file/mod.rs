//! File source integration tests
//!
//! Drives the whole pipeline from saved `docker inspect` output on disk
//! through to the emitted YAML document.

use crate::integration::common::*;
use container2compose::emitter::{self, OutputFormat};
use container2compose::{
    CancellationToken, ComposeGenerator, FileSource, MountType, Notifier, ProjectOptions,
};
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(paths: Vec<String>) -> anyhow::Result<container2compose::ProjectSpec> {
        let generator = ComposeGenerator::new(FileSource::new(), Notifier::silent());
        let options = ProjectOptions {
            name: Some("snapshot".to_string()),
            working_dir: Some("/opt/snapshot".to_string()),
        };
        generator.generate(&paths, &options, &CancellationToken::new())
    }

    #[test]
    fn test_file_source_pipeline() {
        let temp_dir = TempDir::new().unwrap();
        let web = write_fixture(temp_dir.path(), "web.json", WEB_INSPECT);
        let worker = write_fixture(temp_dir.path(), "worker.json", WORKER_INSPECT);

        let project = generate(vec![web, worker]).unwrap();

        assert_eq!(project.name, "snapshot");
        assert_eq!(project.working_dir, "/opt/snapshot");
        assert_eq!(project.services.len(), 2);

        let web = project.service("web").unwrap();
        assert_eq!(web.image, "nginx:1.25");
        assert_eq!(web.entrypoint, Some(vec!["/docker-entrypoint.sh".to_string()]));
        assert!(web.command.is_none());
        assert!(web.expose.is_empty());
        assert_eq!(web.ports.len(), 1);
        assert_eq!(web.ports[0].published, "8080");
        // "/broken" has no target and is skipped
        assert_eq!(web.volumes.len(), 1);
        assert!(web.volumes[0].read_only);

        let worker = project.service("service-1").unwrap();
        assert_eq!(worker.entrypoint, Some(vec![]));
        assert_eq!(
            worker.command,
            Some(vec!["sh".to_string(), "-c".to_string(), "run".to_string()])
        );
        assert_eq!(worker.environment.get("MODE"), Some(None));
        assert_eq!(worker.expose, vec!["9000"]);
        assert_eq!(worker.volumes[0].kind, MountType::Volume);
    }

    #[test]
    fn test_file_source_yaml_document() {
        let temp_dir = TempDir::new().unwrap();
        let web = write_fixture(temp_dir.path(), "web.json", WEB_INSPECT);
        let worker = write_fixture(temp_dir.path(), "worker.json", WORKER_INSPECT);
        let project = generate(vec![web, worker]).unwrap();

        let mut out = Vec::new();
        emitter::emit(&project, OutputFormat::Yaml, &mut out, &Notifier::silent()).unwrap();
        let yaml: serde_yaml::Value = serde_yaml::from_slice(&out).unwrap();

        assert_eq!(yaml["name"].as_str(), Some("snapshot"));
        let web = &yaml["services"]["web"];
        assert_eq!(web["ports"][0]["target"].as_u64(), Some(80));
        assert_eq!(web["ports"][0]["host_ip"].as_str(), Some("0.0.0.0"));
        assert!(web.get("expose").is_none());
        assert!(web.get("command").is_none());
        assert_eq!(web["volumes"][0]["type"].as_str(), Some("bind"));
        assert_eq!(web["volumes"][0]["read_only"].as_bool(), Some(true));

        let worker = &yaml["services"]["service-1"];
        assert_eq!(worker["command"][2].as_str(), Some("run"));
        assert!(worker["environment"]["MODE"].is_null());
        assert_eq!(worker["volumes"][0]["volume"]["nocopy"].as_bool(), Some(true));
    }

    #[test]
    fn test_unreadable_file_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        let web = write_fixture(temp_dir.path(), "web.json", WEB_INSPECT);
        let missing = temp_dir.path().join("missing.json").display().to_string();

        assert!(generate(vec![web, missing]).is_err());
    }

    #[test]
    fn test_malformed_json_aborts_run() {
        let temp_dir = TempDir::new().unwrap();
        let broken = write_fixture(temp_dir.path(), "broken.json", "[{\"Name\": ");

        assert!(generate(vec![broken]).is_err());
    }
}
