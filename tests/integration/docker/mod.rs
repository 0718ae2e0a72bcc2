//! Docker integration tests
//!
//! Creates a throwaway container (never started) and checks the Docker source
//! can inspect it and the pipeline maps its ports and command.

#[cfg(all(test, feature = "docker"))]
mod tests {
    use crate::integration::common::*;
    use container2compose::sources::{DockerSource, Source};
    use container2compose::{CancellationToken, ComposeGenerator, Notifier, ProjectOptions};
    use std::process::Command;

    const CONTAINER_NAME: &str = "container2compose-docker-test";

    fn docker(args: &[&str]) -> bool {
        Command::new("docker")
            .args(args)
            .status()
            .map(|status| status.success())
            .unwrap_or(false)
    }

    #[test]
    fn test_docker_source_creation() {
        let docker_source = DockerSource::new();
        assert!(
            docker_source.is_ok(),
            "Should be able to create DockerSource"
        );
        assert_eq!(docker_source.unwrap().name(), "docker");
    }

    #[test]
    fn test_docker_inspect_nonexistent_container() {
        let source = DockerSource::new().expect("Should create DockerSource");
        let result = source.inspect(NONEXISTENT_CONTAINER, &Notifier::silent());
        assert!(result.is_err(), "Inspecting a missing container should fail");
    }

    #[test]
    fn test_docker_created_container_to_compose() {
        docker(&["rm", "-f", CONTAINER_NAME]);
        assert!(docker(&[
            "create",
            "--name",
            CONTAINER_NAME,
            "-p",
            "127.0.0.1:18080:80",
            "alpine:latest",
            "sh",
            "-c",
            "sleep 1",
        ]));

        let generator =
            ComposeGenerator::new(DockerSource::new().unwrap(), Notifier::silent());
        let result = generator.generate(
            &[CONTAINER_NAME.to_string()],
            &ProjectOptions::default(),
            &CancellationToken::new(),
        );
        docker(&["rm", "-f", CONTAINER_NAME]);

        let project = result.expect("Should generate project");
        let service = project.service(CONTAINER_NAME).expect("Service should exist");
        assert_eq!(service.image, "alpine:latest");
        assert_eq!(service.ports[0].host_ip, "127.0.0.1");
        assert_eq!(service.ports[0].published, "18080");
        assert_eq!(service.ports[0].target, 80);
        assert_eq!(
            service.command,
            Some(vec!["sh".to_string(), "-c".to_string(), "sleep 1".to_string()])
        );
    }
}
