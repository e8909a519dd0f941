//! Deployment descriptor decoding.
//!
//! A descriptor is a Marathon JSON document holding either one application
//! or one group tree. The expected shape is chosen by the caller, not
//! guessed from the content.

use std::path::Path;

use crate::domain::policy::{DeployTarget, TargetKind};
use crate::domain::resource::{Application, Group};
use crate::error::DescriptorError;

/// Read and decode a descriptor file.
///
/// # Errors
///
/// Returns [`DescriptorError`] if the file cannot be read, is not valid
/// JSON of the expected shape, or violates a resource invariant.
pub fn load(path: &Path, kind: TargetKind) -> Result<DeployTarget, DescriptorError> {
    let content = std::fs::read_to_string(path).map_err(|source| DescriptorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &content, kind)
}

/// Decode descriptor content. `path` is only used in error reports.
///
/// # Errors
///
/// See [`load`].
pub fn parse(path: &Path, content: &str, kind: TargetKind) -> Result<DeployTarget, DescriptorError> {
    let parse_error = |source| DescriptorError::Parse {
        path: path.to_path_buf(),
        source,
    };
    let invalid = |source| DescriptorError::Invalid {
        path: path.to_path_buf(),
        source,
    };

    match kind {
        TargetKind::Application => {
            let app: Application = serde_json::from_str(content).map_err(parse_error)?;
            app.validate().map_err(invalid)?;
            Ok(DeployTarget::Application(app))
        }
        TargetKind::Group => {
            let group: Group = serde_json::from_str(content).map_err(parse_error)?;
            group.validate().map_err(invalid)?;
            Ok(DeployTarget::Group(group))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("target/marathon.json")
    }

    #[test]
    fn parses_application() {
        let content = r#"{"id": "/svc/api", "cmd": "sleep 100", "instances": 1}"#;
        let target = parse(&path(), content, TargetKind::Application).unwrap();

        assert_eq!(target.kind(), TargetKind::Application);
        assert_eq!(target.id().as_str(), "/svc/api");
    }

    #[test]
    fn parses_nested_group() {
        let content = r#"{
            "id": "/team",
            "apps": [{"id": "/team/a", "cmd": "run"}],
            "groups": [
                {"id": "/team/sub", "apps": [{"id": "/team/sub/a", "cmd": "run"}]}
            ]
        }"#;
        let target = parse(&path(), content, TargetKind::Group).unwrap();

        assert_eq!(target.kind(), TargetKind::Group);
        assert_eq!(target.app_count(), 2);
    }

    #[test]
    fn missing_id_is_a_parse_error() {
        let err = parse(&path(), r#"{"cmd": "sleep"}"#, TargetKind::Application).unwrap_err();
        assert!(matches!(err, DescriptorError::Parse { .. }));
        assert!(err.to_string().contains("target/marathon.json"));
    }

    #[test]
    fn empty_id_is_invalid() {
        let err = parse(&path(), r#"{"id": ""}"#, TargetKind::Group).unwrap_err();
        assert!(matches!(
            err,
            DescriptorError::Invalid {
                source: DomainError::EmptyId { kind: "group" },
                ..
            }
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = load(Path::new("does/not/exist.json"), TargetKind::Application).unwrap_err();
        assert!(matches!(err, DescriptorError::Read { .. }));
    }
}
