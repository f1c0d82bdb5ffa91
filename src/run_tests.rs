//! Tests for the run module.

use std::fs;
use std::path::Path;

use tempfile::tempdir;

use super::*;

fn config_for(source: &Path, extra: &str) -> SyncConfiguration {
    let source = serde_json::to_string(&source.display().to_string()).unwrap();
    SyncConfiguration::parse(&format!(
        r#"{{ "directoriesToSync": [ {{ "source": {source}, "destination": "/backup"{extra} }} ] }}"#
    ))
    .unwrap()
}

mod run_error {
    use super::*;

    #[test]
    fn exclusion_error_names_directory() {
        let error = RunError::Exclusion {
            source_dir: "/data".to_string(),
            error: ExcludeError::Read {
                path: "/data/.gitignore".into(),
                source: std::io::Error::other("boom"),
            },
        };

        let message = error.to_string();
        assert!(message.contains("/data"));
        assert!(message.contains("Failed to prepare exclusion rules"));
    }
}

mod plan_directories {
    use super::*;

    #[test]
    fn empty_config_has_no_plans() {
        let config = SyncConfiguration::default();
        assert!(plan_directories(&config).unwrap().is_empty());
    }

    #[test]
    fn ignore_file_rules_are_loaded_when_enabled() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\n# comment\n\ntarget\n").unwrap();
        let config = config_for(dir.path(), r#", "enableGitIgnore": true"#);

        let plans = plan_directories(&config).unwrap();

        assert_eq!(plans.len(), 1);
        assert!(plans[0].matcher.is_path_excluded(Path::new("debug.log")));
        assert!(plans[0].matcher.is_path_excluded(Path::new("target")));
        assert!(!plans[0].matcher.is_path_excluded(Path::new("main.rs")));
    }

    #[test]
    fn ignore_file_is_skipped_when_disabled() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
        let config = config_for(dir.path(), "");

        let plans = plan_directories(&config).unwrap();

        assert!(plans[0].matcher.is_empty());
    }

    #[test]
    fn exclude_mask_is_applied() {
        let dir = tempdir().unwrap();
        let config = config_for(dir.path(), r#", "excludeMask": "*.tmp""#);

        let plans = plan_directories(&config).unwrap();

        assert!(plans[0].matcher.is_path_excluded(Path::new("scratch.tmp")));
    }

    #[test]
    fn ignore_directory_excludes_nothing() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".gitignore")).unwrap();
        let config = config_for(dir.path(), r#", "enableGitIgnore": true"#);

        let plans = plan_directories(&config).unwrap();

        assert!(plans[0].matcher.is_empty());
    }
}

mod execute {
    use super::*;

    #[test]
    fn succeeds_without_entries() {
        assert!(execute(&SyncConfiguration::default()).is_ok());
    }

    #[test]
    fn succeeds_with_directory_and_file() {
        let dir = tempdir().unwrap();
        let mut config = config_for(dir.path(), "");
        config.files_to_sync = SyncConfiguration::parse(
            r#"{ "filesToSync": [ { "source": "a.txt", "destination": "b.txt" } ] }"#,
        )
        .unwrap()
        .files_to_sync;

        assert!(execute(&config).is_ok());
    }
}

mod describe_interval {
    use super::*;

    #[test]
    fn absent_interval_is_off() {
        assert_eq!(describe_interval(None), "off");
    }

    #[test]
    fn interval_is_in_minutes() {
        assert_eq!(describe_interval(Some(Duration::from_secs(300))), "5m");
    }
}
