//! Tests for JSON configuration decoding.

use super::raw::RawConfiguration;

/// Helper to decode a document expected to be a non-null object.
fn raw(content: &str) -> RawConfiguration {
    RawConfiguration::parse(content).unwrap().unwrap()
}

mod parsing {
    use super::*;

    #[test]
    fn empty_object_has_no_sections() {
        let config = raw("{}");

        assert!(config.global_settings.is_none());
        assert!(config.directories_to_sync.is_none());
        assert!(config.files_to_sync.is_none());
    }

    #[test]
    fn camel_case_fields() {
        let config = raw(
            r#"{
                "globalSettings": { "logLevel": "Debug", "reloadConfigEnabled": false },
                "directoriesToSync": [
                    {
                        "source": "C:/data",
                        "destination": "D:/backup",
                        "includeSubdirectories": false,
                        "syncOnChange": true,
                        "syncIntervalMinutes": 15,
                        "enableGitIgnore": true,
                        "fileMask": "*.txt",
                        "excludeMask": "*.tmp"
                    }
                ],
                "filesToSync": [
                    { "source": "a.txt", "destination": "b.txt", "syncDelay": 5 }
                ]
            }"#,
        );

        let global = config.global_settings.unwrap();
        assert_eq!(global.log_level.as_deref(), Some("Debug"));
        assert_eq!(global.reload_config_enabled, Some(false));

        let directories = config.directories_to_sync.unwrap();
        assert_eq!(directories.len(), 1);
        let dir = &directories[0];
        assert_eq!(dir.source.as_deref(), Some("C:/data"));
        assert_eq!(dir.destination.as_deref(), Some("D:/backup"));
        assert_eq!(dir.include_subdirectories, Some(false));
        assert_eq!(dir.sync_on_change, Some(true));
        assert_eq!(dir.sync_interval_minutes, Some(15));
        assert_eq!(dir.enable_git_ignore, Some(true));
        assert_eq!(dir.file_mask.as_deref(), Some("*.txt"));
        assert_eq!(dir.exclude_mask.as_deref(), Some("*.tmp"));

        let files = config.files_to_sync.unwrap();
        assert_eq!(files[0].sync_delay, Some(5));
        assert_eq!(files[0].sync_interval_minutes, None);
    }

    #[test]
    fn field_names_are_case_insensitive() {
        let config = raw(
            r#"{
                "GlobalSettings": { "LOGLEVEL": "Warning" },
                "DIRECTORIESTOSYNC": [ { "Source": "a", "DESTINATION": "b" } ],
                "filestosync": [ { "SOURCE": "c", "destination": "d", "SyncOnChange": true } ]
            }"#,
        );

        assert_eq!(
            config.global_settings.unwrap().log_level.as_deref(),
            Some("Warning")
        );
        let dir = &config.directories_to_sync.unwrap()[0];
        assert_eq!(dir.source.as_deref(), Some("a"));
        assert_eq!(dir.destination.as_deref(), Some("b"));
        assert_eq!(config.files_to_sync.unwrap()[0].sync_on_change, Some(true));
    }

    #[test]
    fn values_keep_their_case() {
        let config = raw(r#"{ "directoriesToSync": [ { "source": "C:/Data", "destination": "X" } ] }"#);
        assert_eq!(
            config.directories_to_sync.unwrap()[0].source.as_deref(),
            Some("C:/Data")
        );
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let config = raw(r#"{ "comment": "hi", "globalSettings": { "theme": "dark" } }"#);
        assert!(config.global_settings.unwrap().log_level.is_none());
    }

    #[test]
    fn null_sections_are_absent() {
        let config = raw(r#"{ "globalSettings": null, "directoriesToSync": null }"#);

        assert!(config.global_settings.is_none());
        assert!(config.directories_to_sync.is_none());
    }

    #[test]
    fn entry_order_is_preserved() {
        let config = raw(
            r#"{ "directoriesToSync": [
                { "source": "z" }, { "source": "a" }, { "source": "m" }
            ] }"#,
        );

        let sources: Vec<_> = config
            .directories_to_sync
            .unwrap()
            .into_iter()
            .map(|d| d.source.unwrap())
            .collect();
        assert_eq!(sources, ["z", "a", "m"]);
    }

    #[test]
    fn byte_order_mark_is_tolerated() {
        let mut bytes = b"\xEF\xBB\xBF".to_vec();
        bytes.extend_from_slice(br#"{ "globalSettings": { "logLevel": "Error" } }"#);

        let config = RawConfiguration::from_slice(&bytes).unwrap().unwrap();
        assert_eq!(
            config.global_settings.unwrap().log_level.as_deref(),
            Some("Error")
        );
    }
}

mod null_root {
    use super::*;

    #[test]
    fn null_document_decodes_to_none() {
        assert!(RawConfiguration::parse("null").unwrap().is_none());
    }
}

mod errors {
    use super::*;

    #[test]
    fn invalid_json_fails() {
        assert!(RawConfiguration::parse("{ invalid json }").is_err());
    }

    #[test]
    fn empty_document_fails() {
        assert!(RawConfiguration::parse("").is_err());
    }

    #[test]
    fn wrong_section_type_fails() {
        assert!(RawConfiguration::parse(r#"{ "directoriesToSync": 5 }"#).is_err());
    }

    #[test]
    fn wrong_field_type_fails() {
        assert!(RawConfiguration::parse(r#"{ "globalSettings": { "reloadConfigEnabled": "yes" } }"#).is_err());
    }

    #[test]
    fn out_of_range_integer_fails() {
        assert!(
            RawConfiguration::parse(
                r#"{ "filesToSync": [ { "syncDelay": 99999999999 } ] }"#
            )
            .is_err()
        );
    }

    #[test]
    fn non_object_root_fails() {
        assert!(RawConfiguration::parse("[]").is_err());
        assert!(RawConfiguration::parse("42").is_err());
    }

    #[test]
    fn invalid_utf8_fails() {
        assert!(RawConfiguration::from_slice(b"{ \"globalSettings\": \xff }").is_err());
    }
}
