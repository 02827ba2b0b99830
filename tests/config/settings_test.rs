#[cfg(test)]
mod tests {
    use semfilter::config::{Settings, SettingsError};
    use semfilter::filter::WhereFilterParser;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[naming]
separator = "::"
metric_time = "ds"

[intersection]
parallel = true
"#
        )
        .unwrap();

        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.naming.separator, "::");
        assert!(settings.intersection.parallel);

        let parser = WhereFilterParser::from_settings(&settings);
        let sets = parser
            .parse_call_parameter_sets("{{ Dimension('user::country') }} AND {{ TimeDimension('ds', 'day') }}")
            .unwrap();
        assert_eq!(sets.dimension_call_parameter_sets[0].entity_path[0].element_name, "user");
        assert_eq!(sets.time_dimension_call_parameter_sets[0].time_dimension_reference.element_name, "ds");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Settings::load(dir.path().join("semfilter.toml"));
        assert!(matches!(result, Err(SettingsError::FileNotFound(_))));
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[naming]\nseparator = 3").unwrap();
        let result = Settings::load(file.path());
        assert!(matches!(result, Err(SettingsError::ParseError(_))));
    }
}
