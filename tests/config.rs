#[cfg(test)]
mod tests {
    use chrono::Weekday;
    use shiftly::libs::config::Config;
    use shiftly::libs::settings::{Settings, SettingsConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the data directory at a temporary home for the duration of a test.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        first_day_of_week: i64,
        timesheet_recipients: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                first_day_of_week: 0,
                timesheet_recipients: "timesheet@example.com, admin@example.com".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.is_none());
        assert_eq!(config.settings().first_day_of_week(), Weekday::Mon);
    }

    #[test]
    fn test_invalid_stored_settings_fall_back_to_defaults() {
        let config = Config {
            settings: Some(SettingsConfig {
                first_day_of_week: 9,
                timesheet_recipients: "admin@example.com".to_string(),
            }),
        };
        assert_eq!(config.settings(), Settings::default());
    }

    #[test]
    fn test_config_json_shape() {
        let config: Config =
            serde_json::from_str(r#"{"settings":{"firstDayOfWeek":5,"timesheetRecipients":"a@example.com"}}"#).unwrap();
        assert_eq!(config.settings().first_day_of_week(), Weekday::Fri);
        assert_eq!(serde_json::to_string(&Config::default()).unwrap(), "{}");
    }

    // Reading, saving and deleting share one test so the HOME override is not raced.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_read_and_delete_config(ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        let settings = Settings::new(ctx.first_day_of_week, &ctx.timesheet_recipients).unwrap();
        let config = Config {
            settings: Some(settings.to_config()),
        };
        config.save().unwrap();

        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
        let read_settings = read_config.settings();
        assert_eq!(read_settings.first_day_of_week(), Weekday::Sun);
        assert_eq!(read_settings.recipients(), vec!["timesheet@example.com", "admin@example.com"]);

        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
