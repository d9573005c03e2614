use alhootah::infrastructure::observability::TracingConfig;
use alhootah::presentation::Environment;
use alhootah::presentation::config::LoggingSettings;

#[test]
fn given_logging_settings_when_building_config_then_settings_are_carried_over() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.filter, "warn");
}
