use economic_dashboard_wasm::application::DashboardConfig;
use economic_dashboard_wasm::domain::errors::DashboardError;
use insta::assert_json_snapshot;

#[test]
fn default_config_snapshot() {
    assert_json_snapshot!(DashboardConfig::default(), @r###"
    {
      "theme_storage_key": "theme",
      "dark_class": "dark",
      "loading_delay_ms": 1500,
      "title": "Malaysia Economic",
      "subtitle": "Data Dashboard"
    }
    "###);
}

#[test]
fn override_parses_and_validates() {
    let config = DashboardConfig::from_json(
        r#"{"theme_storage_key": "dash.theme", "loading_delay_ms": 250}"#,
    )
    .unwrap();
    assert_eq!(config.theme_storage_key, "dash.theme");
    assert_eq!(config.loading_delay_ms, 250);
    assert_eq!(config.title, "Malaysia Economic");

    let err = DashboardConfig::from_json("not json").unwrap_err();
    assert!(matches!(err, DashboardError::InvalidConfig(_)));
}
