use economic_dashboard_wasm::domain::logging::{LogLevel, MemoryLogger, init_logger};
use economic_dashboard_wasm::domain::navigation::ViewId;

// Only test in this binary: the global logger can be installed once
#[test]
fn unknown_view_id_is_logged_at_warn() {
    let logger = MemoryLogger::new();
    init_logger(Box::new(logger.clone()));

    assert_eq!(ViewId::parse_or_default("gdp"), ViewId::Gdp);
    assert!(logger.entries().iter().all(|e| e.level != LogLevel::Warn));

    assert_eq!(ViewId::parse_or_default("reports"), ViewId::Overview);
    let warnings: Vec<_> = logger
        .entries()
        .into_iter()
        .filter(|e| e.level == LogLevel::Warn)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].message.contains("'reports'"));
    assert_eq!(warnings[0].component.to_string(), "CTL:Navigation");
}
