// Integration tests for process-wide logging initialization
//
// The logging state is global to the test process, so the whole lifecycle
// is exercised in order from a single test.

use bootlog::errors::ErrorCode;
use bootlog::level::Severity;
use bootlog::logging::{self, Handler, LogFormat, LoggingConfig};

#[test]
fn test_initialization_lifecycle() {
    assert_eq!(logging::threshold(), None);

    // Invalid levels fail before anything is configured
    for bad in ["VERBOSE", "", "123", "NOTALEVEL"] {
        let err = bootlog::bootstrap(["bootlog", "--loglevel", bad]).unwrap_err();
        assert!(err.to_string().contains(bad));

        let err = err.downcast::<bootlog::errors::BootlogError>().unwrap();
        assert_eq!(err.error_code(), ErrorCode::InvalidLogLevel);
        assert_eq!(logging::threshold(), None);
        assert_eq!(logging::active(), None);
    }

    // First valid call installs the subscriber
    let config = bootlog::bootstrap(["bootlog", "--loglevel", "DEBUG"]).unwrap();
    assert_eq!(config.level, Severity::Debug);
    assert_eq!(logging::threshold(), Some(Severity::Debug));
    assert_eq!(logging::active(), Some(config));
    assert!(tracing::enabled!(tracing::Level::DEBUG));
    assert!(!tracing::enabled!(tracing::Level::TRACE));

    // Same level again, in any case, is a no-op
    for same in ["DEBUG", "debug", "Debug"] {
        let again = bootlog::bootstrap(["bootlog", "--loglevel", same]).unwrap();
        assert_eq!(again, config);
    }
    assert_eq!(logging::init(&config).unwrap(), Handler::Installed);
    assert_eq!(logging::threshold(), Some(Severity::Debug));

    // A different configuration is refused and the active one kept
    let err = logging::init(&LoggingConfig::default()).unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::AlreadyInitialized);

    let err = logging::init(&LoggingConfig {
        level: Severity::Debug,
        format: LogFormat::Json,
    })
    .unwrap_err();
    assert_eq!(err.error_code(), ErrorCode::AlreadyInitialized);

    assert_eq!(logging::active(), Some(config));
}
