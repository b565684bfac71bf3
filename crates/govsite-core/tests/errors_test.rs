use govsite_core::errors::*;

#[test]
fn unknown_option_carries_field_and_value() {
    let err = EstimatorError::UnknownOption {
        field: "coverage",
        value: "12x6".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("coverage"));
    assert!(msg.contains("12x6"));
    assert_eq!(err.error_code(), "ESTIMATOR_ERROR");
}

#[test]
fn generate_disabled_has_dedicated_code() {
    let err = EstimatorError::GenerateDisabled {
        missing: "industry, frameworks".into(),
    };
    assert!(err.to_string().contains("industry, frameworks"));
    assert_eq!(err.error_code(), "GENERATE_DISABLED");
}

#[test]
fn export_error_codes() {
    let nothing = ExportError::NothingToExport {
        scenario: "assessment-planner".into(),
    };
    assert_eq!(nothing.error_code(), "NOTHING_TO_EXPORT");
    assert!(nothing.to_string().contains("assessment-planner"));

    let write = ExportError::WriteFailed {
        path: "/nope/brief.txt".into(),
        message: "permission denied".into(),
    };
    assert_eq!(write.error_code(), "EXPORT_ERROR");
    assert!(write.to_string().contains("permission denied"));
}

#[test]
fn form_errors_share_one_code() {
    for err in [
        FormError::MissingField { field: "email" },
        FormError::AlreadyInFlight,
        FormError::NoRuntime,
        FormError::Unmounted,
    ] {
        assert_eq!(err.error_code(), "FORM_ERROR");
    }
    assert!(FormError::MissingField { field: "email" }
        .to_string()
        .contains("email"));
}

#[test]
fn config_error_code() {
    let err = ConfigError::FileNotFound {
        path: "govsite.toml".into(),
    };
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}
