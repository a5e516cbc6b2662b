// SPDX-License-Identifier: MPL-2.0
use promptlens::app::workflow::{Phase, Workflow};
use promptlens::config::{self, Config};
use promptlens::error::UploadError;
use promptlens::extraction::record::{MetadataRecord, FIELD_PLACEHOLDER};
use promptlens::i18n::fluent::I18n;
use tempfile::tempdir;

fn full_record() -> MetadataRecord {
    serde_json::from_str(
        r#"{
            "prompt": "a fox in the snow --ar 16:9",
            "width": 1456,
            "height": 816,
            "version": "6.1",
            "profile": "k9x2p",
            "job_id": "7f3e9a10-52bc-4d8e-9b0f-6a1c2d3e4f50",
            "created_date": "2025-02-14T09:41:00",
            "author": "renard#0042",
            "source_model": "MIDJOURNEY"
        }"#,
    )
    .expect("full record should deserialize")
}

#[test]
fn failed_upload_then_successful_upload_replaces_error_with_table() {
    let mut workflow = Workflow::default();

    // Upload a PNG; the server responds 500 with a structured error body.
    let first = workflow.begin();
    assert_eq!(workflow.phase(), Phase::Loading);
    let error = UploadError::status_from_body(500, br#"{"error": "Internal server error: boom"}"#);
    assert!(workflow.finish(first, Err(error)));

    // Error banner territory: a message is present, no rows are shown.
    assert_eq!(workflow.phase(), Phase::Error);
    let message = workflow
        .error()
        .and_then(UploadError::server_message)
        .expect("server message should be extracted");
    assert!(!message.is_empty());
    assert!(workflow.records().is_empty());

    // Second upload; the server responds 200 with a full record.
    let second = workflow.begin();
    assert!(
        workflow.error().is_none(),
        "error banner disappears when a new upload starts"
    );
    assert!(workflow.finish(second, Ok(full_record())));

    // Exactly one row, all nine columns populated.
    assert_eq!(workflow.phase(), Phase::Success);
    assert_eq!(workflow.records().len(), 1);
    let record = &workflow.records()[0];
    let columns = [
        record.prompt.clone(),
        record.width.to_string(),
        record.height.to_string(),
        record.origin_text(),
        record.version_text(),
        record.profile_text(),
        record.job_id_text(),
        record.date_text(),
        record.author_text(),
    ];
    assert_eq!(columns.len(), 9);
    for column in &columns {
        assert_ne!(column, FIELD_PLACEHOLDER);
        assert!(!column.is_empty());
    }
}

#[test]
fn minimal_success_body_renders_placeholders_in_optional_columns() {
    let mut workflow = Workflow::default();
    let request = workflow.begin();

    let record: MetadataRecord =
        serde_json::from_str(r#"{"prompt":"a cat","width":512,"height":512}"#)
            .expect("minimal body should deserialize");
    assert!(workflow.finish(request, Ok(record)));

    let record = &workflow.records()[0];
    assert_eq!(record.prompt, "a cat");
    assert_eq!(record.width, 512);
    assert_eq!(record.height, 512);
    for column in [
        record.origin_text(),
        record.version_text(),
        record.profile_text(),
        record.job_id_text(),
        record.date_text(),
        record.author_text(),
    ] {
        assert_eq!(column, FIELD_PLACEHOLDER);
    }
}

#[test]
fn stale_completion_never_overwrites_a_newer_request() {
    let mut workflow = Workflow::default();

    let first = workflow.begin();
    let second = workflow.begin();

    // The superseded request resolves last but must be discarded.
    assert!(workflow.finish(second, Ok(full_record())));
    assert!(!workflow.finish(first, Err(UploadError::Network("timed out".to_string()))));

    assert_eq!(workflow.phase(), Phase::Success);
    assert_eq!(workflow.records().len(), 1);
}

#[test]
fn theme_preference_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    assert!(cfg.general.dark_mode.is_none(), "no preference until first toggle");

    cfg.general.dark_mode = Some(true);
    config::save_to_path(&cfg, &config_path).expect("Failed to write config file");

    let (loaded, warning) = config::load_from_path(&config_path);
    assert!(warning.is_none());
    assert_eq!(loaded.general.dark_mode, Some(true));

    // Toggling once from dark persists false.
    let mut toggled = loaded;
    toggled.general.dark_mode = Some(false);
    config::save_to_path(&toggled, &config_path).expect("Failed to write config file");
    let (reloaded, _) = config::load_from_path(&config_path);
    assert_eq!(reloaded.general.dark_mode, Some(false));
}

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let mut initial = Config::default();
    initial.general.language = Some("en-US".to_string());
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config file");

    let (loaded_initial, _) = config::load_from_path(&config_path);
    let i18n_en = I18n::new(None, None, &loaded_initial);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("theme-toggle-night"), "🌙 Night");

    // 2. Change config to fr
    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &config_path).expect("Failed to write french config file");

    let (loaded_french, _) = config::load_from_path(&config_path);
    let i18n_fr = I18n::new(None, None, &loaded_french);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("theme-toggle-night"), "🌙 Nuit");

    dir.close().expect("Failed to close temporary directory");
}
