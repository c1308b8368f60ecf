//! Settings loaded from disk drive evaluation and search.

use std::fs;

use dovetail_config::{ConfigError, Settings};
use dovetail_core::generators;
use dovetail_engine::semidecide::reaches_value;
use dovetail_engine::{Schedule, Search, SearchLimit};

#[test]
fn configured_policy_and_limit_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "[evaluation]\non_undefined = \"continue\"\n\n[search]\nmax_rounds = 8\nschedule = \"pairing\"\n",
    )
    .unwrap();

    let settings = Settings::load_from(&path).unwrap();
    assert_eq!(settings.schedule, Schedule::Pairing);

    let undef = generators::undefined();
    assert_eq!(undef.evaluate(4, None, settings.on_undefined), Ok(None));

    let ident = generators::identity();
    let search = Search::new(&ident)
        .schedule(settings.schedule)
        .limit(settings.limit);
    assert_eq!(reaches_value(search, 100), None);

    let search = Search::new(&ident)
        .schedule(settings.schedule)
        .limit(settings.limit);
    assert_eq!(reaches_value(search, 3).map(|w| w.input), Some(3));
}

#[test]
fn malformed_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[search\nmax_rounds = 8\n").unwrap();

    let err = Settings::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn defaults_search_without_limit() {
    assert_eq!(Settings::default().limit, SearchLimit::Unbounded);
}

#[test]
fn broken_file_is_not_replaced_by_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[evaluation]\non_undefined = \"continue\"\nmax_rounds = 3\n").unwrap();

    let err = Settings::load_or_default(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));

    let err = anyhow::Error::new(err).context("loading dovetail config");
    let chain = format!("{err:#}");
    assert!(chain.starts_with("loading dovetail config: failed to parse config at"));
}

#[test]
fn absent_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert_eq!(Settings::load_or_default(Some(missing.as_path())).unwrap(), Settings::default());
    assert_eq!(Settings::load_or_default(None).unwrap(), Settings::default());
}
