//! File sink behaviour through the dispatcher.

use catlog::output::{FileOutput, Location, LogRecord};
use catlog::{Category, CategoryFilter, LogDispatcher, Sink};
use chrono::{NaiveDateTime, TimeZone, Utc};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn file_dispatcher(dir: &TempDir, categories: impl Into<CategoryFilter>) -> LogDispatcher {
    LogDispatcher::builder()
        .sink(Sink::File)
        .categories(categories)
        .file_path(dir.path().join("log.txt"))
        .build()
}

fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .split_inclusive('\n')
        .map(ToString::to_string)
        .collect()
}

/// Splits off and validates the `[YYYY-MM-DD HH:MM:SS] ` prefix.
fn strip_timestamp(line: &str) -> &str {
    let (prefix, rest) = line.split_at(22);
    assert!(prefix.ends_with("] "), "bad prefix in {line:?}");
    NaiveDateTime::parse_from_str(prefix.trim_end(), "[%Y-%m-%d %H:%M:%S]")
        .unwrap_or_else(|e| panic!("bad timestamp in {line:?}: {e}"));
    rest
}

#[test]
fn success_line_has_timestamp_and_plain_tag() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, Category::Success);

    dispatcher.success("init");

    let lines = read_lines(dispatcher.file_path());
    assert_eq!(lines.len(), 1);
    assert_eq!(strip_timestamp(&lines[0]), "[SUCCESS]: init \n");
}

#[test]
fn debug_line_layout() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, CategoryFilter::All);

    dispatcher.debug("load", &[&"retries", &3]);

    let lines = read_lines(dispatcher.file_path());
    assert_eq!(strip_timestamp(&lines[0]), "[DEBUG]: load : retries 3 \n");
}

#[test]
fn error_line_omits_file_name() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, CategoryFilter::All);

    dispatcher.error("a.cpp", "foo", 10, &[&"bad", &"input"]);

    let lines = read_lines(dispatcher.file_path());
    let body = strip_timestamp(&lines[0]);
    assert_eq!(body, "[ERROR]: 10 : foo : bad input \n");
    assert!(!body.contains("a.cpp"));
    assert!(!body.contains('\x1b'));
}

#[test]
fn info_line_has_no_timestamp() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, Category::Info);

    dispatcher.info(&[&1, &2, &3]);

    assert_eq!(read_lines(dispatcher.file_path()), vec!["1 2 3 \n"]);
}

#[test]
fn records_are_appended_across_dispatchers() {
    let dir = TempDir::new().unwrap();

    file_dispatcher(&dir, CategoryFilter::All).info(&[&"one"]);
    let dispatcher = file_dispatcher(&dir, CategoryFilter::All);
    dispatcher.info(&[&"two"]);

    assert_eq!(read_lines(dispatcher.file_path()), vec!["one \n", "two \n"]);
}

#[test]
fn filtered_category_never_touches_file() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, Category::Error);

    dispatcher.info(&[&"hidden"]);
    dispatcher.debug("f", &[&"hidden"]);
    dispatcher.success("f");

    assert!(!dispatcher.file_path().exists());
}

#[test]
fn empty_filter_suppresses_everything() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, CategoryFilter::none());

    dispatcher.info(&[&"x"]);
    dispatcher.debug("f", &[&"x"]);
    dispatcher.error("a.rs", "f", 1, &[&"x"]);
    dispatcher.success("f");

    assert!(!dispatcher.file_path().exists());
}

#[test]
fn none_sink_suppresses_everything() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, CategoryFilter::All);
    dispatcher.set_sink(Sink::None);

    dispatcher.info(&[&"x"]);
    dispatcher.error("a.rs", "f", 1, &[&"x"]);

    assert!(!dispatcher.file_path().exists());
}

#[test]
fn unopenable_file_is_silently_dropped() {
    let dir = TempDir::new().unwrap();
    let dispatcher = LogDispatcher::builder()
        .sink(Sink::File)
        .file_path(dir.path().join("missing").join("log.txt"))
        .build();

    dispatcher.info(&[&"dropped"]);
    dispatcher.error("a.rs", "f", 1, &[&"dropped"]);

    assert!(!dispatcher.file_path().exists());
}

#[test]
fn every_category_writes_with_wildcard() {
    let dir = TempDir::new().unwrap();
    let dispatcher = file_dispatcher(&dir, CategoryFilter::All);

    dispatcher.info(&[&"i"]);
    dispatcher.debug("f", &[&"d"]);
    dispatcher.error("a.rs", "f", 2, &[&"e"]);
    dispatcher.success("f");

    let lines = read_lines(dispatcher.file_path());
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.ends_with(" \n") && !l.ends_with("\n\n")));
}

#[test]
fn format_content_uses_record_timestamp() {
    let at = Utc.with_ymd_and_hms(2023, 12, 31, 23, 59, 58).unwrap();
    let record = LogRecord::new(Category::Success, Vec::new())
        .at(at)
        .located(Location::function("shutdown"));

    let output = FileOutput::default();
    assert_eq!(output.path(), Path::new("log.txt"));
    assert_eq!(
        output.format_content(&record),
        "[2023-12-31 23:59:58] [SUCCESS]: shutdown \n"
    );
}

#[test]
fn format_content_ignores_timestamp_on_info() {
    let at = Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap();
    let record = LogRecord::new(Category::Info, vec!["plain".to_string()]).at(at);

    assert_eq!(FileOutput::default().format_content(&record), "plain \n");
}
