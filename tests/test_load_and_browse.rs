use courseplan::session::Session;
use courseplan::shell::{render_course_detail, render_course_list};
use courseplan::Error;
use std::path::PathBuf;

fn write_fixture(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_load_and_browse_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "courses.csv",
        "CS101, Intro to CS, \nCS201, Data Structures, CS101\nbad line only one field\n",
    );

    let mut session = Session::new();
    let stats = session.load_file(&path).unwrap();
    assert_eq!(stats.loaded, 2);
    assert_eq!(stats.skipped, 1);

    let catalog = session.catalog().unwrap();
    assert_eq!(catalog.len(), 2);

    // List: ascending course-number order, one "number, title" line each
    assert_eq!(
        render_course_list(catalog),
        "CS101, Intro to CS\nCS201, Data Structures\n"
    );

    // Detail: prerequisites line only when prerequisites exist
    let intro = catalog.get("CS101").unwrap();
    assert_eq!(render_course_detail(intro), "CS101, Intro to CS\n");

    let structures = catalog.get("CS201").unwrap();
    assert_eq!(
        render_course_detail(structures),
        "CS201, Data Structures\nPrerequisites: CS101\n"
    );
}

#[test]
fn test_failed_load_names_file_and_preserves_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "courses.csv", "CS101, Intro to CS\n");

    let mut session = Session::new();
    session.load_file(&path).unwrap();

    let missing = dir.path().join("nonexistent.csv");
    let err = session.load_file(&missing).unwrap_err();
    assert!(err.to_string().contains("nonexistent.csv"));

    // Prior catalog is untouched and still browsable
    let catalog = session.catalog().unwrap();
    assert!(catalog.contains("CS101"));
}

#[test]
fn test_browse_before_load_is_an_advisory() {
    let session = Session::new();
    let err = session.catalog().unwrap_err();
    assert!(matches!(err, Error::NotLoaded));
    assert!(err.to_string().contains("Load Data"));
}

#[test]
fn test_unresolved_prerequisites_display_as_bare_numbers() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(&dir, "courses.csv", "CS300, Algorithms, CS999\n");

    let mut session = Session::new();
    session.load_file(&path).unwrap();

    // CS999 is not in the catalog; it still displays, unresolved.
    let catalog = session.catalog().unwrap();
    let course = catalog.get("CS300").unwrap();
    assert!(!catalog.contains("CS999"));
    assert_eq!(
        render_course_detail(course),
        "CS300, Algorithms\nPrerequisites: CS999\n"
    );
}

#[test]
fn test_list_order_is_byte_wise_not_numeric() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_fixture(
        &dir,
        "courses.csv",
        "CS50, Systems\nCS101, Intro to CS\nCS7, Seminar\n",
    );

    let mut session = Session::new();
    session.load_file(&path).unwrap();

    let numbers = session.catalog().unwrap().numbers();
    assert_eq!(numbers, vec!["CS101", "CS50", "CS7"]);
}
