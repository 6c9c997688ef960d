use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use isort::sorter::{FileSorter, SortOutcome};

fn write_ruby(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("sample.rb");
    fs::write(&path, content).expect("Failed to write test file");
    path
}

fn sort_simple(path: &PathBuf) -> SortOutcome {
    FileSorter::new(path)
        .sort_imports()
        .expect("sorting should succeed")
}

#[test]
fn test_merged_alphabetical_block() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(
        &dir,
        "require 'json'\n\
         require_relative 'b_file'\n\
         require 'csv'\n\
         include SomeModule\n\
         require_relative 'a_file'\n",
    );

    sort_simple(&path);

    // One merged set: `include` sorts before the `require` family.
    let expected = "include SomeModule\n\
                    require 'csv'\n\
                    require 'json'\n\
                    require_relative 'a_file'\n\
                    require_relative 'b_file'\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_remainder_follows_immediately_without_blank() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(
        &dir,
        "require 'b'\n\
         puts 'x'\n\
         require 'a'\n",
    );

    sort_simple(&path);

    let expected = "require 'a'\n\
                    require 'b'\n\
                    puts 'x'\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_only_three_kinds_recognized() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(
        &dir,
        "using SomeRefinement\n\
         extend AnotherModule\n\
         require 'a'\n",
    );

    sort_simple(&path);

    // extend/autoload/using are not simple-mode declarations.
    let expected = "require 'a'\n\
                    using SomeRefinement\n\
                    extend AnotherModule\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_indented_declarations_match_and_sort_by_raw_text() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(
        &dir,
        "require 'a'\n\
         \x20\x20require 'b'\n",
    );

    sort_simple(&path);

    // Raw line text sorts: leading whitespace orders before letters.
    let expected = "\x20\x20require 'b'\n\
                    require 'a'\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_duplicates_not_collapsed() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(
        &dir,
        "require 'json'\n\
         require 'csv'\n\
         require 'json'\n",
    );

    sort_simple(&path);

    let expected = "require 'csv'\n\
                    require 'json'\n\
                    require 'json'\n";
    assert_eq!(fs::read_to_string(&path).unwrap(), expected);
}

#[test]
fn test_no_declarations_is_a_noop() {
    let dir = TempDir::new().unwrap();
    let path = write_ruby(&dir, "puts 'Hello, world!'");

    let outcome = sort_simple(&path);

    assert_eq!(outcome, SortOutcome::Unchanged);
    assert_eq!(fs::read_to_string(&path).unwrap(), "puts 'Hello, world!'");
}
