// File command tests against a real temporary directory

use filescript::interpreter::engine::{ExecOptions, Interpreter};
use filescript::memory::value::Value;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Script string literal for a path
fn quoted(path: &Path) -> String {
    let raw = path.to_string_lossy();
    format!("\"{}\"", raw.replace('\\', "\\\\").replace('"', "\\\""))
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

fn run(source: &str) -> Interpreter {
    filescript::execute(source, ExecOptions::default()).expect("Execution failed")
}

fn number(interp: &Interpreter, name: &str) -> f64 {
    interp
        .environment()
        .get(name)
        .and_then(Value::as_number)
        .expect("variable is not a number")
}

/// A directory holding `a.txt` (5 bytes) and `b.txt` (3 bytes)
fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::write(dir.path().join("b.txt"), "abc").unwrap();
    dir
}

#[test]
fn test_count_files_and_check_space() {
    let dir = fixture();
    let root = quoted(dir.path());
    let interp = run(&format!(
        "{{ var n = CountFiles({root}) var size = CheckSpace({root}) }}"
    ));

    assert_eq!(number(&interp, "n"), 2.0);
    assert_eq!(number(&interp, "size"), 8.0);
    assert_eq!(
        interp.terminal().get_output(),
        vec![
            format!("Files in {}: 2", display(dir.path())),
            format!("Space used by {}: 8 bytes", display(dir.path())),
        ]
    );
}

#[test]
fn test_check_space_is_recursive() {
    let dir = fixture();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("nested").join("c.txt"), "1234567").unwrap();

    let interp = run(&format!("{{ var size = CheckSpace({}) }}", quoted(dir.path())));
    assert_eq!(number(&interp, "size"), 15.0);
}

#[test]
fn test_count_files_on_missing_directory() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let interp = run(&format!(
        "{{ var n = CountFiles({}) var after = 1 }}",
        quoted(&missing)
    ));

    assert_eq!(number(&interp, "n"), 0.0);
    assert_eq!(number(&interp, "after"), 1.0);
    assert_eq!(
        interp.terminal().get_errors(),
        vec![format!("Directory not found: {}", display(&missing))]
    );
}

#[test]
fn test_failed_query_inside_expression() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let interp = run(&format!("{{ var n = CheckSpace({}) + 1 }}", quoted(&missing)));
    assert_eq!(number(&interp, "n"), 1.0);
}

#[test]
fn test_delete_missing_file_continues() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("ghost.txt");
    let interp = run(&format!(
        "{{ DeleteFile({}) var after = 1 }}",
        quoted(&missing)
    ));

    assert_eq!(number(&interp, "after"), 1.0);
    assert_eq!(
        interp.terminal().get_errors(),
        vec![format!("File not found: {}", display(&missing))]
    );
}

#[test]
fn test_delete_file() {
    let dir = fixture();
    let target = dir.path().join("a.txt");
    let interp = run(&format!("{{ DeleteFile({}) }}", quoted(&target)));

    assert!(!target.exists());
    assert_eq!(
        interp.terminal().get_output(),
        vec![format!("Deleted: {}", display(&target))]
    );
}

#[test]
fn test_copy_and_rename() {
    let dir = fixture();
    let a = dir.path().join("a.txt");
    let copy = dir.path().join("copy.txt");
    let renamed = dir.path().join("renamed.txt");

    let interp = run(&format!(
        "{{ CopyFile({a}, {copy}) RenameFile({copy}, {renamed}) }}",
        a = quoted(&a),
        copy = quoted(&copy),
        renamed = quoted(&renamed),
    ));

    assert!(a.exists());
    assert!(!copy.exists());
    assert_eq!(fs::read_to_string(&renamed).unwrap(), "hello");
    assert_eq!(
        interp.terminal().get_output(),
        vec![
            format!("Copied: {} -> {}", display(&a), display(&copy)),
            format!("Renamed: {} -> {}", display(&copy), display(&renamed)),
        ]
    );
}

#[test]
fn test_move_round_trip_restores_space() {
    let dir = fixture();
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();
    let a = dir.path().join("a.txt");
    let moved = sub.join("a.txt");

    let interp = run(&format!(
        r#"{{
            var before = CheckSpace({sub})
            MoveFile({a}, {moved})
            var during = CheckSpace({sub})
            MoveFile({moved}, {a})
            var after = CheckSpace({sub})
        }}"#,
        sub = quoted(&sub),
        a = quoted(&a),
        moved = quoted(&moved),
    ));

    assert_eq!(number(&interp, "before"), 0.0);
    assert_eq!(number(&interp, "during"), 5.0);
    assert_eq!(number(&interp, "after"), 0.0);
    assert_eq!(fs::read_to_string(&a).unwrap(), "hello");
    assert!(!moved.exists());
}

#[test]
fn test_list_files_sorted() {
    let dir = fixture();
    fs::write(dir.path().join("0-first.txt"), "").unwrap();
    let interp = run(&format!("{{ ListFiles({}) }}", quoted(dir.path())));

    assert_eq!(
        interp.terminal().get_output(),
        vec![
            format!("Files in {}:", display(dir.path())),
            "  0-first.txt".to_string(),
            "  a.txt".to_string(),
            "  b.txt".to_string(),
        ]
    );
}

#[test]
fn test_list_files_on_a_file_reports() {
    let dir = fixture();
    let file = dir.path().join("a.txt");
    let interp = run(&format!("{{ ListFiles({}) }}", quoted(&file)));

    assert!(interp.terminal().get_output().is_empty());
    assert_eq!(interp.terminal().get_errors().len(), 1);
}

#[test]
fn test_paths_built_from_variables() {
    let dir = fixture();
    let interp = run(&format!(
        r#"{{
            var root = {}
            var name = "b"
            DeleteFile(root + "/" + name + ".txt")
            var left = CountFiles(root)
        }}"#,
        quoted(dir.path())
    ));

    assert_eq!(number(&interp, "left"), 1.0);
    assert!(!dir.path().join("b.txt").exists());
}

#[test]
fn test_loop_over_count() {
    let dir = tempdir().unwrap();
    let seed = dir.path().join("seed");
    fs::write(&seed, "x").unwrap();

    let interp = run(&format!(
        r#"{{
            var i = 0
            for CountFiles({root}) < 3 {{
                CopyFile({seed}, {root} + "/copy" + i)
                i = i + 1
            }}
        }}"#,
        root = quoted(dir.path()),
        seed = quoted(&seed),
    ));

    assert_eq!(number(&interp, "i"), 2.0);
    assert!(dir.path().join("copy0").exists());
    assert!(dir.path().join("copy1").exists());
}

#[test]
fn test_wrong_argument_count_is_fatal() {
    let dir = fixture();
    let target = dir.path().join("a.txt");
    let result = filescript::execute(
        &format!("{{ DeleteFile({t}, {t}) }}", t = quoted(&target)),
        ExecOptions::default(),
    );

    let err = match result {
        Ok(_) => panic!("expected an argument count error"),
        Err(e) => e,
    };
    assert_eq!(err.to_string(), "Runtime error: DeleteFile expects 1 argument, got 2 at line 1");
    assert!(target.exists());
}

#[test]
fn test_wait() {
    let interp = run("{ Wait(1) Wait(\"soon\") var after = 1 }");

    assert_eq!(interp.terminal().get_output(), vec!["Waiting 1 ms..."]);
    assert_eq!(
        interp.terminal().get_errors(),
        vec!["Error running Wait: invalid duration \"soon\": expected a non-negative number of milliseconds"]
    );
    assert_eq!(number(&interp, "after"), 1.0);
}
