use super::*;

fn lines(numbers: &[u32]) -> Vec<ChangedLine> {
    numbers
        .iter()
        .map(|&n| ChangedLine::new(n, format!("line {n}")))
        .collect()
}

#[test]
fn changed_line_strips_trailing_terminator() {
    assert_eq!(ChangedLine::new(1, "foo\n").content, "foo");
    assert_eq!(ChangedLine::new(1, "foo\r\n").content, "foo");
    assert_eq!(ChangedLine::new(1, "foo\r").content, "foo");
    assert_eq!(ChangedLine::new(1, "foo").content, "foo");
}

#[test]
fn affected_file_normalizes_path() {
    let file = AffectedFile::new("./src\\a.cc", lines(&[1])).unwrap();
    assert_eq!(file.path(), "src/a.cc");
}

#[test]
fn affected_file_rejects_absolute_path() {
    let err = AffectedFile::new("/etc/passwd", Vec::new()).unwrap_err();
    assert!(matches!(err, SubmitGuardError::InvalidPath { .. }));

    let err = AffectedFile::new("//foo/bar", Vec::new()).unwrap_err();
    assert!(matches!(err, SubmitGuardError::InvalidPath { .. }));
}

#[test]
fn affected_file_rejects_empty_path() {
    let err = AffectedFile::new("", Vec::new()).unwrap_err();
    assert!(matches!(err, SubmitGuardError::InvalidPath { .. }));
}

#[test]
fn affected_file_rejects_zero_line_number() {
    let err = AffectedFile::new("a.cc", lines(&[0])).unwrap_err();
    assert!(matches!(err, SubmitGuardError::LineOrder { .. }));
}

#[test]
fn affected_file_rejects_non_increasing_line_numbers() {
    let err = AffectedFile::new("a.cc", lines(&[3, 3])).unwrap_err();
    assert!(matches!(err, SubmitGuardError::LineOrder { .. }));

    let err = AffectedFile::new("a.cc", lines(&[5, 2])).unwrap_err();
    assert!(matches!(err, SubmitGuardError::LineOrder { .. }));
}

#[test]
fn affected_file_accepts_gaps() {
    let file = AffectedFile::new("a.cc", lines(&[1, 7, 120])).unwrap();
    assert_eq!(file.changed_lines().len(), 3);
}

#[test]
fn change_rejects_duplicate_paths() {
    let files = vec![
        AffectedFile::new("a.cc", lines(&[1])).unwrap(),
        AffectedFile::new("./a.cc", lines(&[2])).unwrap(),
    ];
    let err = Change::new(files).unwrap_err();
    assert!(matches!(err, SubmitGuardError::DuplicateFile { .. }));
}

#[test]
fn change_preserves_file_order() {
    let files = vec![
        AffectedFile::new("b.cc", lines(&[1])).unwrap(),
        AffectedFile::new("a.cc", lines(&[1])).unwrap(),
    ];
    let change = Change::new(files).unwrap();
    let paths: Vec<_> = change.files().iter().map(AffectedFile::path).collect();
    assert_eq!(paths, ["b.cc", "a.cc"]);
}

#[test]
fn empty_change_is_empty() {
    assert!(Change::default().is_empty());
    assert!(Change::new(Vec::new()).unwrap().is_empty());
}
