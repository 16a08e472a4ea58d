use super::*;

#[test]
fn sanitize_replaces_path_separators_and_reserved_chars() {
    assert_eq!(sanitize_file_name("a/b\\c:d*e?f\"g<h>i|j"), "a_b_c_d_e_f_g_h_i_j");
}

#[test]
fn sanitize_keeps_japanese_and_trims() {
    assert_eq!(sanitize_file_name("  東京タワー  "), "東京タワー");
}

#[test]
fn sanitize_replaces_control_characters() {
    assert_eq!(sanitize_file_name("cafe\nA\t"), "cafe_A");
}

#[test]
fn write_report_creates_directory_and_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let dir = temp.path().join("outputs");

    let path = write_report(&dir, "Cafe A", "# 基本情報\n\n").expect("write succeeds");

    assert_eq!(path, dir.join("Cafe A.md"));
    let written = std::fs::read_to_string(&path).expect("file readable");
    assert_eq!(written, "# 基本情報\n\n");
}

#[test]
fn write_report_truncates_existing_file() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let dir = temp.path();

    write_report(dir, "cafe", "a much longer first report body").expect("first write");
    let path = write_report(dir, "cafe", "short").expect("second write");

    assert_eq!(std::fs::read_to_string(path).expect("file readable"), "short");
}

#[test]
fn write_report_sanitizes_name_into_single_component() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let path = write_report(temp.path(), "../escape", "x").expect("write succeeds");

    assert_eq!(path.parent(), Some(temp.path()));
    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some(".._escape.md"));
}
