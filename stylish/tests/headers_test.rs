use stylish::{Formatter, StyleConfig};

#[test]
fn test_header_centers_uppercased_text() {
    let out = stylish::header("i am a header");
    let expected = format!("\n{} I AM A HEADER {}\n", ":".repeat(29), ":".repeat(28));
    assert_eq!(out, expected);
}

#[test]
fn test_header_even_pad_splits_evenly() {
    let out = stylish::header("ab");
    let expected = format!("\n{} AB {}\n", ":".repeat(34), ":".repeat(34));
    assert_eq!(out, expected);
}

#[test]
fn test_header_empty_text_is_all_fill() {
    let out = stylish::header("");
    let expected = format!("\n{}  {}\n", ":".repeat(35), ":".repeat(35));
    assert_eq!(out, expected);
}

#[test]
fn test_header_exactly_target_width_has_no_fill() {
    let text = "x".repeat(70);
    let out = stylish::header(&text);
    assert_eq!(out, format!("\n {} \n", "X".repeat(70)));
}

#[test]
fn test_header_oversized_text_collapses_fill() {
    let text = "y".repeat(95);
    let out = stylish::header(&text);
    assert_eq!(out, format!("\n {} \n", "Y".repeat(95)));
}

#[test]
fn test_header_respects_configured_width() {
    let formatter = Formatter::new(StyleConfig::new().with_width(20));
    let out = formatter.header("abc");
    assert_eq!(out, format!("\n{} ABC {}\n", ":".repeat(9), ":".repeat(8)));
}

#[test]
fn test_header_measures_display_columns() {
    let out = stylish::header("été");
    let expected = format!("\n{} ÉTÉ {}\n", ":".repeat(34), ":".repeat(33));
    assert_eq!(out, expected);
}

#[test]
fn test_sub_task_fixed_fill() {
    assert_eq!(stylish::sub_task("i am a sub task"), "\n::::::::: I AM A SUB TASK\n");
}

#[test]
fn test_sub_task_fill_ignores_text_length() {
    let long = "z".repeat(100);
    let out = stylish::sub_task(&long);
    assert!(out.starts_with("\n::::::::: Z"));
    assert_eq!(out.len(), 1 + 9 + 1 + 100 + 1);
}

#[test]
fn test_sub_task_empty() {
    assert_eq!(stylish::sub_task(""), "\n::::::::: \n");
}
