use codexport::{
    export_to_writer,
    ExportBuilder,
    ExportError,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
fn render(root: &Path) -> (String, codexport::ExportSummary) {
    let options = ExportBuilder::new(root).build();
    let mut buf = Vec::new();
    let summary = export_to_writer(&options, &mut buf).unwrap();
    (String::from_utf8(buf).unwrap(), summary)
}
#[test]
fn test_example_scenario() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.ts"), "const x = 1;").unwrap();
    fs::write(dir.path().join("b.py"), "print(1)").unwrap();
    let (doc, summary) = render(dir.path());
    let expected = format!(
        "# Full Code Export (.js, .ts, .tsx)\n\n\n\n## File: {}\n```ts\nconst x = 1;\n```\n",
        dir.path().join("a.ts").display()
    );
    assert_eq!(doc, expected);
    assert_eq!(summary.exported, 1);
    assert!(!doc.contains("print(1)"));
}
#[test]
fn test_empty_directory_has_only_title() {
    let dir = tempdir().unwrap();
    let (doc, summary) = render(dir.path());
    assert_eq!(doc, "# Full Code Export (.js, .ts, .tsx)\n\n");
    assert_eq!(summary.exported, 0);
    assert!(summary.is_complete());
}
#[test]
fn test_section_count_matches_files() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("src/components")).unwrap();
    fs::write(dir.path().join("index.js"), "1").unwrap();
    fs::write(dir.path().join("src/App.TSX"), "2").unwrap();
    fs::write(dir.path().join("src/components/Button.tsx"), "3").unwrap();
    fs::write(dir.path().join("src/types.ts"), "4").unwrap();
    fs::write(dir.path().join("README.md"), "no").unwrap();
    fs::write(dir.path().join("Makefile"), "no").unwrap();
    fs::write(dir.path().join("server.py"), "no").unwrap();
    let (doc, summary) = render(dir.path());
    assert_eq!(summary.exported, 4);
    assert_eq!(doc.matches("\n## File: ").count(), 4);
    assert!(doc.contains("```tsx\n2\n```"));
    assert!(doc.contains("```js\n1\n```"));
    assert!(!doc.contains("README.md"));
    assert!(!doc.contains("Makefile"));
    assert!(!doc.contains("server.py"));
}
#[test]
fn test_lossy_content_is_kept_and_reported() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("latin1.js"), b"// caf\xe9\nlet a = 1;").unwrap();
    let (doc, summary) = render(dir.path());
    assert!(doc.contains("```js\n// caf\u{FFFD}\nlet a = 1;\n```\n"));
    assert_eq!(summary.lossy, vec![dir.path().join("latin1.js")]);
}
#[test]
fn test_custom_extensions() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::write(dir.path().join("app.ts"), "x").unwrap();
    let options = ExportBuilder::new(dir.path()).extensions(["RS"]).build();
    let mut buf = Vec::new();
    let summary = export_to_writer(&options, &mut buf).unwrap();
    let doc = String::from_utf8(buf).unwrap();
    assert_eq!(summary.exported, 1);
    assert!(doc.starts_with("# Full Code Export (.rs)\n\n"));
    assert!(doc.contains("```rs\nfn main() {}\n```"));
}
#[test]
fn test_root_must_be_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("a.ts");
    fs::write(&file, "x").unwrap();
    let options = ExportBuilder::new(&file).build();
    let result = export_to_writer(&options, Vec::new());
    assert!(matches!(result, Err(ExportError::InvalidPath(_))));
}
