// tests/ui_sends_layout_events.rs
// Fails if UI code changes the layout store or touches files directly.
// The UI only sends layout events; systems under src/layout apply them.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

/// Source text before the first inline test module.
fn runtime_part(content: &str) -> &str {
    match content.find("#[cfg(test)]") {
        Some(idx) => &content[..idx],
        None => content,
    }
}

#[test]
fn ui_does_not_mutate_layout_store() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ui_dir = Path::new(manifest_dir).join("src").join("ui");

    let mut files = Vec::new();
    collect_rs_files(&ui_dir, &mut files);
    assert!(!files.is_empty(), "no UI sources found under {}", ui_dir.display());

    let bad_patterns = [
        "ResMut<LayoutStore>",
        ".replace_active_layout(",
        ".install(",
        "write_layout_file(",
        "fs::write(",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        let runtime = runtime_part(&content);
        for pat in &bad_patterns {
            if runtime.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("Direct layout store writes found in UI code:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!(
                "  {} contains pattern '{}': send a layout event instead\n",
                file, pat
            ));
        }
        panic!("{}", msg);
    }
}

#[test]
fn runtime_code_does_not_unwrap() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let src_dir = Path::new(manifest_dir).join("src");

    let mut files = Vec::new();
    collect_rs_files(&src_dir, &mut files);

    let mut offenders = Vec::new();
    for file in files {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        let runtime = runtime_part(&content);
        if runtime.contains(".unwrap()") || runtime.contains(".expect(") {
            offenders.push(file.to_string_lossy().to_string());
        }
    }

    assert!(
        offenders.is_empty(),
        "unwrap/expect outside tests in:\n  {}",
        offenders.join("\n  ")
    );
}
