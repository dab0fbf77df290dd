/// Initialize tracing for tests with proper test output handling
#[allow(dead_code)]
pub fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Files payload as served for a notebook, ids mixing integers and strings
#[allow(dead_code)]
pub const NOTEBOOK_FILES_JSON: &str = r#"[
    {"id": 1, "filename": "results.csv", "size": 1536},
    {"id": "2", "filename": "plot.png", "size": 2621440},
    {"id": 3, "filename": "README.md", "size": 512},
    {"id": 4, "filename": "scratch.txt", "size": null},
    {"id": 5, "filename": "model.bin"}
]"#;
