use julia_wasm::{assemble_json, EmitConfig};

fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}.json", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {}", path, e))
}

fn lower_fixture(name: &str, config: &EmitConfig) -> String {
    assemble_json(&fixture(name), config)
        .unwrap_or_else(|e| panic!("{} should translate, got: {}", name, e))
}

#[test]
fn test_add_one_module() {
    let wat = lower_fixture("add_one", &EmitConfig::default());
    insta::assert_snapshot!("add_one", wat);
}

#[test]
fn test_max_module() {
    let wat = lower_fixture("max", &EmitConfig::default());
    insta::assert_snapshot!("max", wat);
}

#[test]
fn test_program_module() {
    let wat = lower_fixture("program", &EmitConfig::default());
    insta::assert_snapshot!("program", wat);
}

#[test]
fn test_program_module_wide_indent() {
    let config = EmitConfig::default().with_indent_width(4);
    let wat = lower_fixture("program", &config);
    insta::assert_snapshot!("program_indent4", wat);
}

#[test]
fn test_rejected_fixture_produces_no_output() {
    let err = assemble_json(&fixture("label"), &EmitConfig::default()).unwrap_err();
    let diag = err.diagnostic().expect("violation");
    assert_eq!(diag.violation, julia_wasm::Violation::Label);
    assert_eq!(diag.span.range(), 19..24);
}

#[test]
fn test_independent_translations_in_parallel() {
    let sources: Vec<String> = ["add_one", "max", "program"]
        .iter()
        .map(|n| fixture(n))
        .collect();
    let sequential: Vec<String> = sources
        .iter()
        .map(|s| assemble_json(s, &EmitConfig::default()).unwrap())
        .collect();
    let handles: Vec<_> = sources
        .into_iter()
        .map(|s| std::thread::spawn(move || assemble_json(&s, &EmitConfig::default()).unwrap()))
        .collect();
    let parallel: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sequential, parallel);
}
