#[test]
fn moor_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/moor_error_pass.rs");
}
