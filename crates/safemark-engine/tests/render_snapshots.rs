use safemark_engine::render;

#[test]
fn fixture_document() {
    assert_fixture("document");
}

#[test]
fn fixture_hostile() {
    assert_fixture("hostile");
}

#[test]
fn fixture_mixed_lists() {
    assert_fixture("mixed_lists");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let html = render(Some(&md)).into_string();
    insta::assert_snapshot!(name, html);
}
