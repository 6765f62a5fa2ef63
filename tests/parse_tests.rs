//! Integration tests for parsing and reassembling sections

mod common;
use common::{lines, load_fixture};
use spectags::{Section, Tags};

#[test]
fn test_minimal_section() {
    let fixture = load_fixture("minimal");
    let tags = Tags::parse(&fixture.raw, fixture.expanded.as_deref());

    let names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Name", "Version"]);
    assert!(tags.iter().all(|t| t.is_valid()));
    assert_eq!(tags.get("Version").unwrap().expanded_value(), Some("1.0"));
    assert_eq!(tags.get("Version").unwrap().value(), "%{v}.0");
    assert_eq!(tags.reassemble(), fixture.raw);
}

#[test]
fn test_package_section_round_trip() {
    let fixture = load_fixture("package");
    let tags = Tags::parse(&fixture.raw, fixture.expanded.as_deref());

    assert_eq!(tags.len(), 12);
    assert_eq!(tags.reassemble(), fixture.raw);
}

#[test]
fn test_package_section_values() {
    let fixture = load_fixture("package");
    let tags = Tags::parse_section(
        &fixture.raw_section(),
        fixture.expanded_section().as_ref(),
    );

    let name = tags.get("name").unwrap();
    assert_eq!(name.separator(), ":           ");
    assert_eq!(name.comments(), vec!["Upstream name"]);
    assert_eq!(name.preceding_lines().len(), 4);

    let release = tags.get("Release").unwrap();
    assert_eq!(release.value(), "%autorelease");
    assert_eq!(release.expanded_value(), Some("3.fc40"));

    let url = tags.get("url").unwrap();
    assert_eq!(url.name(), "URL");
    assert_eq!(url.expanded_value(), Some("https://github.com/example/hello"));

    let patch = tags.get("Patch0").unwrap();
    assert_eq!(
        patch.comments(),
        vec!["Fix build with newer compilers", "  (sent upstream)"]
    );

    let tab_separated = &tags[10];
    assert_eq!(tab_separated.separator(), "\t:\t");
    assert_eq!(tab_separated.value(), "make");

    assert_eq!(
        tags.remainder(),
        [
            "%endif",
            "Requires(post): info",
            "",
            "%{?systemd_requires}",
            "# trailing note",
        ]
    );
}

#[test]
fn test_repeated_tags_resolve_to_first_expanded_line() {
    let fixture = load_fixture("package");
    let tags = Tags::parse(&fixture.raw, fixture.expanded.as_deref());

    let source0 = tags.get("Source0").unwrap().expanded_value();
    assert_eq!(tags.get("Source1").unwrap().expanded_value(), source0);

    // Every BuildRequires line sees the first expanded BuildRequires value,
    // including the one inside a false conditional
    let build_requires: Vec<Option<&str>> = tags
        .iter()
        .filter(|t| t.name() == "BuildRequires")
        .map(|t| t.expanded_value())
        .collect();
    assert_eq!(build_requires, vec![Some("gcc"), Some("gcc"), Some("gcc")]);
}

#[test]
fn test_section_without_expansion() {
    let fixture = load_fixture("unexpanded");
    assert!(fixture.expanded.is_none());

    let tags = Tags::parse_section(&fixture.raw_section(), None);
    assert_eq!(tags.len(), 2);
    assert!(tags.iter().all(|t| !t.is_valid()));
    assert_eq!(tags[1].name(), "requires");
    assert_eq!(tags.remainder(), ["", "%description devel"]);
    assert_eq!(tags.reassemble(), fixture.raw);
}

#[test]
fn test_tag_excluded_by_conditional() {
    let raw = lines(&["Name: test", "%if 0", "Epoch: 1", "%endif"]);
    let expanded = lines(&["Name: test", "", "", ""]);
    let tags = Tags::parse(&raw, Some(expanded.as_slice()));

    let epoch = tags.get("epoch").unwrap();
    assert!(!epoch.is_valid());
    assert_eq!(epoch.expanded_value(), None);
    assert!(tags.get("Name").unwrap().is_valid());
}

#[test]
fn test_parse_from_section_text() {
    let text = "%global v 1\nName: test\nVersion: %{v}.0\n\n";
    let raw = Section::from_text("package", text);
    let expanded = Section::from_text("package", "\nName: test\nVersion: 1.0\n\n");

    let tags = Tags::parse_section(&raw, Some(&expanded));
    assert_eq!(tags.len(), 2);

    let rebuilt = Section::new(raw.name(), tags.reassemble());
    assert_eq!(rebuilt.to_text(), text);
}

#[test]
fn test_round_trip_with_lookalike_lines() {
    let raw = lines(&[
        "# Name: not a tag",
        "  Version: indented",
        "Versions: 1",
        "Version 1.0",
        "%define Name other",
        "Name: real",
        "Source9: a.tar.gz",
        "Source10: b.tar.gz",
        "Url1: https://example.com",
        "",
    ]);
    let tags = Tags::parse(&raw, None);

    let names: Vec<&str> = tags.iter().map(|t| t.name()).collect();
    assert_eq!(names, vec!["Name", "Source9"]);
    assert_eq!(tags.reassemble(), raw);
}

#[test]
fn test_collection_survives_toml() {
    let fixture = load_fixture("package");
    let tags = Tags::parse(&fixture.raw, fixture.expanded.as_deref());

    let text = toml::to_string(&tags).unwrap();
    let loaded: Tags = toml::from_str(&text).unwrap();
    assert_eq!(loaded, tags);
    assert_eq!(loaded.reassemble(), fixture.raw);
}
