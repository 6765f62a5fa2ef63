#![allow(dead_code)]

use serde::Deserialize;
use spectags::Section;
use std::fs;
use std::path::Path;

/// Raw and expanded lines of one section, stored under tests/fixtures
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub raw: Vec<String>,
    pub expanded: Option<Vec<String>>,
}

impl Fixture {
    pub fn raw_section(&self) -> Section {
        Section::new("package", self.raw.clone())
    }

    pub fn expanded_section(&self) -> Option<Section> {
        self.expanded
            .as_ref()
            .map(|lines| Section::new("package", lines.clone()))
    }
}

pub fn load_fixture(name: &str) -> Fixture {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.toml", name));
    let contents = fs::read_to_string(&path).unwrap();
    toml::from_str(&contents).unwrap()
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
