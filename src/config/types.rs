use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    pub skills_root: Option<String>,
    pub root_marker: Option<String>,
    pub no_color: Option<bool>,
    pub timeout: Option<DurationValue>,
    #[serde(alias = "concurrency")]
    pub workers: Option<usize>,
    pub iterations: Option<usize>,
    pub levels: Option<LevelsValue>,
    #[serde(alias = "report")]
    pub output: Option<String>,
    pub interpreters: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DurationValue {
    Seconds(u64),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LevelsValue {
    List(Vec<usize>),
    Text(String),
}
