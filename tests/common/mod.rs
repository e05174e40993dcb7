#![allow(dead_code)]

use bucketkit::{MemoryConnector, Table};

pub fn read_config() -> (String, String) {
    use std::fs;
    let config_content =
        fs::read_to_string("tests/config.toml").expect("Failed to read config.toml");
    let config: toml::Value = toml::from_str(&config_content).expect("Failed to parse config.toml");
    let endpoint = config["endpoint"]
        .as_str()
        .expect("Missing endpoint")
        .to_string();
    let bucket = config["bucket"]
        .as_str()
        .expect("Missing bucket name")
        .to_string();
    (endpoint, bucket)
}

/// A connector with one empty in-memory bucket already registered.
pub fn memory_bucket(bucket: &str) -> MemoryConnector {
    let connector = MemoryConnector::new();
    connector
        .create_bucket(bucket)
        .expect("failed to create memory bucket");
    connector
}

/// Two rows over columns `a` and `b`.
pub fn sample_table() -> Table {
    let mut table = Table::new(["a", "b"]);
    table.push_row(["1", "x"]);
    table.push_row(["2", "y"]);
    table
}
