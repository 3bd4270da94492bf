use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::path::Path;

pub fn routegraph() -> Command {
    let mut cmd = cargo_bin_cmd!("routegraph");
    cmd.env_remove("ROUTEGRAPH_GRAPH")
        .env_remove("ROUTEGRAPH_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write a network definition into `dir` and return its path
#[allow(dead_code)]
pub fn write_network(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("network.toml");
    std::fs::write(&path, content).expect("write network file");
    path
}
