use std::path::Path;

use crate::commands::common::load_graph;

/// DOT is its own output format, so `--json` does not apply here.
pub fn run(path: &Path, title: Option<&str>) -> anyhow::Result<()> {
    let graph = load_graph(path)?;
    print!("{}", graph.to_dot(title));
    Ok(())
}
