use anyhow::Result;

use crate::config::Config;
use crate::discover::discover_documents;

/// List the input root's health and the documents a batch run would process.
pub fn list_inputs(config: &Config) -> Result<()> {
    let root = &config.input.root;
    let status = if root.exists() { "OK" } else { "MISSING" };
    println!("input root: {}  [{}]", root.display(), status);
    println!("language:   {}", config.lexicon.language);

    if !root.exists() {
        return Ok(());
    }

    let documents = discover_documents(config)?;
    println!("documents:  {}", documents.len());
    for path in &documents {
        let relative = path.strip_prefix(root).unwrap_or(path);
        println!("  {}", relative.display());
    }

    Ok(())
}
