//! Config command implementation
//!
//! Prints the configuration a bundle run would use, with every path
//! resolved against the workspace root.

use crate::config::ResolvedConfig;
use crate::error::Result;

use super::Context;

/// Run config command
pub fn run(ctx: &Context) -> Result<()> {
    let config = ctx.resolve_config()?;
    print!("{}", render(&config)?);
    Ok(())
}

/// Resolved configuration as YAML
pub fn render(config: &ResolvedConfig) -> Result<String> {
    Ok(serde_yaml::to_string(config)?)
}
