use anyhow::{Context, Result};

use pairdist::PipelineConfig;

use crate::cli::Cli;
use crate::io::read_text;

pub fn build_pipeline_config(cli: &Cli) -> Result<PipelineConfig> {
    let mut config = match &cli.io.config {
        Some(path) => {
            let text = read_text(path)?;
            PipelineConfig::from_toml_str(&text)
                .with_context(|| format!("Invalid configuration file: {}", path.display()))?
        }
        None => PipelineConfig::default(),
    };

    apply_overrides(&mut config, cli);
    Ok(config)
}

fn apply_overrides(config: &mut PipelineConfig, cli: &Cli) {
    if let Some(exe) = &cli.tool.executable {
        config.tool.executable = exe.clone();
    }
    if let Some(flag) = &cli.tool.nogui_flag {
        config.tool.nogui_flag = flag.clone();
    }
    if cli.tool.append {
        config.tool.append = true;
    }

    if let Some(name) = &cli.attribute.name {
        config.attribute.name = name.clone();
    }
    if let Some(recipient) = &cli.attribute.recipient {
        config.attribute.recipient = recipient.clone();
    }
    if cli.attribute.skip_malformed {
        config.attribute.skip_malformed = true;
    }
}
