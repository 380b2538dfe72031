//! Implementation of the `kickstart templates` command.

use crate::{
    cli::{ListFormat, TemplatesArgs},
    commands,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let templates = commands::template_service(&config)?.list()?;

    // --output-format json wins over --format
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Available Templates:")?;
            let width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
            for template in &templates {
                output.print(&format!(
                    "  {:<width$}  {:<8}  {} bytes",
                    template.name, template.kind, template.bytes
                ))?;
            }
        }

        // JSON must stay parseable in pipes and quiet mode.
        ListFormat::Json => output.json(&templates)?,

        ListFormat::List => {
            for t in &templates {
                output.print(&t.name)?;
            }
        }
    }

    Ok(())
}
