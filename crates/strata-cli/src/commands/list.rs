//! Implementation of the `strata list` command.

use strata_core::{application::LayoutService, domain::LayoutRegistry};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = LayoutService::new(LayoutRegistry::builtin());
    let layouts = service.list();

    // `--output-format json` applies to every command.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header("Feature categories:")?;
            for layout in &layouts {
                output.print("")?;
                output.print(&format!(
                    "  {:<8} {}/{}-<name>",
                    layout.category, layout.root_namespace, layout.category
                ))?;
                for dir in &layout.directories {
                    output.print(&format!("             {dir}"))?;
                }
            }
        }
        ListFormat::Json => output.json(&layouts)?,
        ListFormat::List => {
            for layout in &layouts {
                output.data(layout.category.as_str())?;
            }
        }
        ListFormat::Csv => {
            output.data("category,root_namespace,directories")?;
            for layout in &layouts {
                output.data(&format!(
                    "{},{},{}",
                    layout.category,
                    layout.root_namespace,
                    layout.directories.join(";")
                ))?;
            }
        }
    }

    Ok(())
}
