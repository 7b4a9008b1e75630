use anyhow::{bail, Context, Result};
use clap::Parser;

use toolbench::cli::{CliArgs, Command};
use toolbench::config::WorkbenchConfig;
use toolbench::layout::JsonFilePersistence;
use toolbench::model::Workbench;
use toolbench::tool::ToolLocation;
use toolbench::update::update;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    toolbench::tracing::init();

    let config = WorkbenchConfig::load();
    let path = args
        .layout_file
        .clone()
        .or_else(|| config.layout_path())
        .context("could not determine the layout file location")?;
    tracing::debug!(path = %path.display(), "using layout file");

    let mut model = Workbench::new(config, Box::new(JsonFilePersistence::new(&path)));
    let command = args.command();

    if let Some(msg) = command.to_msg() {
        if update(&mut model, msg).is_some() {
            if !model.persist_now() {
                bail!("failed to save layout to {}", path.display());
            }
        } else {
            tracing::info!(?command, "layout unchanged");
        }
    }

    match command {
        Command::Show { json: true } => {
            let json = model
                .snapshot()
                .to_json()
                .map_err(anyhow::Error::msg)
                .context("failed to serialize layout")?;
            println!("{json}");
        }
        _ => print_layout(&model),
    }

    Ok(())
}

fn print_layout(model: &Workbench) {
    for location in ToolLocation::ALL {
        println!("{location}:");
        for (index, tool) in model.layout.tools_for(location).iter().enumerate() {
            let open = if model.panels.is_open(*tool) { " (open)" } else { "" };
            println!("  {index}. {tool}{open}");
        }
    }
    println!("sidebar width: {}", model.layout.sidebar_width());
    println!("tools section height: {}", model.layout.tools_section_height());
}
