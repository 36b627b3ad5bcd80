use wrap_text_filter::config::{load_config, CliArgs};
use wrap_text_filter::{io, render::Renderer, text::TextWrapper};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

fn main() -> Result<()> {
    // Parse command line arguments
    let args = CliArgs::parse();

    // Logs go to stderr so they never mix with rendered output
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = load_config(&args)?;

    if args.debug_config {
        println!("Configuration:");
        println!("{:#?}", config);
        return Ok(());
    }

    let output = if let Some(ref template) = args.template {
        let data = io::read_data(args.data.as_deref())?;
        let renderer = Renderer::new(&config);
        renderer
            .render_file(template, &data)
            .with_context(|| format!("Failed to render {}", template.display()))?
    } else {
        let text = io::read_text(args.input.as_deref())?;
        info!(words_per_line = config.words_per_line, "wrapping text");
        TextWrapper::wrap(Some(&text), Some(config.words_per_line))?
    };

    io::write_output(args.output.as_deref(), &output)?;

    Ok(())
}
