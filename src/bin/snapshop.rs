use anyhow::{bail, Context, Result};
use clap::Parser;
use std::path::PathBuf;
use snapshop::{logging, Filter, Session, Settings};

/// Apply pixel filters to an image file
#[derive(Parser, Debug)]
#[command(name = "snapshop", version, about)]
struct Args {
    /// Image to open
    #[arg(required_unless_present = "list")]
    input: Option<PathBuf>,

    /// Where to save the result; the extension picks the format
    #[arg(required_unless_present = "list")]
    output: Option<PathBuf>,

    /// Filter to apply, repeatable; applied in the order given
    #[arg(short, long = "filter", value_name = "FILTER")]
    filters: Vec<Filter>,

    /// JSON settings file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the available filters and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        for filter in Filter::ALL {
            println!("{:<16} {}", filter.id(), filter.label());
        }
        return Ok(());
    }

    let settings = Settings::load_or_default(args.config.as_deref())
        .with_context(|| format!("Failed to read settings {:?}", args.config))?;
    logging::init(&settings.log_filter);

    let (Some(input), Some(output)) = (args.input, args.output) else {
        bail!("INPUT and OUTPUT are required");
    };

    let filters = if args.filters.is_empty() {
        settings.default_filters.clone()
    } else {
        args.filters
    };

    let mut session = Session::new(settings);
    session
        .open(&input)
        .with_context(|| format!("The file {} is not a valid image", input.display()))?;

    for filter in filters {
        session.apply(filter)?;
        tracing::info!(filter = filter.id(), "Applied");
    }

    session
        .save_as(&output)
        .with_context(|| format!("Failed to save {}", output.display()))?;

    println!("Saved {}", output.display());
    Ok(())
}
