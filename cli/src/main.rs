//! richsoup CLI - raw page block to Markdown tool

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use richsoup::{render, Block, JsonFormat, ProcessOptions, RawPage, RenderOptions, RichSoup};

#[derive(Parser)]
#[command(name = "richsoup")]
#[command(version)]
#[command(about = "Turn layout-annotated page blocks into Markdown, text, and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Raw page JSON file ("-" reads stdin)
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Processing options (TOML)
    #[arg(short, long, value_name = "FILE", env = "RICHSOUP_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a page to all formats (Markdown, text, JSON)
    Convert {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a page to Markdown
    #[command(alias = "md")]
    Markdown {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,

        /// Escape Markdown characters in text
        #[arg(long)]
        escape: bool,
    },

    /// Convert a page to plain text
    Text {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert a page to classified block JSON
    Json {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show block statistics for a page
    Info {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert { input, output } => cmd_convert(&input, output.as_deref()),
        Commands::Markdown {
            input,
            output,
            max_heading,
            escape,
        } => cmd_markdown(&input, output.as_deref(), max_heading, escape),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref()),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact),
        Commands::Info { input } => cmd_info(&input),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

/// Read the raw page from a file, or stdin for "-".
fn read_page(path: &Path) -> Result<RawPage, Box<dyn std::error::Error>> {
    let json = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };
    let page = RawPage::from_json(&json)?;
    log::info!(
        "Loaded {} raw blocks from {}",
        page.blocks.len(),
        path.display()
    );
    Ok(page)
}

fn load_options(config: Option<&Path>) -> Result<ProcessOptions, Box<dyn std::error::Error>> {
    match config {
        Some(path) => {
            log::info!("Loading options from {}", path.display());
            Ok(ProcessOptions::load(path)?)
        }
        None => Ok(ProcessOptions::default()),
    }
}

fn write_output(content: &str, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn process_input(
    args: &InputArgs,
    render_options: RenderOptions,
) -> Result<richsoup::RichSoupResult, Box<dyn std::error::Error>> {
    let page = read_page(&args.input)?;
    let options = load_options(args.config.as_deref())?;
    let result = RichSoup::new()
        .with_options(options)
        .with_render_options(render_options)
        .process(&page)?;
    Ok(result)
}

fn cmd_convert(args: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = args.input.file_stem().unwrap_or_default().to_string_lossy();
        let stem = if stem.is_empty() || stem == "-" {
            "page".into()
        } else {
            stem
        };
        PathBuf::from(format!("{}_output", stem))
    });

    fs::create_dir_all(&output_dir)?;

    let result = process_input(args, RenderOptions::default())?;

    fs::write(output_dir.join("extract.md"), result.to_markdown()?)?;
    fs::write(output_dir.join("extract.txt"), result.to_text())?;
    fs::write(
        output_dir.join("content.json"),
        result.to_json(JsonFormat::Pretty)?,
    )?;

    println!("{}", "Output files:".green().bold());
    println!("  {} extract.md", "├─".dimmed());
    println!("  {} extract.txt", "├─".dimmed());
    println!("  {} content.json", "└─".dimmed());

    Ok(())
}

fn cmd_markdown(
    args: &InputArgs,
    output: Option<&Path>,
    max_heading: u8,
    escape: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !(1..=6).contains(&max_heading) {
        return Err(format!("Invalid max heading level: {}", max_heading).into());
    }

    let render_options = RenderOptions::new()
        .with_max_heading(max_heading)
        .with_escaping(escape);
    let result = process_input(args, render_options)?;

    write_output(&result.to_markdown()?, output)
}

fn cmd_text(args: &InputArgs, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let result = process_input(args, RenderOptions::default())?;
    write_output(&result.to_text(), output)
}

fn cmd_json(
    args: &InputArgs,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let result = process_input(args, RenderOptions::default())?;
    write_output(&result.to_json(format)?, output)
}

fn cmd_info(args: &InputArgs) -> Result<(), Box<dyn std::error::Error>> {
    let page = read_page(&args.input)?;
    let options = load_options(args.config.as_deref())?;
    let result = RichSoup::new().with_options(options).process(&page)?;
    let doc = result.document();

    println!("{}", "Page Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Source".bold(), args.input.display());
    println!("{}: {}", "URL".bold(), doc.source_url);
    println!("{}: {}", "Raw blocks".bold(), page.blocks.len());
    println!("{}: {}", "Output blocks".bold(), doc.len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let stats = render::to_markdown_with_stats(doc, &RenderOptions::default())?.stats;
    println!("{}: {}", "Headings".bold(), stats.heading_count);
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Code blocks".bold(), stats.code_block_count);
    println!("{}: {}", "Tables".bold(), stats.table_count);
    println!("{}: {}", "Images".bold(), stats.image_count);
    println!("{}: {}", "Links".bold(), stats.link_count);
    println!(
        "{}: {} ({} items)",
        "Lists".bold(),
        stats.list_count,
        stats.list_item_count
    );

    let text = result.to_text();
    println!("{}: {}", "Words".bold(), text.split_whitespace().count());
    println!("{}: {}", "Characters".bold(), text.chars().count());

    let bold = doc
        .blocks
        .iter()
        .filter_map(Block::as_paragraph)
        .filter(|p| p.bold)
        .count();
    println!("{}: {}", "Bold paragraphs".bold(), bold);

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "richsoup".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Layout-aware page content extraction tool");
    println!();
    println!("License: MIT");
}
