use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use sitemark_config::Config;
use sitemark_engine::{Template, io, markdown_to_html, render_page};
use std::{
    fs,
    path::{Path, PathBuf},
};

#[derive(Parser)]
#[command(name = "sitemark", version)]
#[command(about = "Generate a static HTML site from markdown")]
struct Cli {
    /// Log per-file progress
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every page under the content directory into the output directory
    Build(BuildArgs),
    /// Print the HTML fragment for one markdown file
    Render {
        /// Markdown file to convert
        file: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Config file (defaults to ./sitemark.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory copied verbatim into the output
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Directory the site is written to; emptied first
    #[arg(long)]
    output: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,
}

impl BuildArgs {
    /// Config file values, overridden by any flags given.
    fn resolve(self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => {
                let config = Config::load_from_path(path)?
                    .with_context(|| format!("Config file {} not found", path.display()))?;
                config.relative_to(path.parent().unwrap_or(Path::new(".")))
            }
            None => Config::load()?.unwrap_or_default(),
        };

        if let Some(content) = self.content {
            config.content_dir = content;
        }
        if let Some(static_dir) = self.static_dir {
            config.static_dir = static_dir;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        if let Some(template) = self.template {
            config.template_path = template;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match cli.command {
        Command::Build(args) => build(&args.resolve()?),
        Command::Render { file } => {
            let markdown = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let html = markdown_to_html(&markdown)
                .with_context(|| format!("Failed to convert {}", file.display()))?;
            println!("{html}");
            Ok(())
        }
    }
}

fn build(config: &Config) -> Result<()> {
    log::info!(
        "Building {} into {}",
        config.content_dir.display(),
        config.output_dir.display()
    );

    let template = fs::read_to_string(&config.template_path)
        .with_context(|| format!("Failed to read template {}", config.template_path.display()))?;
    let template = Template::new(template);

    io::reset_dir(&config.output_dir)
        .with_context(|| format!("Failed to reset {}", config.output_dir.display()))?;

    if config.static_dir.is_dir() {
        let copied = io::copy_dir_recursive(&config.static_dir, &config.output_dir)
            .with_context(|| format!("Failed to copy {}", config.static_dir.display()))?;
        log::info!("Copied {copied} static files");
    } else {
        log::warn!(
            "Static directory {} not found, skipping",
            config.static_dir.display()
        );
    }

    let pages = io::scan_markdown_files(&config.content_dir)?;
    for file in &pages {
        generate_page(config, file, &template)
            .with_context(|| format!("Failed to generate page from {}", file.display()))?;
    }

    log::info!("Generated {} pages", pages.len());
    Ok(())
}

fn generate_page(config: &Config, file: &Path, template: &Template) -> Result<()> {
    let source = io::content_relative(&config.content_dir, file)?;
    let destination = io::page_destination(&config.content_dir, file)?;

    let markdown = io::read_file(&source, &config.content_dir)?;
    let page = render_page(&markdown, template)?;
    io::write_file(&destination, &config.output_dir, &page)?;

    log::debug!("{source} -> {destination}");
    Ok(())
}
