//! Command-line interface: argument parsing and command execution

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::blueprint::Blueprint;
use crate::config::Settings;
use crate::error::Result;
use crate::metrics::encode_metrics;
use crate::template::{
    create_template_store, placeholder_names, LayeredTemplates, TemplateSource,
};

#[derive(Debug, Parser)]
#[command(name = "mail-composer")]
#[command(about = "Render HTML mail from a JSON blueprint of nested components")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file layered over config/default and environment settings
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory of *.html fragments overriding the bundled templates
    /// (falls back to `templates.dir` / MAIL_COMPOSER__TEMPLATES__DIR)
    #[arg(short = 't', long, global = true)]
    pub templates: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a blueprint to HTML
    Render {
        /// Blueprint JSON file (reads stdin when omitted or "-")
        input: Option<PathBuf>,

        /// Write HTML here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print Prometheus metrics to stderr after rendering
        #[arg(long)]
        metrics: bool,
    },

    /// List available templates and the placeholders each one uses
    Templates,
}

/// Build the template source: bundled catalog plus any override directory
pub fn template_source(dir: Option<&Path>) -> Result<LayeredTemplates> {
    let overrides = create_template_store();
    if let Some(dir) = dir {
        overrides.load_dir(dir)?;
    }
    Ok(LayeredTemplates::new(overrides))
}

/// Resolve the template override directory: command line first, then settings
fn templates_dir(cli: &Cli, settings: &Settings) -> Option<PathBuf> {
    cli.templates
        .clone()
        .or_else(|| settings.templates.dir.as_ref().map(PathBuf::from))
}

/// Execute the parsed command
pub fn run(cli: Cli, settings: &Settings) -> Result<()> {
    let templates = template_source(templates_dir(&cli, settings).as_deref())?;

    match cli.command {
        Commands::Render {
            input,
            output,
            metrics,
        } => {
            let json = read_input(input.as_deref())?;
            let html = render_blueprint(&json, &templates)?;

            let output = output.or_else(|| settings.output.path.as_ref().map(PathBuf::from));
            match output {
                Some(path) => {
                    fs::write(&path, &html)?;
                    tracing::info!(path = %path.display(), bytes = html.len(), "Document written");
                }
                None => io::stdout().write_all(html.as_bytes())?,
            }

            if metrics {
                eprint!("{}", encode_metrics()?);
            }
        }
        Commands::Templates => {
            let mut stdout = io::stdout().lock();
            list_templates(&templates, &mut stdout)?;
        }
    }

    Ok(())
}

/// Parse a blueprint and build its document against `templates`
pub fn render_blueprint(json: &str, templates: &dyn TemplateSource) -> Result<String> {
    let document = Blueprint::from_json(json)?.into_document()?;
    Ok(document.build(templates)?)
}

/// Write one line per template: its ID and the placeholders it declares
pub fn list_templates(templates: &LayeredTemplates, out: &mut impl Write) -> Result<()> {
    for id in templates.ids() {
        let body = templates.get_template(&id)?;
        let names: Vec<String> = placeholder_names(&body).into_iter().collect();
        writeln!(out, "{}\t{}", id, names.join(", "))?;
    }
    Ok(())
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut json = String::new();
            io::stdin().read_to_string(&mut json)?;
            Ok(json)
        }
    }
}
