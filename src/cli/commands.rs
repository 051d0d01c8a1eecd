use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::ToolConfig;
use crate::menu::{
    check_menu, list_menu, ItemOptions, MenuBuilder, MenuHelper, MenuItemDescriptor, MenuSource,
};
use crate::scaffold::{ExecuteOptions, WrittenFile};

/// Command-line interface for trestlekit
///
/// Scaffolds split Trestle admin resources and inspects the YAML-driven
/// admin menu.
#[derive(Parser, Debug)]
#[command(name = "trestlekit-gen")]
#[command(about = "Trestle admin scaffolding and menu tooling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: ./trestlekit.yml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a split Trestle admin resource
    ///
    /// Writes `<admin_root>/<name>_admin.rb` plus one file per concern under
    /// `<admin_root>/<name>/`. Existing files with different content are
    /// skipped unless --force is given.
    Generate {
        /// Resource name in any case style (UserGroup, user_group)
        name: String,

        /// Model class backing the resource
        model: Option<String>,

        /// Application root the admin paths are relative to
        #[arg(long, default_value = ".")]
        root: PathBuf,

        /// Overwrite existing files whose content differs
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the file system
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Inspect the admin menu configuration
    Menu {
        #[command(subcommand)]
        command: MenuCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum MenuCommand {
    /// Resolve one menu entry and print it
    Resolve {
        /// Group key
        group: String,

        /// Item key within the group
        item: String,

        /// Menu file (overrides the configured menu_file)
        #[arg(long)]
        file: Option<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Print what the host menu builder receives instead of the descriptor
        #[arg(long, default_value_t = false)]
        options: bool,
    },
    /// Resolve every entry and report all problems
    Check {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print every entry ordered by priority
    List {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Run an already parsed command, writing its output to `out`
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the command fails, or
/// `menu check` finds problems.
pub fn run(cli: &Cli, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = ToolConfig::load(cli.config.as_deref())?;
    match &cli.command {
        Commands::Generate {
            name,
            model,
            root,
            force,
            dry_run,
        } => {
            let options = ExecuteOptions {
                force: *force,
                dry_run: *dry_run,
            };
            let written = config
                .scaffolder()
                .generate(name, model.as_deref(), root, options)
                .with_context(|| format!("Failed to generate admin resource '{name}'"))?;
            print_written(out, &written, root)?;
            if *dry_run {
                writeln!(out, "(dry run, nothing written)")?;
            }
            Ok(())
        }
        Commands::Menu { command } => run_menu(&config, command, out),
    }
}

fn run_menu(config: &ToolConfig, command: &MenuCommand, out: &mut dyn Write) -> anyhow::Result<()> {
    match command {
        MenuCommand::Resolve {
            group,
            item,
            file,
            format,
            options,
        } => {
            let source = menu_source(config, file.as_deref());
            if *options {
                let mut recorder = RecordingBuilder::default();
                MenuHelper::new(source, group.as_str(), item.as_str())
                    .with_compat(config.compat)
                    .render_menu(&mut recorder)?;
                for call in &recorder.calls {
                    print_options(out, call, *format)?;
                }
                return Ok(());
            }
            let descriptor = source.resolve(group, item)?;
            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&descriptor)?)?;
                }
                OutputFormat::Text => print_descriptor(out, &descriptor)?,
            }
            Ok(())
        }
        MenuCommand::Check { file } => {
            let source = menu_source(config, file.as_deref());
            let menu = source.load()?;
            let issues = check_menu(&menu);
            if issues.is_empty() {
                writeln!(out, "{}: ok", source.path().display())?;
                return Ok(());
            }
            for issue in &issues {
                writeln!(out, "{issue}")?;
            }
            bail!(
                "{} problem(s) found in {}",
                issues.len(),
                source.path().display()
            )
        }
        MenuCommand::List { file } => {
            let source = menu_source(config, file.as_deref());
            let menu = source.load()?;
            let entries = list_menu(&menu)
                .with_context(|| format!("Invalid menu config {}", source.path().display()))?;
            for entry in &entries {
                writeln!(
                    out,
                    "{:>6}  {:<24}  {:<32}  {}",
                    entry.priority,
                    format!("{} / {}", entry.group, entry.label),
                    entry.url,
                    entry.key
                )?;
            }
            Ok(())
        }
    }
}

fn menu_source(config: &ToolConfig, file: Option<&Path>) -> MenuSource {
    match file {
        Some(path) => MenuSource::new(path),
        None => config.menu_source(),
    }
}

fn print_written(out: &mut dyn Write, written: &[WrittenFile], root: &Path) -> std::io::Result<()> {
    for file in written {
        let shown = file.path.strip_prefix(root).unwrap_or(&file.path);
        writeln!(out, "{:>10}  {}", file.status, shown.display())?;
    }
    Ok(())
}

fn print_descriptor(out: &mut dyn Write, d: &MenuItemDescriptor) -> std::io::Result<()> {
    writeln!(out, "key:      {}", d.key)?;
    writeln!(out, "url:      {}", d.url)?;
    writeln!(out, "priority: {}", d.priority)?;
    writeln!(out, "label:    {}", d.label)?;
    if let Some(icon) = &d.icon {
        writeln!(out, "icon:     {icon}")?;
    }
    writeln!(out, "target:   {}", d.target)?;
    if let Some(badge) = &d.badge {
        writeln!(out, "badge:    {} ({})", badge.text, badge.css_class)?;
    }
    writeln!(out, "group:    {}", d.group)
}

#[derive(Debug, Serialize)]
struct BuilderCall {
    key: String,
    url: String,
    options: ItemOptions,
}

/// Captures what a host menu builder would receive
#[derive(Debug, Default)]
struct RecordingBuilder {
    calls: Vec<BuilderCall>,
}

impl MenuBuilder for RecordingBuilder {
    fn item(&mut self, key: &str, url: &str, options: ItemOptions) {
        self.calls.push(BuilderCall {
            key: key.to_string(),
            url: url.to_string(),
            options,
        });
    }
}

fn print_options(
    out: &mut dyn Write,
    call: &BuilderCall,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(call)?)?,
        OutputFormat::Text => {
            writeln!(out, "item {:?}, {:?}", call.key, call.url)?;
            writeln!(out, "  {}", serde_json::to_string(&call.options)?)?;
        }
    }
    Ok(())
}
