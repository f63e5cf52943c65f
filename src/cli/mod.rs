//! Command-line interface for sailcheck.
//!
//! Provides commands for resolving checklist items to learning content,
//! inspecting mapping metadata, and auditing a content pack.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::domain::{AcademyLink, Category};
use crate::registry::{AuditReport, ContentRegistry, Resolution, ResolutionSource};

/// sailcheck - Checklist item to learning content lookup
#[derive(Parser, Debug)]
#[command(name = "sailcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Content pack directory (overrides config and SAILCHECK_CONTENT_DIR)
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Mapping table file (overrides config and SAILCHECK_MAPPINGS)
    #[arg(long, global = true)]
    pub mappings: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a checklist item to its learning content
    Resolve {
        /// Checklist item key (any case, spaces allowed)
        item: String,

        /// Print the resolution as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the brief text for a checklist item
    Brief {
        /// Checklist item key
        item: String,
    },

    /// Print the academy links for a checklist item
    Links {
        /// Checklist item key
        item: String,

        /// Print links as JSON
        #[arg(long)]
        json: bool,
    },

    /// Exit successfully if a checklist item has content
    Has {
        /// Checklist item key
        item: String,
    },

    /// Show the mapped category of a checklist item
    Category {
        /// Checklist item key
        item: String,
    },

    /// Show the mapped lesson id of a checklist item
    Lesson {
        /// Checklist item key
        item: String,
    },

    /// List mapped checklist items in a category
    Items {
        /// Category to list
        #[arg(value_enum)]
        category: CategoryArg,
    },

    /// Check mappings against the content pack
    Audit {
        /// Unmapped keys to check for cross-category collisions
        keys: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Category for CLI (maps to Category)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Weather,
    Tactics,
    Equipment,
    Rules,
    Crew,
    /// Rig setting
    Rig,
}

impl From<CategoryArg> for Category {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Weather => Category::Weather,
            CategoryArg::Tactics => Category::Tactics,
            CategoryArg::Equipment => Category::Equipment,
            CategoryArg::Rules => Category::Rules,
            CategoryArg::Crew => Category::Crew,
            CategoryArg::Rig => Category::Rig,
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let config = match (self.content_dir, self.mappings) {
            // Both paths given on the command line; config sources are not consulted
            (Some(content_dir), Some(mappings)) if !matches!(self.command, Commands::Config) => {
                ResolvedConfig::from_paths(content_dir, Some(mappings))
            }
            (content_dir, mappings) => config::config()?.clone().with_overrides(content_dir, mappings),
        };

        if let Commands::Config = self.command {
            show_config(&config);
            return Ok(());
        }

        let registry =
            ContentRegistry::load(&config.content_dir, config.mappings_file.as_deref()).await?;

        match self.command {
            Commands::Resolve { item, json } => resolve(&registry, &item, json),
            Commands::Brief { item } => {
                match registry.brief(&item) {
                    Some(brief) => println!("{}", brief),
                    None => not_found(&item),
                }
                Ok(())
            }
            Commands::Links { item, json } => {
                match registry.links(&item) {
                    Some(links) if json => println!("{}", serde_json::to_string_pretty(&links)?),
                    Some(links) => print_links(&links),
                    None => not_found(&item),
                }
                Ok(())
            }
            Commands::Has { item } => {
                if !registry.has_content(&item) {
                    std::process::exit(1);
                }
                Ok(())
            }
            Commands::Category { item } => {
                match registry.category_of(&item) {
                    Some(category) => println!("{}", category),
                    None => unmapped(&item),
                }
                Ok(())
            }
            Commands::Lesson { item } => {
                match registry.lesson_id_of(&item) {
                    Some(lesson_id) => println!("{}", lesson_id),
                    None => unmapped(&item),
                }
                Ok(())
            }
            Commands::Items { category } => {
                for item in registry.items_in_category(category.into()) {
                    println!("{}", item);
                }
                Ok(())
            }
            Commands::Audit { keys, json } => audit(&registry, &keys, json),
            Commands::Config => Ok(()),
        }
    }
}

fn not_found(item: &str) -> ! {
    eprintln!("No learning content for '{}'", item);
    std::process::exit(1);
}

fn unmapped(item: &str) -> ! {
    eprintln!("'{}' has no mapping entry", item);
    std::process::exit(1);
}

/// Resolve and print one checklist item
fn resolve(registry: &ContentRegistry, item: &str, json: bool) -> Result<()> {
    let Some(resolution) = registry.resolve_detailed(item) else {
        not_found(item);
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&resolution)?);
        return Ok(());
    }

    print_resolution(&resolution);
    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    let record = &resolution.record;

    println!("Item: {}", resolution.item);
    match &resolution.source {
        ResolutionSource::Mapped {
            category,
            key,
            lesson_id,
        } => {
            println!("Resolved: {}/{} (mapped)", category, key);
            if let Some(lesson_id) = lesson_id {
                println!("Lesson: {}", lesson_id);
            }
        }
        ResolutionSource::Sweep { category } => {
            println!("Resolved: {}/{} (category sweep)", category, resolution.item);
        }
    }

    if let Some(title) = &record.title {
        println!("\n{}", title);
    }
    println!("\n{}", record.brief);
    if let Some(details) = &record.details {
        println!("\n{}", details);
    }

    if !record.academy_links.is_empty() {
        println!();
        print_links(&record.academy_links);
    }
}

fn print_links(links: &[AcademyLink]) {
    for link in links {
        match &link.lesson_id {
            Some(lesson_id) => println!("  {} <{}> [{}]", link.title, link.url, lesson_id),
            None => println!("  {} <{}>", link.title, link.url),
        }
    }
}

/// Run the audit and print its report
fn audit(registry: &ContentRegistry, keys: &[String], json: bool) -> Result<()> {
    let report = registry.audit_keys(keys);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_audit(registry, keys.len(), &report);
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}

fn print_audit(registry: &ContentRegistry, key_count: usize, report: &AuditReport) {
    println!(
        "Checked {} mappings, {} keys",
        registry.mappings().len(),
        key_count
    );

    if report.is_clean() {
        println!("No issues found");
        return;
    }

    if !report.dangling.is_empty() {
        println!("\nMappings with no content ({}):", report.dangling.len());
        println!("{:<28} {:<12} {:<28}", "ITEM", "CATEGORY", "KEY");
        println!("{}", "-".repeat(68));
        for dangling in &report.dangling {
            println!(
                "{:<28} {:<12} {:<28}",
                dangling.item, dangling.category, dangling.key
            );
        }
    }

    if !report.ambiguous.is_empty() {
        println!("\nKeys answered by several categories ({}):", report.ambiguous.len());
        for ambiguous in &report.ambiguous {
            let categories: Vec<&str> = ambiguous.categories.iter().map(|c| c.as_str()).collect();
            match ambiguous.winner() {
                Some(winner) => println!(
                    "  {}: {} (resolves to {})",
                    ambiguous.key,
                    categories.join(", "),
                    winner
                ),
                None => println!("  {}: {}", ambiguous.key, categories.join(", ")),
            }
        }
    }
}

/// Show resolved configuration
fn show_config(config: &ResolvedConfig) {
    println!("sailcheck configuration:");
    println!();
    println!("  Home:        {}", config.home.display());
    println!("  Content:     {}", config.content_dir.display());
    match &config.mappings_file {
        Some(path) => println!("  Mappings:    {}", path.display()),
        None => println!("  Mappings:    (built-in)"),
    }
    match &config.config_file {
        Some(path) => println!("  Config file: {}", path.display()),
        None => println!("  Config file: (none found)"),
    }
    println!();
    println!("Content files:");
    for category in Category::ALL {
        let path = config.category_file(category);
        let status = if path.exists() { "ok" } else { "missing" };
        println!("  {:<10} {} ({})", category, path.display(), status);
    }
}
