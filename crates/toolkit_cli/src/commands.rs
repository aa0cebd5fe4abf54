//! Command-line surface

use std::io::Read;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thiserror::Error;
use toolkit_catalog::{view, AccessLevel, Query};
use toolkit_content::node::el;
use toolkit_content::{parse, render_blocks, render_notice, Node, NoticeKind, NoticeQueue};
use toolkit_theme::{ColorScheme, ThemeCategory, ThemePath};

use crate::app::App;
use crate::config::OutputFormat;
use crate::output::render_page;

/// Browse the banking transformation toolkit
#[derive(Parser, Debug)]
#[command(name = "toolkit")]
#[command(about = "Browse the banking transformation toolkit")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./toolkit.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List catalog items as cards
    List {
        /// Free-text search over titles, descriptions, and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Only items of this theme category
        #[arg(short, long)]
        theme: Option<String>,

        /// Only items with this category label
        #[arg(long)]
        category: Option<String>,

        /// Required tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Print the distinct category labels instead of cards
        #[arg(long)]
        categories: bool,
    },

    /// Show one item
    Show {
        id: String,

        /// Render the full view regardless of the session's access level
        #[arg(long)]
        full: bool,
    },

    /// Parse freeform text (file or stdin) into content blocks
    Parse {
        file: Option<PathBuf>,

        /// Print the blocks as JSON instead of rendering them
        #[arg(long)]
        json: bool,
    },

    /// Send feedback
    Feedback,

    /// Ask for full access to detailed content
    RequestAccess,

    /// Inspect or change the theme
    #[command(subcommand)]
    Theme(ThemeCommand),
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommand {
    /// Print the active mode and category
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set the mode (light or dark)
    SetMode { mode: String },
    /// Set the theme category (sales, delivery, quality assurance)
    SetCategory { category: String },
    /// Resolve a dotted theme path
    Resolve {
        path: String,
        /// Resolve against another category (unknown names use Sales)
        #[arg(long)]
        category: Option<String>,
    },
    /// Print every CSS custom property of the active theme
    Vars,
    /// List every theme path and its value kind
    Paths,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("no toolkit item with id `{0}`")]
    UnknownItem(String),

    #[error("unknown theme category `{0}` (expected sales, delivery, or quality assurance)")]
    UnknownCategory(String),

    #[error("unknown theme path `{0}`")]
    UnknownPath(String),
}

fn parse_category(raw: &str) -> Result<ThemeCategory, CommandError> {
    ThemeCategory::parse(raw).ok_or_else(|| CommandError::UnknownCategory(raw.to_string()))
}

/// Run a command and return its output
pub fn run(command: &Command, app: &mut App, format: OutputFormat) -> Result<String> {
    match command {
        Command::List {
            query,
            theme,
            category,
            tags,
            categories,
        } => {
            let theme_filter = theme.as_deref().map(parse_category).transpose()?;
            if *categories {
                let mut out = app.catalog.categories(theme_filter).join("\n");
                out.push('\n');
                return Ok(out);
            }

            let mut q = Query::new();
            if let Some(text) = query {
                q = q.text(text.as_str());
            }
            if let Some(t) = theme_filter {
                q = q.theme(t);
            }
            if let Some(c) = category {
                q = q.category(c.as_str());
            }
            for tag in tags {
                q = q.tag(tag.as_str());
            }

            let level = app.access_level();
            let hits = app.catalog.search(&q);
            tracing::debug!("{} of {} items match", hits.len(), app.catalog.len());
            let mut nodes: Vec<Node> = vec![view::page_header(
                &app.theme,
                app.session.as_ref().map(|s| s.email()),
            )];
            if hits.is_empty() {
                nodes.push(el("p").class("empty").text("No items match."));
            }
            nodes.extend(hits.into_iter().map(|item| view::card(item, level, &app.theme)));
            Ok(render_page(&nodes, &app.theme, format))
        }

        Command::Show { id, full } => {
            let level = if *full {
                AccessLevel::Full
            } else {
                app.access_level()
            };
            let node = view::detail(&app.catalog, id, level, &app.theme)
                .ok_or_else(|| CommandError::UnknownItem(id.clone()))?;
            Ok(render_page(&[node], &app.theme, format))
        }

        Command::Parse { file, json } => {
            let raw = match file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read stdin")?;
                    buf
                }
            };
            let blocks = parse(&raw);
            if *json {
                let mut out =
                    serde_json::to_string_pretty(&blocks).context("Failed to encode blocks")?;
                out.push('\n');
                return Ok(out);
            }
            Ok(render_page(
                &[render_blocks(&blocks, &app.theme)],
                &app.theme,
                format,
            ))
        }

        Command::Feedback => Ok(show_notice(app, NoticeKind::Feedback, format)),

        Command::RequestAccess => {
            if app.access_level() == AccessLevel::Full {
                return Ok("You already have full access.\n".to_string());
            }
            Ok(show_notice(app, NoticeKind::Submission, format))
        }

        Command::Theme(cmd) => run_theme(cmd, app),
    }
}

fn show_notice(app: &App, kind: NoticeKind, format: OutputFormat) -> String {
    let mut queue = NoticeQueue::new();
    queue.show(kind, Instant::now());
    let nodes: Vec<Node> = queue
        .active()
        .iter()
        .map(|notice| render_notice(notice, &app.theme))
        .collect();
    render_page(&nodes, &app.theme, format)
}

fn run_theme(command: &ThemeCommand, app: &mut App) -> Result<String> {
    let theme = &mut app.theme;
    let out = match command {
        ThemeCommand::Show => {
            let marker = theme.root_marker();
            let mut out = format!(
                "mode: {}\ncategory: {}\nclass: {}\ndata-theme-category: {}\n",
                theme.mode(),
                theme.category(),
                marker.class(),
                marker.category.id()
            );
            for category in ThemeCategory::all() {
                let accent = theme.resolve_for_category(*category, ThemePath::ColorsPrimaryMain);
                out.push_str(&format!("accent.{}: {}\n", category.id(), accent.to_css()));
            }
            out
        }
        ThemeCommand::Toggle => {
            theme.toggle_mode();
            format!("mode: {}\n", theme.mode())
        }
        ThemeCommand::SetMode { mode } => {
            let scheme: ColorScheme = mode.parse()?;
            theme.set_mode(scheme);
            format!("mode: {}\n", theme.mode())
        }
        ThemeCommand::SetCategory { category } => {
            theme.set_category(parse_category(category)?);
            format!("category: {}\n", theme.category())
        }
        ThemeCommand::Resolve { path, category } => {
            let value = match category {
                Some(category) => theme.resolver().resolve_str(theme.mode(), category, path),
                None => theme.resolve_str(path),
            };
            let value = value.ok_or_else(|| CommandError::UnknownPath(path.clone()))?;
            format!("{}\n", value.to_css())
        }
        ThemeCommand::Vars => theme
            .to_css_variable_map()
            .into_iter()
            .map(|(name, value)| format!("--{name}: {value};\n"))
            .collect(),
        ThemeCommand::Paths => ThemePath::ALL
            .iter()
            .map(|path| format!("{:<48} {}\n", path.as_str(), path.kind().name()))
            .collect(),
    };
    Ok(out)
}
