//! # issuepost CLI
//!
//! Command-line entry point, meant to run as a CI step on issue events.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;

use issuepost::{
    commands::{self, ConvertArgs},
    ConfigOverrides,
};

const GLOBAL_HELP: &str = "\
Environment:
  GITHUB_EVENT_PATH    Path of the JSON event payload (required unless --event is given)
  RUST_LOG             Log level for diagnostics (e.g. debug)

Configuration File:
  issuepost.toml       Optional, in the project root:  posts_dir = \"source/_posts\"

Issue Body Sections:
  ### 正文                 Post content (whole body if absent)
  ### 标签（tags）         Tags, separated by commas or newlines
  ### 分类（categories）   Categories, separated by commas or newlines
  ### 发布时间（可选）     Display date (defaults to now)

Examples:
  GITHUB_EVENT_PATH=event.json issuepost
  issuepost --event event.json --dry-run
  issuepost --event event.json --posts-dir content/posts";

#[derive(Parser)]
#[command(name = "issuepost")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Turn an issue event into a Markdown blog post")]
#[command(
    long_about = "issuepost reads an issue event payload and writes the issue as a Markdown \
post with YAML front matter into the blog's posts directory.\n\n\
Every post carries an 'issue: <number>' line. Running again for the same issue \
rewrites that post, renaming the file if the title changed. A file name already \
used by another issue's post gets the issue number appended."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Event payload path (overrides GITHUB_EVENT_PATH)
    #[arg(long, value_name = "PATH")]
    event: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Posts directory, relative to the project root
    #[arg(long, value_name = "DIR")]
    posts_dir: Option<PathBuf>,

    /// Print the target path without renaming or writing anything
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    commands::execute(ConvertArgs {
        overrides: ConfigOverrides {
            event_path: cli.event,
            project_root: cli.root,
            posts_dir: cli.posts_dir,
        },
        dry_run: cli.dry_run,
    })?;

    Ok(())
}
