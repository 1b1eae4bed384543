//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config, --strict) are inherited by all subcommands
//! - Every command takes the same resolution context flags

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::value_objects::{ResolutionContext, TemplateKind};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Stencil - template relationship resolution for scaffolding catalogs
#[derive(Parser, Debug)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI (NDJSON)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./stencil.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Abort on the first catalog error instead of recording it
    #[arg(long, global = true)]
    pub strict: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Resolution context and catalog selection shared by every command
#[derive(Args, Debug, Clone)]
pub struct ContextArgs {
    /// Catalog directory or file (overrides config)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Only load templates for this language
    #[arg(long)]
    pub language: Option<String>,

    /// Target platform
    #[arg(long)]
    pub platform: String,

    /// Project type
    #[arg(long = "project-type")]
    pub project_type: String,

    /// Front-end framework
    #[arg(long)]
    pub frontend: Option<String>,

    /// Back-end framework
    #[arg(long)]
    pub backend: Option<String>,

    /// Platform option (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE", value_parser = ResolutionContext::parse_option)]
    pub options: Vec<(String, String)>,
}

impl ContextArgs {
    pub fn to_context(&self) -> ResolutionContext {
        let mut ctx = ResolutionContext::new(&self.platform, &self.project_type);
        if let Some(frontend) = &self.frontend {
            ctx = ctx.with_front_end(frontend);
        }
        if let Some(backend) = &self.backend {
            ctx = ctx.with_back_end(backend);
        }
        for (key, value) in &self.options {
            ctx = ctx.with_option(key, value);
        }
        ctx
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List templates compatible with the context
    List {
        /// Only list templates of this kind
        #[arg(long)]
        kind: Option<TemplateKind>,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Resolve a template with its dependencies, requirements and exclusions
    Resolve {
        /// Template identity
        identity: String,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Resolve the layout of every compatible project template
    Layout {
        #[command(flatten)]
        context: ContextArgs,
    },

    /// Licenses of a template and its dependency closure
    Licenses {
        /// Template identity
        identity: String,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Resolve the whole catalog and report every problem (exits non-zero on problems)
    Check {
        /// Only check templates of this kind
        #[arg(long)]
        kind: Option<TemplateKind>,

        #[command(flatten)]
        context: ContextArgs,
    },
}

impl Commands {
    pub fn context(&self) -> &ContextArgs {
        match self {
            Commands::List { context, .. }
            | Commands::Resolve { context, .. }
            | Commands::Layout { context }
            | Commands::Licenses { context, .. }
            | Commands::Check { context, .. } => context,
        }
    }

    /// Name used in JSON envelopes
    pub fn name(&self) -> &'static str {
        match self {
            Commands::List { .. } => "list",
            Commands::Resolve { .. } => "resolve",
            Commands::Layout { .. } => "layout",
            Commands::Licenses { .. } => "licenses",
            Commands::Check { .. } => "check",
        }
    }
}
