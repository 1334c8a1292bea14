//! Minimal CLI: compose → (dispatch | parfor | batch)
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Deserialize;

use crate::codegen::{self, FamilyConfig, Role};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate a strongly-typed GPU overload family and write it as one artifact
#[derive(Parser, Debug)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit the internal DispatchKernel overload family
    Dispatch(FamilyOut),
    /// emit the public ParallelFor forwarding family
    Parfor(FamilyOut),
    /// emit several families from a JSON job list
    Batch(BatchOut),
}

#[derive(Args, Debug, Clone)]
struct GenSettings {
    /// number of overloads to emit, one per arity (1..=16)
    #[arg(long, default_value_t = codegen::DEFAULT_MAX_ARITY)]
    max_arity: usize,

    /// view wrapper for the action's final buffer slot
    #[arg(long, default_value = codegen::DEFAULT_VIEW_WRAPPER)]
    last_wrapper: String,
}

#[derive(clap::Parser, Debug)]
struct FamilyOut {
    #[command(flatten)]
    gen_settings: GenSettings,

    /// output .cs file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(clap::Parser, Debug)]
struct BatchOut {
    /// JSON job list: { "jobs": [ { "role", "max_arity"?, "last_wrapper"?, "out" } ] }
    config: PathBuf,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

#[derive(Deserialize, Debug)]
struct BatchFile {
    jobs: Vec<BatchJob>,
}

#[derive(Deserialize, Debug)]
struct BatchJob {
    role: RoleName,
    #[serde(default = "default_max_arity")]
    max_arity: usize,
    #[serde(default = "default_last_wrapper")]
    last_wrapper: String,
    out: PathBuf,
}

#[derive(Deserialize, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RoleName {
    Dispatch,
    Parfor,
}

impl RoleName {
    fn role(self) -> Role {
        match self {
            RoleName::Dispatch => Role::Dispatch,
            RoleName::Parfor => Role::ParallelFor,
        }
    }
}

fn default_max_arity() -> usize {
    codegen::DEFAULT_MAX_ARITY
}

fn default_last_wrapper() -> String {
    codegen::DEFAULT_VIEW_WRAPPER.to_string()
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn run(&self) -> anyhow::Result<()> {
        match &self.cmd {
            Command::Dispatch(target) => run_family(Role::Dispatch, target),
            Command::Parfor(target) => run_family(Role::ParallelFor, target),
            Command::Batch(target) => run_batch(target),
        }
    }
}

fn run_family(role: Role, target: &FamilyOut) -> anyhow::Result<()> {
    // debug path
    if target.no_op {
        eprintln!("{target:#?}");
        return Ok(());
    }

    let cfg = FamilyConfig {
        role,
        max_arity: target.gen_settings.max_arity,
        last_wrapper: target.gen_settings.last_wrapper.clone(),
    };

    // 1) build the whole family in memory
    let family_src = codegen::generate_family(&cfg)?;

    // 2) one write, full overwrite
    write_artifact(target.out.as_deref(), &family_src)
}

fn run_batch(target: &BatchOut) -> anyhow::Result<()> {
    // debug path
    if target.no_op {
        eprintln!("{target:#?}");
        return Ok(());
    }

    let source = std::fs::read_to_string(&target.config)
        .with_context(|| format!("failed to read job list {}", target.config.display()))?;
    let batch: BatchFile = serde_json::from_str(&source)
        .with_context(|| format!("failed to parse job list {}", target.config.display()))?;

    // Generate every family before writing any, so a bad job aborts the run
    // with no artifacts touched.
    let mut rendered = Vec::with_capacity(batch.jobs.len());
    for job in &batch.jobs {
        let cfg = FamilyConfig {
            role: job.role.role(),
            max_arity: job.max_arity,
            last_wrapper: job.last_wrapper.clone(),
        };
        let family_src = codegen::generate_family(&cfg)
            .with_context(|| format!("job for {} failed", job.out.display()))?;
        rendered.push((job.out.as_path(), family_src));
    }

    for (out, family_src) in rendered {
        write_artifact(Some(out), &family_src)?;
    }
    Ok(())
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn write_artifact(out: Option<&Path>, text: &str) -> anyhow::Result<()> {
    match out {
        Some(out) => {
            if let Some(parent) = out.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
            }
            std::fs::write(out, text)
                .with_context(|| format!("failed to write {}", out.display()))?;
            eprintln!("{} {}", "wrote".green(), out.display());
        }
        None => {
            print!("{text}");
        }
    }
    Ok(())
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
