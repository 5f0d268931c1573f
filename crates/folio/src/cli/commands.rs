//! # Command Dispatch
//!
//! `run()` parses arguments, sets up logging and configuration, binds the
//! content store once and hands the resulting [`FolioApi`] to [`dispatch`].
//! Handlers call one API method each and pass the [`CmdResult`] to the
//! printer. Business logic stays in `folioapp`.

use super::print::{
    print_categories, print_full_post, print_json, print_messages, print_posts, print_skills,
};
use super::setup::{Cli, Commands, PostCommands, SkillCommands};
use anyhow::Context;
use clap::Parser;
use folioapp::api::FolioApi;
use folioapp::commands::CmdResult;
use folioapp::config::{BackendKind, FolioConfig};
use folioapp::model::{BlogPost, RecordId, Skill};
use folioapp::store::fs_backend::FsBackend;
use folioapp::store::http_table::HttpTableApi;
use folioapp::store::local_store::LocalStore;
use folioapp::store::remote_store::RemoteStore;
use folioapp::store::ContentStore;
use std::io::{BufRead, Write};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = FolioConfig::load(cli.config.as_deref())?;
    if let Some(backend) = cli.backend {
        config.backend = BackendKind::from(backend).to_string();
    }
    if let Some(dir) = &cli.data_dir {
        config.data_dir = Some(dir.clone());
    }

    if let Commands::Config { template } = cli.command {
        return handle_config(&config, template, cli.json);
    }

    let backend = config.backend_kind()?;
    debug!(%backend, "binding content store");
    match backend {
        BackendKind::Local => {
            let dir = config.data_dir()?;
            let store = LocalStore::with_backend(FsBackend::new(dir))
                .with_seed_defaults(config.seed_defaults);
            dispatch(cli, &config, FolioApi::new(store))
        }
        BackendKind::Remote => {
            let (url, key) = config.remote_credentials()?;
            let api = HttpTableApi::new(url, key, config.request_timeout())?;
            dispatch(cli, &config, FolioApi::new(RemoteStore::new(api)))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn dispatch<S>(cli: Cli, config: &FolioConfig, mut api: FolioApi<S>) -> anyhow::Result<ExitCode>
where
    S: ContentStore<Skill> + ContentStore<BlogPost>,
{
    let json = cli.json;
    match cli.command {
        Commands::Skills { action } => match action {
            SkillCommands::List { category } => {
                finish(api.list_skills(category.as_deref())?, json, print_skills)
            }
            SkillCommands::Categories => finish(api.skill_categories()?, json, |_| ()),
            SkillCommands::Add(args) => finish(api.add_skill(args.fields())?, json, print_skills),
            SkillCommands::Edit { id, fields } => {
                finish(api.edit_skill(id, fields.fields())?, json, print_skills)
            }
            SkillCommands::Delete { id, yes } => {
                let confirmed = yes || confirm("skill", id)?;
                finish(api.delete_skill(id, confirmed)?, json, |_| ())
            }
        },
        Commands::Posts { action } => match action {
            PostCommands::List { category } => {
                finish(api.list_posts(category.as_deref())?, json, print_posts)
            }
            PostCommands::Show { id } => finish(api.show_post(id)?, json, |posts| {
                for post in posts {
                    print_full_post(post);
                }
            }),
            PostCommands::Categories => finish(api.post_categories()?, json, |_| ()),
            PostCommands::Add(args) => finish(api.add_post(args.fields())?, json, print_posts),
            PostCommands::Edit { id, fields } => {
                finish(api.edit_post(id, fields.fields())?, json, print_posts)
            }
            PostCommands::Delete { id, yes } => {
                let confirmed = yes || confirm("blog post", id)?;
                finish(api.delete_post(id, confirmed)?, json, |_| ())
            }
        },
        Commands::Seed => {
            let report = api.seed()?;
            let failed = report.skills.has_errors() || report.posts.has_errors();
            if json {
                print_json(&report)?;
            } else {
                print_messages(&report.skills.messages);
                print_messages(&report.posts.messages);
            }
            Ok(exit_code(failed))
        }
        Commands::Config { template } => handle_config(config, template, json),
    }
}

/// Print a command result and pick the exit code. `records` renders whichever
/// list the command produced: listed records, or the ones it wrote.
fn finish<T, F>(result: CmdResult<T>, json: bool, records: F) -> anyhow::Result<ExitCode>
where
    T: serde::Serialize,
    F: Fn(&[T]),
{
    if json {
        print_json(&result)?;
    } else {
        if !result.listed.is_empty() {
            records(&result.listed);
        } else {
            records(&result.affected);
        }
        if !result.categories.is_empty() {
            print_categories(&result.categories);
        }
        print_messages(&result.messages);
    }
    Ok(exit_code(result.has_errors()))
}

fn exit_code(failed: bool) -> ExitCode {
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Ask on stderr, read the answer from stdin. End of input counts as "no".
fn confirm(label: &str, id: RecordId) -> anyhow::Result<bool> {
    eprint!("Delete {} {}? [y/N] ", label, id);
    std::io::stderr().flush()?;
    let mut answer = String::new();
    let read = std::io::stdin()
        .lock()
        .read_line(&mut answer)
        .context("reading confirmation")?;
    Ok(read > 0 && answer.trim().to_lowercase().starts_with('y'))
}

fn handle_config(config: &FolioConfig, template: bool, json: bool) -> anyhow::Result<ExitCode> {
    if template {
        print!("{}", FolioConfig::template());
        return Ok(ExitCode::SUCCESS);
    }
    if json {
        print_json(config)?;
        return Ok(ExitCode::SUCCESS);
    }
    let value = serde_json::to_value(config)?;
    if let Some(fields) = value.as_object() {
        for (key, value) in fields {
            let shown = match key.as_str() {
                "remote_key" if !value.is_null() => "\"********\"".to_string(),
                _ => value.to_string(),
            };
            println!("{} = {}", key, shown);
        }
    }
    Ok(ExitCode::SUCCESS)
}
