//! kube-fzf-util - formatting helpers for kubectl fzf completion caches
//!
//! ## Usage
//!
//! ```bash
//! # Render every pod as a cache line
//! kubectl get pods -A -o json | kube-fzf-util line
//!
//! # Age of a creation timestamp
//! kube-fzf-util age 2024-03-15T10:30:00Z
//!
//! # Cluster name of the current API server
//! kube-fzf-util cluster https://kubernetes.prod.example.com:6443
//!
//! # Bounded join
//! kube-fzf-util join a b c d --max 2
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

use kube_fzf_util::config::{print_env_help, ConfigFile, DisplayConfig, EnvConfig};
use kube_fzf_util::utils::{init_logger, LogLevel};
use kube_fzf_util::{
    exclude_from_slice, extract_cluster_from_host, fatal_if, join_int_or_none, join_or_none,
    join_with_max_or_none, time_to_age, ResourceFormatter,
};

mod cli;

use cli::{Args, Command, ConfigAction};

fn main() {
    let args = Args::parse();
    let env = EnvConfig::load();

    let level = args.log_level.unwrap_or_else(|| {
        LogLevel::from_verbose(args.verbose || env.verbose.unwrap_or(false))
    });
    init_logger(level);

    let result = run(args, &env, &mut std::io::stdout().lock());
    fatal_if(result.err().map(|e| format!("{e:#}")));
}

fn run<W: Write>(args: Args, env: &EnvConfig, out: &mut W) -> Result<()> {
    let display = resolve_display(args.config.as_deref(), env)?;

    match args.command {
        Command::Join(join_args) => {
            let display = display
                .with_separator(join_args.sep)
                .with_max_items(join_args.max);
            let joined = if join_args.no_limit {
                join_or_none(&join_args.items, &display.separator)
            } else {
                join_with_max_or_none(&join_args.items, display.max_items, &display.separator)
            };
            writeln!(out, "{joined}")?;
        }
        Command::Ints(ints_args) => {
            let display = display.with_separator(ints_args.sep);
            writeln!(out, "{}", join_int_or_none(&ints_args.values, &display.separator))?;
        }
        Command::Exclude(exclude_args) => {
            let display = display.with_separator(exclude_args.sep);
            let excluded: HashSet<String> = exclude_args.excluded.into_iter().collect();
            let kept = exclude_from_slice(&exclude_args.items, &excluded);
            writeln!(out, "{}", join_or_none(&kept, &display.separator))?;
        }
        Command::Age(age_args) => {
            let timestamp = parse_timestamp(&age_args.timestamp)?;
            writeln!(out, "{}", time_to_age(timestamp))?;
        }
        Command::Cluster(cluster_args) => {
            let cluster = extract_cluster_from_host(&cluster_args.url)
                .with_context(|| format!("Failed to extract cluster from {}", cluster_args.url))?;
            writeln!(out, "{cluster}")?;
        }
        Command::Line(line_args) => {
            display.validate()?;
            let input = match &line_args.file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut input = String::new();
                    std::io::stdin()
                        .read_to_string(&mut input)
                        .context("Failed to read stdin")?;
                    input
                }
            };
            let formatter = ResourceFormatter::new(&display);
            let lines = formatter
                .render_json(&input, Utc::now())
                .context("Failed to render cache lines")?;
            write!(out, "{lines}")?;
        }
        Command::Config(config_args) => manage_config(config_args.action, &display, env, out)?,
    }

    Ok(())
}

/// Display settings from the config file with environment overrides applied
fn resolve_display(config: Option<&Path>, env: &EnvConfig) -> Result<DisplayConfig> {
    Ok(load_config(config, env)?.display.with_env(env))
}

fn load_config(config: Option<&Path>, env: &EnvConfig) -> Result<ConfigFile> {
    let explicit = config
        .map(Path::to_path_buf)
        .or_else(|| env.config_file.as_ref().map(Into::into));

    match explicit {
        Some(path) => {
            debug!("Using config file {}", path.display());
            ConfigFile::load(&path)
        }
        None => ConfigFile::load_default(),
    }
}

fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|ts| ts.with_timezone(&Utc))
        .with_context(|| format!("Invalid RFC 3339 timestamp: {s}"))
}

fn manage_config<W: Write>(
    action: ConfigAction,
    display: &DisplayConfig,
    env: &EnvConfig,
    out: &mut W,
) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let file = ConfigFile {
                display: display.clone(),
                ..Default::default()
            };
            write!(
                out,
                "{}",
                serde_yaml::to_string(&file).context("Failed to serialize config")?
            )?;
        }
        ConfigAction::Env => {
            env.print_summary();
            println!();
            print_env_help();
        }
        ConfigAction::Init { path, force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists, use --force to overwrite",
                    path.display()
                );
            }
            ConfigFile::default().save(&path)?;
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{tempdir, TempDir};

    fn run_to_string(argv: &[&str], env: &EnvConfig) -> Result<String> {
        let mut out = Vec::new();
        run(Args::parse_from(argv), env, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn config_dir() -> (TempDir, String) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "display:\n  separator: \";\"\n  max_items: 3\n").unwrap();
        let path = path.to_string_lossy().into_owned();
        (dir, path)
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("2024-03-15T10:30:00+02:00").unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-03-15T08:30:00+00:00");
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_resolve_display_precedence() {
        let (_dir, path) = config_dir();
        let path = Path::new(&path);

        let from_file = resolve_display(Some(path), &EnvConfig::default()).unwrap();
        assert_eq!(from_file.separator, ";");
        assert_eq!(from_file.max_items, 3);
        assert_eq!(from_file.label_separator, "=");

        let env = EnvConfig {
            separator: Some("|".to_string()),
            ..Default::default()
        };
        let from_env = resolve_display(Some(path), &env).unwrap();
        assert_eq!(from_env.separator, "|");
        assert_eq!(from_env.max_items, 3);

        let from_flags = from_env
            .with_separator(Some("/".to_string()))
            .with_max_items(Some(1));
        assert_eq!(from_flags.separator, "/");
        assert_eq!(from_flags.max_items, 1);
    }

    #[test]
    fn test_config_file_from_env() {
        let (_dir, path) = config_dir();
        let env = EnvConfig {
            config_file: Some(path),
            ..Default::default()
        };
        let display = resolve_display(None, &env).unwrap();
        assert_eq!(display.separator, ";");
    }

    #[test]
    fn test_join_dispatch_precedence() {
        let (_dir, path) = config_dir();
        let argv = ["kube-fzf-util", "--config", &path, "join", "a", "b", "c", "d"];

        assert_eq!(
            run_to_string(&argv, &EnvConfig::default()).unwrap(),
            "a;b;c;...\n"
        );

        let env = EnvConfig {
            separator: Some("|".to_string()),
            max_items: Some(2),
            ..Default::default()
        };
        assert_eq!(run_to_string(&argv, &env).unwrap(), "a|b|...\n");

        let argv = [
            "kube-fzf-util", "--config", &path, "join", "a", "b", "c", "d", "--sep", "/", "--max", "5",
        ];
        assert_eq!(run_to_string(&argv, &env).unwrap(), "a/b/c/d\n");

        let argv = ["kube-fzf-util", "--config", &path, "join", "--no-limit", "a", "b", "c", "d"];
        assert_eq!(run_to_string(&argv, &EnvConfig::default()).unwrap(), "a;b;c;d\n");
    }

    #[test]
    fn test_ints_and_exclude_dispatch() {
        let (_dir, path) = config_dir();
        let argv = ["kube-fzf-util", "--config", &path, "ints", "80", "-1"];
        assert_eq!(run_to_string(&argv, &EnvConfig::default()).unwrap(), "80;-1\n");

        let argv = ["kube-fzf-util", "--config", &path, "exclude", "x", "y", "z", "-x", "y"];
        assert_eq!(run_to_string(&argv, &EnvConfig::default()).unwrap(), "x;z\n");

        let argv = ["kube-fzf-util", "--config", &path, "exclude", "y", "-x", "y"];
        assert_eq!(run_to_string(&argv, &EnvConfig::default()).unwrap(), "None\n");
    }

    #[test]
    fn test_line_dispatch() {
        let (dir, path) = config_dir();
        let objects = dir.path().join("pods.json");
        std::fs::write(
            &objects,
            r#"{"items": [
                {"metadata": {"name": "api", "namespace": "prod",
                              "labels": {"app": "api", "tier": "backend", "pod-template-hash": "x"}}},
                {"metadata": {"name": "node-1"}}
            ]}"#,
        )
        .unwrap();
        let objects = objects.to_string_lossy().into_owned();

        let argv = ["kube-fzf-util", "--config", &path, "line", &objects];
        assert_eq!(
            run_to_string(&argv, &EnvConfig::default()).unwrap(),
            "prod api None app=api;tier=backend\nNone node-1 None None\n"
        );
    }

    #[test]
    fn test_line_rejects_whitespace_separator() {
        let (dir, path) = config_dir();
        let objects = dir.path().join("pod.json");
        std::fs::write(&objects, r#"{"metadata": {"name": "n"}}"#).unwrap();
        let objects = objects.to_string_lossy().into_owned();

        let env = EnvConfig {
            separator: Some(" ".to_string()),
            ..Default::default()
        };
        let argv = ["kube-fzf-util", "--config", &path, "line", &objects];
        let err = run_to_string(&argv, &env).unwrap_err();
        assert!(err.to_string().contains("whitespace"));
    }

    #[test]
    fn test_cluster_dispatch_error() {
        let (_dir, path) = config_dir();
        let argv = ["kube-fzf-util", "--config", &path, "cluster", "not a url"];
        let err = run_to_string(&argv, &EnvConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid URL"));
    }

    #[test]
    fn test_config_init_refuses_overwrite() {
        let (dir, path) = config_dir();
        let target = dir.path().join("new.yaml");
        let target = target.to_string_lossy().into_owned();

        let argv = ["kube-fzf-util", "--config", &path, "config", "init", &target];
        let output = run_to_string(&argv, &EnvConfig::default()).unwrap();
        assert!(output.starts_with("Wrote "));
        assert!(ConfigFile::load(&target).is_ok());

        assert!(run_to_string(&argv, &EnvConfig::default()).is_err());

        let argv = ["kube-fzf-util", "--config", &path, "config", "init", &target, "--force"];
        assert!(run_to_string(&argv, &EnvConfig::default()).is_ok());
    }
}
