// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::Context;
use std::env;
use std::io;
use feed_the_monkey::config::{load_and_validate_config, Config};
use feed_the_monkey::engine::Session;
use feed_the_monkey::observability::init_tracing;
use feed_the_monkey::observability::messages::config::ConfigDefaulted;
use feed_the_monkey::observability::messages::StructuredLog;
use feed_the_monkey::traits::LineSink;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("feed-the-monkey");

    let config_path = match parse_args(&args) {
        Invocation::Run(config_path) => config_path,
        Invocation::Help => {
            print_usage(program);
            return Ok(());
        }
        Invocation::Usage => {
            print_usage(program);
            std::process::exit(1);
        }
    };

    let config = match config_path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => {
            let cfg = Config::default();
            ConfigDefaulted {
                word_count: cfg.words.len(),
                receive_count: cfg.receive_count,
            }
            .log();
            cfg
        }
    };

    // Ctrl-C ends the consumer early; the emitter is still stopped cleanly.
    let interrupt = CancellationToken::new();
    tokio::spawn({
        let interrupt = interrupt.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                interrupt.cancel();
            }
        }
    });

    let session = Session::from_config(&config)?;
    let mut sink = LineSink::new(io::stdout().lock());
    let summary = match session.run(&mut sink, &interrupt).await {
        Ok(summary) => summary,
        // Reader closed early (`| head`); nothing left to print to.
        Err(e) if e.is_broken_pipe() => return Ok(()),
        Err(e) => return Err(e.into()),
    };
    match sink.flush() {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => return Ok(()),
        other => other?,
    }

    tracing::debug!(?summary, "Run finished");

    Ok(())
}

/// What the command line asks for.
#[derive(Debug, PartialEq, Eq)]
enum Invocation<'a> {
    /// Run a session, optionally from a config file.
    Run(Option<&'a str>),
    Help,
    /// Bad arguments: print usage and fail.
    Usage,
}

fn parse_args(args: &[String]) -> Invocation<'_> {
    match args.get(1..).unwrap_or_default() {
        [] => Invocation::Run(None),
        [flag] if flag == "-h" || flag == "--help" => Invocation::Help,
        [path] => Invocation::Run(Some(path.as_str())),
        _ => Invocation::Usage,
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [config.yaml]", program);
    eprintln!("Example: {}", program);
    eprintln!("Example: {} configs/bananas.yaml", program);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn no_arguments_runs_the_default_demo() {
        assert_eq!(parse_args(&args(&["feed-the-monkey"])), Invocation::Run(None));
    }

    #[test]
    fn one_argument_is_a_config_path() {
        let argv = args(&["feed-the-monkey", "configs/bananas.yaml"]);
        assert_eq!(parse_args(&argv), Invocation::Run(Some("configs/bananas.yaml")));
    }

    #[test]
    fn help_flags_ask_for_help() {
        assert_eq!(parse_args(&args(&["feed-the-monkey", "-h"])), Invocation::Help);
        assert_eq!(parse_args(&args(&["feed-the-monkey", "--help"])), Invocation::Help);
    }

    #[test]
    fn too_many_arguments_is_a_usage_error() {
        let argv = args(&["feed-the-monkey", "a.yaml", "b.yaml"]);
        assert_eq!(parse_args(&argv), Invocation::Usage);
    }
}
