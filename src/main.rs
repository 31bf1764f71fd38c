// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use spendwise::{cli, commands, db};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let path = db::db_path(matches.get_one::<PathBuf>("db").map(PathBuf::as_path))?;
    let conn = db::open_or_init(&path)?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("add", sub)) => {
            commands::expenses::add(&conn, &matches, sub)?;
        }
        Some(("edit", sub)) => commands::expenses::edit(&conn, sub)?,
        Some(("rm", sub)) => commands::expenses::remove(&conn, sub)?,
        Some(("list", sub)) => commands::expenses::list(&conn, &matches, sub)?,
        Some(("summary", sub)) => commands::summary::handle(&conn, &matches, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&conn, &matches, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(&conn)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
