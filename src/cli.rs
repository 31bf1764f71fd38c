// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use clap::{Arg, ArgAction, Command, value_parser};
use std::path::PathBuf;

use crate::db::DB_ENV;
use crate::models::FilterMode;

fn parse_day_arg(s: &str) -> Result<NaiveDate, String> {
    crate::form::parse_day(s).map_err(|e| e.to_string())
}

fn filter_arg() -> Arg {
    Arg::new("filter")
        .long("filter")
        .short('f')
        .value_name("all|week|month")
        .value_parser(|s: &str| s.parse::<FilterMode>())
        .default_value("all")
        .help("Time range: all, week (since Monday) or month (since the 1st)")
}

fn json_args() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl"),
        Arg::new("jsonl").long("jsonl").action(ArgAction::SetTrue),
    ]
}

fn amount_arg() -> Arg {
    // Negative input reaches form validation instead of being read as a flag.
    Arg::new("amount")
        .long("amount")
        .short('a')
        .allow_negative_numbers(true)
}

fn id_arg() -> Arg {
    Arg::new("id")
        .required(true)
        .value_parser(value_parser!(i64))
        .help("Expense id as shown by `list`")
}

pub fn build_cli() -> Command {
    Command::new("spendwise")
        .version(clap::crate_version!())
        .about("Track student expenses with category summaries")
        .arg(
            Arg::new("db")
                .long("db")
                .global(true)
                .env(DB_ENV)
                .value_parser(value_parser!(PathBuf))
                .help("SQLite database path (defaults to the platform data dir)"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .value_name("YYYY-MM-DD")
                .value_parser(parse_day_arg)
                .help("Reference date for week/month filters and new expenses"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("add")
                .about("Record an expense")
                .arg(amount_arg().required(true))
                .arg(
                    Arg::new("category")
                        .long("category")
                        .short('c')
                        .required(true),
                )
                .arg(Arg::new("note").long("note").short('n'))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("YYYY-MM-DD")
                        .help("Defaults to today"),
                ),
        )
        .subcommand(
            Command::new("edit")
                .about("Change fields of an existing expense")
                .arg(id_arg())
                .arg(amount_arg())
                .arg(Arg::new("category").long("category").short('c'))
                .arg(Arg::new("note").long("note").short('n'))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .short('d')
                        .value_name("YYYY-MM-DD"),
                ),
        )
        .subcommand(Command::new("rm").about("Delete an expense").arg(id_arg()))
        .subcommand(
            Command::new("list")
                .about("List expenses, newest first")
                .arg(filter_arg())
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                )
                .args(json_args()),
        )
        .subcommand(
            Command::new("summary")
                .about("Total, per-category breakdown and chart")
                .arg(filter_arg())
                .args(json_args()),
        )
        .subcommand(
            Command::new("export")
                .about("Write expenses to a CSV or JSON file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .value_parser(["csv", "json"])
                        .default_value("csv"),
                )
                .arg(Arg::new("out").long("out").short('o').required(true))
                .arg(filter_arg()),
        )
        .subcommand(Command::new("doctor").about("Report rows that break the record rules"))
}
