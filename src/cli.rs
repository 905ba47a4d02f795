// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to report on (defaults to the current one)")
}

pub fn build_cli() -> Command {
    Command::new("tallyboard")
        .version(clap::crate_version!())
        .about("Personal-finance dashboards from a transaction snapshot")
        .arg(
            Arg::new("data")
                .long("data")
                .value_name("PATH")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("transactions")
                .help("JSON snapshot with transactions and categories"),
        )
        .arg(
            Arg::new("transactions")
                .long("transactions")
                .value_name("CSV")
                .value_parser(value_parser!(PathBuf))
                .requires("categories")
                .help("Transactions CSV (id,description,amount,type,category_id,date,notes)"),
        )
        .arg(
            Arg::new("categories")
                .long("categories")
                .value_name("CSV")
                .value_parser(value_parser!(PathBuf))
                .requires("transactions")
                .help("Categories CSV (id,name,icon)"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .value_name("YYYY-MM-DD")
                .help("Pin the current date used for month scoping"),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Summary cards and this month's categories"),
        ))
        .subcommand(
            Command::new("report")
                .about("Detailed reports")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("cashflow").about("Income and expense per month"),
                ))
                .subcommand(json_flags(
                    Command::new("by-category")
                        .about("Income and expense per category for one month")
                        .arg(month_arg()),
                ))
                .subcommand(json_flags(
                    Command::new("top").about("All-time top income and expense categories"),
                ))
                .subcommand(json_flags(
                    Command::new("balance").about("Running balance month by month"),
                )),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(month_arg())
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category").value_name("NAME"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand_required(true)
                .subcommand(json_flags(
                    Command::new("list").about("List categories with usage counts"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Write reports to a file")
                .subcommand_required(true)
                .subcommand(
                    Command::new("dashboard")
                        .about("Monthly series as CSV or the full dashboard as JSON")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("json")
                                .help("csv|json"),
                        )
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Check snapshot consistency"))
        .subcommand(
            Command::new("config")
                .about("Settings")
                .subcommand_required(true)
                .subcommand(Command::new("show").about("Print current settings"))
                .subcommand(
                    Command::new("set-data")
                        .about("Remember a default snapshot path")
                        .arg(
                            Arg::new("path")
                                .required(true)
                                .value_parser(value_parser!(PathBuf)),
                        ),
                ),
        )
}
