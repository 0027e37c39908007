// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON document per line"),
    )
}

fn period_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("period")
            .long("period")
            .short('p')
            .help("today | yesterday | this-week | this-month | last-month | last-3-months | this-year | all-time"),
    )
    .arg(
        Arg::new("from")
            .long("from")
            .requires("to")
            .conflicts_with("period")
            .help("Start of a custom range (YYYY-MM-DD, inclusive)"),
    )
    .arg(
        Arg::new("to")
            .long("to")
            .requires("from")
            .help("End of a custom range (YYYY-MM-DD, inclusive)"),
    )
}

fn months_arg(default: &'static str) -> Arg {
    Arg::new("months")
        .long("months")
        .value_parser(value_parser!(u32).range(1..=60))
        .default_value(default)
        .help("Number of months to look back")
}

pub fn build_cli() -> Command {
    Command::new("budgetmgr")
        .version(clap::crate_version!())
        .about("Track income and expenses, see where the month is heading")
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .global(true)
                .help("Keep settings and data under this directory instead of the platform default"),
        )
        .arg(
            Arg::new("today")
                .long("today")
                .global(true)
                .help("Treat this date (YYYY-MM-DD) as today"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
        .subcommand(Command::new("init").about("Create the data file and settings"))
        .subcommand(
            Command::new("tx")
                .about("Record, list and delete transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("date").long("date").help("Defaults to today"))
                        .arg(Arg::new("description").long("description").short('d'))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .short('t')
                                .value_parser(["expense", "income"])
                                .default_value("expense"),
                        )
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_args(period_args(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .short('s')
                                .help("Only descriptions containing this text"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )))
                .subcommand(
                    Command::new("delete")
                        .about("Delete transactions by id")
                        .arg(Arg::new("id").required(true).num_args(1..)),
                ),
        )
        .subcommand(json_args(
            Command::new("dashboard").about("Current month summary and recent transactions"),
        ))
        .subcommand(
            Command::new("report")
                .about("Analytics over a period")
                .subcommand(json_args(period_args(
                    Command::new("stats").about("Expense statistics and insights"),
                )))
                .subcommand(json_args(period_args(
                    Command::new("overview").about("Total expenses and income"),
                )))
                .subcommand(json_args(
                    Command::new("monthly")
                        .about("Expense totals per month")
                        .arg(months_arg("6")),
                ))
                .subcommand(json_args(
                    Command::new("trend")
                        .about("Income, expenses and balance for months with activity")
                        .arg(months_arg("3")),
                )),
        )
        .subcommand(json_args(
            Command::new("predict").about("Project the month-end balance from this month's run rate"),
        ))
        .subcommand(
            Command::new("budget")
                .about("Monthly budget settings")
                .subcommand(Command::new("show").about("Show budget settings"))
                .subcommand(
                    Command::new("set")
                        .about("Set the monthly budget (0 clears it)")
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("currency")
                        .about("Set the symbol shown in front of amounts")
                        .arg(Arg::new("symbol").required(true)),
                )
                .subcommand(
                    Command::new("alert")
                        .about("Turn over-budget alerts on or off")
                        .arg(
                            Arg::new("state")
                                .required(true)
                                .value_parser(["on", "off"]),
                        ),
                ),
        )
        .subcommand(
            Command::new("import")
                .about("Append transactions from a CSV file")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("export")
                .about("Write all transactions to a file")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .default_value("csv")
                        .help("csv | json"),
                )
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(Command::new("doctor").about("Check the data file for unreadable rows"))
}
