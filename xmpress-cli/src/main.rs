use anyhow::Result;
use clap::Command;

mod cmd;
mod config;

fn cli() -> Command {
    Command::new("xmpress")
        .about("Assemble static blog pages from markdown in literal-text blocks")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(cmd::build::make_subcommand())
        .subcommand(cmd::page::make_subcommand())
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();

    match matches.subcommand() {
        Some(("build", args)) => cmd::build::execute(args).await,
        Some(("page", args)) => cmd::page::execute(args),
        _ => unreachable!("subcommand required"),
    }
}
