use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = commands::dispatch(cli) {
        ui::error::print_error(&err, json);
        std::process::exit(1);
    }
}
