use bsmart::constants::DEFAULT_PANEL_URL;
use bsmart::dashboard::start_dashboard;
use bsmart::entrypoint::start_server;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the alarm panel server
    Serve,
    /// Show the device table in the terminal, refreshing it periodically
    Dashboard {
        #[arg(long, default_value = DEFAULT_PANEL_URL)]
        url: String,
        #[arg(short, long)]
        username: String,
        #[arg(short, long, env = "BSMART_PASSWORD")]
        password: String,
    },
}

fn main() {
    let result = match Args::parse().command {
        Command::Serve => start_server(),
        Command::Dashboard {
            url,
            username,
            password,
        } => start_dashboard(&url, &username, &password),
    };

    if let Err(err) = result {
        eprintln!("{}", err.to_str());
        std::process::exit(1);
    }
}
