use crate::constants::{REFRESH_INTERVAL, ROLE_ADMIN};
use crate::entrypoint::init_logger;
use libbsmart::{Dashboard, DeviceFilter, PanelClient};
use nullnet_liberror::{location, Error, ErrorHandler, Location};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::MissedTickBehavior;

const HELP: &str = "commands: filter <all|online|offline|alarms> | search [text] | \
add <id> <location> | resolve <id> | delete <id> | refresh | logout | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(DeviceFilter),
    Search(String),
    Add { id: String, location: String },
    Resolve(String),
    Delete(String),
    Refresh,
    Logout,
    Quit,
    Help,
}

impl Command {
    pub fn parse(line: &str) -> Result<Command, String> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name.to_lowercase().as_str() {
            "filter" | "f" => rest.parse().map(Command::Filter),
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "add" | "a" => {
                let (id, location) = rest
                    .split_once(char::is_whitespace)
                    .map(|(id, location)| (id.trim(), location.trim()))
                    .ok_or("usage: add <id> <location>")?;
                Ok(Command::Add {
                    id: id.to_string(),
                    location: location.to_string(),
                })
            }
            "resolve" | "ok" => single_id(rest, "resolve").map(Command::Resolve),
            "delete" | "x" => single_id(rest, "delete").map(Command::Delete),
            "refresh" | "r" | "" => Ok(Command::Refresh),
            "logout" => Ok(Command::Logout),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "help" | "h" | "?" => Ok(Command::Help),
            other => Err(format!("unknown command '{other}' ({HELP})")),
        }
    }
}

fn single_id(rest: &str, command: &str) -> Result<String, String> {
    match rest.split_whitespace().collect::<Vec<_>>().as_slice() {
        [id] => Ok((*id).to_string()),
        _ => Err(format!("usage: {command} <id>")),
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

#[tokio::main]
pub async fn start_dashboard(url: &str, username: &str, password: &str) -> Result<(), Error> {
    init_logger();
    run_dashboard(url, username, password).await
}

/// Logs in and keeps the device table on screen, reloading it every [`REFRESH_INTERVAL`]
/// and applying the commands typed on stdin.
pub async fn run_dashboard(url: &str, username: &str, password: &str) -> Result<(), Error> {
    let mut client = PanelClient::new(url);
    let session = client.login(username, password).await?;
    if session.role != ROLE_ADMIN {
        log::info!("Logged in as '{}': add, resolve and delete will be refused", session.username);
    }

    let mut dashboard = Dashboard::new();
    let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    println!("{HELP}");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                load(&client, &mut dashboard).await;
                println!("{}\n", dashboard.render());
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line.handle_err(location!())? else {
                    log::info!("stdin closed; the dashboard keeps refreshing");
                    stdin_open = false;
                    continue;
                };
                let command = match Command::parse(&line) {
                    Ok(command) => command,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                if let Flow::Exit = apply(command, &mut client, &mut dashboard).await {
                    return Ok(());
                }
            }
        }
    }
}

async fn apply(command: Command, client: &mut PanelClient, dashboard: &mut Dashboard) -> Flow {
    match command {
        Command::Filter(filter) => dashboard.set_filter(filter),
        Command::Search(text) => dashboard.set_search(&text),
        Command::Add { id, location } => {
            report(client.add_device(&id, &location).await);
            load(client, dashboard).await;
        }
        Command::Resolve(id) => {
            report(client.resolve_alarm(&id).await);
            load(client, dashboard).await;
        }
        Command::Delete(id) => {
            report(client.delete_device(&id).await);
            load(client, dashboard).await;
        }
        Command::Refresh => load(client, dashboard).await,
        Command::Logout => {
            report(client.logout().await);
            return Flow::Exit;
        }
        Command::Quit => return Flow::Exit,
        Command::Help => {
            println!("{HELP}");
            return Flow::Continue;
        }
    }

    println!("{}\n", dashboard.render());
    Flow::Continue
}

/// Replaces the table with a fresh list; on failure the previous list stays on screen.
async fn load(client: &PanelClient, dashboard: &mut Dashboard) {
    match client.devices().await {
        Ok(devices) => dashboard.replace(devices),
        Err(err) => log::warn!("Unable to reload devices: {}", err.to_str()),
    }
}

fn report(result: Result<libbsmart::Detail, Error>) {
    match result {
        Ok(detail) => println!("{}", detail.detail),
        Err(err) => println!("{}", err.to_str()),
    }
}
