use anyhow::Context;
use api_client::ApiClient;
use console_cmd::{ConsoleCmd, HELP};
use console_input::console_input_thread;
use render::{render_grid, render_names, render_records};
use scoring::{grid::GridData, roster::{self, Role}};
use tracing::{debug, info};
use tracing_setup::init_tracing;

mod api_client;
mod console_cmd;
mod console_input;
mod render;
mod tracing_setup;

#[tokio::main]
async fn main() {
    init_tracing();

    let client = ApiClient::from_env();
    let mut grid = GridData::new();

    println!("cricket scoring grid, match server at {}", client.base_url());
    println!("type `help` for commands");

    let mut console_receiver = console_input_thread();
    while let Some(console_str) = console_receiver.recv().await {
        let cmd = match ConsoleCmd::parse(&console_str) {
            Ok(cmd) => cmd,
            Err(err) => {
                println!("err: {err:#}");
                continue;
            }
        };
        if cmd == ConsoleCmd::Quit {
            break;
        }
        if let Err(err) = run_cmd(cmd, &mut grid, &client).await {
            println!("err: {err:#}");
        }
    }
}

async fn run_cmd(cmd: ConsoleCmd, grid: &mut GridData, client: &ApiClient) -> anyhow::Result<()> {
    match cmd {
        ConsoleCmd::SetName { role, index, name } => {
            debug!(?role, index, %name, "set name");
            match role {
                Role::Batsman => grid.set_batsman(index, name)?,
                Role::Bowler => grid.set_bowler(index, name)?,
            }
            print!("{}", render_grid(grid));
        }
        ConsoleCmd::Scan(text) => {
            grid.fill_from_text(&text);
            print!("{}", render_grid(grid));
        }
        ConsoleCmd::Show => print!("{}", render_grid(grid)),
        ConsoleCmd::Roster { role, query } => {
            let roles = match role {
                Some(role) => vec![role],
                None => vec![Role::Batsman, Role::Bowler],
            };
            for role in roles {
                println!("{}:", if role == Role::Batsman { "batsmen" } else { "bowlers" });
                if query.is_empty() {
                    print!("{}", render_names(&roster::names(role)));
                } else {
                    for name in roster::search(role, &query) {
                        println!("     {name}");
                    }
                }
            }
        }
        ConsoleCmd::Reset => {
            *grid = GridData::new();
            print!("{}", render_grid(grid));
        }
        ConsoleCmd::Submit => {
            let records = grid.match_records();
            if records.is_empty() {
                println!("nothing to submit, fill in a batsman and a bowler first");
                return Ok(());
            }
            let total = records.len();
            for (sent, record) in records.iter().enumerate() {
                client
                    .insert(record)
                    .await
                    .with_context(|| format!("submitted {sent} of {total} records"))?;
            }
            info!(total, "grid submitted");
            println!("submitted {total} records");
        }
        ConsoleCmd::List => {
            let records = client.list().await?;
            print!("{}", render_records(&records));
        }
        ConsoleCmd::Clear => {
            client.clear().await?;
            *grid = GridData::new();
            println!("match data cleared");
        }
        ConsoleCmd::Help => println!("{HELP}"),
        ConsoleCmd::Quit => {}
    }
    Ok(())
}
