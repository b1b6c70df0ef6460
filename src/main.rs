mod calendar;
mod cli;
mod display;
mod github;
mod graph;
mod intensity;
mod streaks;

use anyhow::Result;
use clap::Parser;

use calendar::CalendarWindow;
use cli::{Cli, Mode};
use github::GithubClient;
use graph::RenderMode;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Fetch, then hand the core plain data; the network stops here.
    let client = GithubClient::new()?;
    let raw = client.contribution_calendar(&cli.username).await?;

    let window = CalendarWindow::from_raw(raw)?;
    let days = window.flatten()?;
    let streaks = streaks::streaks(&days);

    display::print_summary(&cli.username, window.total, streaks);

    match cli.mode {
        Mode::Bar => display::print_graph(&window, RenderMode::Bar, cli.weeks),
        Mode::Grid => display::print_graph(&window, RenderMode::Grid, cli.weeks),
        Mode::Both => {
            display::print_graph(&window, RenderMode::Bar, cli.weeks);
            display::print_graph(&window, RenderMode::Grid, cli.weeks);
        }
    }

    Ok(())
}
