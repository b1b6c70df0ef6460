use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "GitHub contribution streaks and heatmaps in your terminal"
)]
pub struct Cli {
    /// GitHub username to look up
    pub username: String,

    /// Trailing weeks to render in the graphs
    #[arg(short, long, default_value_t = 12)]
    pub weeks: usize,

    /// Which graph(s) to draw
    #[arg(short, long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Bar,
    Grid,
    Both,
}
