use clap::Parser;

/// Two-player tic-tac-toe in the terminal, with a move history you can jump
/// back through.
#[derive(Debug, Clone, Parser)]
#[command(name = "tic-tac-toe", version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. `debug`,
    /// `tic_tac_toe=trace`). Logs go to stderr.
    #[arg(long, default_value = "warn")]
    pub log: String,

    /// Do not print the move history under the board.
    #[arg(long)]
    pub hide_history: bool,
}
