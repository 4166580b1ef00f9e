mod cli;
mod logging;
mod theme;
mod tui;

fn main() -> anyhow::Result<()> {
    cli::run()
}
