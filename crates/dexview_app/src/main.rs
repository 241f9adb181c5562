mod app;
mod effects;
mod logging;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    // The TUI owns the terminal, so logs go to a file.
    logging::initialize(logging::LogDestination::File);
    app::run()
}
