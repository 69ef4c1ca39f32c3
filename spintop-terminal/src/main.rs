/// Spintop Terminal Demo - Spinning Cube
///
/// Steps a cube one degree at a time about the world axes and reports
/// the decomposed pose after every step.
/// Controls:
///   - X / Y / Z: Rotate about that axis
///   - ESC: Quit

use anyhow::Result;
use spintop_core::{SpinConfig, SpinSession};
use spintop_terminal::TerminalApp;

fn main() -> Result<()> {
    env_logger::init();

    println!("Spintop - Loading...");

    let session = SpinSession::new(SpinConfig::default());

    println!("Starting terminal renderer (press ESC to quit)...");
    std::thread::sleep(std::time::Duration::from_secs(1));

    // Run the terminal app
    let mut app = TerminalApp::new(session)?;
    app.run()?;

    // Leave the final pose on the scrollback after the screen restores.
    if let Some(report) = app.session().last_report() {
        println!("{report}");
    }
    Ok(())
}
