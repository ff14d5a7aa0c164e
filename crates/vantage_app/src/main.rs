//! Demo application: a culled, batched scene of cubes, transparent planes,
//! a light marker and a skybox, orbited with the mouse.
//!
//! Controls: drag to orbit, scroll to zoom, `Space` pauses the animation,
//! `P` toggles the grayscale post-process.

mod graphics;
mod orbit;
mod runner;
mod scene;

fn main() -> anyhow::Result<()> {
    init_logging()?;
    runner::run()
}

fn init_logging() -> anyhow::Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Warn)
        .level_for("vantage_app", log::LevelFilter::Info)
        .level_for("vantage_renderer", log::LevelFilter::Info)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
