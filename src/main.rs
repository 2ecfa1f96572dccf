use dangerous_writing::logging::Logger;
use dangerous_writing::{error, EditorConfig, Result, RunOptions, TuiApplication};

fn main() -> Result<()> {
    error::setup_panic_handler();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = RunOptions::from_args(&args);

    if let Some(path) = &options.debug_log {
        Logger::for_development().with_file_output(path)?.install()?;
        log::info!("dangerous-writing {} starting", env!("CARGO_PKG_VERSION"));
    }

    let mut app = TuiApplication::new(EditorConfig::default())?;
    app.run()
}
