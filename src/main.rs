use clap::Parser;
use quill::Platform;
use quill::core::config;
use quill::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "quill", about = "Terminal social post composer")]
struct Args {
    /// Target platform for AI-assisted content
    #[arg(short, long, value_enum)]
    platform: Option<Platform>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to quill.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("quill.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config unusable ({e}), falling back to defaults");
        config::QuillConfig::default()
    });
    let resolved = config::resolve(&file_config, args.platform);

    log::info!("Quill starting up, platform: {}", resolved.platform);

    tui::run(resolved)
}
