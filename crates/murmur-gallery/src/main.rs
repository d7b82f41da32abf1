//! Entry point for the Murmur gallery desktop app.

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use murmur_gallery::{App, Args, GalleryResult};
use murmur_logging::MurmurSubscriberBuilder;

const GALLERY_CSS: &str = include_str!("style.css");

fn main() {
    let args = Args::parse();
    let _log_guard = MurmurSubscriberBuilder::new()
        .with_config(args.log_config())
        .init();

    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "Gallery failed to start");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> GalleryResult<()> {
    let config = args.bubble_config()?;
    let conversation = args.conversation()?;

    tracing::info!(
        title = %conversation.title,
        messages = conversation.messages.len(),
        locale = %config.locale,
        "Starting Murmur gallery"
    );

    let window = WindowBuilder::new()
        .with_title(format!("Murmur - {}", conversation.title))
        .with_inner_size(LogicalSize::new(420.0, 720.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(window)
                .with_custom_head(format!(
                    r#"<style>{}{}</style>"#,
                    murmur_ui::BUBBLE_CSS,
                    GALLERY_CSS,
                )),
        )
        .with_context(conversation)
        .with_context(config)
        .launch(App);

    Ok(())
}
