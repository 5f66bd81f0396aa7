mod app;
mod ui;

use anyhow::Context;
use attendance_dashboard::Config;
use iced::Theme;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "attendance_dashboard=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::info!(base_url = %config.base_url, "starting attendance dashboard");

    iced::application("Theo dõi chấm công", app::update, app::view)
        .theme(|_| Theme::Dark)
        .window(iced::window::Settings {
            size: iced::Size::new(900.0, 700.0),
            ..Default::default()
        })
        .run_with(move || app::init(config))?;

    Ok(())
}
