mod bot;
mod calendar;
mod callbacks;
mod commands;
mod config;
mod dependencies;

use teloxide::prelude::*;

use crate::bot::handler_tree::handler_tree;
use crate::calendar::{helpers::Calendars, storage::CalendarSessions};
use crate::config::BotConfig;
use crate::dependencies::BotDependencies;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    log::info!("Starting tgcal_bot...");

    let config = BotConfig::from_env()?;
    log::info!(
        "Calendar locale: {:?}, days ahead: {:?}",
        config.locale,
        config.days_ahead
    );

    let bot_deps = BotDependencies {
        calendars: Calendars::from_config(&config)?,
        sessions: CalendarSessions::new(),
    };

    let bot = Bot::from_env();

    Dispatcher::builder(bot, handler_tree())
        .dependencies(dptree::deps![bot_deps])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
