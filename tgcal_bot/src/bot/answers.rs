use anyhow::Result;
use teloxide::{Bot, types::Message};

use super::handler::{handle_help, handle_start};
use crate::calendar::handler::{handle_dates, handle_period};
use crate::commands::Command;
use crate::dependencies::BotDependencies;

pub async fn answers(
    bot: Bot,
    msg: Message,
    cmd: Command,
    bot_deps: BotDependencies,
) -> Result<()> {
    match cmd {
        Command::Start => handle_start(bot, msg).await?,
        Command::Help => handle_help(bot, msg).await?,
        Command::Period => handle_period(bot, msg, bot_deps).await?,
        Command::Dates => handle_dates(bot, msg, bot_deps).await?,
    };

    Ok(())
}
