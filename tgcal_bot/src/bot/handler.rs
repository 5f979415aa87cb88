use anyhow::Result as AnyResult;
use teloxide::{prelude::*, types::Message, utils::command::BotCommands};

use crate::commands::Command;

pub async fn handle_start(bot: Bot, msg: Message) -> AnyResult<()> {
    bot.send_message(
        msg.chat.id,
        format!(
            "👋 Hi! I can show you a calendar to pick dates.\n\n{}",
            Command::descriptions()
        ),
    )
    .await?;
    Ok(())
}

pub async fn handle_help(bot: Bot, msg: Message) -> AnyResult<()> {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}
