//! Callback query handlers for tgcal_bot.

use anyhow::Result;
use teloxide::{prelude::*, types::CallbackQuery};

use crate::calendar::callbacks::handle_calendar_callback;
use crate::dependencies::BotDependencies;

pub async fn handle_callback_query(
    bot: Bot,
    query: CallbackQuery,
    bot_deps: BotDependencies,
) -> Result<()> {
    if query.data.is_none() {
        bot.answer_callback_query(query.id.clone()).await?;
        return Ok(());
    }

    handle_calendar_callback(bot, query, bot_deps).await
}
