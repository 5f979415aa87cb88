use anyhow::Result;
use chrono::Local;
use teloxide::{prelude::*, types::Message};
use tgcal_core::YearMonth;

use crate::calendar::dto::CalendarSession;
use crate::calendar::helpers::session_prompt;
use crate::dependencies::BotDependencies;

/// Opens a fresh calendar on the current month, replacing any earlier one in this chat.
pub async fn handle_open_calendar(
    bot: Bot,
    msg: Message,
    bot_deps: BotDependencies,
    new_session: fn(YearMonth) -> CalendarSession,
) -> Result<()> {
    let today = Local::now().date_naive();
    let session = new_session(YearMonth::of(today));
    let markup = bot_deps.calendars.render(&session, today)?;

    let sent = bot
        .send_message(msg.chat.id, session_prompt(&session))
        .reply_markup(markup)
        .await?;
    log::info!("Opened calendar in chat {}", msg.chat.id);

    let previous = bot_deps
        .sessions
        .get(msg.chat.id)
        .and_then(|session| session.message_id);
    bot_deps.sessions.put(msg.chat.id, session.shown_in(sent.id));

    if let Some(message_id) = previous {
        // Telegram refuses to delete messages older than 48 hours
        if let Err(e) = bot.delete_message(msg.chat.id, message_id).await {
            log::warn!(
                "Could not delete old calendar {} in chat {}: {}",
                message_id.0,
                msg.chat.id,
                e
            );
        }
    }
    Ok(())
}

pub async fn handle_period(bot: Bot, msg: Message, bot_deps: BotDependencies) -> Result<()> {
    handle_open_calendar(bot, msg, bot_deps, CalendarSession::period).await
}

pub async fn handle_dates(bot: Bot, msg: Message, bot_deps: BotDependencies) -> Result<()> {
    handle_open_calendar(bot, msg, bot_deps, CalendarSession::specific).await
}
