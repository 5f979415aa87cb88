use anyhow::Result;
use chrono::Local;
use teloxide::{
    prelude::*,
    types::{CallbackQuery, MaybeInaccessibleMessage},
};
use tgcal_core::CalendarAction;

use crate::calendar::dto::SessionSelection;
use crate::calendar::helpers::{EXPIRED_TEXT, format_selected_dates, session_prompt};
use crate::dependencies::BotDependencies;

pub async fn handle_calendar_callback(
    bot: Bot,
    query: CallbackQuery,
    bot_deps: BotDependencies,
) -> Result<()> {
    let data = query.data.as_deref().unwrap_or("");

    let action = match bot_deps.calendars.decode(data) {
        Ok(action) => action,
        Err(e) => {
            log::warn!("Ignoring callback {:?}: {}", data, e);
            bot.answer_callback_query(query.id.clone()).await?;
            return Ok(());
        }
    };

    let message = match &query.message {
        Some(MaybeInaccessibleMessage::Regular(m)) => m,
        _ => {
            bot.answer_callback_query(query.id.clone())
                .text("❌ Invalid context")
                .await?;
            return Ok(());
        }
    };

    // Every tap must be answered or the client keeps spinning
    bot.answer_callback_query(query.id.clone()).await?;
    if action == CalendarAction::Pass {
        return Ok(());
    }

    let chat_id = message.chat.id;
    let Some(mut session) = bot_deps.sessions.get_for_message(chat_id, message.id) else {
        // no session, or a keyboard replaced by a newer /period or /dates
        bot.edit_message_text(chat_id, message.id, EXPIRED_TEXT).await?;
        return Ok(());
    };
    let today = Local::now().date_naive();

    match action {
        CalendarAction::Pass => {}
        CalendarAction::PreviousMonth(year_month) | CalendarAction::NextMonth(year_month) => {
            session.year_month = year_month;
            let markup = bot_deps.calendars.render(&session, today)?;
            bot_deps.sessions.put(chat_id, session);
            bot.edit_message_reply_markup(chat_id, message.id)
                .reply_markup(markup)
                .await?;
        }
        CalendarAction::SelectDate(date) if !bot_deps.calendars.is_selectable(date, today)? => {
            // keyboard rendered on an earlier day; redraw it with today's window
            log::info!("Chat {} tapped {} outside the date window", chat_id, date);
            let markup = bot_deps.calendars.render(&session, today)?;
            bot.edit_message_reply_markup(chat_id, message.id)
                .reply_markup(markup)
                .await?;
        }
        CalendarAction::SelectDate(date) => {
            match &mut session.selection {
                SessionSelection::Period(selection) => selection.select(date),
                SessionSelection::Specific(selection) => {
                    selection.toggle(date);
                }
            }
            let markup = bot_deps.calendars.render(&session, today)?;
            bot.edit_message_text(chat_id, message.id, session_prompt(&session))
                .reply_markup(markup)
                .await?;
            bot_deps.sessions.put(chat_id, session);
        }
        CalendarAction::Reset => {
            match &mut session.selection {
                SessionSelection::Period(selection) => selection.reset(),
                SessionSelection::Specific(selection) => selection.reset(),
            }
            let markup = bot_deps.calendars.render(&session, today)?;
            bot.edit_message_text(chat_id, message.id, session_prompt(&session))
                .reply_markup(markup)
                .await?;
            bot_deps.sessions.put(chat_id, session);
        }
        CalendarAction::Confirm => {
            let dates = match &session.selection {
                SessionSelection::Period(selection) => selection.dates()?,
                SessionSelection::Specific(selection) => selection.dates(),
            };
            bot_deps.sessions.remove(chat_id);
            log::info!("Chat {} confirmed {} dates", chat_id, dates.len());
            bot.edit_message_text(chat_id, message.id, format_selected_dates(&dates))
                .await?;
        }
    }

    Ok(())
}
