//! Command, menu and callback handlers
//!
//! Each handler first builds a [`Reply`] from the store, then delivers it
//! either as a new message or by editing the message that carried the
//! pressed inline button.

use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, InlineKeyboardMarkup, KeyboardMarkup, MessageId, ParseMode};
use tvguide_core::CallbackPayload;
use tvguide_core::calendar::offset_date;

use crate::commands::Command;
use crate::context::GuideContext;
use crate::format::{format_channel_day_listing, format_day_listing, format_genre_listing};
use crate::keyboards::{MenuButton, channel_keyboard, day_keyboard, genre_keyboard, main_menu};

pub const GREETING: &str = "Привет! Я — ТВ Гид\nВыбери действие:";
pub const INTERNAL_ERROR: &str = "⚠️ Не удалось получить программу. Попробуйте позже.";

/// Keyboard attached to a reply
#[derive(Debug, Clone)]
pub enum Keyboard {
    Menu(KeyboardMarkup),
    Inline(InlineKeyboardMarkup),
}

/// Text and optional keyboard, independent of how it is delivered
#[derive(Debug, Clone)]
pub struct Reply {
    pub text: String,
    pub keyboard: Option<Keyboard>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: None,
        }
    }

    pub fn with_menu(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(Keyboard::Menu(main_menu())),
        }
    }

    pub fn with_inline(text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Self {
        Self {
            text: text.into(),
            keyboard: Some(Keyboard::Inline(keyboard)),
        }
    }
}

pub fn render_start() -> Reply {
    Reply::with_menu(GREETING)
}

pub fn render_help(ctx: &GuideContext) -> Reply {
    let help_text = format!(
        "<b>Инструкция:</b>\n\
         • <b>Сегодня / Завтра</b> — программа на день\n\
         • <b>По жанру</b> — выбери жанр\n\
         • <b>По каналу</b> — выбери канал и день\n\
         • Даты: до +{} дней",
        ctx.catalog.day_span.saturating_sub(1)
    );
    Reply::with_menu(help_text)
}

/// Day listing for today (`offset` 0) or tomorrow (`offset` 1)
pub async fn render_day(ctx: &GuideContext, offset: i64) -> Result<Reply> {
    let date = offset_date(ctx.today(), offset);
    let rows = ctx.db.programs_on_date(date).await?;

    tracing::debug!("Day listing for {}: {} rows", date, rows.len());
    Ok(Reply::text(format_day_listing(date, &rows)))
}

pub fn render_genre_menu(ctx: &GuideContext) -> Result<Reply> {
    let keyboard = genre_keyboard(&ctx.catalog.genres)?;
    Ok(Reply::with_inline("Выбери жанр:", keyboard))
}

pub async fn render_channel_menu(ctx: &GuideContext) -> Result<Reply> {
    let channels = ctx.db.channel_names().await?;
    if channels.is_empty() {
        return Ok(Reply::text("Каналов пока нет."));
    }

    let keyboard = channel_keyboard(&channels)?;
    Ok(Reply::with_inline("Выбери канал:", keyboard))
}

/// Reply for a pressed inline button
pub async fn render_callback(ctx: &GuideContext, payload: &CallbackPayload) -> Result<Reply> {
    match payload {
        CallbackPayload::Genre(genre) => {
            let today = ctx.today();
            let rows = ctx
                .db
                .programs_by_genre_in_range(genre, today, ctx.catalog.last_day(today))
                .await?;
            Ok(Reply::text(format_genre_listing(genre, &rows)))
        }
        CallbackPayload::Channel(channel) => {
            let keyboard = day_keyboard(channel, ctx.today(), ctx.catalog.day_span)?;
            Ok(Reply::with_inline(
                format!("День для <b>{}</b>:", teloxide::utils::html::escape(channel)),
                keyboard,
            ))
        }
        CallbackPayload::ChannelDay { channel, date } => {
            let rows = ctx.db.programs_for_channel_on_date(channel, *date).await?;
            Ok(Reply::text(format_channel_day_listing(channel, *date, &rows)))
        }
    }
}

/// Swap a failed render for the internal error reply
fn or_internal_error(result: Result<Reply>, what: &str) -> Reply {
    result.unwrap_or_else(|e| {
        tracing::error!("Failed to build {}: {}", what, e);
        Reply::text(INTERNAL_ERROR)
    })
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> Result<()> {
    let request = bot
        .send_message(chat_id, reply.text)
        .parse_mode(ParseMode::Html);

    match reply.keyboard {
        Some(Keyboard::Menu(keyboard)) => request.reply_markup(keyboard).await?,
        Some(Keyboard::Inline(keyboard)) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };

    Ok(())
}

async fn edit_reply(bot: &Bot, chat_id: ChatId, message_id: MessageId, reply: Reply) -> Result<()> {
    let request = bot
        .edit_message_text(chat_id, message_id, reply.text)
        .parse_mode(ParseMode::Html);

    // Only inline keyboards can be attached to an edited message
    match reply.keyboard {
        Some(Keyboard::Inline(keyboard)) => request.reply_markup(keyboard).await?,
        _ => request.await?,
    };

    Ok(())
}

/// Handle a slash command
pub async fn handle_command(bot: Bot, msg: Message, cmd: Command, ctx: GuideContext) -> Result<()> {
    let reply = match cmd {
        Command::Start => render_start(),
        Command::Help => render_help(&ctx),
        Command::Today => or_internal_error(render_day(&ctx, 0).await, "today listing"),
        Command::Tomorrow => or_internal_error(render_day(&ctx, 1).await, "tomorrow listing"),
        Command::Genres => or_internal_error(render_genre_menu(&ctx), "genre menu"),
        Command::Channels => or_internal_error(render_channel_menu(&ctx).await, "channel menu"),
    };

    send_reply(&bot, msg.chat.id, reply).await
}

/// Handle a main menu button press
pub async fn handle_menu_button(
    bot: Bot,
    msg: Message,
    button: MenuButton,
    ctx: GuideContext,
) -> Result<()> {
    let reply = match button {
        MenuButton::Help => render_help(&ctx),
        MenuButton::Today => or_internal_error(render_day(&ctx, 0).await, "today listing"),
        MenuButton::Tomorrow => or_internal_error(render_day(&ctx, 1).await, "tomorrow listing"),
        MenuButton::ByGenre => or_internal_error(render_genre_menu(&ctx), "genre menu"),
        MenuButton::ByChannel => or_internal_error(render_channel_menu(&ctx).await, "channel menu"),
    };

    send_reply(&bot, msg.chat.id, reply).await
}

/// Handle an inline button press
///
/// Unknown payloads are acknowledged and otherwise ignored.
pub async fn handle_callback(bot: Bot, q: CallbackQuery, ctx: GuideContext) -> Result<()> {
    // Stop the client's progress indicator whatever happens next
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        tracing::warn!("Failed to answer callback query: {}", e);
    }

    let Some(data) = q.data.as_deref() else {
        return Ok(());
    };
    let payload = match data.parse::<CallbackPayload>() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::debug!(user_id = %q.from.id, "Ignoring callback: {}", e);
            return Ok(());
        }
    };
    let Some(message) = q.message.as_ref() else {
        tracing::debug!(user_id = %q.from.id, "Callback for {} has no message to edit", payload);
        return Ok(());
    };

    tracing::info!(user_id = %q.from.id, "Callback for {}", payload);

    let reply = or_internal_error(render_callback(&ctx, &payload).await, "callback reply");
    edit_reply(&bot, message.chat().id, message.id(), reply).await
}
