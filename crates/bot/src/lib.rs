//! TV Guide Bot - Telegram bot serving a television program guide
//!
//! This crate provides the store, the startup seeder and the Telegram
//! handlers. Users navigate with the main reply keyboard and inline buttons.

pub mod commands;
pub mod config;
pub mod context;
pub mod db;
pub mod format;
pub mod handlers;
pub mod keyboards;
pub mod seed;

use anyhow::Result;
use commands::Command;
use context::GuideContext;
use keyboards::MenuButton;
use teloxide::dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler};
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

/// Run the Telegram bot service
///
/// The catalog must already be seeded: the dispatcher starts handling
/// updates right away. Runs until Ctrl+C.
///
/// # Arguments
/// * `bot` - Authenticated bot client
/// * `ctx` - Application context injected into every handler
pub async fn run_bot(bot: Bot, ctx: GuideContext) -> Result<()> {
    if let Err(e) = bot.set_my_commands(Command::bot_commands()).await {
        tracing::warn!("Failed to register bot commands: {}", e);
    }

    tracing::info!("Bot initialized, starting dispatcher");

    Dispatcher::builder(bot, build_handler_tree())
        .dependencies(dptree::deps![ctx])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Build the update routing schema
///
/// Commands first, then main menu buttons, then inline callbacks. Anything
/// else falls through without a reply.
pub fn build_handler_tree() -> UpdateHandler<teloxide::RequestError> {
    let message_handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(route_command),
        )
        .branch(
            dptree::filter_map(|msg: Message| msg.text().and_then(MenuButton::from_label))
                .endpoint(route_menu_button),
        );

    let callback_handler = Update::filter_callback_query().endpoint(route_callback);

    dptree::entry()
        .branch(message_handler)
        .branch(callback_handler)
}

/// Route commands to their handlers
async fn route_command(bot: Bot, msg: Message, cmd: Command, ctx: GuideContext) -> ResponseResult<()> {
    tracing::info!("Handling command: {:?}", cmd);

    if let Err(e) = handlers::handle_command(bot, msg, cmd, ctx).await {
        tracing::error!("Error handling command: {}", e);
    }

    Ok(())
}

/// Route main menu buttons to their handlers
async fn route_menu_button(
    bot: Bot,
    msg: Message,
    button: MenuButton,
    ctx: GuideContext,
) -> ResponseResult<()> {
    tracing::info!("Handling menu button: {:?}", button);

    if let Err(e) = handlers::handle_menu_button(bot, msg, button, ctx).await {
        tracing::error!("Error handling menu button: {}", e);
    }

    Ok(())
}

/// Route inline button presses
async fn route_callback(bot: Bot, q: CallbackQuery, ctx: GuideContext) -> ResponseResult<()> {
    if let Err(e) = handlers::handle_callback(bot, q, ctx).await {
        tracing::error!("Error handling callback query: {}", e);
    }

    Ok(())
}
