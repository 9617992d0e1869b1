//! Bot command definitions
//!
//! Defines all Telegram bot commands and their parsing logic

use teloxide::utils::command::BotCommands;

/// All bot commands
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "ТВ Гид, команды:")]
pub enum Command {
    #[command(description = "Главное меню")]
    Start,

    #[command(description = "Программа на сегодня")]
    Today,

    #[command(description = "Программа на завтра")]
    Tomorrow,

    #[command(description = "Выбрать жанр")]
    Genres,

    #[command(description = "Выбрать канал")]
    Channels,

    #[command(description = "Как пользоваться ботом")]
    Help,
}
