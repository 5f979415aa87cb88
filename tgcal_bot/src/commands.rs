use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(
    rename_rule = "lowercase",
    description = "These commands are supported:"
)]
pub enum Command {
    #[command(description = "Show the welcome message.")]
    Start,
    #[command(description = "Display this text.")]
    Help,
    #[command(description = "Pick a period: a start date and an end date.")]
    Period,
    #[command(description = "Pick any set of individual dates.")]
    Dates,
}
