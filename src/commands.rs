use teloxide::{
    payloads::SendMessageSetters, prelude::Requester, types::Message, utils::command::BotCommands,
    Bot,
};

use crate::{keyboard::topics_keyboard, state::SessionState, HandlerResult, UserDialogue};

#[derive(Debug, Clone, BotCommands)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    #[command(description = "display help.")]
    Help,
    #[command(description = "start practicing interview questions.")]
    Start,
    #[command(description = "what this bot does.")]
    About,
    #[command(description = "abandon the current practice set.")]
    Cancel,
}

pub(crate) async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

pub(crate) async fn start(bot: Bot, msg: Message, dialogue: UserDialogue) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Welcome to QuesAI! Enter a role or topic to practice, or pick one below:",
    )
    .reply_markup(topics_keyboard())
    .await?;
    dialogue.update(SessionState::Idle).await?;
    Ok(())
}

pub(crate) async fn about(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "QuesAI is an AI-powered interview practice partner.\n\n\
         Interactive practice: generate interview questions for any domain and \
         answer them right here.\n\
         AI evaluation: every answer gets short constructive feedback.\n\
         Multiple domains: tech, AI, programming and more, by simply naming a topic.\n\
         Linear progress: questions come one at a time until the set is done.",
    )
    .await?;
    Ok(())
}

pub(crate) async fn cancel(bot: Bot, dialogue: UserDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, "Abandoning the current practice set.")
        .await?;
    dialogue.update(SessionState::Idle).await?;
    bot.send_message(msg.chat.id, "Enter a new topic whenever you are ready.")
        .reply_markup(topics_keyboard())
        .await?;
    Ok(())
}
