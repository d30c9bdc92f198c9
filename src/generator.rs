use std::sync::Arc;

use teloxide::{
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{Message, ReplyMarkup},
    Bot,
};
use tracing::instrument;

use crate::{
    gemini::GenerateText, keyboard::topics_keyboard, prompts, quiz, state::SessionState,
    HandlerResult, UserDialogue,
};

/// Topic received while `Idle`: generate a question set and present the first
/// question. The dialogue sits in `Generating` for the duration of the
/// gateway call so repeated messages cannot start a second call.
#[instrument(level = "info", skip(gateway))]
pub(crate) async fn receive_topic<G: GenerateText>(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    gateway: Arc<G>,
) -> HandlerResult {
    let topic = match msg.text() {
        Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => {
            bot.send_message(msg.chat.id, "Enter a topic or role!")
                .await?;
            return Ok(());
        }
    };

    dialogue
        .update(SessionState::Generating {
            topic: topic.clone(),
        })
        .await?;
    bot.send_message(msg.chat.id, "Processing...")
        .reply_markup(ReplyMarkup::kb_remove())
        .await?;

    match gateway.generate(&prompts::question_set(&topic)).await {
        Ok(completion) => {
            let questions = quiz::parse_questions(&completion);
            if questions.is_empty() {
                log::warn!("Completion for topic '{}' contained no questions", topic);
                bot.send_message(
                    msg.chat.id,
                    "The model returned no questions. Try another topic.",
                )
                .reply_markup(topics_keyboard())
                .await?;
                dialogue.update(SessionState::Idle).await?;
                return Ok(());
            }

            log::info!(
                "Generated {} questions about '{}' for chat {}",
                questions.len(),
                topic,
                msg.chat.id
            );
            let first = &questions[0];
            bot.send_message(
                msg.chat.id,
                format!(
                    "Question {}:\n{}\n\nType your answer...",
                    first.number(),
                    first.text()
                ),
            )
            .await?;
            dialogue
                .update(SessionState::Answering {
                    questions,
                    curr_idx: 0,
                })
                .await?;
        }
        Err(e) => {
            log::error!("Question generation for '{}' failed: {:?}", topic, e);
            bot.send_message(msg.chat.id, e.notice()).await?;
            bot.send_message(msg.chat.id, "Enter a topic to try again.")
                .reply_markup(topics_keyboard())
                .await?;
            dialogue.update(SessionState::Idle).await?;
        }
    }

    Ok(())
}
