use std::sync::Arc;

use teloxide::{
    dispatching::dialogue::GetChatId,
    payloads::SendMessageSetters,
    prelude::Requester,
    types::{CallbackQuery, Message},
    Bot,
};
use tracing::instrument;

use crate::{
    gemini::GenerateText,
    keyboard::{progress_keyboard, topics_keyboard},
    prompts,
    quiz::Question,
    state::{advance, SessionState},
    HandlerResult, UserDialogue,
};

/// Answer received while `Answering`: ask the gateway for feedback on it.
/// The dialogue sits in `Evaluating` during the call, so a second message
/// cannot start an overlapping evaluation.
#[instrument(level = "info", skip(gateway))]
pub(crate) async fn receive_answer<G: GenerateText>(
    bot: Bot,
    dialogue: UserDialogue,
    msg: Message,
    (questions, curr_idx): (Vec<Question>, usize),
    gateway: Arc<G>,
) -> HandlerResult {
    let answer = match msg.text() {
        Some(text) if !text.trim().is_empty() => text.trim().to_owned(),
        _ => {
            bot.send_message(msg.chat.id, "Enter your answer!").await?;
            return Ok(());
        }
    };

    let question = questions[curr_idx].clone();
    log::info!(
        "Chat {} answers question #{}",
        msg.chat.id,
        question.number()
    );

    dialogue
        .update(SessionState::Evaluating {
            questions: questions.clone(),
            curr_idx,
        })
        .await?;
    bot.send_message(msg.chat.id, "Processing...").await?;

    match gateway
        .generate(&prompts::answer_feedback(&answer, question.text()))
        .await
    {
        Ok(feedback) => {
            let is_last = curr_idx + 1 >= questions.len();
            bot.send_message(msg.chat.id, &feedback)
                .reply_markup(progress_keyboard(is_last))
                .await?;
            dialogue
                .update(SessionState::Reviewing {
                    questions,
                    curr_idx,
                    feedback,
                })
                .await?;
        }
        Err(e) => {
            log::error!(
                "Evaluation of question #{} failed: {:?}",
                question.number(),
                e
            );
            bot.send_message(msg.chat.id, e.notice()).await?;
            bot.send_message(msg.chat.id, "Send your answer again to retry.")
                .await?;
            dialogue
                .update(SessionState::Answering {
                    questions,
                    curr_idx,
                })
                .await?;
        }
    }

    Ok(())
}

/// Advance button tapped under the feedback message. Moves to the next
/// question, or clears the set and returns to the topic prompt after the
/// last one. Stale taps match no dialogue branch and are dropped upstream.
#[instrument(level = "info")]
pub(crate) async fn take_progress(
    bot: Bot,
    dialogue: UserDialogue,
    q: CallbackQuery,
    (questions, curr_idx, _feedback): (Vec<Question>, usize, String),
) -> HandlerResult {
    bot.answer_callback_query(&q.id).await?;

    let chat_id = match q.chat_id() {
        Some(chat_id) => chat_id,
        None => return Ok(()),
    };

    match advance(questions, curr_idx) {
        SessionState::Answering {
            questions,
            curr_idx,
        } => {
            let question = &questions[curr_idx];
            bot.send_message(
                chat_id,
                format!(
                    "Question {}:\n{}\n\nType your answer...",
                    question.number(),
                    question.text()
                ),
            )
            .await?;
            dialogue
                .update(SessionState::Answering {
                    questions,
                    curr_idx,
                })
                .await?;
        }
        _ => {
            log::info!("Chat {} completed a practice set", chat_id);
            bot.send_message(chat_id, "Congratulations! You completed the practice set!")
                .await?;
            dialogue.update(SessionState::Idle).await?;
            bot.send_message(chat_id, "Enter a new topic or role to keep practicing:")
                .reply_markup(topics_keyboard())
                .await?;
        }
    }

    Ok(())
}

/// Text received while `Reviewing`; progression happens via the button.
pub(crate) async fn nudge_progress(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Use the button under the feedback to continue.",
    )
    .await?;
    Ok(())
}
