use std::error::Error;

use teloxide::{
    dispatching::{
        dialogue::{self, InMemStorage},
        DpHandlerDescription, UpdateFilterExt, UpdateHandler,
    },
    dptree::{self, Handler},
    prelude::{DependencyMap, Requester},
    types::{Message, Update},
    Bot,
};
use tracing::instrument;

use crate::{
    commands::{about, cancel, help, start, Command},
    gemini::GeminiClient,
    generator, runner,
    state::SessionState,
    HandlerResult,
};

pub fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<Command, _>()
        .branch(case![Command::Help].endpoint(help))
        .branch(case![Command::Start].endpoint(start))
        .branch(case![Command::About].endpoint(about))
        .branch(case![Command::Cancel].endpoint(cancel));

    let handler = Update::filter_message()
        .branch(command_handler)
        .branch(case![SessionState::Idle].endpoint(generator::receive_topic::<GeminiClient>))
        .branch(case![SessionState::Generating { topic }].endpoint(busy_notice))
        .branch(session_scheme())
        .endpoint(invalid_state);

    dialogue::enter::<Update, InMemStorage<SessionState>, SessionState, _>()
        .branch(handler)
        .branch(callback_query_scheme())
}

#[instrument(level = "debug")]
fn session_scheme() -> Handler<
    'static,
    DependencyMap,
    Result<(), Box<(dyn Error + Send + Sync + 'static)>>,
    DpHandlerDescription,
> {
    use dptree::case;
    Update::filter_message()
        .branch(
            case![SessionState::Answering {
                questions,
                curr_idx
            }]
            .endpoint(runner::receive_answer::<GeminiClient>),
        )
        .branch(
            case![SessionState::Evaluating {
                questions,
                curr_idx
            }]
            .endpoint(busy_notice),
        )
        .branch(
            case![SessionState::Reviewing {
                questions,
                curr_idx,
                feedback
            }]
            .endpoint(runner::nudge_progress),
        )
}

#[instrument(level = "debug")]
fn callback_query_scheme() -> Handler<
    'static,
    DependencyMap,
    Result<(), Box<(dyn Error + Send + Sync + 'static)>>,
    DpHandlerDescription,
> {
    use dptree::case;

    Update::filter_callback_query().branch(
        case![SessionState::Reviewing {
            questions,
            curr_idx,
            feedback
        }]
        .endpoint(runner::take_progress),
    )
}

/// A gateway call is in flight for this chat; no second call is started.
async fn busy_notice(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Processing... please wait for the current step to finish.",
    )
    .await?;
    Ok(())
}

#[instrument(level = "info")]
async fn invalid_state(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        "Unable to handle the message. Enter /help to see usages.",
    )
    .await?;
    Ok(())
}
