//! Serialized event loop around [`QuizEngine`].
//!
//! All quiz events — chat commands, transcription attempts, and the
//! daily scheduler's trigger — arrive as [`QuizCommand`]s on one
//! `tokio::sync::mpsc` channel and are applied to the engine by a
//! single task.  That queue is the only synchronization domain the
//! engine needs: the active item and the per-user counters are never
//! touched from two tasks at once, so two users racing to answer the
//! same clip see a consistent first-wins outcome.
//!
//! ```text
//! transport ──┐
//!             ├─ QuizCommand (mpsc) ─▶ run() ─▶ Reply (mpsc) ─▶ transport
//! scheduler ──┘
//! ```
//!
//! The loop ends when every command sender is dropped.

use tokio::sync::mpsc;

use super::session::{QuizEngine, Reply};

// ---------------------------------------------------------------------------
// QuizCommand
// ---------------------------------------------------------------------------

/// One quiz event, as delivered by a transport or the scheduler.
#[derive(Debug, Clone)]
pub enum QuizCommand {
    /// Start a new quiz from the given difficulty pool.
    Start {
        /// `"easy"`, `"normal"`, `"hard"`, or `"all"`.
        level: String,
        /// Who asked — their hint counter resets.
        user: String,
    },
    /// A transcription attempt.
    Submit { text: String, user: String },
    /// Request the next hint-ladder tier.
    Hint { user: String },
    /// Give up and reveal the answer.
    Reveal { user: String },
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Drive the engine until the command channel closes.
///
/// Replies are forwarded on `reply_tx`; a closed reply channel ends
/// the loop early (the transport is gone, nothing left to tell).
pub async fn run(
    mut engine: QuizEngine,
    mut command_rx: mpsc::Receiver<QuizCommand>,
    reply_tx: mpsc::Sender<Reply>,
) {
    while let Some(command) = command_rx.recv().await {
        log::debug!("quiz command: {command:?}");
        let reply = match command {
            QuizCommand::Start { level, user } => engine.start(&level, &user),
            QuizCommand::Submit { text, user } => engine.submit(&text, &user),
            QuizCommand::Hint { user } => engine.hint(&user),
            QuizCommand::Reveal { user } => engine.reveal(&user),
        };
        if reply_tx.send(reply).await.is_err() {
            log::warn!("reply channel closed — stopping quiz loop");
            return;
        }
    }
    log::info!("command channel closed — quiz loop done");
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::{Catalog, CorpusRecord};
    use crate::glossary::Glossary;
    use std::path::PathBuf;

    fn test_engine() -> QuizEngine {
        let catalog = Catalog::build(vec![CorpusRecord {
            clip: PathBuf::from("clips/a.mp3"),
            sentence: "saya suka makan".to_string(),
        }]);
        QuizEngine::with_seed(catalog, Glossary::default(), 1)
    }

    #[tokio::test]
    async fn commands_flow_through_in_order() {
        let (command_tx, command_rx) = mpsc::channel(8);
        let (reply_tx, mut reply_rx) = mpsc::channel(8);

        let handle = tokio::spawn(run(test_engine(), command_rx, reply_tx));

        command_tx
            .send(QuizCommand::Start {
                level: "easy".into(),
                user: "u1".into(),
            })
            .await
            .unwrap();
        command_tx
            .send(QuizCommand::Submit {
                text: "Saya, suka makan!".into(),
                user: "u1".into(),
            })
            .await
            .unwrap();

        let start_reply = reply_rx.recv().await.unwrap();
        assert!(start_reply.clip.is_some());

        let submit_reply = reply_rx.recv().await.unwrap();
        assert!(submit_reply.messages[0].starts_with("Correct!"));

        drop(command_tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn loop_ends_when_senders_drop() {
        let (command_tx, command_rx) = mpsc::channel::<QuizCommand>(1);
        let (reply_tx, _reply_rx) = mpsc::channel(1);

        let handle = tokio::spawn(run(test_engine(), command_rx, reply_tx));
        drop(command_tx);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn interleaved_users_are_serialized() {
        let (command_tx, command_rx) = mpsc::channel(8);
        let (reply_tx, mut reply_rx) = mpsc::channel(8);
        let handle = tokio::spawn(run(test_engine(), command_rx, reply_tx));

        command_tx
            .send(QuizCommand::Start {
                level: "all".into(),
                user: "u1".into(),
            })
            .await
            .unwrap();
        // Two users race to answer; exactly one sees success.
        for user in ["u1", "u2"] {
            command_tx
                .send(QuizCommand::Submit {
                    text: "saya suka makan".into(),
                    user: user.into(),
                })
                .await
                .unwrap();
        }

        let _start = reply_rx.recv().await.unwrap();
        let first = reply_rx.recv().await.unwrap();
        let second = reply_rx.recv().await.unwrap();

        assert!(first.messages[0].starts_with("Correct!"));
        assert!(second.messages[0].contains("No active quiz"));

        drop(command_tx);
        handle.await.unwrap();
    }
}
