//! Debounced evaluation for interactive consumers.

use std::time::Duration;

use secrecy::SecretString;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::evaluator::Evaluator;
use crate::types::PasswordEvaluation;

/// Delay before evaluating, so rapid keystrokes can cancel stale requests.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Waits for [`DEBOUNCE`], then evaluates the password and sends the result.
///
/// If `token` is cancelled before the delay elapses nothing is evaluated or
/// sent. A dropped receiver is logged and otherwise ignored.
pub async fn evaluate_password_strength_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluator.evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn secret(pwd: &str) -> SecretString {
        SecretString::new(pwd.to_string().into())
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let evaluator = Evaluator::new().with_current_year(2024);
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        evaluate_password_strength_tx(&evaluator, &secret("Tr0ub4dor&3"), token, tx).await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.score.value(), 8);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_before_start_sends_nothing() {
        let evaluator = Evaluator::new();
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        token.cancel();

        evaluate_password_strength_tx(&evaluator, &secret("password"), token, tx).await;

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_during_debounce_sends_nothing() {
        let evaluator = Arc::new(Evaluator::new());
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let task = tokio::spawn({
            let evaluator = Arc::clone(&evaluator);
            let token = token.clone();
            async move {
                evaluate_password_strength_tx(&evaluator, &secret("password"), token, tx).await;
            }
        });

        tokio::time::sleep(DEBOUNCE / 2).await;
        token.cancel();
        task.await.expect("task should not panic");

        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_receiver_is_ignored() {
        let evaluator = Evaluator::new();
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        evaluate_password_strength_tx(&evaluator, &secret("password"), CancellationToken::new(), tx)
            .await;
    }
}
