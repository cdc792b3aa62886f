//! First-error-wins join over a set of fan-out tasks.

use crate::error::{Error, Result};
use tokio::task::JoinSet;

/// Wait for every task in `tasks`, then report the first failure seen.
///
/// Tasks are never cancelled: a failure only short-circuits what is reported.
/// Failures after the first are logged and dropped. A panicked task counts as a
/// failure ([`Error::TaskFailed`]).
pub(crate) async fn join_first_error(tasks: &mut JoinSet<Result<()>>, scope: &str) -> Result<()> {
    let mut first_error: Option<Error> = None;
    let mut failed = 0usize;

    while let Some(joined) = tasks.join_next().await {
        let outcome = joined
            .map_err(|e| Error::TaskFailed {
                scope: scope.to_string(),
                message: e.to_string(),
            })
            .and_then(std::convert::identity);

        if let Err(error) = outcome {
            failed += 1;
            if first_error.is_none() {
                first_error = Some(error);
            } else {
                tracing::warn!(
                    scope,
                    error = %error,
                    "discarding error, an earlier failure is already reported"
                );
            }
        }
    }

    match first_error {
        Some(error) => {
            tracing::debug!(scope, failed, "fan-out failed");
            Err(error)
        }
        None => Ok(()),
    }
}
