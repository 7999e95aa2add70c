mod message;
mod target;

pub use message::{SHARE_HEADING, share_message};
pub use target::{CommandShare, FileShare, ShareTarget, StdoutShare};

use tracing::{info, warn};

use crate::models::Combination;

/// Notification shown when a share hand-off fails.
pub const SHARE_FAILED_NOTICE: &str = "Error sharing combo";

/// Share one combination through `target`.
///
/// A failure is reported once on stderr and in the log; it is never retried
/// and never aborts the caller. Returns whether the hand-off succeeded.
pub fn share_combination(target: &dyn ShareTarget, combination: &Combination) -> bool {
    let message = share_message(combination);

    match target.share(&message) {
        Ok(()) => {
            info!(via = %target.describe(), items = combination.len(), "shared combo");
            true
        }
        Err(e) => {
            warn!(via = %target.describe(), error = %e, "share failed");
            eprintln!("{}", SHARE_FAILED_NOTICE);
            false
        }
    }
}
