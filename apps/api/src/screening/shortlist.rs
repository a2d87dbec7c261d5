use tracing::{info, warn};

use crate::notifications::{HrNotifier, ShortlistNotice};

pub fn is_shortlisted(score: u32, threshold: u32) -> bool {
    score >= threshold
}

/// Notifies HR when the notice's score meets its threshold. Returns whether the
/// candidate was shortlisted. A failed notification is logged, never propagated:
/// the upload has already been analyzed and must still succeed.
pub async fn screen_candidate(notifier: &dyn HrNotifier, notice: ShortlistNotice) -> bool {
    if !is_shortlisted(notice.score, notice.threshold) {
        info!(
            "Resume score ({}) below threshold ({}). No notification sent.",
            notice.score, notice.threshold
        );
        return false;
    }

    info!(
        "Resume score ({}) meets threshold ({}). Notifying HR...",
        notice.score, notice.threshold
    );
    if let Err(e) = notifier.notify(&notice).await {
        warn!(upload_id = %notice.upload_id, "HR notification failed, upload kept: {e}");
    }
    true
}
