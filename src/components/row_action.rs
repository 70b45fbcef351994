//! Row Actions
//!
//! Runs a gateway row action against a table signal. The row is marked
//! pending before the request and removed or flagged when it settles.
//! Tables drawn from page data reload the page afterwards so every other
//! list on it reflects the change.

use form_gateway::{Notice, RowAction, RowOutcome, TableViewModel};
use leptos::prelude::*;

use crate::browser;
use crate::config::AppConfig;
use crate::context::AppContext;

pub async fn run<R>(
    config: &AppConfig,
    action: RowAction,
    key: u32,
    table: RwSignal<TableViewModel<R>>,
) -> RowOutcome
where
    R: Send + Sync + 'static,
{
    if !table.try_update(|t| t.begin_action(key)).unwrap_or(false) {
        return RowOutcome::Ignored;
    }
    let gateway = config.gateway();
    let result = gateway.dispatch(&action.endpoint, action.body.clone()).await;
    table
        .try_update(|t| gateway.settle_row(&action, t, key, result))
        .unwrap_or(RowOutcome::Ignored)
}

/// Whether the server state changed and dependent lists are stale
pub fn changed(outcome: &RowOutcome) -> bool {
    matches!(outcome, RowOutcome::Removed { .. } | RowOutcome::Updated { .. })
}

/// After a change: bump the reload signal, then re-read page data once the
/// notice has been seen
pub async fn refresh_after(config: &AppConfig, ctx: AppContext, outcome: &RowOutcome) {
    if !changed(outcome) {
        return;
    }
    ctx.reload();
    browser::notice_delay(config.notice_ms).await;
    browser::reload();
}

/// Banner text for a settled row action
pub fn notice_for(outcome: &RowOutcome) -> Option<Notice> {
    match outcome {
        RowOutcome::Ignored => None,
        RowOutcome::Removed { message } | RowOutcome::Updated { message } => {
            Some(Notice::Success(message.clone()))
        }
        RowOutcome::Declined { message } | RowOutcome::Failed { message } => {
            Some(Notice::Error(message.clone()))
        }
    }
}

/// Dismissible banner above a table
#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|n| {
            let class = if n.is_error() {
                "alert alert-danger alert-dismissible"
            } else {
                "alert alert-success alert-dismissible"
            };
            view! {
                <div class=class role="alert">
                    {n.text().to_string()}
                    <button type="button" class="btn-close" on:click=move |_| notice.set(None)></button>
                </div>
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_for_outcomes() {
        assert_eq!(notice_for(&RowOutcome::Ignored), None);
        assert_eq!(
            notice_for(&RowOutcome::Removed { message: "Employee deactivated".into() }),
            Some(Notice::Success("Employee deactivated".into()))
        );
        assert!(notice_for(&RowOutcome::Failed { message: "Network error".into() })
            .is_some_and(|n| n.is_error()));
        assert_eq!(
            notice_for(&RowOutcome::Updated { message: "Project submitted".into() }),
            Some(Notice::Success("Project submitted".into()))
        );
    }

    #[test]
    fn test_only_successes_refresh_lists() {
        assert!(changed(&RowOutcome::Removed { message: String::new() }));
        assert!(changed(&RowOutcome::Updated { message: String::new() }));
        assert!(!changed(&RowOutcome::Ignored));
        assert!(!changed(&RowOutcome::Declined { message: "No".into() }));
        assert!(!changed(&RowOutcome::Failed { message: "Offline".into() }));
    }
}
