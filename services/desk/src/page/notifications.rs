//! services/desk/src/page/notifications.rs
//!
//! Transient notices. Each one is dismissed by its own timer; notices are not
//! queued and may be on screen at the same time.

use std::sync::Arc;
use std::time::Duration;
use study_desk_core::ports::PageView;
use study_desk_core::{Notice, NoticeKind};
use uuid::Uuid;

#[derive(Clone)]
pub struct Notifier {
    view: Arc<dyn PageView>,
    ttl: Duration,
}

impl Notifier {
    pub fn new(view: Arc<dyn PageView>, ttl: Duration) -> Self {
        Self { view, ttl }
    }

    /// Shows a notice and schedules its removal after the configured delay.
    ///
    /// Must be called from within a tokio runtime.
    pub fn notify(&self, message: impl Into<String>, kind: NoticeKind) -> Uuid {
        let notice = Notice::new(message, kind);
        let id = notice.id;
        self.view.show_notice(&notice);

        let view = self.view.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            view.dismiss_notice(id);
        });
        id
    }
}
