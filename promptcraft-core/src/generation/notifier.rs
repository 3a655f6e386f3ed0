use std::sync::Mutex;

/// How a notice should be presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Destructive,
}

/// Semantic outcome of a generate action, rendered by the UI layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: NoticeSeverity,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NoticeSeverity::Success,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: NoticeSeverity::Destructive,
        }
    }

    pub fn is_success(&self) -> bool {
        self.severity == NoticeSeverity::Success
    }
}

/// Receives generation outcomes
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Forwards notices to the tracing subscriber at `info` level, so they stay
/// hidden under the default `warn` filter
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notice: &Notice) {
        let success = notice.is_success();
        tracing::info!(title = %notice.title, success, "{}", notice.description);
    }
}

/// Keeps notices in memory, mostly for tests and batch callers
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        match self.notices.lock() {
            Ok(mut guard) => guard.push(notice.clone()),
            Err(poisoned) => poisoned.into_inner().push(notice.clone()),
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn notify(&self, notice: &Notice) {
        (**self).notify(notice)
    }
}
