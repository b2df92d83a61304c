use crate::utils::error::LessonError;

/// Receives every rejected mutation of a person record.
pub trait ValidationObserver: Send + Sync {
    fn on_rejected(&self, error: &LessonError);
}

impl<F> ValidationObserver for F
where
    F: Fn(&LessonError) + Send + Sync,
{
    fn on_rejected(&self, error: &LessonError) {
        self(error)
    }
}

/// Reports rejections as warnings on the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn on_rejected(&self, error: &LessonError) {
        tracing::warn!("⚠️ {}", error);
    }
}
