use std::any::Any;
use std::sync::{Arc, Weak};

/// The two independent host flags.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ActivityPresence {
    pub resumed: bool,
    pub has_focus: bool,
}

impl ActivityPresence {
    /// Whether gameplay and audio should run. Only true when both flags are set.
    #[inline]
    pub fn is_active(self) -> bool {
        self.resumed && self.has_focus
    }
}

/// What a lifecycle transition asks of the audio subsystem.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AudioDirective {
    Pause,
    Resume,
    Keep,
}

type HostRef = Weak<dyn Any + Send + Sync>;

/// Tracks resumed/focus state and the host handle.
///
/// Losing either flag pauses audio immediately; audio only resumes when a
/// transition leaves both flags set. The host handle is non-owning and is
/// dropped on pause, so the tracker never extends the host's lifetime.
#[derive(Debug, Default)]
pub struct LifecycleTracker {
    presence: ActivityPresence,
    host: Option<HostRef>,
}

impl LifecycleTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn presence(&self) -> ActivityPresence {
        self.presence
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.presence.is_active()
    }

    pub fn on_pause(&mut self) -> AudioDirective {
        self.presence.resumed = false;
        self.host = None;
        AudioDirective::Pause
    }

    pub fn on_resume<T>(&mut self, host: &Arc<T>) -> AudioDirective
    where
        T: Any + Send + Sync,
    {
        self.presence.resumed = true;
        let host: Arc<dyn Any + Send + Sync> = host.clone();
        self.host = Some(Arc::downgrade(&host));

        if self.presence.has_focus {
            AudioDirective::Resume
        } else {
            AudioDirective::Keep
        }
    }

    pub fn on_focus_changed(&mut self, focus: bool) -> AudioDirective {
        self.presence.has_focus = focus;
        if !focus {
            AudioDirective::Pause
        } else if self.presence.resumed {
            AudioDirective::Resume
        } else {
            AudioDirective::Keep
        }
    }

    /// The host registered by the last resume, if it is still alive, not paused
    /// since, and of type `T`.
    pub fn host<T>(&self) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        let host = self.host.as_ref()?.upgrade()?;
        host.downcast::<T>().ok()
    }
}
