use std::fmt;
use thiserror::Error;

/// Load state of the 3D scene: `Loading` until the heart asset arrives, then
/// `Ready` or `Failed`. Both outcomes are final.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    #[error("scene is already {0}")]
    AlreadySettled(&'static str),
}

impl Lifecycle {
    pub fn label(&self) -> &'static str {
        match self {
            Lifecycle::Loading => "loading",
            Lifecycle::Ready => "ready",
            Lifecycle::Failed(_) => "failed",
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Lifecycle::Ready)
    }

    pub fn mark_ready(&mut self) -> Result<(), LifecycleError> {
        self.settle(Lifecycle::Ready)
    }

    pub fn mark_failed(&mut self, reason: impl Into<String>) -> Result<(), LifecycleError> {
        self.settle(Lifecycle::Failed(reason.into()))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Lifecycle::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Unwrap one setup step. An `Err` settles the scene as `Failed`, with
    /// `stage` and the error as the reason, and yields `None`.
    pub fn absorb<T, E: fmt::Display>(&mut self, stage: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                if let Err(settled) = self.mark_failed(format!("{stage}: {e:#}")) {
                    log::warn!("[lifecycle] {stage} failed after settling: {settled}");
                }
                None
            }
        }
    }

    fn settle(&mut self, next: Lifecycle) -> Result<(), LifecycleError> {
        if *self != Lifecycle::Loading {
            return Err(LifecycleError::AlreadySettled(self.label()));
        }
        log::info!("[lifecycle] loading -> {}", next.label());
        *self = next;
        Ok(())
    }
}
