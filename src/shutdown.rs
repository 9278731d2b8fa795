use anyhow::{Context, Result};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

/// Cancellation token observed by the serve loop.
#[derive(Clone, Default)]
pub struct Shutdown {
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that fires on Ctrl-C. Only one can be installed per process.
    pub fn on_ctrl_c() -> Result<Self> {
        let shutdown = Self::new();
        let handle = shutdown.clone();

        ctrlc::set_handler(move || handle.trigger()).context("Could not install Ctrl-C handler")?;

        Ok(shutdown)
    }

    pub fn trigger(&self) {
        self.triggered.store(true, Ordering::SeqCst);
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }
}
