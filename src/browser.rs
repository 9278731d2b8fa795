use std::{
    io,
    sync::mpsc::{RecvTimeoutError, Sender, channel},
    thread,
    time::Duration,
};

/// Opens a URL somewhere a human will see it.
pub type Opener = Box<dyn FnOnce(&str) -> io::Result<()> + Send>;

pub fn system_opener() -> Opener {
    Box::new(|url: &str| open::that(url))
}

/// Handle to a pending one-shot task. Dropping it cancels the task if it has not fired yet.
pub struct Scheduled {
    cancel: Sender<()>,
}

impl Scheduled {
    pub fn cancel(self) {
        let _ = self.cancel.send(());
    }
}

/// Runs `task` once on its own thread after `delay`.
pub fn schedule<F>(delay: Duration, task: F) -> Scheduled
where
    F: FnOnce() + Send + 'static,
{
    let (cancel, cancelled) = channel();

    thread::spawn(move || {
        if let Err(RecvTimeoutError::Timeout) = cancelled.recv_timeout(delay) {
            task();
        }
    });

    Scheduled { cancel }
}

/// Schedules opening `url` after `delay`. Failure only prints a manual instruction.
pub fn launch(url: String, delay: Duration, opener: Opener) -> Scheduled {
    schedule(delay, move || match opener(&url) {
        Ok(()) => println!("Browser opened to {url}"),
        Err(error) => {
            println!("Could not auto-open browser: {error}");
            println!("Please manually open: {url}");
        }
    })
}
