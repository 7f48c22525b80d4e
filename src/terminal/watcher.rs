//! Resize Watcher: Dedicated thread for terminal size-change notifications.
//!
//! This actor runs in its own thread and uses crossterm's event polling.
//! Resize events go straight into the screen's pending-resize slot; every
//! other event is passed on untouched to whoever processes input.

use crate::error::{Result, ScreenError};
use crate::geometry::TerminalSize;
use crate::screen::ResizeHandle;
use crossbeam_channel::Sender;
use crossterm::event::{self, Event};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Configuration for the [`ResizeWatcher`].
#[derive(Debug, Clone)]
pub struct WatcherConfig {
    /// How long to wait for events before checking for shutdown.
    pub poll_timeout: Duration,
    /// Name of the watcher thread.
    pub thread_name: String,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self {
            poll_timeout: Duration::from_millis(10),
            thread_name: "screenbuf-resize".to_string(),
        }
    }
}

/// Background thread feeding terminal resizes into a [`ResizeHandle`].
///
/// The thread stops when [`ResizeWatcher::shutdown`] is called, when the
/// watcher is dropped, or when the event receiver goes away.
pub struct ResizeWatcher {
    /// Handle to the watcher thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl ResizeWatcher {
    /// Spawn the watcher thread.
    ///
    /// # Arguments
    ///
    /// * `resize` - Slot that receives every terminal resize.
    /// * `events` - Channel for all non-resize events.
    /// * `config` - Poll timeout and thread name.
    ///
    /// # Errors
    ///
    /// Returns an error if the thread cannot be spawned.
    pub fn spawn(resize: ResizeHandle, events: Sender<Event>, config: WatcherConfig) -> Result<Self> {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let poll_timeout = config.poll_timeout;

        let handle = thread::Builder::new()
            .name(config.thread_name)
            .spawn(move || {
                Self::run_loop(&resize, &events, &shutdown_clone, poll_timeout);
            })
            .map_err(ScreenError::SpawnWatcher)?;

        Ok(Self {
            handle: Some(handle),
            shutdown,
        })
    }

    /// Signal the watcher thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Check if the watcher thread is still alive.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Stop the watcher thread and wait for it to finish.
    pub fn join(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(
        resize: &ResizeHandle,
        events: &Sender<Event>,
        shutdown: &AtomicBool,
        poll_timeout: Duration,
    ) {
        log::debug!("resize watcher started");

        while !shutdown.load(Ordering::Relaxed) {
            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(event) => {
                        if !Self::dispatch(event, resize, events) {
                            // Receiver dropped, exit
                            break;
                        }
                    }
                    Err(e) => log::warn!("failed to read terminal event: {e}"),
                },
                Ok(false) => {}
                Err(e) => {
                    log::warn!("failed to poll terminal events: {e}");
                    thread::sleep(poll_timeout);
                }
            }
        }

        log::debug!("resize watcher stopped");
    }

    /// Route one event. Returns `false` once the event receiver is gone.
    fn dispatch(event: Event, resize: &ResizeHandle, events: &Sender<Event>) -> bool {
        if let Event::Resize(columns, rows) = event {
            resize.request(TerminalSize::new(columns, rows));
            return true;
        }
        events.send(event).is_ok()
    }
}

impl Drop for ResizeWatcher {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for ResizeWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResizeWatcher")
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}
