//! Off-thread rendering with last-write-wins semantics.
//!
//! Slider drags produce far more render requests than a full-resolution
//! chain can keep up with. [`LatestRenderer`] keeps a single pending slot:
//! a new request overwrites whatever has not started yet, so superseded
//! values are dropped instead of queued. Every accepted request gets a
//! generation number and the newest finished frame is always available
//! through [`LatestRenderer::latest`].

use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::engine::RenderRequest;
use crate::image::Image;

/// A finished render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedFrame {
    pub generation: u64,
    pub request: RenderRequest,
    pub image: Arc<Image>,
}

#[derive(Debug, Default)]
struct Mailbox {
    pending: Option<(u64, RenderRequest)>,
    latest: Option<RenderedFrame>,
    next_generation: u64,
    shutdown: bool,
}

#[derive(Debug, Default)]
struct Shared {
    mailbox: Mutex<Mailbox>,
    work_ready: Condvar,
    frame_ready: Condvar,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, Mailbox> {
        // A panicking render leaves the mailbox itself consistent
        self.mailbox.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders requests for one source image on a background thread.
pub struct LatestRenderer {
    shared: Arc<Shared>,
    handle: Option<JoinHandle<()>>,
}

impl LatestRenderer {
    /// Spawn the render thread for `source`.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the thread cannot be spawned.
    pub fn new(source: Image) -> std::io::Result<Self> {
        let shared = Arc::new(Shared::default());
        let worker_shared = Arc::clone(&shared);
        let source = Arc::new(source);

        let handle = std::thread::Builder::new()
            .name("darkroom-render".into())
            .spawn(move || render_loop(&worker_shared, &source))?;

        Ok(Self {
            shared,
            handle: Some(handle),
        })
    }

    /// Queue `request`, replacing any request that has not started yet.
    ///
    /// Returns the generation number assigned to it.
    pub fn submit(&self, request: RenderRequest) -> u64 {
        let mut mailbox = self.shared.lock();
        mailbox.next_generation += 1;
        let generation = mailbox.next_generation;
        if let Some((stale, _)) = mailbox.pending.replace((generation, request)) {
            trace!(stale, generation, "Superseded pending render");
        }
        drop(mailbox);
        self.shared.work_ready.notify_one();
        generation
    }

    /// The newest finished frame, if any.
    pub fn latest(&self) -> Option<RenderedFrame> {
        self.shared.lock().latest.clone()
    }

    /// Block until a frame at least as new as `generation` is finished.
    ///
    /// Returns `None` on timeout. The frame returned may be newer than
    /// requested when later submissions superseded it.
    pub fn wait_for(&self, generation: u64, timeout: Duration) -> Option<RenderedFrame> {
        let deadline = Instant::now() + timeout;
        let mut mailbox = self.shared.lock();
        loop {
            if let Some(frame) = mailbox.latest.as_ref() {
                if frame.generation >= generation {
                    return Some(frame.clone());
                }
            }
            let remaining = deadline.checked_duration_since(Instant::now())?;
            mailbox = self
                .shared
                .frame_ready
                .wait_timeout(mailbox, remaining)
                .unwrap_or_else(PoisonError::into_inner)
                .0;
        }
    }
}

impl Drop for LatestRenderer {
    fn drop(&mut self) {
        self.shared.lock().shutdown = true;
        self.shared.work_ready.notify_all();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn render_loop(shared: &Shared, source: &Image) {
    loop {
        let (generation, request) = {
            let mut mailbox = shared.lock();
            loop {
                if mailbox.shutdown {
                    debug!("Render worker shutting down");
                    return;
                }
                if let Some(job) = mailbox.pending.take() {
                    break job;
                }
                mailbox = shared
                    .work_ready
                    .wait(mailbox)
                    .unwrap_or_else(PoisonError::into_inner);
            }
        };

        let image = Arc::new(request.render(source));

        let mut mailbox = shared.lock();
        // A request submitted while this one rendered makes it stale
        if mailbox.next_generation == generation {
            mailbox.latest = Some(RenderedFrame {
                generation,
                request,
                image,
            });
            trace!(generation, "Frame published");
        } else {
            trace!(
                generation,
                newest = mailbox.next_generation,
                "Discarded superseded frame"
            );
        }
        drop(mailbox);
        shared.frame_ready.notify_all();
    }
}
