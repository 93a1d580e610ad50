/// Id of a pending frame callback (a `requestAnimationFrame` handle on web).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameRequest(pub i32);

/// Host primitive that runs one callback per display frame.
pub trait FrameScheduler {
    /// Ask for the next frame. `None` when the host refuses.
    fn request_frame(&mut self) -> Option<FrameRequest>;
    fn cancel_frame(&mut self, request: FrameRequest);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    /// Terminal; a remount builds a new loop.
    Stopped,
}

/// Self-rescheduling frame task.
///
/// At most one frame request is outstanding at a time. `stop` cancels it, so
/// after teardown no further frame is requested and no draw runs.
#[derive(Debug)]
pub struct RenderLoop {
    state: LoopState,
    pending: Option<FrameRequest>,
    frames: u64,
}

impl RenderLoop {
    /// Request the first frame. A host that refuses leaves the loop Stopped.
    pub fn start(scheduler: &mut dyn FrameScheduler) -> Self {
        let pending = scheduler.request_frame();
        let state = if pending.is_some() {
            LoopState::Running
        } else {
            log::warn!("[loop] host refused the first frame; effect disabled");
            LoopState::Stopped
        };
        Self {
            state,
            pending,
            frames: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state() == LoopState::Running
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[inline]
    #[allow(dead_code)]
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    /// Run one frame callback. Returns `false` (and draws nothing) once the
    /// loop is stopped, so a callback that fires late is harmless.
    pub fn tick(&mut self, scheduler: &mut dyn FrameScheduler, draw: impl FnOnce()) -> bool {
        if self.state == LoopState::Stopped {
            return false;
        }
        self.pending = None;
        draw();
        self.frames += 1;
        self.pending = scheduler.request_frame();
        if self.pending.is_none() {
            log::warn!("[loop] host refused frame {}; stopping", self.frames + 1);
            self.state = LoopState::Stopped;
        }
        true
    }

    /// Cancel the outstanding frame and enter `Stopped`. Idempotent.
    pub fn stop(&mut self, scheduler: &mut dyn FrameScheduler) {
        if let Some(request) = self.pending.take() {
            scheduler.cancel_frame(request);
        }
        if self.state == LoopState::Running {
            log::debug!("[loop] stopped after {} frames", self.frames);
        }
        self.state = LoopState::Stopped;
    }
}
