use crate::geometry::Rect;
use std::time::Duration;

/// The cooperative repaint timer behind the self-perpetuating render loop.
///
/// The renderer issues exactly one `schedule_redraw` per rendered frame;
/// the host turns that into a timer that calls
/// [`ViewfinderView::render`](crate::ViewfinderView::render) again. Mode
/// switches never cancel anything: a stale callback is harmless because
/// the next render re-reads the current mode. Hosts must `cancel` on
/// lifecycle teardown so no callback outlives the surface it draws to.
pub trait RepaintScheduler {
    /// Request one redraw after `delay`. `region` bounds the invalidated
    /// area; `None` invalidates the whole surface.
    fn schedule_redraw(&mut self, delay: Duration, region: Option<Rect>);

    /// Drop any pending request.
    fn cancel(&mut self);
}

#[cfg(test)]
pub(crate) mod manual {
    //! A scheduler that records requests for assertion.

    use super::*;

    #[derive(Debug, Default)]
    pub(crate) struct ManualScheduler {
        pub(crate) requests: Vec<(Duration, Option<Rect>)>,
        pub(crate) cancelled: bool,
    }

    impl ManualScheduler {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn last(&self) -> Option<&(Duration, Option<Rect>)> {
            self.requests.last()
        }
    }

    impl RepaintScheduler for ManualScheduler {
        fn schedule_redraw(&mut self, delay: Duration, region: Option<Rect>) {
            self.requests.push((delay, region));
        }

        fn cancel(&mut self) {
            self.cancelled = true;
        }
    }
}
