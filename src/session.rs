//! Zoom-gesture lifecycle: Idle, Selecting, commit.

use log::debug;

use crate::error::Error;
use crate::scalar::Scalar;
use crate::screen::Size;
use crate::viewport::{self, PixelRect, PlaneBounds};

/// An in-progress drag, anchored where the pointer went down.
#[derive(Clone, Copy, Debug)]
struct Selection {
    anchor_x: f64,
    anchor_y: f64,
    corner_x: f64,
    corner_y: f64,
}

impl Selection {
    fn rect(&self) -> PixelRect {
        PixelRect {
            x: self.anchor_x,
            y: self.anchor_y,
            width: self.corner_x - self.anchor_x,
            height: self.corner_y - self.anchor_y,
        }
    }
}

/// Owns the current plane bounds and the zoom-gesture state machine.
///
/// No selection means Idle; an in-progress one means Selecting. Releasing
/// the pointer commits: the selection becomes new bounds, or is discarded
/// when degenerate. Bounds are only ever replaced wholesale, so a render
/// pass that snapshots [`ZoomSession::bounds`] at its start never observes
/// a mid-pass change.
pub struct ZoomSession<T> {
    bounds: PlaneBounds<T>,
    viewport: Size,
    selection: Option<Selection>,
}

impl<T: Scalar> ZoomSession<T> {
    pub fn new(bounds: PlaneBounds<T>, viewport: Size) -> Self {
        ZoomSession {
            bounds,
            viewport,
            selection: None,
        }
    }

    /// Snapshot of the bounds for a rendering pass.
    pub fn bounds(&self) -> PlaneBounds<T> {
        self.bounds
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_some()
    }

    /// Pointer went down: record the anchor and start selecting.
    pub fn begin_selection(&mut self, x: f64, y: f64) {
        self.selection = Some(Selection {
            anchor_x: x,
            anchor_y: y,
            corner_x: x,
            corner_y: y,
        });
    }

    /// Pointer moved: grow the rectangle. Returns the rectangle for the UI
    /// to draw, or `None` when no selection is in progress. Bounds are
    /// untouched until commit.
    pub fn drag_to(&mut self, x: f64, y: f64) -> Option<PixelRect> {
        let selection = self.selection.as_mut()?;
        selection.corner_x = x;
        selection.corner_y = y;
        Some(selection.rect())
    }

    /// Pointer released: turn the selection into new bounds.
    ///
    /// `Ok(Some(bounds))` replaced the viewport. `Ok(None)` means the
    /// gesture was absent or degenerate (a click without a drag) and was
    /// discarded with bounds unchanged. Either way the session is Idle
    /// afterwards; there is no partial-commit state.
    pub fn commit_selection(&mut self) -> Result<Option<PlaneBounds<T>>, Error> {
        let selection = match self.selection.take() {
            Some(selection) => selection,
            None => return Ok(None),
        };

        match viewport::zoom_bounds(selection.rect(), self.viewport, &self.bounds) {
            Ok(bounds) => {
                debug!("zoom committed: {:?}", bounds);
                self.bounds = bounds;
                Ok(Some(bounds))
            }
            Err(Error::DegenerateZoom) => {
                debug!("degenerate selection discarded");
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    /// Abandon the in-progress selection, if any.
    pub fn cancel_selection(&mut self) {
        self.selection = None;
    }

    /// The raster was resized; subsequent gestures map through the new
    /// pixel dimensions.
    pub fn resize_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> ZoomSession<f64> {
        ZoomSession::new(PlaneBounds::full_set(), Size::new(800, 600))
    }

    #[test]
    fn a_drag_release_cycle_replaces_the_bounds() {
        let mut session = session();
        assert!(!session.is_selecting());

        session.begin_selection(400.0, 300.0);
        assert!(session.is_selecting());
        let rect = session.drag_to(500.0, 375.0).unwrap();
        assert_eq!(rect.width, 100.0);
        assert_eq!(rect.height, 75.0);

        let committed = session.commit_selection().unwrap().unwrap();
        assert_eq!(session.bounds(), committed);
        assert!(!session.is_selecting());
        assert!((committed.min_re() - (-0.5)).abs() < 1e-12);
        assert!((committed.max_re() - (-0.125)).abs() < 1e-12);
    }

    #[test]
    fn a_click_without_a_drag_is_discarded() {
        let mut session = session();
        let before = session.bounds();

        session.begin_selection(250.0, 250.0);
        assert_eq!(session.commit_selection().unwrap(), None);
        assert_eq!(session.bounds(), before);
        assert!(!session.is_selecting());
    }

    #[test]
    fn dragging_up_and_left_commits_the_normalized_rectangle() {
        let mut up_left = session();
        up_left.begin_selection(450.0, 350.0);
        up_left.drag_to(400.0, 300.0);
        let a = up_left.commit_selection().unwrap().unwrap();

        let mut down_right = session();
        down_right.begin_selection(400.0, 300.0);
        down_right.drag_to(450.0, 350.0);
        let b = down_right.commit_selection().unwrap().unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn cancelling_discards_the_gesture() {
        let mut session = session();
        let before = session.bounds();

        session.begin_selection(100.0, 100.0);
        session.drag_to(300.0, 300.0);
        session.cancel_selection();

        assert!(!session.is_selecting());
        assert_eq!(session.commit_selection().unwrap(), None);
        assert_eq!(session.bounds(), before);
    }

    #[test]
    fn committing_without_a_selection_is_a_no_op() {
        let mut session = session();
        assert_eq!(session.commit_selection().unwrap(), None);
    }

    #[test]
    fn drag_without_begin_reports_nothing() {
        let mut session = session();
        assert_eq!(session.drag_to(10.0, 10.0), None);
    }

    #[test]
    fn successive_zooms_compose() {
        let mut session = session();
        session.begin_selection(200.0, 150.0);
        session.drag_to(600.0, 450.0);
        session.commit_selection().unwrap().unwrap();

        // Second gesture maps through the bounds the first one produced.
        session.begin_selection(200.0, 150.0);
        session.drag_to(600.0, 450.0);
        let second = session.commit_selection().unwrap().unwrap();

        // Full set is 3 wide; each zoom keeps the middle half: 3 * (1/2)² wide.
        let re_span = second.max_re() - second.min_re();
        assert!((re_span - 0.75).abs() < 1e-12);
    }
}
