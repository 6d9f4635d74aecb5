// cartflow_core/src/projector/surface.rs

//! The rendering seam between the projector and the embedding UI.

use super::view::CartView;
use crate::error::CartResult;

/// A distinct UI region that renders a read view over the cart: the count
/// badge, the dropdown summary, the modal or checkout detail view.
///
/// Contract: `render` must tear down and rebuild the surface's whole
/// region from the view. Incremental mutation is what historically left
/// stale controls bound to removed content; full rebuild makes handler
/// re-binding implicit and double-binding impossible, and it is what
/// makes back-to-back renders of an unchanged cart byte-identical.
///
/// A surface whose mount point is gone on the current page returns
/// [`CartError::MountNotFound`](crate::CartError::MountNotFound); the
/// projector logs it and skips that surface only.
pub trait Surface: Send {
  /// Stable identifier used in logs and for unmounting.
  fn name(&self) -> &str;

  fn render(&mut self, view: &CartView) -> CartResult<()>;
}
