// cartflow_core/src/projector/mod.rs

//! Renders the current cart into every mounted surface.

pub mod surface;
pub mod view;

pub use surface::Surface;
pub use view::{CartView, DisplayLabels, LineView};

use crate::cart::Cart;
use crate::error::CartError;
use parking_lot::Mutex;
use tracing::{debug, error, warn};

/// Holds the mounted surfaces and redraws all of them after every cart
/// mutation. There is no batching or diffing: mutations originate from
/// discrete user gestures, so a full recompute per mutation is fine.
pub struct Projector {
  labels: DisplayLabels,
  surfaces: Mutex<Vec<Box<dyn Surface>>>,
}

impl std::fmt::Debug for Projector {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("Projector")
      .field("labels", &self.labels)
      .field("surfaces", &self.surfaces.lock().len())
      .finish()
  }
}

impl Default for Projector {
  fn default() -> Self {
    Projector::new(DisplayLabels::default())
  }
}

impl Projector {
  pub fn new(labels: DisplayLabels) -> Self {
    Projector {
      labels,
      surfaces: Mutex::new(Vec::new()),
    }
  }

  pub fn labels(&self) -> &DisplayLabels {
    &self.labels
  }

  pub fn mount(&self, surface: Box<dyn Surface>) {
    debug!(surface = surface.name(), "Surface mounted");
    self.surfaces.lock().push(surface);
  }

  /// Unmounts the first surface with the given name; returns whether one
  /// was found.
  pub fn unmount(&self, name: &str) -> bool {
    let mut surfaces = self.surfaces.lock();
    let Some(pos) = surfaces.iter().position(|s| s.name() == name) else {
      return false;
    };
    surfaces.remove(pos);
    debug!(surface = name, "Surface unmounted");
    true
  }

  pub fn surface_count(&self) -> usize {
    self.surfaces.lock().len()
  }

  /// Projects the cart once and renders the result into every mounted
  /// surface, returning how many surfaces actually rendered.
  ///
  /// Rendering never fails the mutation that triggered it: a missing
  /// mount point skips that surface, any other render error is logged
  /// and the remaining surfaces still redraw.
  pub fn refresh(&self, cart: &Cart) -> usize {
    let view = CartView::project(cart, &self.labels);
    let mut rendered = 0;
    for surface in self.surfaces.lock().iter_mut() {
      match surface.render(&view) {
        Ok(()) => rendered += 1,
        Err(CartError::MountNotFound { surface }) => {
          warn!(surface = %surface, "Mount point absent on this page; skipping surface");
        }
        Err(err) => {
          error!(surface = surface.name(), error = %err, "Surface failed to render");
        }
      }
    }
    debug!(items = cart.len(), count = cart.item_count(), rendered, "Cart display updated");
    rendered
  }

  /// The projection itself, for callers that want view state without
  /// touching any surface.
  pub fn view(&self, cart: &Cart) -> CartView {
    CartView::project(cart, &self.labels)
  }
}
