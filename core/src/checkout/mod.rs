// cartflow_core/src/checkout/mod.rs

//! Order submission: form validation, delivery pricing, the order
//! snapshot, collaborator seams, and the coordinator that ties them
//! together.

pub mod collaborators;
pub mod coordinator;
pub mod delivery;
pub mod form;
pub mod order;

pub use collaborators::{AutoConfirm, ConfirmationGate, OrderNotifier, Receipt, ReceiptGenerator};
pub use coordinator::{CheckoutConfig, CheckoutCoordinator, CheckoutOutcome, SubmissionReport};
pub use delivery::{DeliveryQuote, DeliveryTable};
pub use form::{CheckoutForm, Customer};
pub use order::{OrderDetails, OrderNotice};
