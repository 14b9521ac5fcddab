//! Booking Screen State
//!
//! Presentation-layer state for the ticket modal, the registration page and
//! the payment step. Rendering is left to the host; every controller here is
//! plain data driven by interaction events.
#![forbid(unsafe_code)]

pub mod announce;
pub mod checkout;
pub mod navigation;
pub mod payment;
pub mod promo;
pub mod registration;
pub mod ticket_modal;

pub use announce::quantity_message;
pub use checkout::CheckoutRequest;
pub use navigation::{Navigator, Screen, is_transition_allowed};
pub use payment::{PaymentConfirmation, PaymentMethod, PaymentPage, PaymentStatus};
pub use promo::PromoField;
pub use registration::{RegistrationPage, TicketRow};
pub use ticket_modal::{ModalStep, TicketModal};
