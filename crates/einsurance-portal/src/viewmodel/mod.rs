//! ViewModel Module
//!
//! State management layer with event-driven architecture: one view model
//! per screen, each owning its state exclusively.

pub mod customer_list_vm;
pub mod payment_vm;
pub mod register_vm;

pub use customer_list_vm::{CustomerListViewModel, StatusFilter};
pub use payment_vm::{PaymentPhase, PaymentViewModel};
pub use register_vm::RegisterViewModel;
