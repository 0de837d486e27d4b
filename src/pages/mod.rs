//! Pages
//!
//! Top-level page components for each route.

pub mod charts;
pub mod login_register;
pub mod records;
pub mod reports;

pub use charts::Charts;
pub use login_register::LoginRegister;
pub use records::Records;
pub use reports::Reports;
