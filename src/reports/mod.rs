//! Report document types
//!
//! One struct per equipment class, all sharing the section building blocks
//! in `common` and implementing the `Report` trait from `core`.

pub mod common;
pub mod motor_starter;
pub mod panelboard;
pub mod switchgear;
pub mod transformer;

pub use motor_starter::MotorStarterReport;
pub use panelboard::PanelboardReport;
pub use switchgear::SwitchgearReport;
pub use transformer::TransformerReport;
