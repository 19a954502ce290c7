//! Shift swaps between two operators

pub mod orchestrator;
pub mod request;

pub use orchestrator::ShiftSwapper;
pub use request::{ShiftSwapRequest, SwapInstruction, SwapParty, SwapWrite};
