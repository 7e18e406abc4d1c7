//! Daily simulation systems.

pub mod accrual;
pub mod research;
pub mod warfare;

pub use accrual::run_accrual_tick;
pub use research::run_research_tick;
pub use warfare::run_war_tick;
