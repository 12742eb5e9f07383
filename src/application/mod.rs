// Poll-cycle orchestration
pub mod monitor;
