// Price extraction and sampling
pub mod ticker;

// Movement classification
pub mod movement;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
