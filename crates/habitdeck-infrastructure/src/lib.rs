// Infrastructure layer - Technical implementations
// Depends on domain layer, implements its interfaces

pub mod logging;
pub mod persistence;
