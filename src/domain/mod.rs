// Domain layer: core models and ports (interfaces). No external dependencies
// beyond serde/decimal for the value types.

pub mod model;
pub mod ports;
