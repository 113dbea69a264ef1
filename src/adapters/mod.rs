// Adapters layer: concrete implementations for the external collaborators
// (REST shipping API, notification/navigation/update delivery).

pub mod console;
pub mod http;
