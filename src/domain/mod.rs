// Domain layer: the service model, its options, and the documentation-merge port.

pub mod model;
pub mod ports;
