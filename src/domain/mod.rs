// Domain layer: result types and the observer port. No I/O.

pub mod model;
pub mod ports;
