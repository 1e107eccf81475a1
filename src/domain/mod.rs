// Domain layer: value objects, pure computations and the demo port. No I/O here.

pub mod model;
pub mod ports;

pub mod services;
