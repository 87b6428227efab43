// Domain layer: teacher models and the capability ports the core calls through.

pub mod model;
pub mod ports;
