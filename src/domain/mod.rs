// Domain layer: Ghost records, parsed source files and the ports the pipeline depends on.

pub mod model;
pub mod ports;
