// Domain layer: profile model and the speech port. No IO here.

pub mod model;
pub mod ports;
