// Domain layer: transient models and the executor port. No process or terminal access here.

pub mod model;
pub mod ports;
