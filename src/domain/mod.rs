// Domain layer: core models and ports (interfaces). Only std/serde, plus clap derives behind the `cli` feature.

pub mod model;
pub mod ports;
