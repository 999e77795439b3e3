#![deny(missing_docs)]
#![doc = "Mutable red/black trigraph engine implementing the `tww-core` contraction contract."]

mod buckets;
mod components;
mod trigraph;
mod twins;

pub use components::split_components;
pub use trigraph::Trigraph;
pub use twins::{false_twin_classes, true_twin_classes};
