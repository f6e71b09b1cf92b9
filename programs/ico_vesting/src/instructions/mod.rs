pub mod initialize;
pub mod transfer;
pub mod approve;
pub mod transfer_from;
pub mod vested_transfer;
pub mod release;
pub mod pause;
pub mod unpause;
pub mod transfer_ownership;
pub mod emit_vesting_quote;

pub use initialize::*;
pub use transfer::*;
pub use approve::*;
pub use transfer_from::*;
pub use vested_transfer::*;
pub use release::*;
pub use pause::*;
pub use unpause::*;
pub use transfer_ownership::*;
pub use emit_vesting_quote::*;
