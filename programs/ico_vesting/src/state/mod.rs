pub mod access;
pub mod allocation;
pub mod allowance;
pub mod cap;
pub mod ledger;
pub mod team_lock;
pub mod token_state;
pub mod tokenomics;

pub use access::*;
pub use allocation::*;
pub use allowance::*;
pub use cap::*;
pub use ledger::*;
pub use team_lock::*;
pub use token_state::*;
pub use tokenomics::*;
