pub mod health;
pub mod transfer;
pub mod wallet;

pub use health::*;
pub use transfer::*;
pub use wallet::*;
