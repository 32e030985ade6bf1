pub mod initialize;
pub mod settle;
pub mod settle_token;
pub mod sweep;
pub mod sweep_token;

pub use initialize::*;
pub use settle::*;
pub use settle_token::*;
pub use sweep::*;
pub use sweep_token::*;
