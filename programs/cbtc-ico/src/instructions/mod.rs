pub mod add_round;
pub mod add_tranche;
pub mod buy_tokens;
pub mod claim;
pub mod deposit_tokens;
pub mod initialize;
pub mod set_sale_status;
pub mod set_tranche_status;
pub mod withdraw_tokens;

pub use add_round::*;
pub use add_tranche::*;
pub use buy_tokens::*;
pub use claim::*;
pub use deposit_tokens::*;
pub use initialize::*;
pub use set_sale_status::*;
pub use set_tranche_status::*;
pub use withdraw_tokens::*;
