pub mod allocator;
pub mod vesting;
