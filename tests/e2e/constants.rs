use alloy::primitives::{Address, U256, address, uint};

/// Owner of the engine under test.
pub const OWNER: Address = address!("0x00000000000000000000000000000000000000a0");

/// Address of the engine under test.
pub const ENGINE: Address = address!("0x00000000000000000000000000000000000000e0");

/// Address of the fee token.
pub const FEE_TOKEN: Address = address!("0x00000000000000000000000000000000000000f0");

/// Address of the reward token.
pub const REWARD_TOKEN: Address = address!("0x00000000000000000000000000000000000000b0");

/// Claimers of the canonical four-leaf batch.
pub const CLAIMERS: [Address; 4] = [
    address!("0x1111111111111111111111111111111111111111"),
    address!("0x2222222222222222222222222222222222222222"),
    address!("0x3333333333333333333333333333333333333333"),
    address!("0x4444444444444444444444444444444444444444"),
];

/// Epoch salt of the canonical four-leaf batch.
pub const EPOCH_SALT: U256 = uint!(0x9a794a09cf7b4fb99e2e3d4aeac42eab_U256);

/// Fee tokens each claimer starts with.
pub const INITIAL_FEE_BALANCE: U256 = uint!(1_000_000_U256);
