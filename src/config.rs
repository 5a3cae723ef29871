//! Global configuration singleton (C9).

use pinocchio::pubkey::Pubkey;

pub const FEE_DENOMINATOR: u128 = 10_000;

/// Account data layout is `[8 B discriminator][struct data]`.
pub const GLOBAL_CONFIG_DISCRIMINATOR: [u8; 8] = [0x95, 0x08, 0x9c, 0xca, 0xa0, 0xfc, 0xb0, 0xd9];

pub const DEFAULT_DEPOSIT_FEE_RATE: u16 = 0;
pub const DEFAULT_WITHDRAWAL_FEE_RATE: u16 = 25;
pub const DEFAULT_FEE_ERROR_MARGIN: u16 = 500;

/// `[8-byte discriminator][struct data]`
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GlobalConfig {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub deposit_fee_rate: u16,
    pub withdrawal_fee_rate: u16,
    pub fee_error_margin: u16,
    pub bump: u8,
    pub _padding: u8,
}

impl GlobalConfig {
    pub fn initialize(&mut self, authority: Pubkey, fee_recipient: Pubkey, bump: u8) {
        self.authority = authority;
        self.fee_recipient = fee_recipient;
        self.deposit_fee_rate = DEFAULT_DEPOSIT_FEE_RATE;
        self.withdrawal_fee_rate = DEFAULT_WITHDRAWAL_FEE_RATE;
        self.fee_error_margin = DEFAULT_FEE_ERROR_MARGIN;
        self.bump = bump;
        self._padding = 0;
    }

    /// Overwrite the three rates and `fee_recipient`. No partial updates.
    pub fn update(
        &mut self,
        deposit_fee_rate: u16,
        withdrawal_fee_rate: u16,
        fee_error_margin: u16,
        fee_recipient: Pubkey,
    ) {
        self.deposit_fee_rate = deposit_fee_rate;
        self.withdrawal_fee_rate = withdrawal_fee_rate;
        self.fee_error_margin = fee_error_margin;
        self.fee_recipient = fee_recipient;
    }
}

/// Account data layout is `[8 B discriminator][struct data]`.
pub const TOKEN_POOL_ACCOUNT_DISCRIMINATOR: [u8; 8] = [0xc5, 0x00, 0xe3, 0xe2, 0xf8, 0x45, 0xb8, 0xd4];

/// Binds the SPL-pool vault to a mint (§3: "a sibling `TokenPoolAccount`
/// binds the SPL-pool vault to a mint"). `vault_authority_bump` is the bump
/// for `derive(["token_pool", mint])`, recomputed once at `initialize_spl`
/// and cached here so later `transact_spl` calls never need to re-derive it.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TokenPoolAccount {
    pub mint: Pubkey,
    pub vault_authority_bump: u8,
    pub _padding: [u8; 7],
}

impl TokenPoolAccount {
    pub fn initialize(&mut self, mint: Pubkey, vault_authority_bump: u8) {
        self.mint = mint;
        self.vault_authority_bump = vault_authority_bump;
        self._padding = [0u8; 7];
    }
}

/// Fee amount. `amount` is bounded by `max_deposit_amount`/`i64::MAX` well
/// below where `u128` saturation could kick in; saturating arithmetic here is
/// a width-safety margin, not a reachable error path.
pub fn calculate_fee(amount: u64, rate_bps: u16) -> u64 {
    let scaled = (amount as u128)
        .saturating_mul(rate_bps as u128)
        .saturating_div(FEE_DENOMINATOR);
    scaled.min(u64::MAX as u128) as u64
}
