// Configuration defaults for the solver module
pub const DEFAULT_MAX_ATTEMPTS: u64 = 100_000;
pub const DEFAULT_TIE_CAP: usize = 64;
