use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    Unauthorized = 4,

    // Purchase validation
    SaleNotActive = 10,
    BelowMinimum = 11,
    AboveMaximum = 12,
    HardCapExceeded = 13,
    WalletCapExceeded = 14,
    SalePaused = 15,

    // Admission gate
    NotWhitelisted = 20,
    ProtectionActive = 21,
    GasPriceTooHigh = 22,
    CooldownActive = 23,
    SignatureRequired = 24,
    SignatureReused = 25,
    SignatureInvalid = 26,

    // Settlement
    AlreadyFinalized = 30,
    NotFinalized = 31,
    SoftCapNotReached = 32,
    SoftCapReached = 33,
    RefundsDisabled = 34,
    NoContribution = 35,
    NothingToClaim = 36,
    NothingToWithdraw = 37,

    ArithmeticOverflow = 40,
    TransferFailed = 41,
}
