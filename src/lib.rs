/// All logic related to the account balance. State is modified using
/// events, which are created by handling commands.
pub mod account;

/// Turns raw user input (menu choices, amount lines) into typed commands
/// that later are executed by [`account`].
pub mod command;

/// Transaction engine interface, plus "in memory" implementation.
/// Coordinates amount parsing, the overdraft guard and display formatting.
///
/// NOTE: the trait is not strictly required for a single account, but it
/// keeps the menu loop decoupled from where the balance actually lives.
pub mod engine;

/// Menu session bootstrap. Ideally this would live next to the binary,
/// but integration tests drive it with scripted input, so it stays in
/// the library.
pub mod bin_utils;
