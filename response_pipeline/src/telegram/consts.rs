//! Fixed strings written around telegram and handled-error output.

/// Opening banner of a telegram record.
pub const TELEGRAM_START: &str = "/_/_/_/_/_/_/_/_ Telegram Start /_/_/_/_/_/_/_/_";

/// Closing banner of a telegram record.
pub const TELEGRAM_END: &str = "/_/_/_/_/_/_/_/_ Telegram End /_/_/_/_/_/_/_/_";

/// Opening banner of a handled-error record.
pub const EXCEPTION_START: &str = "/_/_/_/_/_/_/_/_ Handled Exception Start /_/_/_/_/_/_/_/_";

/// Closing banner of a handled-error record.
pub const EXCEPTION_END: &str = "/_/_/_/_/_/_/_/_ Handled Exception End /_/_/_/_/_/_/_/_";

pub(crate) const NEWLINE: &str = "\n";
