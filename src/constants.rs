//! Constants used throughout chooser

/// Attempts allowed when `max_attempts` is not set or is below 1
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

/// Separator between options in the prompt hint
pub const OPTION_SEPARATOR: &str = "/";

/// Characters trimmed from both ends of an answer
pub const TRIMMED_CHARS: &[char] = &[' ', '\n'];

/// Options offered by the yes/no confirmation
pub mod yes_no {
    pub const YES: &str = "y";
    pub const NO: &str = "n";
}

/// Config file extensions and the parser each one selects
pub mod config_formats {
    pub const JSON: &[&str] = &["json"];
    pub const YAML: &[&str] = &["yaml", "yml"];
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
