// Restock CLI — command implementations live here so integration tests can
// drive them without spawning the binary.

pub mod exit_codes;
pub mod plan;

/// Command failure carrying the process exit code.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
}
