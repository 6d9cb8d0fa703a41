//! Dexter: thin launcher for the `dexter-agent` executable.
//!
//! This binary forwards its entire argument vector, unparsed and in order,
//! to `dexter-agent`, shares its standard streams with that child process,
//! waits for it to finish, and exits with the child's status. Launch
//! failures exit with the conventional shell sentinels (127 not found,
//! 126 not startable).

mod error;
mod exit_codes;
mod launcher;
#[cfg(test)]
mod test_support;

use std::ffi::OsString;

fn main() {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    match launcher::run(&args) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}
