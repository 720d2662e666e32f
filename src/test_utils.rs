//! Test utilities shared across modules.
//!
//! This module provides common utilities for tests, including
//! synchronization primitives for tests that modify global state.

use std::sync::Mutex;

/// Mutex to serialize tests that depend on or change the current working directory.
///
/// Tests that either:
/// - Change the current working directory (e.g., to run git in a scratch repo)
/// - Depend on the current working directory being a git repo
///
/// must acquire this mutex to prevent race conditions during parallel test execution.
pub static CWD_MUTEX: Mutex<()> = Mutex::new(());

/// Mutex to serialize tests that read or modify process environment variables.
///
/// `std::env::set_var` / `remove_var` affect the whole process, so tests that
/// exercise environment fallbacks must hold this lock for their full duration.
pub static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cwd_mutex_can_be_acquired() {
        let lock = CWD_MUTEX.lock();
        assert!(lock.is_ok());
    }

    #[test]
    fn test_env_mutex_can_be_acquired_multiple_times_sequentially() {
        {
            let _lock = ENV_MUTEX.lock().unwrap();
        }
        {
            let _lock = ENV_MUTEX.lock().unwrap();
        }
    }
}
