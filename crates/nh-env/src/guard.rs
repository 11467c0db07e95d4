//! One live game per process
//!
//! The engine keeps its state in process-wide memory, so two sessions would
//! trample each other. A session holds an [`InstanceLease`] for as long as it
//! lives; a second `acquire` fails until the lease is released.

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::debug;

use crate::error::{NethackError, Result};

static ACTIVE: AtomicBool = AtomicBool::new(false);

/// Process-wide single-instance flag
pub struct InstanceGuard;

impl InstanceGuard {
    /// Take the flag, or fail with [`NethackError::Conflict`] if a session
    /// already holds it.
    pub fn acquire() -> Result<InstanceLease> {
        ACTIVE
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| NethackError::Conflict)?;
        debug!("instance acquired");
        Ok(InstanceLease { held: true })
    }

    /// Clear the flag whoever holds it. Idempotent.
    pub fn release() {
        if ACTIVE.swap(false, Ordering::AcqRel) {
            debug!("instance released");
        }
    }

    pub fn is_held() -> bool {
        ACTIVE.load(Ordering::Acquire)
    }
}

/// Proof of holding the instance flag. Dropping it releases the flag.
#[derive(Debug)]
pub struct InstanceLease {
    held: bool,
}

impl InstanceLease {
    /// Clear the flag. Calling this again does nothing.
    pub fn release(&mut self) {
        if self.held {
            self.held = false;
            InstanceGuard::release();
        }
    }

    pub fn is_held(&self) -> bool {
        self.held
    }
}

impl Drop for InstanceLease {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_second_acquire_conflicts() {
        let mut lease = InstanceGuard::acquire().unwrap();
        assert!(InstanceGuard::is_held());
        assert!(matches!(InstanceGuard::acquire(), Err(NethackError::Conflict)));
        lease.release();
        assert!(!InstanceGuard::is_held());
        let again = InstanceGuard::acquire().unwrap();
        assert!(again.is_held());
    }

    #[test]
    #[serial]
    fn test_release_is_idempotent() {
        let mut lease = InstanceGuard::acquire().unwrap();
        lease.release();
        lease.release();
        assert!(!lease.is_held());

        // A stale lease must not clear a newer holder's flag
        let _other = InstanceGuard::acquire().unwrap();
        lease.release();
        drop(lease);
        assert!(InstanceGuard::is_held());
    }

    #[test]
    #[serial]
    fn test_guard_release_clears_unconditionally() {
        let lease = InstanceGuard::acquire().unwrap();
        InstanceGuard::release();
        InstanceGuard::release();
        assert!(!InstanceGuard::is_held());
        std::mem::forget(lease);
    }

    #[test]
    #[serial]
    fn test_drop_releases() {
        {
            let _lease = InstanceGuard::acquire().unwrap();
            assert!(InstanceGuard::is_held());
        }
        assert!(!InstanceGuard::is_held());
    }
}
