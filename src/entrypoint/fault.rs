//! Scoped panic interception.
//!
//! [`intercept`] runs a closure under `catch_unwind` and turns a panic into a
//! [`Cause`] with [`Origin::Fault`](super::Origin::Fault). While the closure
//! runs, a panic hook records the panic location and a backtrace for the
//! intercepting thread instead of printing them; panics on any other thread
//! still reach the previously installed hook. The previous hook is restored
//! when the scope ends.
//!
//! Panics that the closure catches itself with its own `catch_unwind` go
//! through the same hook, so they are not printed either. Their record is
//! discarded when the scope ends.

use std::any::Any;
use std::backtrace::Backtrace;
use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe, PanicHookInfo};
use std::sync::Arc;
use std::thread;

use super::Cause;

type Hook = dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static;

thread_local! {
    static LAST_PANIC: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Run `f`, converting a panic into a fault-originated [`Cause`].
pub fn intercept<R>(f: impl FnOnce() -> R) -> Result<R, Cause> {
    let guard = HookGuard::install();
    let result = panic::catch_unwind(AssertUnwindSafe(f));
    drop(guard);
    let recorded = LAST_PANIC.with(|slot| slot.borrow_mut().take());

    result.map_err(|payload| {
        let trace = recorded.unwrap_or_else(|| {
            format!("panicked at <unknown location>\n{}", Backtrace::force_capture())
        });
        Cause::fault(payload_message(payload.as_ref()), trace)
    })
}

/// Extract the human-readable message from a panic payload.
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

struct HookGuard {
    previous: Arc<Hook>,
}

impl HookGuard {
    fn install() -> Self {
        LAST_PANIC.with(|slot| *slot.borrow_mut() = None);
        let previous: Arc<Hook> = Arc::from(panic::take_hook());
        let owner = thread::current().id();
        let forward = Arc::clone(&previous);

        panic::set_hook(Box::new(move |info| {
            if thread::current().id() == owner {
                record(info);
            } else {
                forward(info);
            }
        }));

        Self { previous }
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        let previous = Arc::clone(&self.previous);
        let _ours = panic::take_hook();
        panic::set_hook(Box::new(move |info| previous(info)));
    }
}

fn record(info: &PanicHookInfo<'_>) {
    let location = info
        .location()
        .map_or_else(|| "<unknown location>".to_string(), ToString::to_string);
    let trace = format!("panicked at {}\n{}", location, Backtrace::force_capture());
    LAST_PANIC.with(|slot| *slot.borrow_mut() = Some(trace));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_intercept_passes_through_values() {
        let result = intercept(|| 40 + 2);
        assert_eq!(result.unwrap(), 42);
    }

    #[test]
    #[serial]
    fn test_intercept_converts_str_panic() {
        let cause = intercept::<()>(|| { panic!("index out of range") }).unwrap_err();
        assert!(cause.is_fault());
        assert_eq!(cause.to_string(), "index out of range");
        assert!(cause.trace().starts_with("panicked at "));
        assert!(cause.trace().contains("fault.rs"));
    }

    #[test]
    #[serial]
    fn test_intercept_converts_formatted_panic() {
        let len = 3;
        let cause = intercept::<()>(|| { panic!("index 7 out of range for length {}", len) })
            .unwrap_err();
        assert_eq!(cause.to_string(), "index 7 out of range for length 3");
    }

    #[test]
    #[serial]
    fn test_intercept_converts_runtime_panic() {
        let values: Vec<u32> = Vec::new();
        let index = values.len() + 1;
        let cause = intercept(|| values[index]).unwrap_err();
        assert!(cause.to_string().contains("index out of bounds"));
        assert_eq!(cause.exit_code(), 1);
    }

    #[test]
    #[serial]
    fn test_intercept_opaque_payload() {
        let cause = intercept::<()>(|| { std::panic::panic_any(17_u32) }).unwrap_err();
        assert_eq!(cause.to_string(), "Box<dyn Any>");
    }

    #[test]
    #[serial]
    fn test_intercept_does_not_leak_trace_into_next_run() {
        let _ = intercept::<()>(|| { panic!("first") });
        assert!(intercept(|| ()).is_ok());
        LAST_PANIC.with(|slot| assert!(slot.borrow().is_none()));
    }

    #[test]
    #[serial]
    fn test_panic_caught_inside_closure_leaves_no_record() {
        let result = intercept(|| {
            let handled = panic::catch_unwind(|| panic!("handled inside"));
            assert!(handled.is_err());
            5
        });

        assert_eq!(result.unwrap(), 5);
        LAST_PANIC.with(|slot| assert!(slot.borrow().is_none()));
    }

    #[test]
    #[serial]
    fn test_stale_record_is_not_reported() {
        LAST_PANIC.with(|slot| *slot.borrow_mut() = Some("panicked at stale".to_string()));

        let cause = intercept::<()>(|| { std::panic::resume_unwind(Box::new("silent")) })
            .unwrap_err();

        assert_eq!(cause.to_string(), "silent");
        assert!(!cause.trace().contains("stale"));
        assert!(cause.trace().starts_with("panicked at <unknown location>"));
    }

    #[test]
    #[serial]
    fn test_nested_intercept_reports_inner_fault() {
        let outer = intercept(|| intercept::<()>(|| { panic!("inner") }));
        let inner = outer.unwrap().unwrap_err();
        assert_eq!(inner.to_string(), "inner");
    }
}
