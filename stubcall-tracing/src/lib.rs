#![deny(
    missing_docs,
    unsafe_code,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]

//! Tracing events for failures signalled by [`stubcall`].
//!
//! The `stubcall` crate itself never logs. It hands every failure, such as a
//! call through an unbound `FunctionWrapper`, to a global
//! [failure hook](stubcall::hooks). This crate provides a hook that turns
//! each failure into a `tracing` event at the `ERROR` level, so failures show
//! up in whatever subscriber the application already uses.
//!
//! # Quick Start
//!
//! ```
//! use stubcall::FunctionWrapper;
//!
//! let subscriber = tracing_subscriber::fmt().finish();
//! tracing::subscriber::set_global_default(subscriber).expect("failed to set subscriber");
//!
//! stubcall_tracing::install().expect("failed to install failure hook");
//!
//! let unbound = FunctionWrapper::<fn(u8) -> u8>::new();
//! // Emits: ERROR stubcall_tracing: stubcall failure kind=call through an
//! // uninitialised function wrapper file="src/main.rs" line=9 column=9
//! assert!(unbound.call(1).is_err());
//! ```
//!
//! # Event Fields
//!
//! | Field    | Value                                         |
//! |----------|-----------------------------------------------|
//! | `kind`   | the [`ErrorKind`](stubcall::ErrorKind) description |
//! | `file`   | source file of the failed call or access      |
//! | `line`   | line of the failed call or access             |
//! | `column` | column of the failed call or access           |

use stubcall::{
    Error,
    hooks::{self, FailureHook, HookAlreadyInstalledError},
};

/// Emits the `tracing` event describing `error`.
///
/// This is the function run by [`TracingHook`]. It can also be called from a
/// custom failure hook that does more than log.
pub fn emit(error: Error) {
    let location = error.location();
    tracing::error!(
        kind = %error.kind(),
        file = location.file(),
        line = location.line(),
        column = location.column(),
        "stubcall failure"
    );
}

/// A failure hook that emits a `tracing` event for every signalled failure.
///
/// # Examples
///
/// ```
/// use stubcall::hooks::FailureHook;
/// use stubcall_tracing::TracingHook;
///
/// let previous: Option<FailureHook> = TracingHook.replace();
/// assert!(stubcall::hooks::is_installed());
/// # drop(previous);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingHook;

impl TracingHook {
    /// Installs this hook globally.
    ///
    /// Fails if another failure hook is already installed.
    pub fn install(self) -> Result<(), HookAlreadyInstalledError> {
        hooks::install(self.into())
    }

    /// Installs this hook globally, returning the previously installed one.
    pub fn replace(self) -> Option<FailureHook> {
        hooks::replace(self.into())
    }
}

impl From<TracingHook> for FailureHook {
    fn from(_: TracingHook) -> Self {
        FailureHook::from_function(emit)
    }
}

/// Installs [`TracingHook`] globally.
///
/// Shorthand for `TracingHook.install()`.
pub fn install() -> Result<(), HookAlreadyInstalledError> {
    TracingHook.install()
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use stubcall::{ErrorKind, Expected, FunctionWrapper};
    use tracing_subscriber::fmt::MakeWriter;

    use super::*;

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture<F: FnOnce()>(f: F) -> String {
        let capture = Capture::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .without_time()
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        capture.contents()
    }

    #[test]
    fn test_emit_fields() {
        let error = Error::new(ErrorKind::CallToNonConst);
        let output = capture(|| emit(error));

        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("stubcall failure"), "{output}");
        assert!(output.contains(ErrorKind::CallToNonConst.as_str()), "{output}");
        assert!(
            output.contains(&format!("line={}", error.location().line())),
            "{output}"
        );
        assert!(
            output.contains(&format!("column={}", error.location().column())),
            "{output}"
        );
    }

    #[test]
    fn test_installed_hook_logs_failures() {
        let _ = TracingHook.replace();
        assert!(hooks::is_installed());
        assert!(matches!(install(), Err(HookAlreadyInstalledError(_))));

        let output = capture(|| {
            let unbound = FunctionWrapper::<fn(u8) -> u8>::new();
            assert!(unbound.call(1).is_err());

            let missing: Expected<u8, ()> = Expected::unexpect(stubcall::UNEXPECT, ());
            assert!(missing.value().is_err());
        });

        assert!(output.contains(ErrorKind::Uninitialised.as_str()), "{output}");
        assert!(output.contains(ErrorKind::WrongAlternative.as_str()), "{output}");
        assert_eq!(output.lines().count(), 2, "{output}");
    }

    #[test]
    fn test_tracing_hook_conversion() {
        let hook: FailureHook = TracingHook.into();
        assert_eq!(hook, FailureHook::from_function(emit));
    }
}
