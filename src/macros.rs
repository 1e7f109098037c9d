/// Emits a `tracing::trace!` event when the `tracing` feature is enabled.
///
/// With the feature disabled the arguments are not evaluated at all, so call
/// sites should only reference values they already hold.
///
/// ```ignore
/// trace_traversal!(operation = "collect_leaves", visited = count);
/// ```
macro_rules! trace_traversal {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

pub(crate) use trace_traversal;
