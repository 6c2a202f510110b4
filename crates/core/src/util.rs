/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs how long it took to evaluate, and evaluates to the value
/// of the expression. The log level defaults to [log::Level::Debug].
///
/// ```
/// use hexgrid::{hex_linedraw, timed, Hex};
///
/// let line = timed!(
///     "Line drawing",
///     log::Level::Info,
///     hex_linedraw(Hex::ORIGIN, Hex::new_axial(10, -4))
/// );
/// assert_eq!(line.len(), 11);
/// ```
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, $crate::__log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        $crate::__log::log!(
            $log_level,
            "{} took {} ms",
            $label,
            elapsed.as_millis()
        );
        value
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_timed() {
        let value = timed!("Adding", 1 + 2);
        assert_eq!(value, 3);
        let value = timed!("Adding", log::Level::Trace, { 2 + 2 });
        assert_eq!(value, 4);
    }
}
