//! ---
//! aqs_section: "03-logging"
//! aqs_subsection: "module"
//! aqs_type: "source"
//! aqs_scope: "code"
//! aqs_description: "Context-aware logging macros."
//! aqs_version: "v0.1.0-alpha"
//! aqs_owner: "tbd"
//! ---
/// Shared expansion for the level-specific macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __aq_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx = &$ctx;
        $crate::__private::tracing::event!(
            $level,
            zone = ctx.zone.unwrap_or(""),
            scenario = ctx.scenario.unwrap_or(""),
            selections = ctx.selections.unwrap_or_default(),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with simulation context.
#[macro_export]
macro_rules! aq_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with simulation context.
#[macro_export]
macro_rules! aq_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a warning enriched with simulation context.
#[macro_export]
macro_rules! aq_warn {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::WARN, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::WARN, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with simulation context.
#[macro_export]
macro_rules! aq_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__aq_event!($crate::__private::tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
