//! Logging abstraction
//!
//! Provides unified logging macros that work across different targets:
//! - Embedded (`defmt` feature): forwards to defmt
//! - Host tests: uses println!/eprintln!
//! - Host non-test: no-op
//!
//! Arguments must implement `defmt::Format` as well as `Display`, so mission
//! types are logged through their own impls or their `name()`.

/// Log informational message
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::info!($($arg)*);

        #[cfg(test)]
        println!("[INFO] {}", format!($($arg)*));
    }};
}

/// Log warning message
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::warn!($($arg)*);

        #[cfg(test)]
        println!("[WARN] {}", format!($($arg)*));
    }};
}

/// Log error message
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::error!($($arg)*);

        #[cfg(test)]
        eprintln!("[ERROR] {}", format!($($arg)*));
    }};
}

/// Log debug message
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {{
        #[cfg(all(feature = "defmt", not(test)))]
        ::defmt::debug!($($arg)*);

        #[cfg(test)]
        println!("[DEBUG] {}", format!($($arg)*));
    }};
}
