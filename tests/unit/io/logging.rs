//! Tests for verbosity to log level mapping

#[cfg(test)]
mod tests {
    use subtile::io::logging::{default_directive, init, level_for};

    // Tests each verbosity count maps to the expected level
    // Verified by shifting the mapping by one step
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    // Tests the default filter targets this crate only
    // Verified by emitting a global level directive
    #[test]
    fn test_default_directive() {
        assert_eq!(default_directive(1), "subtile=info");
    }

    // Tests repeated initialization keeps the first subscriber
    // Verified by calling the panicking init variant
    #[test]
    fn test_init_is_idempotent() {
        init(0);
        init(2);
    }
}
