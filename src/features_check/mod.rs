//! Compile-time check that an allocator is available.

#[cfg(not(any(feature = "std", feature = "alloc")))]
compile_error!("biginteger requires that either `std` (default) or `alloc` feature is enabled");
