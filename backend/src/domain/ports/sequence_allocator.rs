//! Port for the durable counter that feeds ticket numbers.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised by sequence allocator adapters.
    pub enum SequenceAllocatorError {
        /// The backing store could not be reached.
        Connection { message: String } =>
            "sequence allocator connection failed: {message}",
        /// The increment query failed during execution.
        Query { message: String } =>
            "sequence allocator query failed: {message}",
        /// The store returned a value that cannot be a sequence number.
        InvalidValue { value: i64 } =>
            "sequence allocator returned a non-positive value: {value}",
    }
}

/// Port for allocating ticket sequence values.
///
/// Implementations must perform a single indivisible increment-and-return:
/// every returned value is positive and strictly greater than any value
/// previously returned, across concurrent callers and process restarts.
/// Values are never reused; gaps are acceptable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SequenceAllocator: Send + Sync {
    /// Allocate the next sequence value.
    async fn allocate_next(&self) -> Result<u64, SequenceAllocatorError>;
}
