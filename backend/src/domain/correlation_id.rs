//! Request-scoped correlation identifier for joining logs and errors.
//!
//! `CorrelationId` follows a request through the system. It uses task-local
//! storage so the current identifier is available without threading it
//! through every call.
//!
//! Tokio task-local variables are not inherited across spawned tasks. Use
//! [`CorrelationId::scope`] when spawning new tasks so the active identifier
//! propagates.

use std::future::Future;

use tokio::task_local;
use uuid::Uuid;

/// Header carrying the correlation identifier on requests and responses.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

/// Longest caller-supplied identifier accepted verbatim.
pub const CORRELATION_ID_MAX_LEN: usize = 128;

task_local! {
    static CORRELATION_ID: CorrelationId;
}

/// Reasons a caller-supplied identifier is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CorrelationIdError {
    /// The identifier is empty once trimmed.
    #[error("correlation id must not be blank")]
    Blank,
    /// The identifier exceeds [`CORRELATION_ID_MAX_LEN`].
    #[error("correlation id must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The identifier contains characters that cannot be echoed in a header.
    #[error("correlation id must contain only visible ASCII characters")]
    InvalidCharacters,
}

/// Per-request correlation identifier exposed via task-local storage.
///
/// # Examples
/// ```
/// use support_tickets::CorrelationId;
///
/// async fn handler() {
///     if let Some(id) = CorrelationId::current() {
///         println!("correlation id: {id}");
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier in scope, if any.
    #[must_use]
    pub fn current() -> Option<Self> {
        CORRELATION_ID.try_with(Clone::clone).ok()
    }

    /// Borrow the identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Execute the provided future with the supplied identifier in scope.
    ///
    /// # Examples
    /// ```
    /// use support_tickets::CorrelationId;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let id: CorrelationId = "checkout-42".parse().expect("valid id");
    /// let observed = CorrelationId::scope(id.clone(), async { CorrelationId::current() }).await;
    /// assert_eq!(observed, Some(id));
    /// # });
    /// ```
    pub async fn scope<Fut>(id: Self, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        CORRELATION_ID.scope(id, fut).await
    }
}

impl std::fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::str::FromStr for CorrelationId {
    type Err = CorrelationIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CorrelationIdError::Blank);
        }
        if trimmed.len() > CORRELATION_ID_MAX_LEN {
            return Err(CorrelationIdError::TooLong {
                max: CORRELATION_ID_MAX_LEN,
            });
        }
        if !trimmed.bytes().all(|byte| byte.is_ascii_graphic()) {
            return Err(CorrelationIdError::InvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[tokio::test]
    async fn generate_produces_uuid() {
        let id = CorrelationId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[tokio::test]
    async fn current_reflects_scope() {
        let expected = CorrelationId::generate();
        let observed =
            CorrelationId::scope(expected.clone(), async { CorrelationId::current() }).await;
        assert_eq!(observed, Some(expected));
    }

    #[tokio::test]
    async fn current_is_none_out_of_scope() {
        assert!(CorrelationId::current().is_none());
    }

    #[rstest]
    #[case("abc-123", "abc-123")]
    #[case("  padded  ", "padded")]
    fn parse_accepts_printable_values(#[case] raw: &str, #[case] expected: &str) {
        let id: CorrelationId = raw.parse().expect("valid id");
        assert_eq!(id.as_str(), expected);
    }

    #[rstest]
    #[case("", CorrelationIdError::Blank)]
    #[case("   ", CorrelationIdError::Blank)]
    #[case("has space", CorrelationIdError::InvalidCharacters)]
    #[case("caf\u{e9}", CorrelationIdError::InvalidCharacters)]
    fn parse_rejects_unusable_values(#[case] raw: &str, #[case] expected: CorrelationIdError) {
        assert_eq!(raw.parse::<CorrelationId>(), Err(expected));
    }

    #[rstest]
    fn parse_rejects_overlong_values() {
        let raw = "a".repeat(CORRELATION_ID_MAX_LEN + 1);
        assert_eq!(
            raw.parse::<CorrelationId>(),
            Err(CorrelationIdError::TooLong {
                max: CORRELATION_ID_MAX_LEN
            })
        );
    }
}
