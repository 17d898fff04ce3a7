//! Header names of the provider wire protocol.

/// Unique identifier of a request, set by the caller or by the service.
pub const OPC_REQUEST_ID: &str = "opc-request-id";

/// Pagination cursor of a listing response.
pub const OPC_NEXT_PAGE: &str = "opc-next-page";

/// Version of a resource, compared with `if-match`.
pub const ETAG: &str = "etag";

/// Optimistic concurrency control: the operation applies only if the etag matches.
pub const IF_MATCH: &str = "if-match";

/// Idempotency token for creations.
pub const OPC_RETRY_TOKEN: &str = "opc-retry-token";
