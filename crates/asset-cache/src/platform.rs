use std::fmt::Debug;

use http::Method;

/// Read-only view of a request's identity as used for bucket lookups
pub trait RequestKey {
    fn method(&self) -> Method;
    fn url(&self) -> String;
}

/// One named cache bucket: a persistent request -> response store
pub trait Bucket {
    type Request: RequestKey;
    type Response;
    type Error: Debug;

    async fn put(
        &self,
        request: &Self::Request,
        response: Self::Response,
    ) -> Result<(), Self::Error>;

    /// Matching follows whatever rules the underlying store applies; the
    /// caller does no normalization of its own
    async fn match_request(
        &self,
        request: &Self::Request,
    ) -> Result<Option<Self::Response>, Self::Error>;
}

/// The storage and network primitives supplied by the hosting environment
///
/// Obtained once by the host shim and held by the worker component for
/// both operations; there is no global handle.
pub trait Platform {
    type Request: RequestKey;
    type Response;
    type Error: Debug;
    type Bucket: Bucket<Request = Self::Request, Response = Self::Response, Error = Self::Error>;

    /// Opens the named bucket, creating it if absent
    async fn open_bucket(&self, name: &str) -> Result<Self::Bucket, Self::Error>;

    /// Builds the request used to install one manifest path
    fn request(&self, path: &str) -> Result<Self::Request, Self::Error>;

    /// The normal network path for a request
    async fn fetch(&self, request: &Self::Request) -> Result<Self::Response, Self::Error>;
}
