use http::Method;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Cache, CacheStorage, Request, RequestCache, RequestInit, Response, ServiceWorkerGlobalScope,
};

use crate::{Bucket, Platform, RequestKey};

#[derive(Debug, Clone, Error)]
pub enum PlatformError {
    #[error("js error: {message}")]
    Js { message: String },
    #[error("fetch returned something other than a Response: {value}")]
    NotAResponse { value: String },
}

impl From<JsValue> for PlatformError {
    fn from(value: JsValue) -> Self {
        Self::Js {
            message: format!("{value:?}"),
        }
    }
}

impl From<PlatformError> for JsValue {
    fn from(error: PlatformError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl RequestKey for Request {
    fn method(&self) -> Method {
        Request::method(self).parse().unwrap_or(Method::GET)
    }

    fn url(&self) -> String {
        Request::url(self)
    }
}

/// One opened browser cache
pub struct WebBucket {
    cache: Cache,
}

impl Bucket for WebBucket {
    type Request = Request;
    type Response = Response;
    type Error = PlatformError;

    async fn put(&self, request: &Request, response: Response) -> Result<(), PlatformError> {
        JsFuture::from(self.cache.put_with_request(request, &response)).await?;
        Ok(())
    }

    async fn match_request(&self, request: &Request) -> Result<Option<Response>, PlatformError> {
        let matched = JsFuture::from(self.cache.match_with_request(request)).await?;

        if matched.is_instance_of::<Response>() {
            Ok(Some(matched.into()))
        } else if matched.is_undefined() {
            Ok(None)
        } else {
            Err(PlatformError::Js {
                message: format!("cache match returned something unexpected: {matched:?}"),
            })
        }
    }
}

/// The browser's cache storage and fetch primitives, scoped to the worker
pub struct WebPlatform {
    sw: ServiceWorkerGlobalScope,
}

impl WebPlatform {
    pub fn new(sw: ServiceWorkerGlobalScope) -> Self {
        Self { sw }
    }

    fn caches(&self) -> Result<CacheStorage, PlatformError> {
        Ok(self.sw.caches()?)
    }
}

impl Platform for WebPlatform {
    type Request = Request;
    type Response = Response;
    type Error = PlatformError;
    type Bucket = WebBucket;

    async fn open_bucket(&self, name: &str) -> Result<WebBucket, PlatformError> {
        let cache: Cache = JsFuture::from(self.caches()?.open(name)).await?.into();
        Ok(WebBucket { cache })
    }

    fn request(&self, path: &str) -> Result<Request, PlatformError> {
        let mut init = RequestInit::new();
        init.method("GET");
        // Bypass the browser http cache so install sees the live file
        init.cache(RequestCache::NoStore);

        Ok(Request::new_with_str_and_init(path, &init)?)
    }

    async fn fetch(&self, request: &Request) -> Result<Response, PlatformError> {
        let response = JsFuture::from(self.sw.fetch_with_request(request)).await?;

        if response.is_instance_of::<Response>() {
            Ok(response.into())
        } else {
            Err(PlatformError::NotAResponse {
                value: format!("{response:?}"),
            })
        }
    }
}
