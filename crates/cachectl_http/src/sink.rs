use http::{HeaderMap, HeaderName, HeaderValue, Response};

/// Outgoing header table of the response being built.
pub trait HeaderSink {
    /// Set `name`, replacing every previous value.
    fn set(&mut self, name: HeaderName, value: HeaderValue);

    /// Remove every value of `name`.
    fn remove(&mut self, name: &HeaderName);
}

impl HeaderSink for HeaderMap {
    fn set(&mut self, name: HeaderName, value: HeaderValue) {
        self.insert(name, value);
    }

    fn remove(&mut self, name: &HeaderName) {
        HeaderMap::remove(self, name);
    }
}

impl<B> HeaderSink for Response<B> {
    fn set(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn remove(&mut self, name: &HeaderName) {
        self.headers_mut().remove(name);
    }
}
