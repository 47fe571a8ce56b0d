use std::sync::{Arc, Mutex};

use reqwest::header::HeaderMap;

use super::{Auth, BoxFuture, HttpTransport, Unsplash};
use crate::transport::{Request, Response, TransportError};

type Responder = dyn Fn(&Request) -> Result<Response, TransportError> + Send + Sync;

/// Records every request it receives and answers from a closure.
#[derive(Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
    responder: Arc<Responder>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    requests: Vec<Request>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        Self::with_responder(move |_| Ok(Response::new(status, HeaderMap::new(), body.clone())))
    }

    pub(crate) fn with_responder(
        responder: impl Fn(&Request) -> Result<Response, TransportError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState::default())),
            responder: Arc::new(responder),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(crate) fn last_request(&self) -> Option<Request> {
        self.state.lock().unwrap().requests.last().cloned()
    }
}

impl HttpTransport for FakeTransport {
    fn execute<'a>(&'a self, request: Request) -> BoxFuture<'a, Result<Response, TransportError>> {
        Box::pin(async move {
            let reply = (self.responder)(&request);
            self.state.lock().unwrap().requests.push(request);
            reply
        })
    }
}

pub(crate) fn make_client(transport: &FakeTransport) -> Unsplash {
    Unsplash::builder()
        .auth(Auth::client_id("test_key").unwrap())
        .endpoint("https://example.invalid/")
        .transport(Arc::new(transport.clone()))
        .build()
        .unwrap()
}
