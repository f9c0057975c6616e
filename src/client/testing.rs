use std::error::Error as StdError;
use std::io;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub(crate) enum FakeResponse {
    Http { status: u16, body: String },
    TransportError(String),
}

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    calls: usize,
    last_url: Option<String>,
    last_params: Vec<(String, String)>,
    response: FakeResponse,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_response(FakeResponse::Http {
            status,
            body: body.into(),
        })
    }

    pub(crate) fn with_response(response: FakeResponse) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                calls: 0,
                last_url: None,
                last_params: Vec::new(),
                response,
            })),
        }
    }

    pub(crate) fn last_request(&self) -> (Option<String>, Vec<(String, String)>) {
        let state = self.state.lock().unwrap();
        (state.last_url.clone(), state.last_params.clone())
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

impl HttpTransport for FakeTransport {
    fn post_form<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.calls += 1;
                state.last_url = Some(url.to_owned());
                state.last_params = params;
                state.response.clone()
            };
            match response {
                FakeResponse::Http { status, body } => Ok(HttpResponse { status, body }),
                FakeResponse::TransportError(message) => {
                    Err(Box::new(io::Error::new(io::ErrorKind::ConnectionReset, message))
                        as Box<dyn StdError + Send + Sync>)
                }
            }
        })
    }
}

pub(crate) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}
