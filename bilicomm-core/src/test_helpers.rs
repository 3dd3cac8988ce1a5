use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use crate::errors::BoxedError;
use crate::transport::{Request, Requester};

/// A requester replaying canned responses in order and recording every request.
#[derive(Debug, Default)]
pub struct ScriptedRequester {
    responses: Mutex<VecDeque<Result<Vec<u8>, io::ErrorKind>>>,
    requests: Mutex<Vec<Request>>,
}

impl ScriptedRequester {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, body: impl Into<Vec<u8>>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(body.into()));
        self
    }

    pub fn fail(self, kind: io::ErrorKind) -> Self {
        self.responses.lock().unwrap().push_back(Err(kind));
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Request {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request issued")
    }
}

impl Requester for ScriptedRequester {
    fn request(&self, request: Request) -> Result<Vec<u8>, BoxedError> {
        self.requests.lock().unwrap().push(request);
        match self.responses.lock().unwrap().pop_front() {
            Some(Ok(body)) => Ok(body),
            Some(Err(kind)) => Err(Box::new(io::Error::new(kind, "scripted failure"))),
            None => Err(Box::new(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "script exhausted",
            ))),
        }
    }
}
