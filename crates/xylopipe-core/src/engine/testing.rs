//! In-memory [`UniProtSource`] for tests.

use super::error::TransportError;
use super::source::{HttpReply, UniProtSource};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub query: String,
    pub fields: Vec<String>,
    pub size: usize,
}

/// Search replies are served from a queue; per-accession replies from fixed maps.
/// Anything not scripted is a transport failure.
#[derive(Default)]
pub struct FakeSource {
    search_replies: Mutex<VecDeque<Result<HttpReply, TransportError>>>,
    entries: HashMap<String, HttpReply>,
    fastas: HashMap<String, HttpReply>,
    pub searches: Mutex<Vec<SearchCall>>,
    pub entry_calls: AtomicUsize,
    pub fasta_calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_reply(self, reply: HttpReply) -> Self {
        self.push_search(Ok(reply))
    }

    pub fn search_failure(self, message: &str) -> Self {
        self.push_search(Err(TransportError(message.to_string())))
    }

    fn push_search(self, reply: Result<HttpReply, TransportError>) -> Self {
        self.search_replies
            .lock()
            .unwrap()
            .push_back(reply);
        self
    }

    pub fn entry(mut self, accession: &str, reply: HttpReply) -> Self {
        self.entries.insert(accession.to_string(), reply);
        self
    }

    pub fn fasta(mut self, accession: &str, reply: HttpReply) -> Self {
        self.fastas.insert(accession.to_string(), reply);
        self
    }

    pub fn search_count(&self) -> usize {
        self.searches.lock().unwrap().len()
    }

    pub fn queries(&self) -> Vec<String> {
        self.searches
            .lock()
            .unwrap()
            .iter()
            .map(|c| c.query.clone())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.entry_calls.load(Ordering::SeqCst)
    }

    pub fn fasta_count(&self) -> usize {
        self.fasta_calls.load(Ordering::SeqCst)
    }
}

impl UniProtSource for FakeSource {
    fn search(
        &self,
        query: &str,
        fields: &[String],
        size: usize,
    ) -> Result<HttpReply, TransportError> {
        self.searches.lock().unwrap().push(SearchCall {
            query: query.to_string(),
            fields: fields.to_vec(),
            size,
        });
        self.search_replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("no scripted search reply".into())))
    }

    fn entry_json(&self, accession: &str) -> Result<HttpReply, TransportError> {
        self.entry_calls.fetch_add(1, Ordering::SeqCst);
        self.entries
            .get(accession)
            .cloned()
            .ok_or_else(|| TransportError(format!("no entry for {accession}")))
    }

    fn fasta(&self, accession: &str) -> Result<HttpReply, TransportError> {
        self.fasta_calls.fetch_add(1, Ordering::SeqCst);
        self.fastas
            .get(accession)
            .cloned()
            .ok_or_else(|| TransportError(format!("no fasta for {accession}")))
    }
}
