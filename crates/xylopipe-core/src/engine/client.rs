use super::config::RemoteConfig;
use super::error::{EngineError, TransportError};
use super::source::{HttpReply, UniProtSource};
use reqwest::blocking::Client;
use tracing::trace;

/// Blocking HTTP implementation of [`UniProtSource`] against the UniProtKB REST API.
#[derive(Debug, Clone)]
pub struct UniProtClient {
    http: Client,
    search_url: String,
    entry_url: String,
}

impl UniProtClient {
    pub fn new(remote: &RemoteConfig) -> Result<Self, EngineError> {
        let http = Client::builder()
            .timeout(remote.timeout)
            .user_agent(remote.user_agent.as_str())
            .build()?;
        Ok(Self {
            http,
            search_url: remote.search_url.clone(),
            entry_url: remote.entry_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn search_request_url(&self, query: &str, fields: &[String], size: usize) -> String {
        format!(
            "{}?query={}&format=tsv&fields={}&size={}",
            self.search_url,
            encode_query(query),
            fields.join(","),
            size
        )
    }

    fn get(&self, url: &str) -> Result<HttpReply, TransportError> {
        trace!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .map_err(|e| TransportError(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| TransportError(e.to_string()))?;
        Ok(HttpReply { status, body })
    }
}

impl UniProtSource for UniProtClient {
    fn search(
        &self,
        query: &str,
        fields: &[String],
        size: usize,
    ) -> Result<HttpReply, TransportError> {
        self.get(&self.search_request_url(query, fields, size))
    }

    fn entry_json(&self, accession: &str) -> Result<HttpReply, TransportError> {
        self.get(&format!("{}/{}.json", self.entry_url, accession))
    }

    fn fasta(&self, accession: &str) -> Result<HttpReply, TransportError> {
        self.get(&format!("{}/{}.fasta", self.entry_url, accession))
    }
}

/// Percent-encodes a search query, leaving `(`, `)` and `:` literal so field
/// qualifiers such as `reviewed:true` read naturally in logs.
pub fn encode_query(query: &str) -> String {
    urlencoding::encode(query)
        .replace("%28", "(")
        .replace("%29", ")")
        .replace("%3A", ":")
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use std::time::Duration;

    fn client_for(server: &mockito::ServerGuard) -> UniProtClient {
        UniProtClient::new(&RemoteConfig {
            search_url: format!("{}/uniprotkb/search", server.url()),
            entry_url: format!("{}/uniprotkb/", server.url()),
            timeout: Duration::from_secs(5),
            user_agent: "xylopipe-test".into(),
        })
        .unwrap()
    }

    #[test]
    fn encode_query_keeps_parentheses_and_colons() {
        assert_eq!(
            encode_query(r#"(GH10 OR GH11) AND (xylanase OR "beta-xylosidase") AND reviewed:true"#),
            "(GH10%20OR%20GH11)%20AND%20(xylanase%20OR%20%22beta-xylosidase%22)%20AND%20reviewed:true"
        );
    }

    #[test]
    fn search_sends_tsv_request_with_joined_fields() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/uniprotkb/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("query".into(), "xylanase AND reviewed:true".into()),
                Matcher::UrlEncoded("format".into(), "tsv".into()),
                Matcher::UrlEncoded("fields".into(), "accession,length".into()),
                Matcher::UrlEncoded("size".into(), "30".into()),
            ]))
            .with_status(200)
            .with_body("Entry\tLength\nP1\t200\n")
            .create();

        let client = client_for(&server);
        let fields = vec!["accession".to_string(), "length".to_string()];
        let reply = client.search("xylanase AND reviewed:true", &fields, 30).unwrap();

        mock.assert();
        assert!(reply.is_success());
        assert_eq!(reply.body, "Entry\tLength\nP1\t200\n");
    }

    #[test]
    fn non_success_status_is_a_reply_not_an_error() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("GET", Matcher::Regex(r"^/uniprotkb/search.*".into()))
            .with_status(400)
            .with_body("bad query")
            .create();

        let reply = client_for(&server).search("(", &[], 1).unwrap();
        assert_eq!(reply.status, 400);
        assert!(!reply.is_success());
    }

    #[test]
    fn per_accession_endpoints() {
        let mut server = mockito::Server::new();
        let json = server
            .mock("GET", "/uniprotkb/P33557.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"primaryAccession":"P33557"}"#)
            .create();
        let fasta = server
            .mock("GET", "/uniprotkb/P33557.fasta")
            .with_status(200)
            .with_body(">sp|P33557|XYNA_ASPNG\nMKVT\n")
            .create();

        let client = client_for(&server);
        assert!(client.entry_json("P33557").unwrap().body.contains("P33557"));
        assert!(client.fasta("P33557").unwrap().body.ends_with("MKVT\n"));
        json.assert();
        fasta.assert();
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let client = UniProtClient::new(&RemoteConfig {
            search_url: "http://127.0.0.1:9/search".into(),
            entry_url: "http://127.0.0.1:9".into(),
            timeout: Duration::from_secs(2),
            user_agent: "xylopipe-test".into(),
        })
        .unwrap();
        assert!(client.fasta("P1").is_err());
    }
}
