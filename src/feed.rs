use quick_xml::events::Event;
use std::time::Duration;
use thiserror::Error;

use crate::config::FeedConfig;

/// One item pulled out of the feed, before scoring and dedup.
#[derive(Debug, Clone)]
pub struct FeedItem {
    pub title: String,
    pub company: String,
    pub link: String,
    #[allow(dead_code)]
    pub pub_date: String,
    #[allow(dead_code)]
    pub source: String,
}

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("feed returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("malformed feed XML: {0}")]
    Xml(#[from] quick_xml::Error),
}

pub struct FeedClient {
    client: reqwest::blocking::Client,
    endpoint: String,
    locale: String,
    sort: String,
    limit: usize,
}

impl FeedClient {
    pub fn new(config: &FeedConfig) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            locale: config.locale.clone(),
            sort: config.sort.clone(),
            limit: config.limit,
        })
    }

    /// One GET against the feed for a single query. Any failure surfaces
    /// as a FetchError; the caller decides whether to treat that as an
    /// empty result.
    pub fn search(&self, query: &str) -> Result<Vec<FeedItem>, FetchError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("q", query),
                ("l", self.locale.as_str()),
                ("sort", self.sort.as_str()),
                ("limit", self.limit.to_string().as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text()?;
        parse_feed(&body)
    }
}

/// Parse an RSS item list, pulling title/link/pubDate out of each <item>.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedItem>, FetchError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut items = Vec::new();
    let mut in_item = false;
    let mut field: Option<Field> = None;
    let mut title = String::new();
    let mut link = String::new();
    let mut pub_date = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    title.clear();
                    link.clear();
                    pub_date.clear();
                }
                // The channel has its own <title>; only capture inside items
                b"title" if in_item => field = Some(Field::Title),
                b"link" if in_item => field = Some(Field::Link),
                b"pubDate" if in_item => field = Some(Field::PubDate),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if let Some(f) = field {
                    let text = e.decode().map_err(quick_xml::Error::from)?;
                    push_field(f, &text, &mut title, &mut link, &mut pub_date);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(f) = field {
                    let text = String::from_utf8_lossy(&e.into_inner()).into_owned();
                    push_field(f, &text, &mut title, &mut link, &mut pub_date);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = false;
                    items.push(build_item(&title, &link, &pub_date));
                }
                b"title" | b"link" | b"pubDate" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(items)
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Title,
    Link,
    PubDate,
}

fn push_field(field: Field, text: &str, title: &mut String, link: &mut String, pub_date: &mut String) {
    match field {
        Field::Title => title.push_str(text),
        Field::Link => link.push_str(text),
        Field::PubDate => pub_date.push_str(text),
    }
}

fn build_item(raw_title: &str, link: &str, pub_date: &str) -> FeedItem {
    let (title, company) = split_title_company(raw_title.trim());
    FeedItem {
        title,
        company,
        link: link.trim().to_string(),
        pub_date: pub_date.trim().to_string(),
        source: "indeed".to_string(),
    }
}

/// Feed titles are usually "Job Title - Company"; split on the last
/// " - " so hyphenated job titles stay intact. No separator means no
/// company in the title.
fn split_title_company(raw: &str) -> (String, String) {
    match raw.rsplit_once(" - ") {
        Some((title, company)) => (title.trim().to_string(), company.trim().to_string()),
        None => (raw.to_string(), "Unknown".to_string()),
    }
}
