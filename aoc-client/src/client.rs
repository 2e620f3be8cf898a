//! Blocking HTTP client for the puzzle site.

use crate::error::ClientError;
use crate::page::PuzzlePage;
use reqwest::header::HeaderValue;
use zeroize::Zeroize;

/// Client for fetching puzzle pages and personal inputs.
///
/// Requests authenticate with the caller's session cookie and never follow
/// redirects: the site redirects authenticated pages when the cookie is
/// stale, and that must surface as an error rather than a quietly fetched
/// login page.
///
/// # Example
///
/// ```no_run
/// use aoc_client::SiteClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = SiteClient::new()?;
/// let session = "your_session_cookie";
///
/// let page = client.puzzle_page(2023, 15, session)?;
/// println!("{}: {} answer(s) revealed", page.title, page.answers.len());
///
/// let input = client.puzzle_input(2023, 15, session)?;
/// println!("input: {} bytes", input.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct SiteClient {
    client: reqwest::blocking::Client,
    base_url: reqwest::Url,
}

impl SiteClient {
    /// Client against the real site with rustls-tls and redirects disabled.
    pub fn new() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Builder for overriding the base URL or the HTTP configuration,
    /// mainly for tests against a local mock server.
    pub fn builder() -> SiteClientBuilder {
        SiteClientBuilder::new()
    }

    /// Cookie header for one request, marked sensitive; the temporary
    /// cookie string is zeroized after use.
    fn create_cookie_header(session: &str) -> Result<HeaderValue, ClientError> {
        let mut cookie_string = format!("session={session}");
        let header_value = HeaderValue::from_bytes(cookie_string.as_bytes())
            .map_err(|_| ClientError::ClientInit("invalid session cookie format".to_string()))?;

        let mut sensitive_header = header_value;
        sensitive_header.set_sensitive(true);
        cookie_string.zeroize();

        Ok(sensitive_header)
    }

    /// URL of the puzzle page for a day.
    pub fn puzzle_url(&self, year: u16, day: u8) -> Result<reqwest::Url, ClientError> {
        self.day_url(year, day, None)
    }

    /// URL of the personal puzzle input for a day.
    pub fn input_url(&self, year: u16, day: u8) -> Result<reqwest::Url, ClientError> {
        self.day_url(year, day, Some("input"))
    }

    fn day_url(&self, year: u16, day: u8, tail: Option<&str>) -> Result<reqwest::Url, ClientError> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::ClientInit("cannot modify base URL path".to_string()))?;
            segments
                .clear()
                .extend(&[&year.to_string(), "day", &day.to_string()]);
            if let Some(tail) = tail {
                segments.push(tail);
            }
        }
        Ok(url)
    }

    /// Fetch and parse the puzzle page for a day.
    ///
    /// The page carries the statement and, for solved parts, the revealed
    /// answers; see [`PuzzlePage`].
    pub fn puzzle_page(
        &self,
        year: u16,
        day: u8,
        session: &str,
    ) -> Result<PuzzlePage, ClientError> {
        let html = self.get_text(self.puzzle_url(year, day)?, session)?;
        PuzzlePage::parse(&html)
    }

    /// Fetch the personal puzzle input for a day, verbatim.
    pub fn puzzle_input(&self, year: u16, day: u8, session: &str) -> Result<String, ClientError> {
        self.get_text(self.input_url(year, day)?, session)
    }

    fn get_text(&self, url: reqwest::Url, session: &str) -> Result<String, ClientError> {
        let cookie_header = Self::create_cookie_header(session)?;
        let response = self.client.get(url).header("Cookie", cookie_header).send()?;

        if !response.status().is_success() {
            return Err(ClientError::InvalidStatus {
                status: response.status(),
            });
        }

        response.text().map_err(|_| ClientError::Encoding)
    }
}

/// Builder for [`SiteClient`].
///
/// The redirect policy is always forced to `Policy::none()` regardless of
/// the provided configuration.
#[derive(Debug, Default)]
pub struct SiteClientBuilder {
    base_url: Option<reqwest::Url>,
    client_builder: Option<reqwest::blocking::ClientBuilder>,
}

impl SiteClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL; parsed and validated immediately.
    pub fn base_url(mut self, url: impl reqwest::IntoUrl) -> Result<Self, ClientError> {
        self.base_url = Some(url.into_url()?);
        Ok(self)
    }

    /// Supply a customized reqwest builder (timeouts, proxies and so on).
    pub fn client_builder(mut self, builder: reqwest::blocking::ClientBuilder) -> Self {
        self.client_builder = Some(builder);
        self
    }

    pub fn build(self) -> Result<SiteClient, ClientError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => reqwest::Url::parse("https://adventofcode.com")
                .map_err(|e| ClientError::ClientInit(e.to_string()))?,
        };

        let builder = self
            .client_builder
            .unwrap_or_else(|| reqwest::blocking::Client::builder().use_rustls_tls());

        let client = builder
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::ClientInit(e.to_string()))?;

        Ok(SiteClient { client, base_url })
    }
}
