use gloo_net::http::Request;

pub mod education;
pub mod experience;
pub mod personal;
pub mod portfolio;
pub mod project;
pub mod skill;

pub use portfolio::{Portfolio, Section, SectionFault};

// the data document is served next to the app bundle, so this is relative
pub const DATA_URL: &str = "data.json";

// fetch and parse the portfolio data document
//
// this is the only network call the site makes.  any non-2xx status, network
// error or a body that is not a json object is an error for the whole page;
// problems inside individual top-level fields are recorded per section by
// Portfolio::from_json instead
pub async fn fetch_portfolio(url: &str) -> anyhow::Result<Portfolio> {
    let resp = Request::get(url).send().await?;

    if !resp.ok() {
        return Err(anyhow::Error::msg(format!(
            "HTTP error! status: {}",
            resp.status()
        )));
    }

    let body = resp.text().await?;

    Portfolio::from_json(&body)
}
