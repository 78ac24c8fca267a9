use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

/// api-ninjas `/v1/quotes` item.
#[derive(Debug, Clone, Deserialize)]
pub struct NinjaQuote {
    pub quote: String,
    pub author: String,

    #[serde(default)]
    pub category: Option<String>,
}

/// quotes.rest `/qod` body.
#[derive(Debug, Clone, Deserialize)]
pub struct QodResponse {
    pub contents: QodContents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QodContents {
    pub quotes: Vec<QodQuote>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QodQuote {
    pub quote: String,

    #[serde(default)]
    pub author: Option<String>,
}
