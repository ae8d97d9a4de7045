use serde::Deserialize;

// Every field is optional so a partially filled report still parses; the
// conversion into the public model decides what is actually required.

#[derive(Deserialize)]
pub(crate) struct ReportWire {
    pub(crate) ticker: Option<String>,
    pub(crate) as_of: Option<String>,
    pub(crate) pulse: Option<String>,
    pub(crate) llm_explanation: Option<String>,
    pub(crate) momentum: Option<MomentumWire>,
    pub(crate) news: Option<Vec<NewsWire>>,
}

#[derive(Deserialize)]
pub(crate) struct MomentumWire {
    pub(crate) score: Option<f64>,
    pub(crate) returns: Option<Vec<f64>>,
}

#[derive(Deserialize)]
pub(crate) struct NewsWire {
    pub(crate) title: Option<String>,
    pub(crate) url: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) published: Option<String>,
}
