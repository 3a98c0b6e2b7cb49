use crate::types::LogLevel;
use url::Url;
use url::form_urlencoded::Serializer;

/// Filters sent to `GET /logs`. Unset fields are left out of the query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogQuery {
    pub limit: Option<u32>,
    pub level: Option<LogLevel>,
    pub search: Option<String>,
}

impl LogQuery {
    /// Parameters in wire order: limit, level, search.
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::with_capacity(3);
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(level) = self.level {
            pairs.push(("level", level.as_str().to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        encode(self.pairs())
    }

    /// Same parameters plus `download=1`, asking for an attachment instead of inline text.
    pub fn to_download_query_string(&self) -> String {
        let mut pairs = self.pairs();
        pairs.push(("download", "1".to_string()));
        encode(pairs)
    }

    pub fn fetch_url(&self, endpoint: &Url) -> Url {
        with_query(endpoint, &self.to_query_string())
    }

    pub fn download_url(&self, endpoint: &Url) -> Url {
        with_query(endpoint, &self.to_download_query_string())
    }
}

fn encode(pairs: Vec<(&'static str, String)>) -> String {
    Serializer::new(String::new()).extend_pairs(pairs).finish()
}

fn with_query(endpoint: &Url, query: &str) -> Url {
    let mut url = endpoint.clone();
    url.set_query((!query.is_empty()).then_some(query));
    url
}
