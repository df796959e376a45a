use gloo::net::http::Request;
use serde::de::DeserializeOwned;
use trivia_core::{CategoryId, CategorySummary, ClueRecord, Result, TriviaError, TriviaService};

pub(crate) const DEFAULT_API: &str = "https://jservice.io/api";

/// [`TriviaService`] over the jService-style REST API.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct HttpTriviaService {
    base_url: String,
}

impl HttpTriviaService {
    pub(crate) fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: [(&str, String); 1],
    ) -> Result<T> {
        let url = self.endpoint(path);
        log::debug!("GET {} {:?}", url, query);

        let response = Request::get(&url)
            .query(query)
            .send()
            .await
            .map_err(to_trivia_error)?;
        if !response.ok() {
            return Err(TriviaError::Status(response.status()));
        }
        response.json::<T>().await.map_err(to_trivia_error)
    }
}

fn to_trivia_error(err: gloo::net::Error) -> TriviaError {
    match err {
        gloo::net::Error::SerdeError(err) => TriviaError::Decode(err.to_string()),
        err => TriviaError::Unreachable(err.to_string()),
    }
}

impl TriviaService for HttpTriviaService {
    async fn categories(&self, count: u16) -> Result<Vec<CategorySummary>> {
        self.get_json("categories", [("count", count.to_string())]).await
    }

    async fn clues(&self, category: CategoryId) -> Result<Vec<ClueRecord>> {
        self.get_json("clues", [("category", category.to_string())]).await
    }
}
