#[derive(Debug, Deserialize, PartialEq, Serialize)]
pub struct SearchParameters {
    #[serde(default)]
    pub search_term: Option<String>,
}
