use serde::Deserialize;

/// One search hit from `GET /api/query`.
///
/// `summary` is omitted by some server revisions; `text` carries the full
/// document body when the server ships it, so a summary can be derived
/// client-side.
#[derive(Deserialize, Debug, Clone)]
pub struct ResultRecord {
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}
