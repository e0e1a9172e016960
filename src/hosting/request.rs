use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayRequest {
    #[serde(default)]
    pub player_choice: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RoundsQuery {
    pub limit: Option<usize>,
}
