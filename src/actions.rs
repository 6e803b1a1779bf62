use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Action {
    pub label: String,
    pub desc: String,
    pub action: String, // Verb string, e.g. "code:open:/path"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<String>,
}
