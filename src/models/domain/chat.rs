use serde::{Deserialize, Serialize};

/// One turn of the coach conversation as the client stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Coach,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

/// The normalized result of one chat request. `text` is always non-empty;
/// `offline` is true exactly when the fallback path produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ChatReply {
    pub text: String,
    pub offline: bool,
}
