use serde::{Deserialize, Serialize};

/// An employee row from the people sheet. `line_user_id` is set once the
/// person has bound their chat identity; until then they appear in the
/// "free users" list offered by the bind flow. The chat identity fields
/// never leave the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "UID")]
    pub uid: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tel: Option<String>,
    #[serde(default, skip_serializing)]
    pub line_user_id: Option<String>,
    #[serde(default, skip_serializing)]
    pub line_name: Option<String>,
}

impl Employee {
    /// True when nobody has bound this record yet.
    pub fn is_free(&self) -> bool {
        self.line_user_id.as_deref().is_none_or(|s| s.is_empty())
    }
}
