use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Longest accepted project name, counted in characters after trimming.
pub const PROJECT_NAME_MAX_LEN: usize = 200;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Option<i32>,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}
