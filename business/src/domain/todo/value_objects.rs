use chrono::Utc;
use rand::Rng;

use super::errors::TodoError;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const RANDOM_SUFFIX_LEN: usize = 11;

/// Opaque todo identifier: the creation time in base-36 milliseconds
/// followed by a random base-36 suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TodoId(String);

impl TodoId {
    pub fn generate() -> Self {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let mut id = to_base36(millis);

        let mut rng = rand::rng();
        id.extend((0..RANDOM_SUFFIX_LEN).map(|_| BASE36[rng.random_range(0..BASE36.len())] as char));

        Self(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TodoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TodoId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TodoId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36[(n % 36) as usize]);
        n /= 36;
    }
    digits.iter().rev().map(|&b| b as char).collect()
}

/// Trims a title and rejects it when nothing is left.
pub fn normalize_title(title: &str) -> Result<String, TodoError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::TitleEmpty);
    }
    Ok(trimmed.to_string())
}

/// Partial update of a todo. Only the fields that are present change.
///
/// A patch can only be built through [`TodoPatch::new`], so a present title
/// is always trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoPatch {
    title: Option<String>,
    completed: Option<bool>,
}

impl TodoPatch {
    pub fn new(title: Option<String>, completed: Option<bool>) -> Result<Self, TodoError> {
        let title = title.as_deref().map(normalize_title).transpose()?;
        Ok(Self { title, completed })
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn completed(&self) -> Option<bool> {
        self.completed
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.completed.is_none()
    }
}
