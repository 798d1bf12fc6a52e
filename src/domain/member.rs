use std::fmt;

/// 図書館の会員
///
/// 名前だけを持つ値オブジェクト。同一性は名前の等価性で判定するため、
/// 同名の会員は区別できない（登録時の検証や採番は行わない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
}

impl Member {
    /// 会員を作成
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// 会員名
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Library member: {}", self.name)
    }
}
