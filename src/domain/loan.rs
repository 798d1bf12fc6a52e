use std::fmt;

use super::{Book, Member};

/// 貸出記録
///
/// 「この書籍がこの会員に貸出中である」という事実を表す値オブジェクト。
///
/// ビジネスルール:
/// - 同一性は (書籍, 会員) の組の等価性で判定する
/// - 書籍・会員の値を所有する（作成時点のスナップショット）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loan {
    book: Book,
    member: Member,
}

impl Loan {
    /// 貸出記録を作成
    pub fn new(book: Book, member: Member) -> Self {
        Self { book, member }
    }

    /// 貸出中の書籍
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// 借りている会員
    pub fn member(&self) -> &Member {
        &self.member
    }

    /// 記録を分解して書籍と会員の所有権を返す
    pub fn into_parts(self) -> (Book, Member) {
        (self.book, self.member)
    }
}

impl fmt::Display for Loan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loan: {} to {}", self.book, self.member)
    }
}
