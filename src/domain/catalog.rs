use std::fmt;

use super::{Book, Loan, Member};

/// 蔵書目録
///
/// 貸出可能な書籍・登録済み会員・貸出中の記録を所有する集約。
/// すべての状態遷移（登録・貸出・返却）はこの型のメソッドを通じて行う。
///
/// 不変条件:
/// - 各書籍は「貸出可能」か「ちょうど1件の貸出記録の対象」のどちらか一方
/// - 貸出記録の会員は、その記録の作成時点で登録済みだった会員
/// - 各コレクションは追加された順序を保持する
///
/// 等価な書籍の重複登録は禁止しない。その場合は独立した複本として扱われ、
/// 貸出は先頭の一致する1冊だけを取り除く。
#[derive(Debug)]
pub struct Catalog {
    available: Vec<Book>,
    members: Vec<Member>,
    loans: Vec<Loan>,
}

impl Catalog {
    /// 空の目録を作成
    pub fn new() -> Self {
        Self {
            available: Vec::new(),
            members: Vec::new(),
            loans: Vec::new(),
        }
    }

    /// 書籍を貸出可能コレクションの末尾に登録する
    ///
    /// 常に成功する。重複チェックや内容の検証は行わない。
    pub fn register_book(&mut self, book: Book) {
        self.available.push(book);
    }

    /// 会員を末尾に登録する
    ///
    /// 常に成功する。重複チェックや内容の検証は行わない。
    pub fn register_member(&mut self, member: Member) {
        self.members.push(member);
    }

    /// 書籍を会員に貸し出す
    ///
    /// ビジネスルール:
    /// - 書籍が貸出可能コレクションに存在し、かつ会員が登録済みであること
    /// - 成功時: 一致する最初の1冊を貸出可能から取り除き、貸出記録を追加する
    /// - 失敗時: 状態を一切変更しない
    pub fn lend(&mut self, book: &Book, member: &Member) -> bool {
        let Some(pos) = self.available.iter().position(|b| b == book) else {
            return false;
        };
        if !self.members.contains(member) {
            return false;
        }

        let book = self.available.remove(pos);
        self.loans.push(Loan::new(book, member.clone()));
        true
    }

    /// 書籍の返却を受け付ける
    ///
    /// ビジネスルール:
    /// - ちょうどこの (書籍, 会員) の組の貸出記録が存在すること
    ///   （別の会員が借りている書籍は、その会員からしか返却できない）
    /// - 成功時: 貸出記録を取り除き、書籍を貸出可能コレクションの末尾に戻す
    /// - 失敗時: 状態を一切変更しない
    pub fn return_book(&mut self, book: &Book, member: &Member) -> bool {
        let Some(pos) = self
            .loans
            .iter()
            .position(|loan| loan.book() == book && loan.member() == member)
        else {
            return false;
        };

        let (book, _) = self.loans.remove(pos).into_parts();
        self.available.push(book);
        true
    }

    /// 貸出可能な書籍（登録順）
    pub fn available_books(&self) -> &[Book] {
        &self.available
    }

    /// 登録済みの会員（登録順）
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// 貸出中の記録（作成順）
    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Catalog {
    /// 3つのコレクションの件数を1行に要約する
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Library: available books - {}, members - {}, active loans - {}",
            self.available.len(),
            self.members.len(),
            self.loans.len()
        )
    }
}
