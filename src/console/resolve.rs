//! 入力文字列から目録内の値を検索するヘルパー
//!
//! 照合は大文字小文字を区別しない完全一致で、登録順の最初の一致を返す。
//! 見つからない場合は None を返し、報告は呼び出し側に任せる。

use crate::domain::{Book, Catalog, Member};

/// 貸出可能な書籍をタイトルで検索する
pub fn find_available_book<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a Book> {
    catalog
        .available_books()
        .iter()
        .find(|book| eq_ignore_case(book.title(), title))
}

/// 貸出中の書籍をタイトルで検索する
///
/// 返却対象の書籍は貸出可能コレクションにはもう存在しないため、
/// 貸出記録の側を探す。
pub fn find_loaned_book<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a Book> {
    catalog
        .loans()
        .iter()
        .map(|loan| loan.book())
        .find(|book| eq_ignore_case(book.title(), title))
}

/// 登録済みの会員を名前で検索する
pub fn find_member<'a>(catalog: &'a Catalog, name: &str) -> Option<&'a Member> {
    catalog
        .members()
        .iter()
        .find(|member| eq_ignore_case(member.name(), name))
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.register_book(Book::new("Java Programming", "John Doe"));
        catalog.register_book(Book::physical("Design Patterns", "Jane Smith", 300));
        catalog.register_member(Member::new("Alice"));
        catalog
    }

    #[test]
    fn test_find_available_book_ignores_case() {
        let catalog = sample_catalog();

        let book = find_available_book(&catalog, "JAVA programming");

        assert_eq!(book, Some(&Book::new("Java Programming", "John Doe")));
    }

    #[test]
    fn test_find_member_ignores_case() {
        let catalog = sample_catalog();

        assert_eq!(find_member(&catalog, "alice"), Some(&Member::new("Alice")));
        assert_eq!(find_member(&catalog, "Carol"), None);
    }

    #[test]
    fn test_find_returns_the_first_match_in_order() {
        let mut catalog = Catalog::new();
        catalog.register_member(Member::new("alice"));
        catalog.register_member(Member::new("ALICE"));

        assert_eq!(find_member(&catalog, "Alice"), Some(&Member::new("alice")));
    }

    #[test]
    fn test_find_loaned_book_searches_active_loans() {
        let mut catalog = sample_catalog();
        let java = Book::new("Java Programming", "John Doe");
        catalog.lend(&java, &Member::new("Alice"));

        assert_eq!(find_available_book(&catalog, "Java Programming"), None);
        assert_eq!(find_loaned_book(&catalog, "java programming"), Some(&java));
        assert_eq!(find_loaned_book(&catalog, "Design Patterns"), None);
    }
}
