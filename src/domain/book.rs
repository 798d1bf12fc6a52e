use std::fmt;

/// 書籍の種別ごとの追加情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookKind {
    /// 追加情報を持たない書籍
    Plain,
    /// 物理本（ページ数を持つ）
    Physical { pages: u32 },
    /// 電子書籍（フォーマット名を持つ。例: PDF, EPUB）
    Digital { format: String },
}

/// 書籍
///
/// タイトル・著者・種別を持つ不変の値オブジェクト。
///
/// ビジネスルール:
/// - 同一性は値の等価性で判定する（タイトル + 著者 + 種別が全て一致）
/// - 同じ値で構築した2つの書籍は、検索・貸出・返却において交換可能
/// - 文字列フィールドの内容は検証しない（空文字列も許容する）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    title: String,
    author: String,
    kind: BookKind,
}

impl Book {
    /// 種別情報を持たない書籍を作成
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            kind: BookKind::Plain,
        }
    }

    /// 物理本を作成
    pub fn physical(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            kind: BookKind::Physical { pages },
        }
    }

    /// 電子書籍を作成
    pub fn digital(
        title: impl Into<String>,
        author: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            kind: BookKind::Digital {
                format: format.into(),
            },
        }
    }

    /// タイトル
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 著者名
    pub fn author(&self) -> &str {
        &self.author
    }

    /// 種別
    pub fn kind(&self) -> &BookKind {
        &self.kind
    }
}

impl fmt::Display for Book {
    /// `Book: {title} (Author: {author})` に種別ごとの接尾辞を付けた1行
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Book: {} (Author: {})", self.title, self.author)?;
        match &self.kind {
            BookKind::Plain => Ok(()),
            BookKind::Physical { pages } => write!(f, ", Physical (Pages: {pages})"),
            BookKind::Digital { format } => write!(f, ", Digital (Format: {format})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_book_has_title_and_author() {
        let book = Book::new("Java Programming", "John Doe");

        assert_eq!(book.title(), "Java Programming");
        assert_eq!(book.author(), "John Doe");
        assert_eq!(*book.kind(), BookKind::Plain);
    }

    #[test]
    fn test_plain_book_description() {
        let book = Book::new("Java Programming", "John Doe");

        assert_eq!(book.to_string(), "Book: Java Programming (Author: John Doe)");
    }

    #[test]
    fn test_physical_book_description_includes_pages() {
        let book = Book::physical("Design Patterns", "Jane Smith", 300);

        assert_eq!(
            book.to_string(),
            "Book: Design Patterns (Author: Jane Smith), Physical (Pages: 300)"
        );
    }

    #[test]
    fn test_digital_book_description_includes_format() {
        let book = Book::digital("Data Structures", "Bob Johnson", "PDF");

        assert_eq!(
            book.to_string(),
            "Book: Data Structures (Author: Bob Johnson), Digital (Format: PDF)"
        );
    }

    #[test]
    fn test_books_with_equal_fields_are_equal() {
        let a = Book::physical("Metamorfose", "Franz Kafka", 95);
        let b = Book::physical("Metamorfose", "Franz Kafka", 95);

        assert_eq!(a, b);
    }

    #[test]
    fn test_books_with_different_kind_are_distinct() {
        let plain = Book::new("Metamorfose", "Franz Kafka");
        let physical = Book::physical("Metamorfose", "Franz Kafka", 95);
        let shorter = Book::physical("Metamorfose", "Franz Kafka", 94);

        assert_ne!(plain, physical);
        assert_ne!(physical, shorter);
    }

    #[test]
    fn test_empty_strings_are_not_rejected() {
        let book = Book::new("", "");

        assert_eq!(book.to_string(), "Book:  (Author: )");
    }
}
