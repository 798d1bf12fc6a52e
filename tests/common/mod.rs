use library_catalog::domain::{Book, Catalog, Member};

/// デモデータと同じ書籍
pub fn java_book() -> Book {
    Book::new("Java Programming", "John Doe")
}

pub fn patterns_book() -> Book {
    Book::physical("Design Patterns", "Jane Smith", 300)
}

pub fn structures_book() -> Book {
    Book::digital("Data Structures", "Bob Johnson", "PDF")
}

pub fn metamorphosis_book() -> Book {
    Book::physical("Metamorfose", "Franz Kafka", 95)
}

pub fn alice() -> Member {
    Member::new("Alice")
}

pub fn bob() -> Member {
    Member::new("Bob")
}

/// 4冊の書籍と2名の会員を登録済み、貸出なしの目録を作成する
///
/// 起動時のデモデータと同じ構成で、貸出・返却だけを行っていない状態。
pub fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.register_book(java_book());
    catalog.register_book(patterns_book());
    catalog.register_book(structures_book());
    catalog.register_book(metamorphosis_book());
    catalog.register_member(alice());
    catalog.register_member(bob());
    catalog
}
