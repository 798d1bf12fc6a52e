use crate::domain::Catalog;

/// 目録の状態レポートを整形する
///
/// 現在のスナップショットを「貸出可能な書籍」「会員」「貸出中の書籍」の
/// 3セクションのテキストにする。読み取り専用で、状態は変更しない。
/// 空のコレクションは見出しだけのセクションになる。
pub fn render(catalog: &Catalog) -> String {
    let mut buf = String::new();

    buf.push_str("===== Library Status =====\n");
    buf.push_str("Available books:\n");
    for book in catalog.available_books() {
        buf.push_str(&format!("- {book}\n"));
    }

    buf.push_str("\nLibrary members:\n");
    for member in catalog.members() {
        buf.push_str(&format!("- {member}\n"));
    }

    buf.push_str("\nBooks on loan:\n");
    for loan in catalog.loans() {
        buf.push_str(&format!("- {loan}\n"));
    }

    buf.push_str("===============================\n");
    buf
}
