//! インメモリの図書館蔵書目録
//!
//! 書籍・会員・貸出記録を単一プロセスのメモリ上で管理する。
//! 貸出と返却の状態遷移・不変条件は `domain` 層が担い、`report` が
//! 読み取り専用の状態レポートを、`console` が対話メニューを提供する。

pub mod console;
pub mod domain;
pub mod report;
