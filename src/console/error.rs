use thiserror::Error;

/// 対話コンソール層のエラー
///
/// 失敗しうるのは入出力ストリームの読み書きだけ。貸出・返却の不成立は
/// エラーではなく、ユーザー向けメッセージとして画面に報告する。
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// 入出力ストリームの読み書きに失敗
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// コンソール層のResult型
pub type Result<T> = std::result::Result<T, ConsoleError>;
