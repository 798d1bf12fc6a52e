use std::io::{BufRead, Write};

use crate::domain::Catalog;
use crate::report;

use super::error::Result;
use super::resolve;

/// メニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Lend,
    Return,
    Status,
    Exit,
}

impl MenuChoice {
    /// 入力1行を選択肢として解釈する。数値でない・範囲外の場合は None。
    fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>() {
            Ok(1) => Some(Self::Lend),
            Ok(2) => Some(Self::Return),
            Ok(3) => Some(Self::Status),
            Ok(4) => Some(Self::Exit),
            _ => None,
        }
    }
}

/// 対話メニューのループを実行する
///
/// 入出力をジェネリクスで抽象化してあるため、テストではスクリプト化した
/// 入力とバッファでセッション全体を駆動できる。
///
/// - 「終了」が選ばれるか入力が尽きる（EOF）まで回り続け、正常終了する
/// - 貸出・返却の不成立はメッセージとして出力し、ループは継続する
/// - エラーになるのはストリームの読み書きに失敗したときだけ
pub fn run<R: BufRead, W: Write>(catalog: &mut Catalog, mut input: R, mut output: W) -> Result<()> {
    loop {
        write_menu(&mut output)?;

        let Some(line) = read_line(&mut input)? else {
            tracing::debug!("Input exhausted, ending console session");
            return Ok(());
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Lend) => lend_book(catalog, &mut input, &mut output)?,
            Some(MenuChoice::Return) => return_book(catalog, &mut input, &mut output)?,
            Some(MenuChoice::Status) => write!(output, "{}", report::render(catalog))?,
            Some(MenuChoice::Exit) => {
                writeln!(output, "Exiting. Goodbye!")?;
                return Ok(());
            }
            None => writeln!(output, "Invalid option. Try again.")?,
        }
    }
}

fn write_menu<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== Menu =====")?;
    writeln!(output, "1. Lend a book")?;
    writeln!(output, "2. Return a book")?;
    writeln!(output, "3. Show library status")?;
    writeln!(output, "4. Exit")?;
    write!(output, "Choose an option: ")?;
    output.flush()?;
    Ok(())
}

/// 1行読み取り、前後の空白を落として返す。EOF なら None。
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// ラベルを表示してから1行読み取る
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// 貸出アクション
///
/// 書籍は貸出可能コレクションから、会員は登録済み会員から解決する。
/// どちらかが見つからなければ目録には触れない。
fn lend_book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== Lend a Book =====")?;

    let Some(title) = prompt(input, output, "Book title: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, output, "Member name: ")? else {
        return Ok(());
    };

    let book = resolve::find_available_book(catalog, &title).cloned();
    let member = resolve::find_member(catalog, &name).cloned();
    let (Some(book), Some(member)) = (book, member) else {
        writeln!(output, "Book or member not found.")?;
        return Ok(());
    };

    if catalog.lend(&book, &member) {
        tracing::info!("Lent {} to {}", book, member);
        writeln!(output, "Loan completed successfully!")?;
    } else {
        tracing::warn!("Lend rejected for {} and {}", book, member);
        writeln!(output, "Could not complete the loan.")?;
    }
    Ok(())
}

/// 返却アクション
///
/// 返却対象の書籍は貸出記録から解決する。書籍を借りている会員と入力された
/// 会員が一致しない場合、目録が返却を拒否する。
fn return_book<R: BufRead, W: Write>(
    catalog: &mut Catalog,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output)?;
    writeln!(output, "===== Return a Book =====")?;

    let Some(title) = prompt(input, output, "Book title: ")? else {
        return Ok(());
    };
    let Some(name) = prompt(input, output, "Member name: ")? else {
        return Ok(());
    };

    let book = resolve::find_loaned_book(catalog, &title).cloned();
    let member = resolve::find_member(catalog, &name).cloned();
    let (Some(book), Some(member)) = (book, member) else {
        writeln!(output, "Book or member not found.")?;
        return Ok(());
    };

    if catalog.return_book(&book, &member) {
        tracing::info!("Returned {} from {}", book, member);
        writeln!(output, "Return completed successfully!")?;
    } else {
        tracing::warn!("Return rejected for {} and {}", book, member);
        writeln!(output, "Could not complete the return.")?;
    }
    Ok(())
}
