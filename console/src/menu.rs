//! Interactive menu loop. Reads from any `BufRead` and writes to any `Write`
//! so the loop can be driven by scripted input.

use std::io::{self, BufRead, Write};

use minitool_core::{invoke, AppState, Mode, ModelError};
use tracing::debug;

pub const CHOICE_PROMPT: &str = "機能を選択してください (1/2/q): ";
pub const THINKING: &str = "Wait a moment... AI is thinking...";
pub const ANSWER_HEADER: &str = "[AIの回答]";
pub const EMPTY_TEXT: &str = "テキストが空でした。メニューに戻ります。";
pub const NOT_CONFIGURED: &str = "エラー: APIキーが設定されていないため実行できません。";
pub const INVALID_CHOICE: &str = "無効な入力です。「1」「2」「q」のどれかを入力してください。";
pub const GOODBYE: &str = "アプリを終了します。";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Run(Mode),
    Quit,
}

fn parse_choice(line: &str) -> Option<Choice> {
    match line.trim() {
        "1" => Some(Choice::Run(Mode::Summarize)),
        "2" => Some(Choice::Run(Mode::Proofread)),
        "q" => Some(Choice::Quit),
        _ => None,
    }
}

/// Runs until the user picks `q` or input ends.
pub async fn run<R: BufRead, W: Write>(
    state: &AppState,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        show_menu(out)?;
        write!(out, "{CHOICE_PROMPT}")?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            debug!("input closed at menu");
            writeln!(out)?;
            return Ok(());
        };

        match parse_choice(&line) {
            Some(Choice::Run(mode)) => {
                if !run_action(state, mode, input, out).await? {
                    writeln!(out)?;
                    return Ok(());
                }
            }
            Some(Choice::Quit) => {
                writeln!(out, "{GOODBYE}")?;
                return Ok(());
            }
            None => writeln!(out, "{INVALID_CHOICE}")?,
        }
    }
}

fn show_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n=== AI Mini Tool ===")?;
    writeln!(out, "1. テキスト要約")?;
    writeln!(out, "2. 文章校正")?;
    writeln!(out, "q. 終了")?;
    writeln!(out, "=====================")
}

/// One summarize/proofread action. Returns `false` if input ended.
async fn run_action<R: BufRead, W: Write>(
    state: &AppState,
    mode: Mode,
    input: &mut R,
    out: &mut W,
) -> io::Result<bool> {
    let (title, ask) = match mode {
        Mode::Summarize => ("テキスト要約", "要約したいテキストを入力してください（入力後Enter）:"),
        Mode::Proofread => ("文章校正", "校正したいテキストを入力してください（入力後Enter）:"),
    };
    writeln!(out, "\n--- {title} ---")?;
    writeln!(out, "{ask}")?;
    write!(out, "> ")?;
    out.flush()?;

    let Some(text) = read_line(input)? else {
        return Ok(false);
    };

    if state.model().is_some() && !text.trim().is_empty() {
        writeln!(out, "{THINKING}")?;
        out.flush()?;
    }

    match invoke(state.model(), mode, &text).await {
        Ok(result) => writeln!(out, "\n{ANSWER_HEADER}\n{result}")?,
        Err(ModelError::EmptyText) => writeln!(out, "{EMPTY_TEXT}")?,
        Err(ModelError::NotConfigured) => writeln!(out, "\n{ANSWER_HEADER}\n{NOT_CONFIGURED}")?,
        Err(ModelError::CallFailed(msg)) => {
            writeln!(out, "\n{ANSWER_HEADER}\nAPIエラーが発生しました: {msg}")?
        }
    }
    Ok(true)
}

/// Reads one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    if buf.ends_with('\n') {
        buf.pop();
        if buf.ends_with('\r') {
            buf.pop();
        }
    }
    Ok(Some(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minitool_core::prompts::SUMMARIZE_INSTRUCTION;
    use minitool_core::providers::StubModel;
    use std::io::Cursor;
    use std::sync::Arc;

    async fn drive(state: &AppState, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        run(state, &mut input, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn choices_are_parsed() {
        assert_eq!(parse_choice("1"), Some(Choice::Run(Mode::Summarize)));
        assert_eq!(parse_choice(" 2 "), Some(Choice::Run(Mode::Proofread)));
        assert_eq!(parse_choice("q"), Some(Choice::Quit));
        assert_eq!(parse_choice("Q"), None);
        assert_eq!(parse_choice("3"), None);
    }

    #[test]
    fn line_terminators_are_stripped() {
        let mut input = Cursor::new(b"one\r\ntwo\nthree".to_vec());
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("one"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("two"));
        assert_eq!(read_line(&mut input).unwrap().as_deref(), Some("three"));
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[tokio::test]
    async fn q_ends_the_loop() {
        let out = drive(&AppState::unconfigured(), "q\n").await;
        assert!(out.contains("1. テキスト要約"));
        assert!(out.trim_end().ends_with(GOODBYE));
    }

    #[tokio::test]
    async fn invalid_choice_redisplays_menu() {
        let out = drive(&AppState::unconfigured(), "x\nq\n").await;
        assert!(out.contains(INVALID_CHOICE));
        assert_eq!(out.matches(CHOICE_PROMPT).count(), 2);
    }

    #[tokio::test]
    async fn summarize_prints_the_answer() {
        let stub = Arc::new(StubModel::replying("• point1\n• point2\n• point3"));
        let state = AppState::with_model(stub.clone());
        let out = drive(&state, "1\nLong article body\nq\n").await;

        assert!(out.contains(THINKING));
        assert!(out.contains("[AIの回答]\n• point1\n• point2\n• point3"));
        assert_eq!(stub.calls(), 1);
        assert_eq!(
            stub.last_prompt().unwrap(),
            format!("{SUMMARIZE_INSTRUCTION}\n\n対象テキスト:\nLong article body")
        );
    }

    #[tokio::test]
    async fn empty_text_makes_no_call() {
        let stub = Arc::new(StubModel::replying("unused"));
        let state = AppState::with_model(stub.clone());
        let out = drive(&state, "1\n\n2\n\nq\n").await;

        assert_eq!(out.matches(EMPTY_TEXT).count(), 2);
        assert!(!out.contains(THINKING));
        assert_eq!(stub.calls(), 0);
    }

    #[tokio::test]
    async fn failure_is_printed_and_loop_continues() {
        let stub = Arc::new(StubModel::failing("network unreachable"));
        let state = AppState::with_model(stub.clone());
        let out = drive(&state, "2\nhello\nq\n").await;

        assert!(out.contains("APIエラーが発生しました: network unreachable"));
        assert!(out.trim_end().ends_with(GOODBYE));
        assert_eq!(stub.calls(), 1);
    }

    #[tokio::test]
    async fn missing_credential_prints_message_and_continues() {
        let out = drive(&AppState::unconfigured(), "1\nsome text\nq\n").await;
        assert!(out.contains(NOT_CONFIGURED));
        assert!(!out.contains(THINKING));
        assert!(out.trim_end().ends_with(GOODBYE));
    }

    #[tokio::test]
    async fn end_of_input_stops_cleanly() {
        let stub = Arc::new(StubModel::replying("unused"));
        let state = AppState::with_model(stub.clone());
        let out = drive(&state, "1\n").await;
        assert!(out.contains("--- テキスト要約 ---"));
        assert_eq!(stub.calls(), 0);

        let out = drive(&state, "").await;
        assert!(out.contains(CHOICE_PROMPT));
    }
}
