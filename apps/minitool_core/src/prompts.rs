use std::fmt;

pub const SUMMARIZE_INSTRUCTION: &str =
    "あなたは優秀な編集者です。入力されたテキストの要点を抽出し、3箇条書きで簡潔に要約してください。";

pub const PROOFREAD_INSTRUCTION: &str =
    "あなたはプロのライターです。入力されたテキストの誤字脱字を修正し、ビジネスメールとして適切な敬語に直してください。";

/// Placed between the instruction and the user's text.
pub const TARGET_SEPARATOR: &str = "\n\n対象テキスト:\n";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Summarize,
    Proofread,
}

impl Mode {
    pub fn instruction(self) -> &'static str {
        match self {
            Mode::Summarize => SUMMARIZE_INSTRUCTION,
            Mode::Proofread => PROOFREAD_INSTRUCTION,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Summarize => "summarize",
            Mode::Proofread => "proofread",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds the exact prompt sent to the model. The text is not altered.
pub fn compose(mode: Mode, text: &str) -> String {
    let instruction = mode.instruction();
    let mut prompt =
        String::with_capacity(instruction.len() + TARGET_SEPARATOR.len() + text.len());
    prompt.push_str(instruction);
    prompt.push_str(TARGET_SEPARATOR);
    prompt.push_str(text);
    prompt
}
