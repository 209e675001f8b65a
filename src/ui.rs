use colored::{ColoredString, Colorize};

/// Kind of line written to the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Progress,
    Done,
    Note,
    Failure,
}

impl Tone {
    fn tag(self) -> ColoredString {
        match self {
            Self::Progress => "[..]".yellow(),
            Self::Done => "[ok]".green().bold(),
            Self::Note => "[--]".blue(),
            Self::Failure => "[!!]".red().bold(),
        }
    }
}

/// Render one terminal line, tag first
pub fn render(tone: Tone, message: &str) -> String {
    let body = match tone {
        Tone::Progress => message.bright_white(),
        Tone::Done => message.green(),
        Tone::Note => message.normal(),
        Tone::Failure => message.red(),
    };
    format!("{} {}", tone.tag(), body)
}

pub fn status_message(message: &str) {
    println!("{}", render(Tone::Progress, message));
}

pub fn success_message(message: &str) {
    println!("{}", render(Tone::Done, message));
}

pub fn info_message(message: &str) {
    println!("{}", render(Tone::Note, message));
}

/// Failures go to stderr so `classify` output stays parseable
pub fn error_message(message: &str) {
    eprintln!("{}", render(Tone::Failure, message));
}
