//! Text rendering for the terminal: stick glyphs, banners, prompts.

use crate::game::SetupPrompt;

/// Width of the horizontal rules framing each block.
pub const RULE_WIDTH: usize = 72;

/// `|` followed by dashes.
#[must_use]
pub fn rule() -> String {
    format!("|{}", "-".repeat(RULE_WIDTH - 1))
}

/// `|` followed by equals signs.
#[must_use]
pub fn heavy_rule() -> String {
    format!("|{}", "=".repeat(RULE_WIDTH - 1))
}

/// One line per row: label, one `|` per stick, and the count.
///
/// ```
/// use rust_nim::terminal::render::render_row;
///
/// let line = render_row(1, 3);
/// assert!(line.starts_with("| row 1 :"));
/// assert!(line.contains("|||"));
/// assert!(line.ends_with("(3 sticks)"));
/// ```
#[must_use]
pub fn render_row(index: usize, sticks: u32) -> String {
    let label = format!("| row {} :", index);
    let glyphs = "|".repeat(sticks as usize);
    let count = match sticks {
        1 => "(1 stick)".to_string(),
        n => format!("({} sticks)", n),
    };
    format!("{:<15}{:<40}{}", label, glyphs, count)
}

/// The whole board between two rules.
#[must_use]
pub fn render_board(rows: &[u32]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(rule());
    lines.extend(rows.iter().enumerate().map(|(i, &n)| render_row(i, n)));
    lines.push(rule());
    lines.join("\n") + "\n"
}

/// Explains the setup tokens.
#[must_use]
pub fn settings_banner(sentinels: &[String]) -> String {
    let finish = sentinels
        .iter()
        .map(|s| format!("<{}>", s))
        .collect::<Vec<_>>()
        .join(" or ");
    [
        rule(),
        "| Game settings:".to_string(),
        "|                <default> : for a default board".to_string(),
        "|                <custom>  : for custom settings".to_string(),
        format!("|                {:<9} : when done entering custom settings", finish),
        rule(),
    ]
    .join("\n")
        + "\n"
}

/// How to play, shown once the board is set.
#[must_use]
pub fn rules_banner() -> String {
    [
        heavy_rule(),
        "| The game has begun!".to_string(),
        heavy_rule(),
        "| Moves on form  : <sticks,row>  : will take #sticks from r:th row".to_string(),
        "| Example        : <3,0>         : 3 sticks will be taken from row 0.".to_string(),
        "| Whoever takes the last stick wins.".to_string(),
        "|".to_string(),
        "| Nim rules: http://en.wikipedia.org/wiki/Nim".to_string(),
        rule(),
    ]
    .join("\n")
        + "\n"
}

/// Prompt text for a setup question.
#[must_use]
pub fn setup_prompt(prompt: SetupPrompt) -> String {
    match prompt {
        SetupPrompt::Mode => "| default or custom board? : ".to_string(),
        SetupPrompt::Row { index, max } => {
            format!("| Input number of sticks for row {} ({} max): ", index, max)
        }
    }
}

/// Prompt text for a move.
pub const MOVE_PROMPT: &str = "Enter next move: ";
