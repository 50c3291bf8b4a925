//! Parsers for everything the student types.
//!
//! None of these fail loudly: `None`/`false` means "ask again".

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Quit,
    StartNew,
}

/// An identification is `A` followed by five characters, the first four of
/// which must be ASCII digits. The last character is accepted as-is.
pub fn is_identification_valid(identification: &str) -> bool {
    let bytes = identification.as_bytes();
    if bytes.len() != 6 || bytes[0] != b'A' {
        return false;
    }

    bytes[1..5].iter().all(u8::is_ascii_digit)
}

pub fn parse_yes_no(reply: &str) -> Option<bool> {
    match reply.trim().to_ascii_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

pub fn parse_true_false(reply: &str) -> Option<bool> {
    match reply.trim().to_ascii_lowercase().as_str() {
        "true" | "t" => Some(true),
        "false" | "f" => Some(false),
        _ => None,
    }
}

pub fn parse_menu_command(reply: &str) -> Option<MenuCommand> {
    match reply.trim().to_ascii_lowercase().as_str() {
        "q" => Some(MenuCommand::Quit),
        "s" => Some(MenuCommand::StartNew),
        _ => None,
    }
}
