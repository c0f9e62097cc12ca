// Console commands accepted by the interactive front end
#[derive(Debug, PartialEq)]
pub enum Command {
    Register,
    Login,
    Users,
    Help,
    Quit,
    Unknown(String),
}

// Parse raw command string into Command enum
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let cmd = trimmed
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_uppercase();

    match cmd.as_str() {
        "REGISTER" | "R" => Command::Register,
        "LOGIN" | "L" => Command::Login,
        "USERS" => Command::Users,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

// Parse a yes/no answer; anything unrecognised counts as "no"
pub fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "y" | "yes" | "true" | "1" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("REGISTER"), Command::Register);
        assert_eq!(parse_command("r"), Command::Register);
        assert_eq!(parse_command("login"), Command::Login);
        assert_eq!(parse_command("L"), Command::Login);
        assert_eq!(parse_command("USERS"), Command::Users);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("QUIT"), Command::Quit);
        assert_eq!(parse_command("q"), Command::Quit);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  QUIT  "), Command::Quit);
        assert_eq!(parse_command("login   now"), Command::Login);
    }

    #[test]
    fn test_unknown_commands() {
        assert_eq!(
            parse_command("DELETE bob"),
            Command::Unknown("DELETE bob".to_string())
        );
        assert_eq!(parse_command(""), Command::Unknown("".to_string()));
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("y"));
        assert!(parse_flag(" YES "));
        assert!(parse_flag("true"));
        assert!(!parse_flag("n"));
        assert!(!parse_flag(""));
        assert!(!parse_flag("maybe"));
    }
}
