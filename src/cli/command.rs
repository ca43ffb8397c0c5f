#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Position(Vec<String>),
    Check(Option<String>),
    Play(Option<String>),
    Targets(Option<String>),
    Fen,
    Show,
    Encode(Option<String>),
    Quit,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parts: Vec<&str> = trimmed.split_whitespace().collect();

    let owned_parts = || parts.iter().map(|p| (*p).to_string()).collect::<Vec<String>>();
    let argument = || parts.get(1).map(|v| (*v).to_string());

    let cmd = match parts[0] {
        "position" => Command::Position(owned_parts()),
        "check" => Command::Check(argument()),
        "play" => Command::Play(argument()),
        "targets" => Command::Targets(argument()),
        "fen" => Command::Fen,
        "show" => Command::Show,
        "encode" => Command::Encode(argument()),
        "quit" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    };

    Some(cmd)
}
