use std::io::{self, Write};

/// What one line typed at the prompt asks for.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Quit,
    TooLong,
    Lookup(&'a str),
}

/// Prints `prompt` and reads a line. `None` once stdin is closed.
pub fn input(prompt: &str) -> io::Result<Option<String>> {
    let mut line = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

pub fn parse_command(line: &str, max_length: usize) -> Command<'_> {
    let word = line.trim();
    match word {
        "" => Command::Empty,
        ":q" | ":quit" => Command::Quit,
        word if word.chars().count() > max_length => Command::TooLong,
        word => Command::Lookup(word),
    }
}

/// Reads a yes/no answer; anything unrecognised is `None`.
pub fn str_to_bool(answer: &str) -> Option<bool> {
    const YES: [&str; 6] = ["y", "yes", "yeah", "yea", "true", "on"];
    const NO: [&str; 5] = ["n", "no", "nope", "false", "off"];
    let answer = answer.trim();
    if YES.iter().any(|w| w.eq_ignore_ascii_case(answer)) {
        Some(true)
    } else if NO.iter().any(|w| w.eq_ignore_ascii_case(answer)) {
        Some(false)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_are_empty() {
        assert_eq!(parse_command("\n", 50), Command::Empty);
        assert_eq!(parse_command("   \t\n", 50), Command::Empty);
    }

    #[test]
    fn quit_needs_the_colon() {
        assert_eq!(parse_command(":q\n", 50), Command::Quit);
        assert_eq!(parse_command(" :quit ", 50), Command::Quit);
        assert_eq!(parse_command("quit\n", 50), Command::Lookup("quit"));
        assert_eq!(parse_command("exit", 50), Command::Lookup("exit"));
    }

    #[test]
    fn words_are_trimmed_but_keep_inner_spaces() {
        assert_eq!(parse_command("  ice cream \n", 50), Command::Lookup("ice cream"));
        assert_eq!(parse_command("don't", 50), Command::Lookup("don't"));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(parse_command("hello", 5), Command::Lookup("hello"));
        assert_eq!(parse_command("hellos", 5), Command::TooLong);
        assert_eq!(parse_command("naïve", 5), Command::Lookup("naïve"));
    }

    #[test]
    fn str_to_bool_accepts_common_answers() {
        assert_eq!(str_to_bool("Y\n"), Some(true));
        assert_eq!(str_to_bool(" yes "), Some(true));
        assert_eq!(str_to_bool("Yeah"), Some(true));
        assert_eq!(str_to_bool("NO"), Some(false));
        assert_eq!(str_to_bool("off\n"), Some(false));
        assert_eq!(str_to_bool(""), None);
        assert_eq!(str_to_bool("maybe"), None);
    }
}
