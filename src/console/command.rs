use std::str::FromStr;

// ============================================================================
// Console Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add { dish: String, quantity: i32 },
    Remove { dish: String },
    Clear,
    Save,
    View,
    Menu,
    Help,
    Exit,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing dish name. Usage: {0}")]
    MissingDish(&'static str),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}

const ADD_USAGE: &str = "add <dish> [quantity]";
const REMOVE_USAGE: &str = "remove <dish>";

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        if verb.is_empty() {
            return Err(ParseError::Empty);
        }

        match verb.to_ascii_lowercase().as_str() {
            "add" => parse_add(rest),
            "remove" => {
                if rest.is_empty() {
                    Err(ParseError::MissingDish(REMOVE_USAGE))
                } else {
                    Ok(Command::Remove { dish: rest.to_string() })
                }
            }
            "clear" => Ok(Command::Clear),
            "save" => Ok(Command::Save),
            "view" => Ok(Command::View),
            "menu" => Ok(Command::Menu),
            "help" => Ok(Command::Help),
            "exit" | "quit" => Ok(Command::Exit),
            other => Err(ParseError::UnknownCommand(other.to_string())),
        }
    }
}

/// Dish names may contain spaces, so only a trailing token that looks
/// numeric is treated as the quantity. Without one the quantity is 1.
fn parse_add(rest: &str) -> Result<Command, ParseError> {
    if rest.is_empty() {
        return Err(ParseError::MissingDish(ADD_USAGE));
    }

    let (dish, last) = match rest.rsplit_once(char::is_whitespace) {
        Some((dish, last)) => (dish.trim(), last),
        None => ("", rest),
    };

    if !looks_numeric(last) {
        return Ok(Command::Add {
            dish: rest.to_string(),
            quantity: 1,
        });
    }

    let quantity = last
        .parse::<i32>()
        .map_err(|_| ParseError::InvalidQuantity(last.to_string()))?;

    if dish.is_empty() {
        return Err(ParseError::MissingDish(ADD_USAGE));
    }

    Ok(Command::Add {
        dish: dish.to_string(),
        quantity,
    })
}

fn looks_numeric(token: &str) -> bool {
    token.starts_with(['-', '+']) || token.chars().any(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<Command, ParseError> {
        line.parse()
    }

    #[test]
    fn test_parse_add_with_quantity() {
        assert_eq!(
            parse("add Pizza 3"),
            Ok(Command::Add { dish: "Pizza".to_string(), quantity: 3 })
        );
    }

    #[test]
    fn test_parse_add_defaults_quantity_to_one() {
        assert_eq!(
            parse("add Pizza"),
            Ok(Command::Add { dish: "Pizza".to_string(), quantity: 1 })
        );
    }

    #[test]
    fn test_parse_add_multi_word_dish() {
        assert_eq!(
            parse("add  Garlic Bread   2 "),
            Ok(Command::Add { dish: "Garlic Bread".to_string(), quantity: 2 })
        );
        assert_eq!(
            parse("add Garlic Bread"),
            Ok(Command::Add { dish: "Garlic Bread".to_string(), quantity: 1 })
        );
    }

    #[test]
    fn test_parse_add_keeps_non_positive_quantity() {
        assert_eq!(
            parse("add Pizza 0"),
            Ok(Command::Add { dish: "Pizza".to_string(), quantity: 0 })
        );
        assert_eq!(
            parse("add Pizza -2"),
            Ok(Command::Add { dish: "Pizza".to_string(), quantity: -2 })
        );
    }

    #[test]
    fn test_parse_add_rejects_bad_quantity() {
        assert_eq!(
            parse("add Pizza 1.5"),
            Err(ParseError::InvalidQuantity("1.5".to_string()))
        );
        assert_eq!(
            parse("add Pizza 99999999999"),
            Err(ParseError::InvalidQuantity("99999999999".to_string()))
        );
    }

    #[test]
    fn test_parse_add_requires_dish() {
        assert_eq!(parse("add"), Err(ParseError::MissingDish(ADD_USAGE)));
        assert_eq!(parse("add 4"), Err(ParseError::MissingDish(ADD_USAGE)));
    }

    #[test]
    fn test_parse_remove() {
        assert_eq!(
            parse("remove Spaghetti"),
            Ok(Command::Remove { dish: "Spaghetti".to_string() })
        );
        assert_eq!(parse("remove"), Err(ParseError::MissingDish(REMOVE_USAGE)));
    }

    #[test]
    fn test_parse_simple_verbs_case_insensitive() {
        assert_eq!(parse("CLEAR"), Ok(Command::Clear));
        assert_eq!(parse("Save"), Ok(Command::Save));
        assert_eq!(parse("view"), Ok(Command::View));
        assert_eq!(parse("menu"), Ok(Command::Menu));
        assert_eq!(parse("help"), Ok(Command::Help));
        assert_eq!(parse("exit"), Ok(Command::Exit));
        assert_eq!(parse("quit"), Ok(Command::Exit));
    }

    #[test]
    fn test_parse_unknown_and_empty() {
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(
            parse("order Pizza"),
            Err(ParseError::UnknownCommand("order".to_string()))
        );
    }
}
