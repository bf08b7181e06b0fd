//! Splitting a session line into words.
//!
//! Words are separated by whitespace. Single quotes keep everything literally,
//! double quotes allow `\"` and `\\` escapes, so `edit description "a \"tame\" cat"`
//! yields three words.

pub fn split(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(ch) => current.push(ch),
                        None => return Err("unterminated ' quote".to_string()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(ch @ ('"' | '\\')) => current.push(ch),
                            Some(ch) => {
                                current.push('\\');
                                current.push(ch);
                            }
                            None => return Err("unterminated \" quote".to_string()),
                        },
                        Some(ch) => current.push(ch),
                        None => return Err("unterminated \" quote".to_string()),
                    }
                }
            }
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace() {
        assert_eq!(split("  search   cat ").unwrap(), vec!["search", "cat"]);
    }

    #[test]
    fn quotes_group_words() {
        assert_eq!(
            split(r#"edit description "a \"tame\" cat""#).unwrap(),
            vec!["edit", "description", "a \"tame\" cat"]
        );
        assert_eq!(
            split("set word 'it''s'").unwrap(),
            vec!["set", "word", "its"]
        );
    }

    #[test]
    fn empty_quotes_make_an_empty_word() {
        assert_eq!(split(r#"edit description """#).unwrap(), vec!["edit", "description", ""]);
    }

    #[test]
    fn keeps_non_ascii_text() {
        assert_eq!(split("set word 猫").unwrap(), vec!["set", "word", "猫"]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert!(split("edit word \"cat").is_err());
        assert!(split("edit word 'cat").is_err());
    }
}
