//! Recognition and splitting of enumerations such as "A, B and C".

/// Default separators: punctuation plus the conjunctions "and" / "or".
pub const DEFAULT_SEPARATORS: [&str; 6] = [",", ";", "/", "&", "and", "or"];

/// Unit separator used internally to mark symbol boundaries while splitting.
const BOUNDARY: char = '\u{1f}';

/// A set of separators.
///
/// Alphabetic entries are matched as whole words, ignoring case. Every other
/// entry is matched as a substring anywhere in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separators {
    symbols: Vec<String>,
    words: Vec<String>,
}

impl Separators {
    pub fn new<I, S>(separators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symbols = Vec::new();
        let mut words = Vec::new();
        for separator in separators {
            let separator = separator.as_ref().trim();
            if separator.is_empty() {
                continue;
            }
            if separator.chars().all(char::is_alphabetic) {
                words.push(separator.to_lowercase());
            } else {
                symbols.push(separator.to_string());
            }
        }
        Self { symbols, words }
    }

    fn is_word_separator(&self, token: &str) -> bool {
        let token = token.to_lowercase();
        self.words.iter().any(|word| *word == token)
    }

    pub fn contains_separator(&self, text: &str) -> bool {
        self.symbols.iter().any(|symbol| text.contains(symbol.as_str()))
            || text
                .split_whitespace()
                .any(|token| self.is_word_separator(token))
    }

    /// Splits `text` into the enumerated parts, trimming whitespace and
    /// dropping empty parts. Multi-word parts keep single spaces between
    /// their words.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut marked = text.to_string();
        for symbol in &self.symbols {
            marked = marked.replace(symbol.as_str(), &BOUNDARY.to_string());
        }

        let mut parts = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        for token in marked.split_whitespace() {
            if self.is_word_separator(token) {
                flush(&mut parts, &mut current);
                continue;
            }
            let mut pieces = token.split(BOUNDARY).peekable();
            while let Some(piece) = pieces.next() {
                if !piece.is_empty() {
                    current.push(piece);
                }
                if pieces.peek().is_some() {
                    flush(&mut parts, &mut current);
                }
            }
        }
        flush(&mut parts, &mut current);
        parts
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

fn flush(parts: &mut Vec<String>, current: &mut Vec<&str>) {
    if !current.is_empty() {
        parts.push(current.join(" "));
        current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_symbols_and_words() {
        let separators = Separators::default();
        assert!(separators.contains_separator("Client, Server"));
        assert!(separators.contains_separator("Client AND Server"));
        assert!(separators.contains_separator("read/write"));
        assert!(!separators.contains_separator("Vendor Orders"));
        assert!(!separators.contains_separator("Database"));
    }

    #[test]
    fn splits_enumeration() {
        let separators = Separators::default();
        assert_eq!(
            separators.split("A, B and C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn keeps_multi_word_parts() {
        let separators = Separators::default();
        assert_eq!(
            separators.split("Web Server,Database  or  Message Queue"),
            vec![
                "Web Server".to_string(),
                "Database".to_string(),
                "Message Queue".to_string()
            ]
        );
    }

    #[test]
    fn drops_empty_parts() {
        let separators = Separators::default();
        assert_eq!(separators.split(", A,, and B ,"), vec!["A".to_string(), "B".to_string()]);
        assert!(separators.split(" , and ").is_empty());
    }

    #[test]
    fn word_separators_ignore_non_ascii_case() {
        let separators = Separators::new(["und", "ΚΑΙ"]);
        assert!(separators.contains_separator("Client UND Server"));
        assert_eq!(
            separators.split("A και B Und C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }

    #[test]
    fn custom_separators() {
        let separators = Separators::new(["|", "plus"]);
        assert!(!separators.contains_separator("A, B"));
        assert_eq!(
            separators.split("A|B plus C"),
            vec!["A".to_string(), "B".to_string(), "C".to_string()]
        );
    }
}
