//! Attribute extraction from tag interior text
//!
//! Parses the text after the tag name for quoted `key="value"` /
//! `key='value'` pairs. This model keeps quoted pairs only: bare
//! boolean-style tokens and unquoted values are skipped. Parsing is
//! lenient by design — an unterminated quote ends the scan with whatever
//! was collected so far.

use memchr::memchr;

/// A parsed attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name as written
    pub name: String,
    /// Attribute value with the quotes stripped
    pub value: String,
}

/// Extract quoted attribute pairs from the text following a tag name.
///
/// Pair order follows the source; a duplicated key keeps its first value.
pub fn parse_attributes(input: &str) -> Vec<Attribute> {
    let bytes = input.as_bytes();
    let mut attrs: Vec<Attribute> = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        // Attribute name: up to whitespace or '='
        let name_start = pos;
        while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() && bytes[pos] != b'=' {
            pos += 1;
        }
        if pos == name_start {
            // stray '=' with no name
            pos += 1;
            continue;
        }
        let name = &input[name_start..pos];

        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() || bytes[pos] != b'=' {
            // boolean-style token; not part of this model
            continue;
        }
        pos += 1;
        while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
            pos += 1;
        }
        if pos >= bytes.len() {
            break;
        }

        let quote = bytes[pos];
        if quote != b'"' && quote != b'\'' {
            // unquoted value: skip the token, keep nothing
            while pos < bytes.len() && !bytes[pos].is_ascii_whitespace() {
                pos += 1;
            }
            continue;
        }
        pos += 1;

        let Some(len) = memchr(quote, &bytes[pos..]) else {
            // unterminated quote: stop here with what we have
            break;
        };
        let value = &input[pos..pos + len];
        if !attrs.iter().any(|a| a.name == name) {
            attrs.push(Attribute {
                name: name.to_string(),
                value: value.to_string(),
            });
        }
        pos += len + 1;
    }

    attrs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_attributes() {
        let attrs = parse_attributes(" id=\"test\" class=\"foo\"");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].name, "id");
        assert_eq!(attrs[0].value, "test");
        assert_eq!(attrs[1].name, "class");
        assert_eq!(attrs[1].value, "foo");
    }

    #[test]
    fn test_single_quoted() {
        let attrs = parse_attributes(" data-a='x' data-b='y'");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].value, "x");
        assert_eq!(attrs[1].value, "y");
    }

    #[test]
    fn test_mixed_quotes() {
        let attrs = parse_attributes(" class=\"foo\" data-val='bar'");
        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[0].value, "foo");
        assert_eq!(attrs[1].value, "bar");
    }

    #[test]
    fn test_duplicate_key_first_wins() {
        let attrs = parse_attributes(" class=\"first\" class=\"second\"");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].value, "first");
    }

    #[test]
    fn test_unterminated_quote_stops_gracefully() {
        let attrs = parse_attributes(" id=\"kept\" data-val=\"unterminated");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "id");
    }

    #[test]
    fn test_empty_value() {
        let attrs = parse_attributes(" class=\"\"");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].value, "");
    }

    #[test]
    fn test_value_with_spaces() {
        let attrs = parse_attributes(" class=\"foo bar baz\"");
        assert_eq!(attrs[0].value, "foo bar baz");
    }

    #[test]
    fn test_boolean_token_ignored() {
        let attrs = parse_attributes(" disabled data-x=\"1\"");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "data-x");
    }

    #[test]
    fn test_unquoted_value_ignored() {
        let attrs = parse_attributes(" a=b c=\"d\"");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "c");
        assert_eq!(attrs[0].value, "d");
    }

    #[test]
    fn test_whitespace_around_equals() {
        let attrs = parse_attributes("  id  =  \"test\"  ");
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].name, "id");
        assert_eq!(attrs[0].value, "test");
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_attributes("").is_empty());
        assert!(parse_attributes("   ").is_empty());
    }
}
