/// Strips a single leading `0x` from a hex string, if present.
pub fn strip_hex_prefix(value: &str) -> &str {
    value.strip_prefix("0x").unwrap_or(value)
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn test_should_strip_prefix() {
        assert_eq!(strip_hex_prefix("0xab"), "ab");
        assert_eq!(strip_hex_prefix("ab"), "ab");
        assert_eq!(strip_hex_prefix("0x0xab"), "0xab");
        assert_eq!(strip_hex_prefix(""), "");
    }

    #[test]
    fn test_should_keep_uppercase_prefix() {
        // only the lowercase prefix is recognised
        assert_eq!(strip_hex_prefix("0Xab"), "0Xab");
    }
}
