//! Inline formatting wrappers.

/// `_text_`
pub fn emphasis(text: &str) -> String {
    format!("_{}_", text)
}

/// `*text*`
pub fn bold(text: &str) -> String {
    format!("*{}*", text)
}

/// `` `text` ``
pub fn code(text: &str) -> String {
    format!("`{}`", text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrappers_nest() {
        assert_eq!(code(&bold("hello")), "`*hello*`");
        assert_eq!(code(&emphasis("int")), "`_int_`");
    }
}
