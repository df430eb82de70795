//! Views of a learner submission.
//!
//! Rules look at one of three renderings of the same text:
//! - `raw`: exactly what the learner typed
//! - `code`: line and block comments removed, string literals intact
//! - `skeleton`: like `code`, with string literal contents blanked out
//!
//! Comment removal is lexical and tolerant: unterminated comments or strings
//! run to the end of the input instead of failing. Removed comments leave
//! their newlines behind so line anchors still line up. Char literals such as
//! `'{'` or `'"'` count as literals, lifetimes such as `'info` do not.

/// A submission with its derived views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    raw: String,
    code: String,
    skeleton: String,
}

impl Submission {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let code = strip_comments(&raw, false);
        let skeleton = strip_comments(&raw, true);
        Self {
            raw,
            code,
            skeleton,
        }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Whether `()`, `[]` and `{}` are balanced and properly nested,
    /// ignoring anything inside comments or string literals.
    pub fn is_balanced(&self) -> bool {
        delimiters_balanced(&self.skeleton)
    }
}

/// Remove `//` and (nested) `/* */` comments from Rust-like source.
///
/// Double-quoted strings and char literals are recognized so that `"//"`
/// inside a literal is kept. When `blank_strings` is set, literal contents
/// are dropped and only the quotes and any newlines remain.
pub fn strip_comments(source: &str, blank_strings: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut depth = 1usize;
                while depth > 0 {
                    let Some(inner) = chars.next() else { break };
                    match inner {
                        '/' if chars.peek() == Some(&'*') => {
                            chars.next();
                            depth += 1;
                        }
                        '*' if chars.peek() == Some(&'/') => {
                            chars.next();
                            depth -= 1;
                        }
                        '\n' => out.push('\n'),
                        _ => {}
                    }
                }
                out.push(' ');
            }
            '"' => {
                out.push('"');
                while let Some(inner) = chars.next() {
                    match inner {
                        '\\' => {
                            let escaped = chars.next();
                            if !blank_strings {
                                out.push('\\');
                                if let Some(e) = escaped {
                                    out.push(e);
                                }
                            }
                        }
                        '"' => {
                            out.push('"');
                            break;
                        }
                        '\n' => out.push('\n'),
                        other => {
                            if !blank_strings {
                                out.push(other);
                            }
                        }
                    }
                }
            }
            '\'' => match char_literal_len(chars.clone()) {
                Some(len) => {
                    out.push('\'');
                    let body: String = chars.by_ref().take(len).collect();
                    if blank_strings {
                        out.push('\'');
                    } else {
                        out.push_str(&body);
                    }
                }
                None => out.push('\''),
            },
            other => out.push(other),
        }
    }

    out
}

/// Length of a char literal after its opening quote, closing quote included.
///
/// `None` means the quote starts a lifetime or loop label instead.
fn char_literal_len(mut rest: impl Iterator<Item = char>) -> Option<usize> {
    match rest.next()? {
        '\\' => {
            rest.next()?;
            // `\x7f` and `\u{10ffff}` run a few chars past the backslash.
            let mut len = 2;
            for c in rest.take(9) {
                len += 1;
                match c {
                    '\'' => return Some(len),
                    '\n' => return None,
                    _ => {}
                }
            }
            None
        }
        '\'' | '\n' => None,
        _ => (rest.next()? == '\'').then_some(2),
    }
}

fn delimiters_balanced(text: &str) -> bool {
    let mut stack = Vec::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let open = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(open) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}
