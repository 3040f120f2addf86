use crate::error::FileManagerError;

/// Pulls the bearer token out of a request copied with the browser's
/// "Copy as cURL", in either the multi-line or the single-line form.
#[derive(Clone, Default)]
pub struct CurlParser {
    pub token: Option<String>,
}

impl CurlParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(&mut self, curl_text: &str) -> Result<(), FileManagerError> {
        let words = split_words(curl_text)?;
        if words.first().map(String::as_str) != Some("curl") {
            return Err(FileManagerError::InvalidCurl(
                "Text does not start with 'curl'".to_string(),
            ));
        }

        let mut token = None;
        let mut args = words.iter().skip(1);
        while let Some(arg) = args.next() {
            let header = match arg.as_str() {
                "-H" | "--header" => match args.next() {
                    Some(value) => value.as_str(),
                    None => break,
                },
                other => match other.strip_prefix("--header=") {
                    Some(value) => value,
                    None => continue,
                },
            };

            if let Some(bearer) = bearer_from_header(header) {
                token = Some(bearer.to_string());
            }
        }

        let token = token.ok_or_else(|| {
            FileManagerError::InvalidCurl("Could not find a bearer token in curl command".to_string())
        })?;

        self.token = Some(token);
        Ok(())
    }
}

fn bearer_from_header(header: &str) -> Option<&str> {
    let (key, value) = header.split_once(':')?;
    if !key.trim().eq_ignore_ascii_case("authorization") {
        return None;
    }

    let value = value.trim();
    let (scheme, credentials) = value.split_once(char::is_whitespace)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let credentials = credentials.trim();
    (!credentials.is_empty()).then_some(credentials)
}

/// Splits shell text into words. Handles single and double quotes,
/// backslash escapes and backslash-newline continuations.
fn split_words(text: &str) -> Result<Vec<String>, FileManagerError> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(c) => current.push(c),
                        None => return Err(unterminated_quote()),
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some('\n') => {}
                            Some(c @ ('"' | '\\' | '$' | '`')) => current.push(c),
                            Some(c) => {
                                current.push('\\');
                                current.push(c);
                            }
                            None => return Err(unterminated_quote()),
                        },
                        Some(c) => current.push(c),
                        None => return Err(unterminated_quote()),
                    }
                }
            }
            '\\' => match chars.next() {
                Some('\n') => {}
                Some('\r') if chars.peek() == Some(&'\n') => {
                    chars.next();
                }
                Some(c) => {
                    in_word = true;
                    current.push(c);
                }
                None => {}
            },
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

fn unterminated_quote() -> FileManagerError {
    FileManagerError::InvalidCurl("Unterminated quote".to_string())
}
