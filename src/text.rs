//! Plain text helpers: greedy word wrapping and lossy ASCII coercion.

/// Wrap `text` into lines of at most `columns` characters.
///
/// Input is split on runs of whitespace (line breaks included) and words are
/// packed greedily: a word joins the current line when
/// `line + 1 + word <= columns`, otherwise it starts a new line. A word longer
/// than `columns` is kept whole on its own line. Lines are joined with `\n`.
///
/// Wrapping already wrapped text at the same width returns it unchanged.
pub fn word_wrap(text: &str, columns: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= columns {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines.join("\n")
}

/// Encode `text` as 7-bit ASCII bytes.
///
/// ASCII characters pass through. Common accented Latin letters and
/// typographic punctuation are folded to their closest ASCII look-alike;
/// anything else is replaced by `?`. Callers that need a specific code page
/// must transliterate before building the command.
pub fn to_ascii_lossy(text: &str) -> Vec<u8> {
    let mut buf = Vec::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            buf.push(c as u8);
            continue;
        }
        match fold(c) {
            Some(folded) => buf.extend_from_slice(folded.as_bytes()),
            None => buf.push(b'?'),
        }
    }
    buf
}

fn fold(c: char) -> Option<&'static str> {
    let folded = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => "A",
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => "a",
        'Æ' => "AE",
        'æ' => "ae",
        'Ç' => "C",
        'ç' => "c",
        'È' | 'É' | 'Ê' | 'Ë' => "E",
        'è' | 'é' | 'ê' | 'ë' => "e",
        'Ì' | 'Í' | 'Î' | 'Ï' => "I",
        'ì' | 'í' | 'î' | 'ï' => "i",
        'Ñ' => "N",
        'ñ' => "n",
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => "O",
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => "o",
        'Ù' | 'Ú' | 'Û' | 'Ü' => "U",
        'ù' | 'ú' | 'û' | 'ü' => "u",
        'Ý' => "Y",
        'ý' | 'ÿ' => "y",
        'ß' => "ss",
        '\u{00A0}' => " ",
        '‘' | '’' | '‚' | '′' => "'",
        '“' | '”' | '„' | '″' => "\"",
        '–' | '—' | '‐' | '−' => "-",
        '…' => "...",
        '•' | '·' => "*",
        _ => return None,
    };
    Some(folded)
}
