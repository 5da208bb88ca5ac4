use std::io::{self, BufRead, Write};

/// Split a comma-separated line into trimmed, non-empty URLs.
///
/// Order and repeated entries are preserved; repeats are left for the content
/// hash to catch.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}

/// Prompt on stdout and read one line of URLs from `reader`
pub fn prompt_for_urls<R: BufRead>(reader: &mut R, prompt: &str) -> io::Result<Vec<String>> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", prompt)?;
    stdout.flush()?;

    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(parse_url_list(&line))
}
