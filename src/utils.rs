use chrono::NaiveDate;

const BORDER_CHAR: char = '#';

/// Wraps `text` into a bordered block of centered lines.
///
/// Words are packed greedily: a word joins the current line only while the
/// line stays within `max_line_width - 4` characters (leaving room for the
/// border and a one-space margin on each side) and holds fewer than
/// `max_words_per_line` words. The block width fits the longest wrapped
/// line, capped at `max_line_width`.
///
/// A single word longer than the usable width is placed verbatim on its
/// own line and overflows the declared width rather than being split or
/// truncated.
pub fn render_text_block(text: &str, max_line_width: usize, max_words_per_line: usize) -> String {
    let budget = max_line_width.saturating_sub(4);

    let mut wrapped: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut word_count = 0;

    for word in text.split_whitespace() {
        // Character counts, not byte lengths: accented text must not
        // under-fill a line.
        let word_len = word.chars().count();
        let candidate_len = if current.is_empty() {
            word_len
        } else {
            current.chars().count() + 1 + word_len
        };

        if !current.is_empty() && (candidate_len > budget || word_count >= max_words_per_line) {
            wrapped.push(std::mem::take(&mut current));
            word_count = 0;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        word_count += 1;
    }

    if !current.is_empty() {
        wrapped.push(current);
    }

    // An empty input still produces a block with one empty padded line.
    if wrapped.is_empty() {
        wrapped.push(String::new());
    }

    let longest = wrapped
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = (longest + 4).min(max_line_width);

    let border = BORDER_CHAR.to_string().repeat(width);

    let mut lines = Vec::with_capacity(wrapped.len() + 2);
    lines.push(border.clone());

    for line in &wrapped {
        let line_len = line.chars().count();

        if line_len + 4 > width {
            // Unsplit overlong word; overflows the block width.
            lines.push(format!("{BORDER_CHAR} {line} {BORDER_CHAR}"));
            continue;
        }

        let extra = width - line_len - 4;
        let left = extra / 2;
        let right = extra - left;

        lines.push(format!(
            "{}{}{}{}{}",
            BORDER_CHAR,
            " ".repeat(left + 1),
            line,
            " ".repeat(right + 1),
            BORDER_CHAR,
        ));
    }

    lines.push(border);
    lines.join("\n")
}

/// Formats a date as zero-padded day plus three-letter month, e.g. "05-Feb".
pub fn day_month(date: NaiveDate) -> String {
    date.format("%d-%b").to_string()
}

/// Returns the indices of every date cell that contains `today` as a
/// substring, in ascending row order. Substring matching rather than
/// equality, because a date field may carry extra text or formatting; no
/// year is compared, so matches recur every year.
pub fn match_indices(dates: &[String], today: &str) -> Vec<usize> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, date)| date.contains(today))
        .map(|(index, _)| index)
        .collect()
}

/// Whole-year tenure: current calendar year minus the 4-digit year found
/// in the join date. Works for both "15-Jun-2020" and "2020-06-15" style
/// cells by taking the last 4-digit component. `None` when no year
/// component is present.
pub fn tenure_years(join_date: &str, current_year: i32) -> Option<i32> {
    let year = join_date
        .split(|c: char| !c.is_ascii_digit())
        .filter(|part| part.len() == 4)
        .filter_map(|part| part.parse::<i32>().ok())
        .last()?;

    Some(current_year - year)
}
