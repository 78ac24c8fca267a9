use celebrate_bot::utils::render_text_block;

/// Test: Short input renders as a 3-line content-fitting block
#[test]
fn test_short_input_renders_three_line_block() {
    let block = render_text_block("hello world", 20, 28);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "###############");
    assert_eq!(lines[1], "# hello world #");
    assert_eq!(lines[2], "###############");
}

/// Test: All lines are rectangle-aligned and the borders match
#[test]
fn test_all_lines_rectangle_aligned() {
    let inputs = [
        "Short string",
        "A longer string that exceeds the maximum line length and needs to be wrapped",
        "A very long string that is more than 200 characters. It needs to be wrapped into \
         multiple lines to fit within the specified formatting rules. The goal is to ensure \
         that the output adheres to the specified guidelines without any compromise and the \
         wrapping keeps every line within the declared width.",
    ];

    for input in inputs {
        let block = render_text_block(input, 80, 15);
        let lines: Vec<&str> = block.lines().collect();

        assert!(lines.len() >= 3, "block should have borders plus content");

        let width = lines[0].len();
        assert_eq!(lines[lines.len() - 1].len(), width, "borders must match");

        for line in &lines {
            assert_eq!(line.len(), width, "line {line:?} breaks alignment");
            assert!(line.len() <= 80, "line exceeds the declared width");
        }
    }
}

/// Test: No wrapped line exceeds the maximum width
#[test]
fn test_wrapped_lines_respect_width() {
    let input = "one two three four five six seven eight nine ten eleven twelve ".repeat(10);
    let block = render_text_block(&input, 40, 28);

    for line in block.lines() {
        assert!(line.len() <= 40);
    }
}

/// Test: The words-per-line cap forces a wrap before the width does
#[test]
fn test_words_per_line_cap() {
    let block = render_text_block("a b c d e f", 120, 2);
    let lines: Vec<&str> = block.lines().collect();

    // two borders plus three content lines of two words each
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[1], "# a b #");
    assert_eq!(lines[2], "# c d #");
    assert_eq!(lines[3], "# e f #");
}

/// Test: Blank input still produces a bordered block with one empty line
#[test]
fn test_blank_input_produces_border_only_block() {
    let block = render_text_block("   ", 120, 28);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "####");
    assert_eq!(lines[1], "#  #");
    assert_eq!(lines[2], "####");
}

/// Test: An unsplit overlong word overflows instead of being truncated
#[test]
fn test_overlong_word_overflows() {
    let block = render_text_block("supercalifragilisticexpialidocious", 10, 28);
    let lines: Vec<&str> = block.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].len(), 10);
    assert_eq!(lines[2].len(), 10);
    assert!(lines[1].contains("supercalifragilisticexpialidocious"));
    assert!(lines[1].len() > 10, "overlong word should overflow, not truncate");
}

/// Test: Accented text is measured in characters, not bytes
#[test]
fn test_non_ascii_lines_stay_aligned() {
    let block = render_text_block(
        "La vie est un sommeil, l'amour en est le rêve -- Alfred de Musset à café",
        40,
        15,
    );
    let lines: Vec<&str> = block.lines().collect();

    let width = lines[0].chars().count();
    assert!(width <= 40);

    for line in &lines {
        assert_eq!(
            line.chars().count(),
            width,
            "line {line:?} breaks alignment"
        );
    }
}

/// Test: Content is centered with the extra space split floor-left
#[test]
fn test_centering_splits_padding() {
    // "ab cd" (5) and "efghij" (6) wrap at width 10 (budget 6)
    let block = render_text_block("ab cd efghij", 14, 1);
    let lines: Vec<&str> = block.lines().collect();

    // one word per line: "ab", "cd", "efghij"; width = 6 + 4 = 10
    assert_eq!(lines[0].len(), 10);
    assert_eq!(lines[1], "#   ab   #");
    assert_eq!(lines[2], "#   cd   #");
    assert_eq!(lines[3], "# efghij #");
}
