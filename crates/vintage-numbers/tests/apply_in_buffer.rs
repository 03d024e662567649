use pretty_assertions::assert_eq;
use vintage_numbers::{Direction, NumberHost, Selection, TextBuffer, apply_to_document};

fn buffer_with(text: &str, regions: &[(usize, usize)]) -> TextBuffer {
    TextBuffer::with_selections(
        text,
        regions
            .iter()
            .map(|&(start, end)| Selection::new(start, end))
            .collect(),
    )
}

fn carets(offsets: &[usize]) -> Vec<Selection> {
    offsets.iter().copied().map(Selection::caret).collect()
}

#[test]
fn test_increment_in_buffer() {
    let mut buffer = buffer_with(
        "\
-1
foo 2
foo 3 bar 9
foo 5 bar
foo 6 bar
0XFF
0xfe
-0xff
0b1010
-0b1011
011
017
-020
",
        &[
            (0, 0),
            (3, 3),
            (15, 15),
            (27, 27),
            (31, 34),
            (41, 41),
            (46, 46),
            (51, 51),
            (57, 57),
            (64, 64),
            (72, 72),
            (76, 76),
            (80, 80),
        ],
    );

    let report = apply_to_document(&mut buffer, Direction::Increment);

    assert_eq!(
        buffer.text(),
        "\
0
foo 3
foo 3 bar 10
foo 5 bar
foo 6 bar
0x100
0xff
-0xfe
0b1011
-0b1010
012
020
-017
"
    );
    assert_eq!(
        buffer.selections(),
        carets(&[0, 6, 19, 45, 50, 56, 63, 71, 75, 79, 84])
    );
    assert_eq!(report.adjusted(), 11);
    // The caret past "5" and the "foo 6" selection.
    assert_eq!(report.skipped, 2);
}

#[test]
fn test_decrement_in_buffer() {
    let mut buffer = buffer_with(
        "\
0
foo 2
foo 3 bar 10
foo 5 bar
foo 6 bar
0x100
0XFF
-0xfe
0b1011
-0b1010
012
020
-017
",
        &[
            (0, 0),
            (2, 2),
            (14, 14),
            (26, 26),
            (30, 33),
            (41, 41),
            (47, 47),
            (52, 52),
            (58, 58),
            (65, 65),
            (73, 73),
            (77, 77),
            (81, 81),
        ],
    );

    apply_to_document(&mut buffer, Direction::Decrement);

    assert_eq!(
        buffer.text(),
        "\
-1
foo 1
foo 3 bar 9
foo 5 bar
foo 6 bar
0xff
0xfe
-0xff
0b1010
-0b1011
011
017
-020
"
    );
    assert_eq!(
        buffer.selections(),
        carets(&[1, 7, 19, 44, 49, 55, 62, 70, 74, 78, 83])
    );
}

#[test]
fn test_increment_in_empty_buffer() {
    let mut buffer = TextBuffer::new("");
    let report = apply_to_document(&mut buffer, Direction::Increment);

    assert_eq!(buffer.text(), "");
    assert!(report.is_noop());
}

#[test]
fn test_carets_land_on_last_character() {
    let mut buffer = buffer_with("let a = 99;\nlet b = 0x0f;\n", &[(0, 0), (12, 12)]);
    apply_to_document(&mut buffer, Direction::Increment);

    let text = buffer.text();
    assert_eq!(text, "let a = 100;\nlet b = 0x10;\n");

    let chars: Vec<char> = text.chars().collect();
    let selections = buffer.selections();
    assert_eq!(selections, carets(&[10, 24]));
    assert_eq!(chars[selections[0].end], '0');
    assert_eq!(chars[selections[1].end], '0');
    assert_eq!(chars[selections[1].end + 1], ';');
}

#[test]
fn test_crlf_document() {
    let mut buffer = buffer_with("a 9\r\nb 9\r\n", &[(0, 0), (5, 5)]);
    apply_to_document(&mut buffer, Direction::Increment);

    assert_eq!(buffer.text(), "a 10\r\nb 10\r\n");
    assert_eq!(buffer.selections(), carets(&[3, 9]));
}

#[test]
fn test_non_ascii_line() {
    let mut buffer = buffer_with("größe = 7\n", &[(0, 0)]);
    apply_to_document(&mut buffer, Direction::Decrement);

    assert_eq!(buffer.text(), "größe = 6\n");
    assert_eq!(buffer.selections(), carets(&[8]));
}
