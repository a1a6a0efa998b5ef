//! Tests for the comment, doctype, processing instruction, CDATA and text
//! scanners, run one at a time at the start of the input.

use lenient_common::{DiagnosticCode, DiagnosticLog, Position};
use lenient_dom::{Fragment, NodeType, ProcessingInstructionData};
use lenient_html::{Cursor, HtmlScanner, NodeScanner, Scan};

/// Run a single scanner at offset 0 and return its result, the diagnostics
/// and the caret afterwards.
fn scan(input: &str, scanner: NodeScanner) -> (Option<Scan>, DiagnosticLog, usize) {
    let mut log = DiagnosticLog::new();
    let (result, caret) = {
        let mut html_scanner = HtmlScanner::new(input, &mut log);
        let result = html_scanner.try_start(scanner);
        (result, html_scanner.cursor().caret())
    };
    (result, log, caret)
}

/// Run the whole dispatcher once.
fn scan_next(input: &str) -> (NodeScanner, Fragment, DiagnosticLog) {
    let mut log = DiagnosticLog::new();
    let (scanner, scan) = {
        let mut html_scanner = HtmlScanner::new(input, &mut log);
        html_scanner.next_node().expect("non-empty input")
    };
    (scanner, scan.into_fragment(), log)
}

fn complete(result: Option<Scan>) -> Fragment {
    match result {
        Some(Scan::Complete(fragment)) => fragment,
        other => panic!("expected a complete node, got {other:?}"),
    }
}

// ========== Cursor ==========

#[test]
fn test_cursor_tracks_lines_and_columns() {
    let text = "ab\ncé\nf";
    let mut cursor = Cursor::new(text);
    assert_eq!(cursor.position(), Position::START);

    cursor.advance(6);
    assert_eq!(cursor.position(), Position::new(2, 3));
    assert_eq!(cursor.position_of(6), Position::new(2, 3));
    assert_eq!(cursor.position_of(7), Position::new(3, 1));
    assert_eq!(cursor.position_of(1), Position::new(1, 2));

    // Never moves backwards.
    cursor.advance(2);
    assert_eq!(cursor.caret(), 6);

    cursor.advance_to_end();
    assert!(cursor.at_end());
    assert_eq!(cursor.position(), Position::new(3, 2));
}

#[test]
fn test_cursor_search_helpers() {
    let cursor = Cursor::new("<a>x</A>");
    assert_eq!(cursor.find(">", 0), Some(2));
    assert_eq!(cursor.find_within("x", 0, 3), None);
    assert_eq!(cursor.find_ignore_case("</a>", 0), Some(4));
    assert_eq!(cursor.slice(5, 2), "");
    assert!(cursor.starts_with("<a"));
}

// ========== Comments ==========

#[test]
fn test_comment() {
    let (result, log, caret) = scan("<!-- hello -->after", NodeScanner::Comment);
    let fragment = complete(result);
    assert_eq!(fragment.node_type, NodeType::Comment(" hello ".to_string()));
    assert_eq!(fragment.position, Position::START);
    assert!(log.is_empty());
    assert_eq!(caret, 14);
}

#[test]
fn test_comment_embedded_double_hyphen() {
    let (result, log, _) = scan("<!--a--b-->", NodeScanner::Comment);
    assert_eq!(complete(result).node_type, NodeType::Comment("a- b".to_string()));
    assert_eq!(log.codes(), vec![DiagnosticCode::EmbeddedDoubleHyphen]);
    assert_eq!(log.diagnostics()[0].position, Position::new(1, 6));
    assert_eq!(log.diagnostics()[0].args, vec!["1:1".to_string()]);
}

#[test]
fn test_comment_without_close() {
    let (result, log, caret) = scan("<!-- open", NodeScanner::Comment);
    assert_eq!(complete(result).node_type, NodeType::Comment(" open".to_string()));
    assert_eq!(log.codes(), vec![DiagnosticCode::CloseNotFound]);
    assert_eq!(log.diagnostics()[0].args, vec!["-->".to_string()]);
    assert_eq!(caret, 9);
}

#[test]
fn test_comment_double_hyphen_then_end_of_input() {
    let (result, log, _) = scan("<!--a--b", NodeScanner::Comment);
    assert_eq!(complete(result).node_type, NodeType::Comment("a- b".to_string()));
    assert_eq!(
        log.codes(),
        vec![
            DiagnosticCode::EmbeddedDoubleHyphen,
            DiagnosticCode::CloseNotFound
        ]
    );
}

#[test]
fn test_bogus_comment() {
    let (result, log, caret) = scan("<!foo--bar>rest", NodeScanner::Comment);
    assert_eq!(
        complete(result).node_type,
        NodeType::Comment("foo- bar".to_string())
    );
    assert_eq!(
        log.codes(),
        vec![DiagnosticCode::BogusCommentStarted, DiagnosticCode::CloseFound]
    );
    assert_eq!(log.diagnostics()[1].position, Position::new(1, 11));
    assert_eq!(caret, 11);
}

#[test]
fn test_bogus_comment_without_close() {
    let (result, log, caret) = scan("<!x", NodeScanner::Comment);
    assert_eq!(complete(result).node_type, NodeType::Comment("x".to_string()));
    assert_eq!(
        log.codes(),
        vec![
            DiagnosticCode::BogusCommentStarted,
            DiagnosticCode::CloseNotFound
        ]
    );
    assert_eq!(log.diagnostics()[1].position, Position::new(1, 4));
    assert_eq!(caret, 3);
}

#[test]
fn test_comment_declines_other_markup() {
    let (result, log, caret) = scan("<div>", NodeScanner::Comment);
    assert!(result.is_none());
    assert!(log.is_empty());
    assert_eq!(caret, 0);
}

// ========== Doctype ==========

#[test]
fn test_doctype_is_case_insensitive() {
    let (result, log, _) = scan("<!DoCtYpE html>", NodeScanner::DocumentType);
    assert_eq!(
        complete(result).node_type,
        NodeType::DocumentType("html".to_string())
    );
    assert!(log.is_empty());
}

#[test]
fn test_doctype_keeps_public_identifier() {
    let (result, _, _) = scan(
        "<!doctype\nhtml PUBLIC \"-//W3C//DTD HTML 4.01//EN\">",
        NodeScanner::DocumentType,
    );
    assert_eq!(
        complete(result).node_type,
        NodeType::DocumentType("html PUBLIC \"-//W3C//DTD HTML 4.01//EN\"".to_string())
    );
}

#[test]
fn test_doctype_requires_whitespace() {
    let (result, _, caret) = scan("<!doctypehtml>", NodeScanner::DocumentType);
    assert!(result.is_none());
    assert_eq!(caret, 0);

    // The dispatcher falls through to a bogus comment.
    let (scanner, fragment, _) = scan_next("<!doctypehtml>");
    assert_eq!(scanner, NodeScanner::Comment);
    assert_eq!(fragment.node_type, NodeType::Comment("doctypehtml".to_string()));
}

#[test]
fn test_doctype_without_close() {
    let (result, log, _) = scan("<!doctype html", NodeScanner::DocumentType);
    assert_eq!(
        complete(result).node_type,
        NodeType::DocumentType("html".to_string())
    );
    assert_eq!(log.codes(), vec![DiagnosticCode::CloseNotFound]);
    assert_eq!(log.diagnostics()[0].args, vec![">".to_string()]);
}

// ========== Processing instructions ==========

fn pi(target: &str, content: &str) -> NodeType {
    NodeType::ProcessingInstruction(ProcessingInstructionData {
        target: target.to_string(),
        content: content.to_string(),
    })
}

#[test]
fn test_processing_instruction() {
    let (result, log, caret) = scan("<?php echo 1; ?>", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, pi("?php", "echo 1; "));
    assert!(log.is_empty());
    assert_eq!(caret, 16);
}

#[test]
fn test_processing_instruction_target_needs_whitespace() {
    let (result, log, caret) = scan("<?xml?>", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, NodeType::Text("<?xml?>".to_string()));
    assert_eq!(log.codes(), vec![DiagnosticCode::IgnoringProcessingInstruction]);
    assert_eq!(caret, 7);

    // `?>` before the first whitespace is part of the target.
    let (result, log, caret) = scan("<?xml?>\n<p>", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, pi("?xml?>", "\n<p>"));
    assert_eq!(log.codes(), vec![DiagnosticCode::StartedButNotClosed]);
    assert_eq!(log.diagnostics()[0].args, vec!["?xml?>".to_string()]);
    assert_eq!(caret, 11);
}

#[test]
fn test_processing_instruction_trims_one_space() {
    let (result, log, _) = scan("<?php  x ?>", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, pi("?php", " x "));
    assert!(log.is_empty());

    let (result, _, _) = scan("<?php\nx?>", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, pi("?php", "\nx"));
}

#[test]
fn test_processing_instruction_without_close() {
    let (result, log, caret) = scan("<?target no terminator", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, pi("?target", "no terminator"));
    assert_eq!(log.codes(), vec![DiagnosticCode::StartedButNotClosed]);
    assert_eq!(log.diagnostics()[0].args, vec!["?target".to_string()]);
    assert_eq!(log.diagnostics()[0].position, Position::START);
    assert_eq!(caret, 22);
}

#[test]
fn test_processing_instruction_without_target_boundary() {
    let (result, log, _) = scan("<?abc", NodeScanner::ProcessingInstruction);
    assert_eq!(complete(result).node_type, NodeType::Text("<?abc".to_string()));
    assert_eq!(
        log.codes(),
        vec![DiagnosticCode::IgnoringProcessingInstruction]
    );
}

// ========== CDATA ==========

#[test]
fn test_cdata() {
    let (result, log, _) = scan("<![CDATA[a<b]]>", NodeScanner::CData);
    assert_eq!(complete(result).node_type, NodeType::CData("a<b".to_string()));
    assert!(log.is_empty());
}

#[test]
fn test_cdata_without_close() {
    let (result, log, _) = scan("<![CDATA[open", NodeScanner::CData);
    assert_eq!(complete(result).node_type, NodeType::CData("open".to_string()));
    assert_eq!(log.diagnostics()[0].args, vec!["]]>".to_string()]);
}

#[test]
fn test_cdata_wins_over_bogus_comment() {
    let (scanner, _, log) = scan_next("<![CDATA[x]]>");
    assert_eq!(scanner, NodeScanner::CData);
    assert!(log.is_empty());
}

// ========== Text ==========

#[test]
fn test_text_runs_to_next_angle_bracket() {
    let (result, _, caret) = scan("hello <b>", NodeScanner::Text);
    assert_eq!(complete(result).node_type, NodeType::Text("hello ".to_string()));
    assert_eq!(caret, 6);
}

#[test]
fn test_text_claims_unscannable_angle_bracket() {
    let (scanner, fragment, log) = scan_next("< 3 <b>");
    assert_eq!(scanner, NodeScanner::Text);
    assert_eq!(fragment.node_type, NodeType::Text("< 3 ".to_string()));
    assert!(log.is_empty());
}

#[test]
fn test_priority_order() {
    assert_eq!(NodeScanner::PRIORITY[0], NodeScanner::Element);
    assert_eq!(NodeScanner::PRIORITY[5], NodeScanner::Text);
    assert_eq!(NodeScanner::Element.to_string(), "element");
}
