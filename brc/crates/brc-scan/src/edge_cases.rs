//! Edge case tests for brc-scan

#[cfg(test)]
mod tests {
    use crate::{check_source, Mode, Scanner};
    use brc_util::{DiagnosticCode, Handler};

    fn messages(source: &str) -> Vec<String> {
        check_source(source).into_iter().map(|d| d.message).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(check_source("").is_empty());
    }

    #[test]
    fn test_edge_blank_lines_only() {
        assert!(check_source("\n\n\n").is_empty());
    }

    #[test]
    fn test_edge_single_opener() {
        assert_eq!(messages("("), vec!["Unclosed ( at 1:1"]);
    }

    #[test]
    fn test_edge_deep_nesting_no_recursion() {
        // The stack is an explicit Vec, so depth is bounded by memory,
        // not the call stack.
        let depth = 10_000;
        let mut source = String::new();
        for _ in 0..depth {
            source.push('(');
        }
        for _ in 0..depth {
            source.push(')');
        }
        assert!(check_source(&source).is_empty());
    }

    #[test]
    fn test_edge_deep_unclosed_nesting() {
        let source = "[".repeat(500);
        let diags = check_source(&source);
        assert_eq!(diags.len(), 500);
        assert_eq!(diags[0].message, "Unclosed [ at 1:1");
        assert_eq!(diags[499].message, "Unclosed [ at 1:500");
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let source = "f(\r\n);\r\n";
        assert!(check_source(source).is_empty());
    }

    #[test]
    fn test_edge_no_trailing_newline() {
        assert_eq!(messages("("), messages("(\n"));
    }

    #[test]
    fn test_edge_unicode_columns_count_characters() {
        // Two multi-byte characters precede the opener: column 3, not a
        // byte offset.
        assert_eq!(messages("αβ("), vec!["Unclosed ( at 1:3"]);
    }

    #[test]
    fn test_edge_unicode_inside_string() {
        assert!(check_source("s = \"ถนน(ใหญ่\"; f();").is_empty());
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        // `/*` inside a string does not open a comment; the brace after
        // the string is real code.
        assert_eq!(messages("s = \"/*\"; {"), vec!["Unclosed { at 1:11"]);
    }

    #[test]
    fn test_edge_quote_inside_line_comment() {
        // The comment hides the quote, so the next line's bracket is code.
        let source = "// it's fine\n]\n";
        assert_eq!(messages(source), vec!["Unexpected closing ] at line 2:1"]);
    }

    #[test]
    fn test_edge_quote_inside_block_comment() {
        let source = "/* don't */ (x)";
        assert!(check_source(source).is_empty());
    }

    #[test]
    fn test_edge_block_comment_never_closed() {
        // Everything after /* is discarded through end of input; the open
        // paren before it is the only defect.
        let source = "f( /* begins\nmore ) ) )\n";
        assert_eq!(messages(source), vec!["Unclosed ( at 1:2"]);
    }

    #[test]
    fn test_edge_block_comment_close_split_across_lines_does_not_close() {
        // `*` at end of one line and `/` at the start of the next is not
        // a close marker; the scan is strictly line-based.
        let mut handler = Handler::new();
        let mut scanner = Scanner::new(&mut handler);
        scanner.scan_line("/* comment *", 1);
        scanner.scan_line("/ still comment", 2);
        assert_eq!(scanner.mode(), Mode::BlockComment);
    }

    #[test]
    fn test_edge_adjacent_comment_open_close() {
        // `/*/` opens a comment; the trailing slash is comment text.
        let mut handler = Handler::new();
        let mut scanner = Scanner::new(&mut handler);
        scanner.scan_line("/*/", 1);
        assert_eq!(scanner.mode(), Mode::BlockComment);
    }

    #[test]
    fn test_edge_star_slash_in_code_mode() {
        // A stray */ in code mode is two ordinary characters.
        assert!(check_source("a */ b").is_empty());
    }

    #[test]
    fn test_edge_mismatch_spans_lines() {
        let source = "{\n)\n";
        assert_eq!(
            messages(source),
            vec!["Mismatch: Expected } for {(1:1) but found ) at 2:1"]
        );
    }

    #[test]
    fn test_edge_all_defect_codes_are_errors() {
        let diags = check_source(")\n(\n[}\n");
        assert!(!diags.is_empty());
        for diag in &diags {
            assert_eq!(diag.level, brc_util::Level::Error);
            assert!(matches!(
                diag.code,
                Some(DiagnosticCode::E_SCAN_UNEXPECTED_CLOSER)
                    | Some(DiagnosticCode::E_SCAN_MISMATCHED_PAIR)
                    | Some(DiagnosticCode::E_SCAN_UNCLOSED_OPENER)
            ));
        }
    }

    #[test]
    fn test_edge_tabs_count_one_column() {
        assert_eq!(messages("\t("), vec!["Unclosed ( at 1:2"]);
    }

    #[test]
    fn test_edge_string_at_end_of_line_then_code() {
        // Unterminated string ends at end of line; string mode does not
        // leak into line 2.
        let source = "s = \"open (\nt = [;\n";
        assert_eq!(messages(source), vec!["Unclosed [ at 2:5"]);
    }
}
