/**
 * HTML Parser Tests
 *
 * Tree-building behavior of the template parser: element nesting,
 * attribute shapes, void elements and error recovery.
 */

#[cfg(test)]
mod tests {
    use react_template_compiler::ml_parser::ast::Node;
    use react_template_compiler::ml_parser::parser::{ParseTreeResult, Parser};

    fn parse(source: &str) -> ParseTreeResult {
        Parser::new().parse(source, "test.html")
    }

    fn expect_element<'a>(node: &'a Node, name: &str) -> &'a react_template_compiler::ml_parser::ast::Element {
        match node {
            Node::Element(element) => {
                assert_eq!(element.name, name);
                element
            }
            other => panic!("expected <{}> element, got {:?}", name, other),
        }
    }

    fn expect_text(node: &Node, value: &str) {
        match node {
            Node::Text(text) => assert_eq!(text.value, value),
            other => panic!("expected text {:?}, got {:?}", value, other),
        }
    }

    mod text_nodes {
        use super::*;

        #[test]
        fn should_parse_root_level_text_nodes() {
            let result = parse("a");
            assert!(result.errors.is_empty());
            expect_text(&result.root_nodes[0], "a");
        }

        #[test]
        fn should_parse_text_nodes_inside_elements() {
            let result = parse("<div>a</div>");
            let div = expect_element(&result.root_nodes[0], "div");
            expect_text(&div.children[0], "a");
        }

        #[test]
        fn should_keep_binding_markers_verbatim() {
            let result = parse("<span>{{ label }}</span>");
            let span = expect_element(&result.root_nodes[0], "span");
            expect_text(&span.children[0], "{{ label }}");
        }

        #[test]
        fn should_treat_lone_lt_as_text() {
            let result = parse("1 < 2");
            assert!(result.errors.is_empty());
            expect_text(&result.root_nodes[0], "1 < 2");
        }
    }

    mod elements {
        use super::*;

        #[test]
        fn should_parse_nested_elements() {
            let result = parse("<div><ul><li>x</li></ul></div>");
            assert!(result.errors.is_empty());
            let div = expect_element(&result.root_nodes[0], "div");
            let ul = expect_element(&div.children[0], "ul");
            let li = expect_element(&ul.children[0], "li");
            expect_text(&li.children[0], "x");
        }

        #[test]
        fn should_parse_sibling_elements_at_root() {
            let result = parse("<template name=\"a\"></template><template></template>");
            assert_eq!(result.root_nodes.len(), 2);
            expect_element(&result.root_nodes[0], "template");
            expect_element(&result.root_nodes[1], "template");
        }

        #[test]
        fn should_parse_self_closing_elements() {
            let result = parse("<div><item /></div>");
            assert!(result.errors.is_empty());
            let div = expect_element(&result.root_nodes[0], "div");
            let item = expect_element(&div.children[0], "item");
            assert!(item.is_self_closing);
            assert!(item.children.is_empty());
        }

        #[test]
        fn should_close_void_elements_implicitly() {
            let result = parse("<div><br><span>x</span></div>");
            assert!(result.errors.is_empty());
            let div = expect_element(&result.root_nodes[0], "div");
            assert_eq!(div.children.len(), 2);
            expect_element(&div.children[0], "br");
            expect_element(&div.children[1], "span");
        }
    }

    mod attributes {
        use super::*;

        #[test]
        fn should_parse_double_and_single_quoted_values() {
            let result = parse("<div class=\"a b\" id='x'></div>");
            let div = expect_element(&result.root_nodes[0], "div");
            assert_eq!(div.attr_value("class"), Some("a b"));
            assert_eq!(div.attr_value("id"), Some("x"));
        }

        #[test]
        fn should_parse_unquoted_values() {
            let result = parse("<div tabindex=1></div>");
            let div = expect_element(&result.root_nodes[0], "div");
            assert_eq!(div.attr_value("tabindex"), Some("1"));
        }

        #[test]
        fn should_parse_valueless_attributes_as_none() {
            let result = parse("<input disabled>");
            let input = expect_element(&result.root_nodes[0], "input");
            let disabled = input.attr("disabled").expect("attribute present");
            assert_eq!(disabled.value, None);
        }

        #[test]
        fn should_keep_attribute_document_order() {
            let result = parse("<div b=\"2\" a=\"1\" c=\"3\"></div>");
            let div = expect_element(&result.root_nodes[0], "div");
            let names: Vec<&str> = div.attrs.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(names, vec!["b", "a", "c"]);
        }

        #[test]
        fn should_parse_binding_values_verbatim() {
            let result = parse("<div class=\"{{ active }}\"></div>");
            let div = expect_element(&result.root_nodes[0], "div");
            assert_eq!(div.attr_value("class"), Some("{{ active }}"));
        }
    }

    mod comments {
        use super::*;

        #[test]
        fn should_parse_comments() {
            let result = parse("<div><!-- note --></div>");
            let div = expect_element(&result.root_nodes[0], "div");
            match &div.children[0] {
                Node::Comment(comment) => assert_eq!(comment.value, " note "),
                other => panic!("expected comment, got {:?}", other),
            }
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn should_report_unexpected_closing_tag_and_recover() {
            let result = parse("<div></span></div>");
            assert_eq!(result.errors.len(), 1);
            assert!(result.errors[0].msg.contains("Unexpected closing tag \"span\""));
            expect_element(&result.root_nodes[0], "div");
        }

        #[test]
        fn should_report_unclosed_tags_at_eof() {
            let result = parse("<div><span>");
            assert!(!result.errors.is_empty());
            assert!(result
                .errors
                .iter()
                .all(|e| e.msg.contains("Unclosed tag")));
            // Best-effort tree is still produced
            let div = expect_element(&result.root_nodes[0], "div");
            expect_element(&div.children[0], "span");
        }

        #[test]
        fn should_report_implicitly_closed_tags() {
            let result = parse("<div><span></div>");
            assert_eq!(result.errors.len(), 1);
            assert!(result.errors[0].msg.contains("implicitly closed"));
        }

        #[test]
        fn should_report_error_location() {
            let result = parse("<div>\n</span>");
            assert_eq!(result.errors.len(), 1);
            let span = result.errors[0].span;
            assert_eq!(span.start.line, 1);
            assert_eq!(span.start.col, 0);
        }
    }
}
