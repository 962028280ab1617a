/**
 * Template Rendering Tests
 *
 * Covers the template-set contract: binding classification in emitted
 * attributes, loop extraction ordering, output ordering and the render
 * error taxonomy.
 */

#[cfg(test)]
mod tests {
    use react_template_compiler::ml_parser::ast::{Element, Node};
    use react_template_compiler::ml_parser::{remove_whitespaces, Parser};
    use react_template_compiler::react::error::RenderError;
    use react_template_compiler::react::templates::{
        render_default_template, render_named_template, render_template_set, TemplateSet,
    };
    use react_template_compiler::react::TagToVar;

    /// Parse template markup and return the root-level `<template>` elements.
    fn parse_templates(source: &str) -> Vec<Element> {
        let result = Parser::new().parse(source, "test.html");
        assert!(result.errors.is_empty(), "parse errors: {:?}", result.errors);
        remove_whitespaces(result.root_nodes)
            .into_iter()
            .filter_map(|node| match node {
                Node::Element(element) if element.name == "template" => Some(element),
                _ => None,
            })
            .collect()
    }

    fn single_template(source: &str) -> Element {
        let mut templates = parse_templates(source);
        assert_eq!(templates.len(), 1);
        templates.remove(0)
    }

    fn tag_to_var(pairs: &[(&str, &str)]) -> TagToVar {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    mod default_templates {
        use super::*;

        #[test]
        fn should_render_strict_binding_attr_and_text() {
            let template =
                single_template("<template><div class=\"{{ active }}\">{{ label }}</div></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert_eq!(
                rendered,
                "export default function(props) {\n\
                 \x20\x20return (\n\
                 \x20\x20\x20\x20<div class={ active }>\n\
                 \x20\x20\x20\x20\x20\x20{ label }\n\
                 \x20\x20\x20\x20</div>\n\
                 \x20\x20);\n\
                 }\n"
            );
        }

        #[test]
        fn should_render_literal_attrs_quoted() {
            let template = single_template("<template><div class=\"box\"></div></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert!(rendered.contains("<div class='box' />"));
        }

        #[test]
        fn should_render_interpolated_attrs_as_template_strings() {
            let template =
                single_template("<template><a title=\"Hi {{ name }}!\"></a></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert!(rendered.contains("<a title={ `Hi ${ name }!` } />"));
        }

        #[test]
        fn should_render_flag_attributes_as_true() {
            let template = single_template("<template><input disabled></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert!(rendered.contains("<input disabled={ true } />"));
        }

        #[test]
        fn should_render_empty_attributes_as_true() {
            let template = single_template("<template><input readonly=\"\"></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert!(rendered.contains("<input readonly={ true } />"));
        }

        #[test]
        fn should_lowercase_boolean_bindings() {
            let template = single_template("<template><input checked=\"{{ TRUE }}\"></template>");
            let rendered = render_default_template(&template, &TagToVar::new()).unwrap();
            assert!(rendered.contains("<input checked={ true } />"));
        }
    }

    mod loops {
        use super::*;

        #[test]
        fn should_render_loop_binding_and_reference() {
            let template = single_template(
                "<template>\
                   <ul>\
                     <loop template=\"Item\" array=\"{{ items }}\" key=\"id\"></loop>\
                   </ul>\
                 </template>",
            );
            let vars = tag_to_var(&[("Item", "Item")]);
            let rendered = render_default_template(&template, &vars).unwrap();
            assert_eq!(
                rendered,
                "export default function(props) {\n\
                 \x20\x20const loop0 = items.map(e => (\n\
                 \x20\x20\x20\x20<Item { ...e } key={ e.id } />\n\
                 \x20\x20));\n\
                 \x20\x20return (\n\
                 \x20\x20\x20\x20<ul>\n\
                 \x20\x20\x20\x20\x20\x20{ loop0 }\n\
                 \x20\x20\x20\x20</ul>\n\
                 \x20\x20);\n\
                 }\n"
            );
        }

        #[test]
        fn should_number_loops_densely_in_preorder() {
            let template = single_template(
                "<template>\
                   <div>\
                     <loop template=\"A\" array=\"{{ xs }}\" key=\"id\"></loop>\
                     <section>\
                       <loop template=\"B\" array=\"{{ ys }}\" key=\"id\"></loop>\
                     </section>\
                     <loop template=\"A\" array=\"{{ zs }}\" key=\"id\"></loop>\
                   </div>\
                 </template>",
            );
            let vars = tag_to_var(&[("A", "A"), ("B", "B")]);
            let rendered = render_default_template(&template, &vars).unwrap();

            assert!(rendered.contains("const loop0 = xs.map"));
            assert!(rendered.contains("const loop1 = ys.map"));
            assert!(rendered.contains("const loop2 = zs.map"));
            assert!(!rendered.contains("loop3"));

            // Statements appear in discovery order, references at the
            // directives' original positions.
            let p0 = rendered.find("const loop0").unwrap();
            let p1 = rendered.find("const loop1").unwrap();
            let p2 = rendered.find("const loop2").unwrap();
            assert!(p0 < p1 && p1 < p2);
            assert!(rendered.contains("{ loop0 }"));
            assert!(rendered.contains("{ loop1 }"));
            assert!(rendered.contains("{ loop2 }"));
        }

        #[test]
        fn should_accept_unbound_array_expressions() {
            let template = single_template(
                "<template><loop template=\"Item\" array=\"items\" key=\"id\"></loop></template>",
            );
            let vars = tag_to_var(&[("Item", "Item")]);
            let rendered = render_default_template(&template, &vars).unwrap();
            assert!(rendered.contains("const loop0 = items.map"));
        }
    }

    mod template_sets {
        use super::*;

        #[test]
        fn should_order_named_first_default_last() {
            let templates = parse_templates(
                "<template name=\"Item\"><li>{{ label }}</li></template>\
                 <template name=\"Row\"><tr></tr></template>\
                 <template><div></div></template>",
            );
            let vars = tag_to_var(&[("Item", "Item"), ("Row", "Row")]);
            let set = TemplateSet {
                default_node: &templates[2],
                named_nodes: vec![&templates[0], &templates[1]],
                tag_to_var: &vars,
            };
            let sources = render_template_set(&set).unwrap();

            assert_eq!(sources.len(), 3);
            assert!(sources[0].starts_with("export function Item(props) {"));
            assert!(sources[1].starts_with("export function Row(props) {"));
            assert!(sources[2].starts_with("export default function(props) {"));
        }

        #[test]
        fn should_resolve_nested_template_tags() {
            let templates = parse_templates(
                "<template name=\"Item\"><li>{{ label }}</li></template>\
                 <template><div><item /></div></template>",
            );
            let vars = tag_to_var(&[("Item", "Item"), ("item", "Item")]);
            let set = TemplateSet {
                default_node: &templates[1],
                named_nodes: vec![&templates[0]],
                tag_to_var: &vars,
            };
            let sources = render_template_set(&set).unwrap();
            assert!(sources[1].contains("<Item />"));
        }
    }

    mod errors {
        use super::*;

        #[test]
        fn should_fail_on_comment_nodes() {
            let template = single_template("<template><div><!-- note --></div></template>");
            let err = render_default_template(&template, &TagToVar::new()).unwrap_err();
            match err {
                RenderError::MalformedNode { kind, path } => {
                    assert_eq!(kind, "comment");
                    assert_eq!(path.to_string(), "template > div[0] > #comment[0]");
                }
                other => panic!("expected MalformedNode, got {:?}", other),
            }
        }

        #[test]
        fn should_fail_on_missing_loop_attribute() {
            let template = single_template(
                "<template><loop template=\"Item\" array=\"{{ items }}\"></loop></template>",
            );
            let vars = tag_to_var(&[("Item", "Item")]);
            let err = render_default_template(&template, &vars).unwrap_err();
            match err {
                RenderError::MissingLoopAttribute { attribute, .. } => {
                    assert_eq!(attribute, "key");
                }
                other => panic!("expected MissingLoopAttribute, got {:?}", other),
            }
        }

        #[test]
        fn should_fail_on_unresolved_loop_target() {
            let template = single_template(
                "<template><loop template=\"Item\" array=\"{{ items }}\" key=\"id\"></loop></template>",
            );
            let err = render_default_template(&template, &TagToVar::new()).unwrap_err();
            match err {
                RenderError::UnresolvedReference { reference, .. } => {
                    assert_eq!(reference, "Item");
                }
                other => panic!("expected UnresolvedReference, got {:?}", other),
            }
        }

        #[test]
        fn should_fail_on_unresolved_named_template() {
            let template =
                single_template("<template name=\"Item\"><li></li></template>");
            let err = render_named_template(&template, &TagToVar::new()).unwrap_err();
            match err {
                RenderError::UnresolvedReference { reference, .. } => {
                    assert_eq!(reference, "Item");
                }
                other => panic!("expected UnresolvedReference, got {:?}", other),
            }
        }

        #[test]
        fn should_fail_on_empty_template() {
            let template = single_template("<template>   </template>");
            let err = render_default_template(&template, &TagToVar::new()).unwrap_err();
            match err {
                RenderError::MalformedNode { kind, .. } => assert_eq!(kind, "empty template"),
                other => panic!("expected MalformedNode, got {:?}", other),
            }
        }
    }
}
