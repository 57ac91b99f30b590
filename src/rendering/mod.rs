pub mod directive;
pub mod markdown;

pub use directive::{ImageDirective, ImagePlacement};
pub use markdown::{ImageNode, MarkdownRenderer, RenderNode, DEFAULT_FALLBACK_IMAGE};

/// Render with the default fallback placeholder.
pub fn render(content: &str) -> Vec<RenderNode> {
    MarkdownRenderer::default().render(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::directive::ImagePlacement;

    fn first(nodes: &[RenderNode]) -> &RenderNode {
        nodes.first().expect("expected at least one node")
    }

    #[test]
    fn renders_heading_and_paragraph() {
        let tree = render("# Title\n\nSome *emphasis* here.");
        assert_eq!(tree.len(), 2);

        let RenderNode::Heading { level, children } = first(&tree) else {
            panic!("expected heading, got {:?}", tree[0]);
        };
        assert_eq!(*level, 1);
        assert_eq!(
            children,
            &[RenderNode::Text {
                value: "Title".into()
            }]
        );

        let RenderNode::Paragraph { children } = &tree[1] else {
            panic!("expected paragraph");
        };
        assert!(matches!(&children[1], RenderNode::Emphasis { .. }));
    }

    #[test]
    fn float_image_stays_inline() {
        let tree = render("![Figure](/img/cover.png?w=300&h=200&loc=float-right)");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let RenderNode::Image { image } = first(children) else {
            panic!("expected inline image, got {:?}", children[0]);
        };
        assert_eq!(image.src, "/img/cover.png?w=300&h=200&loc=float-right");
        assert_eq!(image.alt, "Figure");
        assert_eq!(image.directive.width, 300);
        assert_eq!(image.directive.height, 200);
        assert_eq!(image.directive.placement, ImagePlacement::FloatRight);
    }

    #[test]
    fn non_float_image_becomes_block() {
        let tree = render("![Figure](https://cdn.example.com/a.png?loc=left)");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let RenderNode::ImageBlock { image } = first(children) else {
            panic!("expected block image");
        };
        assert_eq!(image.directive.placement, ImagePlacement::Left);
        assert!(!image.directive.placement.is_float());
    }

    #[test]
    fn out_of_range_width_falls_back() {
        let tree = render("![x](/a.png?w=9999)");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let RenderNode::ImageBlock { image } = first(children) else {
            panic!("expected block image");
        };
        assert_eq!(image.directive.width, 190);
        assert_eq!(image.directive.height, 190);
    }

    #[test]
    fn relative_image_src_is_replaced_with_placeholder() {
        let tree = render("![x](cover.png?w=300)");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let RenderNode::ImageBlock { image } = first(children) else {
            panic!("expected block image");
        };
        assert_eq!(image.src, DEFAULT_FALLBACK_IMAGE);
        // the directive still applies even though the source was swapped
        assert_eq!(image.directive.width, 300);
    }

    #[test]
    fn double_escaped_content_is_unescaped() {
        let tree = render("line one\\nline two");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let text = children
            .iter()
            .filter_map(|node| match node {
                RenderNode::Text { value } => Some(value.as_str()),
                RenderNode::SoftBreak => Some("\n"),
                _ => None,
            })
            .collect::<String>();
        assert_eq!(text, "line one\nline two");
    }

    #[test]
    fn fenced_code_block_keeps_language() {
        let tree = render("```rust\nfn main() {}\n```");
        let RenderNode::CodeBlock { language, code } = first(&tree) else {
            panic!("expected code block");
        };
        assert_eq!(language.as_deref(), Some("rust"));
        assert_eq!(code, "fn main() {}\n");
    }

    #[test]
    fn gfm_table_is_represented() {
        let tree = render("| a | b |\n|---|---|\n| 1 | 2 |");
        let RenderNode::Table { children, .. } = first(&tree) else {
            panic!("expected table, got {:?}", tree[0]);
        };
        assert!(matches!(&children[0], RenderNode::TableHead { .. }));
        assert!(matches!(&children[1], RenderNode::TableRow { .. }));
    }

    #[test]
    fn rendering_never_panics_on_garbage() {
        for content in ["", "![", "[](", "![](?w=&h=&loc=)", "\\\\\\n", "> \n> ```"] {
            let _ = render(content);
        }
    }

    #[test]
    fn custom_fallback_is_used() {
        let renderer = MarkdownRenderer::new("/static/missing.png");
        let tree = renderer.render("![x](not-absolute.png)");
        let RenderNode::Paragraph { children } = first(&tree) else {
            panic!("expected paragraph");
        };
        let RenderNode::ImageBlock { image } = first(children) else {
            panic!("expected block image");
        };
        assert_eq!(image.src, "/static/missing.png");
    }
}
