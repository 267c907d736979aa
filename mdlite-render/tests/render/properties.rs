//! Property tests for block splitting and the total-function guarantee.

use mdlite_render::render;
use proptest::prelude::*;

proptest! {
    #[test]
    fn one_paragraph_per_block(blocks in prop::collection::vec("[a-z #*_~`\\[\\]()!-]{0,16}", 1..8)) {
        let document = blocks.join("\n\n");
        let html = render(&document);

        let paragraphs: Vec<&str> = html.split('\n').collect();
        prop_assert_eq!(paragraphs.len(), blocks.len());
        for paragraph in paragraphs {
            prop_assert!(paragraph.starts_with("<p>"), "{}", paragraph);
            prop_assert!(paragraph.ends_with("</p>"), "{}", paragraph);
        }
    }

    #[test]
    fn no_blank_line_means_one_paragraph(
        document in "[a-z #*_\n-]{0,40}".prop_filter("no blank line", |s| !s.contains("\n\n"))
    ) {
        let html = render(&document);
        prop_assert_eq!(html.matches("<p>").count(), 1);
        prop_assert_eq!(html.matches("</p>").count(), 1);
    }

    #[test]
    fn any_input_renders(document in any::<String>()) {
        let html = render(&document);
        prop_assert!(html.starts_with("<p>"));
        prop_assert!(html.ends_with("</p>"));
    }
}
