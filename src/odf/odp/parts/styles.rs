//! `styles.xml`: fill images, text styles, page layout and master page.

use std::collections::BTreeSet;

use super::{DOCUMENT_NAMESPACES, background_fill_attrs, slide_background_name};
use crate::common::xml::escape_xml;
use crate::common::{Length, TextStyle};
use crate::odf::constants::{MASTER_PAGE, OFFICE_VERSION, PAGE_LAYOUT, PRESENTATION_BACKGROUND_IMAGE};
use crate::odf::odp::slide::Background;
use crate::odf::odp::{Presentation, text_style_name};

/// Drawing-page style of the master page.
const MASTER_PAGE_STYLE: &str = "Mdp1";

/// Render the styles part of `presentation`.
pub fn styles_xml(presentation: &Presentation) -> String {
    let mut xml = String::with_capacity(2048);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<office:document-styles {DOCUMENT_NAMESPACES} office:version="{OFFICE_VERSION}">"#
    ));

    xml.push_str("<office:styles>");
    write_fill_images(&mut xml, presentation);
    write_text_styles(&mut xml, presentation);
    xml.push_str("</office:styles>");

    xml.push_str("<office:automatic-styles>");
    write_page_layout(&mut xml, presentation);
    write_master_page_style(&mut xml, presentation);
    xml.push_str("</office:automatic-styles>");

    xml.push_str(&format!(
        r#"<office:master-styles><style:master-page style:name="{MASTER_PAGE}" style:page-layout-name="{PAGE_LAYOUT}" draw:style-name="{MASTER_PAGE_STYLE}"/></office:master-styles>"#
    ));
    xml.push_str("</office:document-styles>");
    xml
}

fn fill_image(name: &str, href: &str) -> String {
    format!(
        r#"<draw:fill-image draw:name="{name}" xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad"/>"#,
        escape_xml(href)
    )
}

fn write_fill_images(xml: &mut String, presentation: &Presentation) {
    if let Some(href) = presentation.background().and_then(Background::image_name) {
        xml.push_str(&fill_image(PRESENTATION_BACKGROUND_IMAGE, href));
    }
    for slide in presentation.slides() {
        if let Some(href) = slide.background().and_then(Background::image_name) {
            xml.push_str(&fill_image(&slide_background_name(slide.index()), href));
        }
    }
}

/// One definition per distinct text style, in order of first use.
fn write_text_styles(xml: &mut String, presentation: &Presentation) {
    let mut seen = BTreeSet::new();
    let styles = presentation
        .slides()
        .iter()
        .flat_map(|slide| slide.text_boxes())
        .map(|text_box| &text_box.style);

    for style in styles {
        let name = text_style_name(style);
        if seen.insert(name.clone()) {
            xml.push_str(&text_style(&name, style));
        }
    }
}

fn text_style(name: &str, style: &TextStyle) -> String {
    let mut attrs = Vec::with_capacity(5);
    if !style.font_family.is_empty() {
        attrs.push(format!(r#"fo:font-family="{}""#, escape_xml(&style.font_family)));
    }
    if let Some(size) = style.font_size_attr() {
        attrs.push(format!(r#"fo:font-size="{size}""#));
    }
    if let Some(color) = style.normalized_color() {
        attrs.push(format!(r#"fo:color="{}""#, escape_xml(&color)));
    }
    if style.bold {
        attrs.push(r#"fo:font-weight="bold""#.to_string());
    }
    if style.italic {
        attrs.push(r#"fo:font-style="italic""#.to_string());
    }

    format!(
        r#"<style:style style:name="{name}" style:family="text"><style:text-properties {}/></style:style>"#,
        attrs.join(" ")
    )
}

fn write_page_layout(xml: &mut String, presentation: &Presentation) {
    let size = presentation.slide_size();
    let orientation = if size.width >= size.height {
        "landscape"
    } else {
        "portrait"
    };
    xml.push_str(&format!(
        r#"<style:page-layout style:name="{PAGE_LAYOUT}"><style:page-layout-properties fo:margin-top="0cm" fo:margin-bottom="0cm" fo:margin-left="0cm" fo:margin-right="0cm" fo:page-width="{}" fo:page-height="{}" style:print-orientation="{orientation}"/></style:page-layout>"#,
        Length::cm(size.width).to_exact_cm(),
        Length::cm(size.height).to_exact_cm(),
    ));
}

fn write_master_page_style(xml: &mut String, presentation: &Presentation) {
    let fill = match presentation.background() {
        Some(background) => background_fill_attrs(background, PRESENTATION_BACKGROUND_IMAGE),
        None => r#"draw:fill="none""#.to_string(),
    };
    xml.push_str(&format!(
        r#"<style:style style:name="{MASTER_PAGE_STYLE}" style:family="drawing-page"><style:drawing-page-properties presentation:background-visible="true" presentation:background-objects-visible="true" {fill}/></style:style>"#
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_layout_exact_size() {
        let mut presentation = Presentation::new();
        let xml = styles_xml(&presentation);
        assert!(xml.contains(r#"fo:page-width="33.867cm" fo:page-height="19.05cm" style:print-orientation="landscape""#));

        presentation.set_slide_size("4:3");
        let xml = styles_xml(&presentation);
        assert!(xml.contains(r#"fo:page-width="25.4cm" fo:page-height="19.05cm""#));
    }

    #[test]
    fn test_text_styles_deduplicated() {
        let mut presentation = Presentation::new();
        presentation.add_slide("One", "first");
        presentation.add_slide("Two", "second");
        let xml = styles_xml(&presentation);

        assert_eq!(xml.matches(r#"style:family="text""#).count(), 2);
        let title_name = text_style_name(&TextStyle::new(32.0, "Liberation Sans", "#000000").bold());
        let body_name = text_style_name(&TextStyle::new(18.0, "Liberation Sans", "#000000"));
        let title = xml.find(&format!(r#"style:name="{title_name}""#)).unwrap();
        let body = xml.find(&format!(r#"style:name="{body_name}""#)).unwrap();
        assert!(title < body);
        assert!(xml.contains(r##"fo:font-family="Liberation Sans" fo:font-size="32.00pt" fo:color="#000000" fo:font-weight="bold""##));
    }

    #[test]
    fn test_non_ascii_families_kept_apart() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        for family in ["宋体", "黑体"] {
            presentation
                .set_text_style(slide, TextStyle::new(18.0, family, "#000000"))
                .unwrap();
            presentation
                .add_text_box(slide, family, 0.0, 0.0, 5.0, 1.0, None, None)
                .unwrap();
        }

        let xml = styles_xml(&presentation);
        assert_eq!(xml.matches(r#"style:family="text""#).count(), 2);
        assert!(xml.contains(r#"fo:font-family="宋体""#));
        assert!(xml.contains(r#"fo:font-family="黑体""#));
    }

    #[test]
    fn test_color_normalized() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        for color in ["ff0000", "#FF0000"] {
            presentation
                .set_text_style(slide, TextStyle::new(12.0, "Arial", color))
                .unwrap();
            presentation
                .add_text_box(slide, "x", 0.0, 0.0, 1.0, 1.0, None, None)
                .unwrap();
        }

        let xml = styles_xml(&presentation);
        assert_eq!(xml.matches(r#"style:family="text""#).count(), 1);
        assert!(xml.contains(r##"fo:color="#FF0000""##));
        assert!(!xml.contains(r#"fo:color="ff0000""#));
    }

    #[test]
    fn test_font_family_escaped() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        presentation
            .set_text_style(slide, TextStyle::new(10.0, "A \"B\" & <C>", "#101010").italic())
            .unwrap();
        presentation
            .add_text_box(slide, "x", 0.0, 0.0, 1.0, 1.0, None, None)
            .unwrap();

        let xml = styles_xml(&presentation);
        assert!(xml.contains(r#"fo:font-family="A &quot;B&quot; &amp; &lt;C&gt;""#));
        assert!(xml.contains(r#"fo:font-style="italic""#));
    }

    #[test]
    fn test_master_page_without_background() {
        let xml = styles_xml(&Presentation::new());
        assert!(!xml.contains("draw:fill-image"));
        assert!(!xml.contains("backgroundImage"));
        assert!(xml.contains(r#"<style:master-page style:name="Default" style:page-layout-name="PM1" draw:style-name="Mdp1"/>"#));
    }

    #[test]
    fn test_fill_images() {
        let mut presentation = Presentation::new();
        let first = presentation.add_blank_slide();
        let second = presentation.add_blank_slide();
        presentation.set_background_image(vec![1], "jpg").unwrap();
        presentation.set_slide_background(second, vec![2], "png").unwrap();
        presentation.set_slide_background_color(first, "#000000").unwrap();

        let xml = styles_xml(&presentation);
        assert!(xml.contains(r#"<draw:fill-image draw:name="backgroundImage" xlink:href="media/background.jpg""#));
        assert!(xml.contains(r#"<draw:fill-image draw:name="slideBackground1" xlink:href="media/slide1_background.png""#));
        assert!(!xml.contains(r#"draw:name="slideBackground0""#));
        assert!(xml.contains(r#"draw:fill="bitmap" draw:fill-image-name="backgroundImage""#));
    }

    #[test]
    fn test_master_page_color() {
        let mut presentation = Presentation::new();
        presentation.set_background_color("abcdef").unwrap();
        let xml = styles_xml(&presentation);
        assert!(xml.contains(r##"draw:fill="solid" draw:fill-color="#ABCDEF""##));
    }
}
