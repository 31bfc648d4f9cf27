//! `content.xml`: automatic styles and the slide bodies.

use std::collections::BTreeSet;

use super::{DOCUMENT_NAMESPACES, background_fill_attrs, slide_background_name};
use crate::common::xml::{escape_text_content, escape_xml};
use crate::common::{Length, ParagraphProperties, VerticalAlign};
use crate::odf::constants::{
    DEFAULT_GRAPHIC_STYLE, DEFAULT_PAGE_STYLE, DEFAULT_PARAGRAPH_STYLE, MASTER_PAGE,
    OFFICE_VERSION, PRESENTATION_BACKGROUND_IMAGE, PRESENTATION_BACKGROUND_STYLE,
};
use crate::odf::odp::slide::{Image, Slide, TextBox};
use crate::odf::odp::{
    Drawable, Presentation, frame_style_name, paragraph_style_name, text_style_name,
};

/// Render the content part of `presentation`.
pub fn content_xml(presentation: &Presentation) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(&format!(
        r#"<office:document-content {DOCUMENT_NAMESPACES} office:version="{OFFICE_VERSION}">"#
    ));
    xml.push_str("<office:scripts/>");

    xml.push_str("<office:automatic-styles>");
    write_page_styles(&mut xml, presentation);
    write_graphic_styles(&mut xml);
    write_paragraph_styles(&mut xml, presentation);
    xml.push_str("</office:automatic-styles>");

    xml.push_str("<office:body><office:presentation>");
    for slide in presentation.slides() {
        write_page(&mut xml, presentation, slide);
    }
    xml.push_str("</office:presentation></office:body>");
    xml.push_str("</office:document-content>");
    xml
}

/// Drawing-page style a slide is painted with.
fn page_style_name(presentation: &Presentation, slide: &Slide) -> String {
    if slide.background().is_some() {
        slide_background_name(slide.index())
    } else if presentation.background().is_some() {
        PRESENTATION_BACKGROUND_STYLE.to_string()
    } else {
        DEFAULT_PAGE_STYLE.to_string()
    }
}

fn write_page_styles(xml: &mut String, presentation: &Presentation) {
    if let Some(background) = presentation.background() {
        xml.push_str(&drawing_page_style(
            PRESENTATION_BACKGROUND_STYLE,
            &background_fill_attrs(background, PRESENTATION_BACKGROUND_IMAGE),
        ));
    }
    for slide in presentation.slides() {
        if let Some(background) = slide.background() {
            let name = slide_background_name(slide.index());
            xml.push_str(&drawing_page_style(&name, &background_fill_attrs(background, &name)));
        }
    }
    xml.push_str(&format!(
        r#"<style:style style:name="{DEFAULT_PAGE_STYLE}" style:family="drawing-page"><style:drawing-page-properties presentation:background-visible="true" presentation:background-objects-visible="true"/></style:style>"#
    ));
}

fn drawing_page_style(name: &str, fill_attrs: &str) -> String {
    format!(
        r#"<style:style style:name="{name}" style:family="drawing-page"><style:drawing-page-properties presentation:background-visible="false" presentation:background-objects-visible="true" {fill_attrs}/></style:style>"#
    )
}

fn write_graphic_styles(xml: &mut String) {
    xml.push_str(&format!(
        r#"<style:style style:name="{DEFAULT_GRAPHIC_STYLE}" style:family="graphic"><style:graphic-properties draw:stroke="none" draw:fill="none"/></style:style>"#
    ));
    for align in [VerticalAlign::Top, VerticalAlign::Middle, VerticalAlign::Bottom] {
        let props = ParagraphProperties {
            vertical_align: Some(align),
            ..Default::default()
        };
        xml.push_str(&format!(
            r#"<style:style style:name="{}" style:family="graphic"><style:graphic-properties draw:stroke="none" draw:fill="none" draw:textarea-vertical-align="{}"/></style:style>"#,
            frame_style_name(&props),
            align.as_str(),
        ));
    }
}

/// The shared default paragraph style, then one style per distinct name in
/// slide order.
fn write_paragraph_styles(xml: &mut String, presentation: &Presentation) {
    xml.push_str(&format!(
        r#"<style:style style:name="{DEFAULT_PARAGRAPH_STYLE}" style:family="paragraph"><style:paragraph-properties fo:text-align="left"/></style:style>"#
    ));

    let mut seen = BTreeSet::new();
    for slide in presentation.slides() {
        for text_box in slide.text_boxes() {
            let name = paragraph_style_name(slide.index(), text_box.z_index, &text_box.properties);
            if name == DEFAULT_PARAGRAPH_STYLE || !seen.insert(name.clone()) {
                continue;
            }
            xml.push_str(&paragraph_style(&name, &text_box.properties));
        }
    }
}

fn paragraph_style(name: &str, props: &ParagraphProperties) -> String {
    let mut attrs = format!(
        r#"fo:margin-left="{}" fo:margin-right="{}" fo:text-indent="{}""#,
        Length::cm(props.left_indent),
        Length::cm(props.right_indent),
        Length::cm(props.first_line_indent),
    );
    if let Some(align) = props.horizontal_align {
        attrs.push_str(&format!(r#" fo:text-align="{align}""#));
    }
    format!(
        r#"<style:style style:name="{name}" style:family="paragraph"><style:paragraph-properties {attrs}/></style:style>"#
    )
}

fn write_page(xml: &mut String, presentation: &Presentation, slide: &Slide) {
    xml.push_str(&format!(
        r#"<draw:page draw:name="page{}" draw:style-name="{}" draw:master-page-name="{MASTER_PAGE}">"#,
        slide.index(),
        page_style_name(presentation, slide),
    ));
    for drawable in slide.drawables() {
        match drawable {
            Drawable::TextBox(text_box) => write_text_frame(xml, slide.index(), text_box),
            Drawable::Image(image) => write_image_frame(xml, image),
        }
    }
    xml.push_str("</draw:page>");
}

fn write_text_frame(xml: &mut String, slide_index: usize, text_box: &TextBox) {
    let [x, y, width, height] = text_box.placement.svg_attrs();
    xml.push_str(&format!(
        r#"<draw:frame draw:style-name="{}" draw:layer="layout" svg:width="{width}" svg:height="{height}" svg:x="{x}" svg:y="{y}" draw:z-index="{}" presentation:class="outline">"#,
        frame_style_name(&text_box.properties),
        text_box.z_index,
    ));
    xml.push_str(&format!(
        r#"<draw:text-box><text:p text:style-name="{}"><text:span text:style-name="{}">{}</text:span></text:p></draw:text-box>"#,
        paragraph_style_name(slide_index, text_box.z_index, &text_box.properties),
        text_style_name(&text_box.style),
        escape_text_content(&text_box.content),
    ));
    xml.push_str("</draw:frame>");
}

fn write_image_frame(xml: &mut String, image: &Image) {
    let [x, y, width, height] = image.placement.svg_attrs();
    xml.push_str(&format!(
        r#"<draw:frame draw:style-name="{DEFAULT_GRAPHIC_STYLE}" draw:layer="layout" svg:width="{width}" svg:height="{height}" svg:x="{x}" svg:y="{y}" draw:z-index="{}" presentation:class="graphic">"#,
        image.z_index,
    ));
    xml.push_str(&format!(
        r#"<draw:image xlink:href="{}" xlink:type="simple" xlink:show="embed" xlink:actuate="onLoad"/>"#,
        escape_xml(&image.name),
    ));
    xml.push_str("</draw:frame>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{HorizontalAlign, TextStyle};

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn test_default_slide() {
        let mut presentation = Presentation::new();
        presentation.add_slide("Title", "Body");
        let xml = content_xml(&presentation);

        assert!(xml.contains(r#"<draw:page draw:name="page0" draw:style-name="dp1" draw:master-page-name="Default">"#));
        assert!(xml.contains(r#"draw:style-name="V2""#));
        assert!(xml.contains(r#"draw:style-name="V1""#));
        assert!(xml.contains(r#"<text:p text:style-name="P0_1_hcenter_l0_00_r0_00_f0_00">"#));
        let title_style = text_style_name(
            &TextStyle::new(32.0, "Liberation Sans", "#000000").bold(),
        );
        assert!(xml.contains(&format!(
            r#"<text:span text:style-name="{title_style}">Title</text:span>"#
        )));
        assert!(xml.contains(r#"svg:width="29.87cm" svg:height="3.51cm" svg:x="2.00cm" svg:y="1.00cm" draw:z-index="1""#));
        assert!(xml.ends_with("</office:document-content>"));
    }

    #[test]
    fn test_text_escaped() {
        let mut presentation = Presentation::new();
        presentation.add_slide("A & B <C>", "line one\nline two\tend");
        let xml = content_xml(&presentation);
        assert!(xml.contains("A &amp; B &lt;C&gt;"));
        assert!(xml.contains("line one<text:line-break/>line two<text:tab/>end"));
    }

    #[test]
    fn test_page_style_selection() {
        let mut presentation = Presentation::new();
        let plain = presentation.add_blank_slide();
        let custom = presentation.add_blank_slide();
        presentation.set_slide_background_color(custom, "#FF0000").unwrap();

        let xml = content_xml(&presentation);
        assert!(xml.contains(r#"draw:name="page0" draw:style-name="dp1""#));
        assert!(xml.contains(r#"draw:name="page1" draw:style-name="slideBackground1""#));
        assert!(xml.contains(r##"style:name="slideBackground1" style:family="drawing-page"><style:drawing-page-properties presentation:background-visible="false" presentation:background-objects-visible="true" draw:fill="solid" draw:fill-color="#FF0000"/>"##));

        presentation.set_background_color("#00FF00").unwrap();
        let xml = content_xml(&presentation);
        assert!(xml.contains(r#"draw:name="page0" draw:style-name="backgroundStyle""#));
        assert!(xml.contains(r#"draw:name="page1" draw:style-name="slideBackground1""#));
        assert_eq!(plain.index(), 0);
    }

    #[test]
    fn test_paragraph_styles_defined_once() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        let props = ParagraphProperties::aligned(HorizontalAlign::Right, VerticalAlign::Bottom);
        presentation
            .add_text_box(slide, "a", 0.0, 0.0, 1.0, 1.0, Some(props), Some(3))
            .unwrap();
        presentation
            .add_text_box(slide, "b", 0.0, 0.0, 1.0, 1.0, Some(props), Some(3))
            .unwrap();
        presentation
            .add_text_box(slide, "c", 0.0, 0.0, 1.0, 1.0, Some(ParagraphProperties::default()), None)
            .unwrap();

        let xml = content_xml(&presentation);
        let name = "P0_3_hright_l0_00_r0_00_f0_00";
        assert_eq!(count(&xml, &format!(r#"style:name="{name}""#)), 1);
        assert_eq!(count(&xml, &format!(r#"text:style-name="{name}""#)), 2);
        assert!(xml.contains(r#"fo:margin-left="0.00cm" fo:margin-right="0.00cm" fo:text-indent="0.00cm" fo:text-align="right""#));
        assert_eq!(count(&xml, r#"style:name="Pdefault""#), 1);
        assert!(xml.contains(r#"<text:p text:style-name="Pdefault">"#));
        // no vertical alignment means the plain graphic style
        assert!(xml.contains(r#"<draw:frame draw:style-name="gr2" draw:layer="layout""#));
    }

    #[test]
    fn test_frames_in_z_order() {
        let mut presentation = Presentation::new();
        let slide = presentation.add_blank_slide();
        presentation
            .set_text_style(slide, TextStyle::new(12.0, "Arial", "#333333"))
            .unwrap();
        presentation
            .add_text_box(slide, "caption", 1.0, 1.0, 5.0, 1.0, None, Some(5))
            .unwrap();
        presentation
            .add_image(slide, vec![0x89, 0x50], "png", 0.0, 0.0, 10.0, 10.0, Some(1))
            .unwrap();

        let xml = content_xml(&presentation);
        let image_at = xml.find("Pictures/slide0_image0.png").unwrap();
        let text_at = xml.find(">caption<").unwrap();
        assert!(image_at < text_at);
        assert!(xml.contains(r#"draw:z-index="1" presentation:class="graphic""#));
        assert!(xml.contains(r#"<draw:image xlink:href="Pictures/slide0_image0.png" xlink:type="simple""#));
    }

    #[test]
    fn test_empty_presentation() {
        let xml = content_xml(&Presentation::new());
        assert!(xml.contains("<office:presentation></office:presentation>"));
        assert!(!xml.contains("backgroundStyle"));
    }
}
