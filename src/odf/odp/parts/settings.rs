//! `settings.xml`: view settings sized to the slides.

use crate::common::xml::escape_xml;
use crate::odf::constants::OFFICE_VERSION;
use crate::odf::odp::Presentation;

/// Render the settings part.
///
/// The visible area is the slide size in 1/100 cm, rounded to whole units.
pub fn settings_xml(presentation: &Presentation) -> String {
    let size = presentation.slide_size();
    let options = presentation.write_options();
    let visible_width = format!("{:.0}", size.width * 100.0);
    let visible_height = format!("{:.0}", size.height * 100.0);

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<office:document-settings xmlns:office="urn:oasis:names:tc:opendocument:xmlns:office:1.0" xmlns:xlink="http://www.w3.org/1999/xlink" xmlns:config="urn:oasis:names:tc:opendocument:xmlns:config:1.0" xmlns:ooo="http://openoffice.org/2004/office" office:version="{OFFICE_VERSION}">
 <office:settings>
  <config:config-item-set config:name="ooo:view-settings">
   <config:config-item config:name="VisibleAreaTop" config:type="int">0</config:config-item>
   <config:config-item config:name="VisibleAreaLeft" config:type="int">0</config:config-item>
   <config:config-item config:name="VisibleAreaWidth" config:type="int">{visible_width}</config:config-item>
   <config:config-item config:name="VisibleAreaHeight" config:type="int">{visible_height}</config:config-item>
   <config:config-item-map-indexed config:name="Views">
    <config:config-item-map-entry>
     <config:config-item config:name="ViewId" config:type="string">view1</config:config-item>
     <config:config-item config:name="GridIsVisible" config:type="boolean">false</config:config-item>
     <config:config-item config:name="IsSnapToGrid" config:type="boolean">true</config:config-item>
     <config:config-item config:name="IsSnapToPageMargins" config:type="boolean">true</config:config-item>
     <config:config-item config:name="ZoomOnPage" config:type="boolean">true</config:config-item>
     <config:config-item config:name="SelectedPage" config:type="short">0</config:config-item>
    </config:config-item-map-entry>
   </config:config-item-map-indexed>
  </config:config-item-set>
  <config:config-item-set config:name="ooo:configuration-settings">
   <config:config-item config:name="IsPrintDate" config:type="boolean">false</config:config-item>
   <config:config-item config:name="IsPrintTime" config:type="boolean">false</config:config-item>
   <config:config-item config:name="IsPrintNotes" config:type="boolean">false</config:config-item>
   <config:config-item config:name="PrintQuality" config:type="int">0</config:config-item>
   <config:config-item-map-indexed config:name="ForbiddenCharacters">
    <config:config-item-map-entry>
     <config:config-item config:name="Language" config:type="string">{language}</config:config-item>
     <config:config-item config:name="Country" config:type="string">{country}</config:config-item>
     <config:config-item config:name="Variant" config:type="string"/>
    </config:config-item-map-entry>
   </config:config-item-map-indexed>
  </config:config-item-set>
 </office:settings>
</office:document-settings>
"#,
        language = escape_xml(&options.language),
        country = escape_xml(&options.country),
    )
}
