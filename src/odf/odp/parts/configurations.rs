//! `configurations2/accelerator/current.xml`: static accelerator registry.

const ACCELERATOR_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<oor:component-data xmlns:oor="http://openoffice.org/2001/registry" xmlns:xs="http://www.w3.org/2001/XMLSchema" oor:name="Accelerator" oor:package="org.openoffice.Office">
 <node oor:name="PresentationCommands">
  <node oor:name="Defaults">
   <node oor:name="Modules">
    <node oor:name="com.sun.star.presentation.PresentationDocument"/>
   </node>
  </node>
 </node>
</oor:component-data>
"#;

/// Accelerator configuration; identical for every presentation.
#[inline]
pub fn configurations_xml() -> &'static str {
    ACCELERATOR_XML
}
