use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window};

/// In-page anchors the call-to-action controls scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Features,
    Contact,
}

impl SectionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Features => "features",
            SectionId::Contact => "contact",
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }
}

pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "No window object".to_string())
}

pub fn scroll_to_section(section: SectionId) -> Result<(), String> {
    let document = window()?
        .document()
        .ok_or_else(|| "No document".to_string())?;
    let Some(element) = document.get_element_by_id(section.as_str()) else {
        log::debug!("section #{} is not mounted", section.as_str());
        return Ok(());
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
