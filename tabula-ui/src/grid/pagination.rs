//! Pagination bar rendering.

use tabula_lib::TableConfig;
use tabula_lib::table::PageControls;

use crate::element::{Element, Role};
use crate::style::Style;

use super::PageButton;

fn nav_button(button: PageButton, controls: &PageControls) -> Element {
    let (id, label) = match button {
        PageButton::First => ("page-first", "«"),
        PageButton::Previous => ("page-prev", "‹"),
        PageButton::Next => ("page-next", "›"),
        PageButton::Last => ("page-last", "»"),
    };
    let target = button.target(controls);
    let mut element = Element::button(label).id(id).disabled(target.is_none());
    if let Some(target) = target {
        element = element.data("target", target.to_string());
    }
    element
}

fn page_size_select(controls: &PageControls, config: &TableConfig) -> Element {
    let mut sizes = config.page_size_options.clone();
    if !sizes.contains(&controls.page_size) {
        sizes.push(controls.page_size);
        sizes.sort_unstable();
    }

    let options = sizes.into_iter().map(|size| {
        let option = Element::new(Role::SelectOption)
            .content(size.to_string())
            .data("value", size.to_string());
        if size == controls.page_size {
            option.data("selected", "true").style(Style::new().bold())
        } else {
            option
        }
    });

    Element::new(Role::Select)
        .id("page-size")
        .data("action", "page-size")
        .children(options)
}

pub(super) fn bar(controls: &PageControls, config: &TableConfig) -> Element {
    let status = format!(
        "Page {} of {}",
        controls.page_index + 1,
        controls.display_page_count()
    );
    let range = if controls.range_end == 0 {
        format!("Showing 0 of {}", controls.total)
    } else {
        format!(
            "Showing {}-{} of {}",
            controls.range_start, controls.range_end, controls.total
        )
    };

    Element::row()
        .id("pagination")
        .child(nav_button(PageButton::First, controls))
        .child(nav_button(PageButton::Previous, controls))
        .child(Element::text(status).id("page-status"))
        .child(nav_button(PageButton::Next, controls))
        .child(nav_button(PageButton::Last, controls))
        .child(Element::text(range).id("page-range").style(Style::new().dim()))
        .child(Element::text(format!("Total: {}", controls.total)).id("page-total"))
        .child(page_size_select(controls, config))
}
