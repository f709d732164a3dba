//! Renders a local accounts table to stdout, exports it and shows a toast.
//!
//! Logs go to `accounts-example.log`; the CSV lands in the system temp dir.

use std::time::Instant;

use tabula_lib::export::{Download, FileDownload, default_filename, export_view};
use tabula_lib::logging::{LevelFilter, init_file_logger};
use tabula_ui::prelude::*;

fn print_tree(element: &Element, depth: usize) {
    let label = element.text.as_deref().unwrap_or("");
    let id = element.id.as_deref().map(|id| format!("#{id}")).unwrap_or_default();
    let disabled = if element.disabled { " (disabled)" } else { "" };
    println!("{:indent$}{:?}{} {}{}", "", element.role, id, label, disabled, indent = depth * 2);
    for child in &element.children {
        print_tree(child, depth + 1);
    }
}

fn main() {
    if let Err(e) = init_file_logger("accounts-example.log", LevelFilter::Debug) {
        eprintln!("logging disabled: {e}");
    }

    let columns = vec![
        Column::new("name", "Name").sortable(),
        Column::new("city", "City").sortable(),
        Column::new("revenue", "Revenue").sortable().align(Alignment::Right),
        Column::actions("actions", "", |row: &Row| {
            Element::button("Open").data("action", format!("open:{}", row.display("name")))
        }),
    ];
    let cities = ["Ghent", "Leuven", "Antwerp"];
    let records = (1..=23)
        .map(|i| {
            Row::new()
                .with("name", format!("Account {i}"))
                .with("city", cities[i % cities.len()])
                .with("revenue", i * 1250)
        })
        .collect();

    let config = TableConfig::default().with_export_prefix("accounts");
    let mut table = match DataTable::local(columns, records, config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("bad columns: {e}");
            return;
        }
    };

    table.on_header_click("revenue");
    table.on_header_click("revenue");
    table.on_search("e");
    table.on_page_button(PageButton::Next);
    print_tree(&table.render(), 0);

    let mut toaster = Toaster::new();
    let now = Instant::now();
    let filename = default_filename(&table.config().export_prefix);
    let saved = export_view(table.view())
        .and_then(|csv| FileDownload::new(std::env::temp_dir()).download(&csv, &filename));
    match saved {
        Ok(path) => toaster.push(Toast::success(format!("Exported to {}", path.display())), now),
        Err(e) => toaster.push(Toast::error(format!("Export failed: {e}")), now),
    }
    print_tree(&toaster.render(now), 0);

    if table.view().visible_rows().is_empty() {
        print_tree(&EmptyState::new("No accounts").element(), 0);
    }
}
