use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;
use tabula_ui::prelude::*;
use tabula_lib::table::Callbacks;

fn columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("revenue", "Revenue").sortable().align(Alignment::Right),
        Column::actions("actions", "Actions", |row: &Row| {
            Element::row().child(
                Element::button("Edit").data("action", format!("edit:{}", row.display("name"))),
            )
        }),
    ]
}

fn accounts(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new()
                .with("name", format!("account {i:02}"))
                .with("revenue", (i * 100) as u64)
        })
        .collect()
}

fn body_rows(element: &Element) -> Vec<&Element> {
    element
        .find("body")
        .map(|body| body.children.iter().collect())
        .unwrap_or_default()
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_has_index_column_and_indicators() {
    let mut table = DataTable::local(columns(), accounts(3), TableConfig::default()).unwrap();
    table.on_header_click("revenue");
    let element = table.render();

    let header = element.find("header").unwrap();
    assert_eq!(header.children.len(), 4);
    assert_eq!(header.children[0].text_content(), "#");

    let name = element.find("header-name").unwrap();
    assert_eq!(name.get_data("sort"), Some("none"));
    assert_eq!(name.text_content(), "Name ↕");

    let revenue = element.find("header-revenue").unwrap();
    assert_eq!(revenue.get_data("sort"), Some("asc"));
    assert_eq!(revenue.text_content(), "Revenue ▲");
    assert_eq!(revenue.style.align, Alignment::Right);

    let actions = element.find("header-actions").unwrap();
    assert_eq!(actions.get_data("sort"), None);
    assert!(!table.on_header_click("actions"));
}

#[test]
fn test_header_click_cycles() {
    let mut table = DataTable::local(columns(), accounts(3), TableConfig::default()).unwrap();
    let sort_of = |table: &DataTable| {
        table
            .render()
            .find("header-name")
            .and_then(|h| h.get_data("sort").map(str::to_string))
    };

    table.on_header_click("name");
    assert_eq!(sort_of(&table).as_deref(), Some("asc"));
    table.on_header_click("name");
    assert_eq!(sort_of(&table).as_deref(), Some("desc"));
    table.on_header_click("name");
    assert_eq!(sort_of(&table).as_deref(), Some("none"));
}

// ============================================================================
// Body
// ============================================================================

#[test]
fn test_body_rows_and_custom_cells() {
    let mut table = DataTable::local(columns(), accounts(25), TableConfig::default()).unwrap();
    table.on_page_button(PageButton::Next);
    let element = table.render();

    let rows = body_rows(&element);
    assert_eq!(rows.len(), 10);
    assert_eq!(rows[0].children[0].text_content(), "11");
    assert_eq!(rows[0].children[1].text_content(), "account 10");
    assert_eq!(rows[0].children[2].text_content(), "1000");

    let buttons = rows[0].find_all(Role::Button);
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].get_data("action"), Some("edit:account 10"));
}

#[test]
fn test_null_cells_render_empty() {
    let records = vec![Row::new().with("name", json!(null)).with("revenue", 5)];
    let table = DataTable::local(columns(), records, TableConfig::default()).unwrap();
    let element = table.render();
    assert_eq!(body_rows(&element)[0].children[1].text_content(), "");
}

#[test]
fn test_empty_page_spans_all_columns() {
    let mut table = DataTable::local(columns(), accounts(5), TableConfig::default()).unwrap();
    table.on_search("no such account");
    let element = table.render();

    let rows = body_rows(&element);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id.as_deref(), Some("row-empty"));
    assert_eq!(rows[0].children.len(), 1);

    let cell = &rows[0].children[0];
    assert_eq!(cell.role, Role::Cell);
    assert_eq!(cell.col_span, 4);
    assert_eq!(cell.text_content(), "No results found");
}

#[test]
fn test_empty_message_from_config() {
    let config = TableConfig::default().with_empty_message("Nothing yet");
    let table = DataTable::local(columns(), Vec::new(), config).unwrap();
    assert_eq!(
        table.render().find("row-empty").unwrap().text_content(),
        "Nothing yet"
    );
}

// ============================================================================
// Pagination bar
// ============================================================================

#[test]
fn test_pagination_bar_edges() {
    let mut table = DataTable::local(columns(), accounts(25), TableConfig::default()).unwrap();

    let element = table.render();
    assert!(element.find("page-first").unwrap().disabled);
    assert!(element.find("page-prev").unwrap().disabled);
    assert!(!element.find("page-next").unwrap().disabled);
    assert_eq!(element.find("page-last").unwrap().get_data("target"), Some("2"));
    assert_eq!(element.find("page-status").unwrap().text_content(), "Page 1 of 3");
    assert_eq!(element.find("page-range").unwrap().text_content(), "Showing 1-10 of 25");

    assert!(table.on_page_button(PageButton::Last));
    let element = table.render();
    assert!(element.find("page-next").unwrap().disabled);
    assert!(element.find("page-last").unwrap().disabled);
    assert!(!element.find("page-first").unwrap().disabled);
    assert_eq!(element.find("page-range").unwrap().text_content(), "Showing 21-25 of 25");
    assert!(!table.on_page_button(PageButton::Next));
}

#[test]
fn test_empty_table_is_single_page() {
    let table = DataTable::local(columns(), Vec::new(), TableConfig::default()).unwrap();
    let element = table.render();
    assert_eq!(element.find("page-status").unwrap().text_content(), "Page 1 of 1");
    assert!(element.find("page-last").unwrap().disabled);
    assert_eq!(element.find("page-total").unwrap().text_content(), "Total: 0");
}

#[test]
fn test_page_size_selector() {
    let config = TableConfig::default().with_default_page_size(15);
    let mut table = DataTable::local(columns(), accounts(40), config).unwrap();
    table.on_page_button(PageButton::Next);

    let element = table.render();
    let select = element.find("page-size").unwrap();
    let values: Vec<&str> = select.children.iter().filter_map(|o| o.get_data("value")).collect();
    assert_eq!(values, ["10", "15", "20", "50", "100"]);

    assert!(table.on_page_size(50));
    assert_eq!(table.view().pagination().page_index, 0);
    let element = table.render();
    let selected: Vec<&str> = element
        .find("page-size")
        .unwrap()
        .children
        .iter()
        .filter(|o| o.get_data("selected").is_some())
        .filter_map(|o| o.get_data("value"))
        .collect();
    assert_eq!(selected, ["50"]);
    assert!(!table.on_page_size(0));
}

// ============================================================================
// Delegated
// ============================================================================

#[test]
fn test_delegated_table_forwards_intent() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let pages = Rc::clone(&log);
    let sorts = Rc::clone(&log);
    let listener = Callbacks::new(
        move |req: PageRequest| pages.borrow_mut().push(DataRequest::Paginate(req)),
        move |spec: &str| sorts.borrow_mut().push(DataRequest::Sort(spec.to_string())),
    );

    let mut table =
        DataTable::delegated(columns(), 95, Some(1), None, listener, TableConfig::default())
            .unwrap();
    table.view_mut().set_page_data(accounts(10), 95);

    assert!(table.on_page_button(PageButton::Last));
    table.on_header_click("revenue");
    table.on_page_size(20);

    assert_eq!(
        *log.borrow(),
        vec![
            DataRequest::Paginate(PageRequest { page: 10, perpage: 10 }),
            DataRequest::Sort("revenue:asc".into()),
            DataRequest::Paginate(PageRequest { page: 1, perpage: 20 }),
        ]
    );

    let element = table.render();
    assert_eq!(element.find("page-total").unwrap().text_content(), "Total: 95");
    assert_eq!(element.find("page-status").unwrap().text_content(), "Page 1 of 5");
}

#[test]
fn test_duplicate_columns_rejected() {
    let columns = vec![Column::new("a", "A"), Column::new("a", "B")];
    assert!(DataTable::local(columns, Vec::new(), TableConfig::default()).is_err());
}

#[test]
fn test_query_uses_configured_search_fields() {
    let config = TableConfig::default().with_search_fields(vec!["name".into(), "email".into()]);
    let mut table =
        DataTable::delegated(columns(), 95, None, None, Vec::<DataRequest>::new(), config).unwrap();
    table.on_header_click("name");
    table.on_page_size(20);

    let requests = table.view_mut().take_requests();
    let Some(DataRequest::Paginate(request)) = requests.last().cloned() else {
        panic!("expected a paginate request, got {requests:?}");
    };

    let query = table.query_for(request);
    assert_eq!(
        query.to_query_string(),
        "page=1&perpage=20&searchfields=name%2Cemail&sort=name%3Aasc"
    );
    assert_eq!(
        query.search_fields(["email"]).to_query_string(),
        "page=1&perpage=20&searchfields=email&sort=name%3Aasc"
    );
}
