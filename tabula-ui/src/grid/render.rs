//! Table header and body rendering.

use tabula_lib::TableConfig;
use tabula_lib::model::{Alignment, ROW_INDEX_KEY};
use tabula_lib::table::{Direction, HeaderState, TabularDataView, VisibleRow};

use crate::element::{Element, Role};
use crate::style::Style;

use super::Column;

/// Header indicator for a sortable column.
fn sort_indicator(direction: Option<Direction>) -> (&'static str, &'static str) {
    match direction {
        Some(Direction::Asc) => ("▲", "asc"),
        Some(Direction::Desc) => ("▼", "desc"),
        None => ("↕", "none"),
    }
}

pub(super) fn table(
    view: &TabularDataView,
    rows: Vec<VisibleRow<'_>>,
    columns: &[Column],
    config: &TableConfig,
) -> Element {
    Element::new(Role::Table)
        .id("table")
        .child(head(view, columns))
        .child(body(view, rows, columns, config))
}

fn head(view: &TabularDataView, columns: &[Column]) -> Element {
    let index_cell = Element::new(Role::HeaderCell)
        .id(format!("header-{ROW_INDEX_KEY}"))
        .style(Style::new().bold().align(Alignment::Right))
        .child(Element::text("#"));

    let cells = view
        .header()
        .into_iter()
        .zip(columns)
        .map(|(state, column)| header_cell(state, column));

    Element::new(Role::TableHead).child(
        Element::new(Role::TableRow)
            .id("header")
            .child(index_cell)
            .children(cells),
    )
}

fn header_cell(state: HeaderState, column: &Column) -> Element {
    let mut cell = Element::new(Role::HeaderCell)
        .id(format!("header-{}", state.key))
        .style(Style::new().bold().hints(&column.def.style))
        .data("key", state.key.clone())
        .child(Element::text(state.header));

    if state.sortable {
        let (glyph, name) = sort_indicator(state.direction);
        let icon = Element::icon(glyph).style(if state.direction.is_some() {
            Style::new()
        } else {
            Style::new().dim()
        });
        cell = cell.data("action", "sort").data("sort", name).child(icon);
    }
    cell
}

fn body(
    view: &TabularDataView,
    rows: Vec<VisibleRow<'_>>,
    columns: &[Column],
    config: &TableConfig,
) -> Element {
    let body = Element::new(Role::TableBody).id("body");

    if rows.is_empty() {
        let span = view.columns().rendered_len() as u16;
        return body.child(
            Element::new(Role::TableRow).id("row-empty").child(
                Element::new(Role::Cell)
                    .col_span(span)
                    .style(Style::new().dim().align(Alignment::Center))
                    .child(Element::text(config.empty_message.clone())),
            ),
        );
    }

    body.children(rows.into_iter().map(|row| body_row(row, columns)))
}

fn body_row(visible: VisibleRow<'_>, columns: &[Column]) -> Element {
    let index_cell = Element::new(Role::Cell)
        .style(Style::new().dim().align(Alignment::Right))
        .data("key", ROW_INDEX_KEY)
        .child(Element::text(visible.number.to_string()));

    let cells = columns.iter().map(|column| {
        Element::new(Role::Cell)
            .style(Style::new().hints(&column.def.style))
            .data("key", column.key())
            .child(column.render_cell(visible.row))
    });

    Element::new(Role::TableRow)
        .id(format!("row-{}", visible.position))
        .child(index_cell)
        .children(cells)
}
