use std::collections::BTreeMap;

use crate::style::Style;

/// What an element represents, so hosts know how to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Box,
    Row,
    Column,
    Text,
    Icon,
    Button,
    Select,
    SelectOption,
    Table,
    TableHead,
    TableBody,
    TableRow,
    HeaderCell,
    Cell,
}

/// A node in a rendered component tree.
///
/// Leaves carry `text`; containers carry `children`. `data` holds
/// host-facing attributes such as action names and targets.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub id: Option<String>,
    pub role: Role,
    pub text: Option<String>,
    pub children: Vec<Element>,
    pub style: Style,
    /// Number of table columns this cell covers (1 unless spanning).
    pub col_span: u16,
    pub disabled: bool,
    pub data: BTreeMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: None,
            role: Role::Box,
            text: None,
            children: Vec::new(),
            style: Style::default(),
            col_span: 1,
            disabled: false,
            data: BTreeMap::new(),
        }
    }
}

impl Element {
    pub fn new(role: Role) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    pub fn box_() -> Self {
        Self::new(Role::Box)
    }

    pub fn row() -> Self {
        Self::new(Role::Row)
    }

    pub fn col() -> Self {
        Self::new(Role::Column)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::new(Role::Text).content(content)
    }

    pub fn icon(glyph: impl Into<String>) -> Self {
        Self::new(Role::Icon).content(glyph)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(Role::Button).content(label)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn col_span(mut self, span: u16) -> Self {
        self.col_span = span;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(String::as_str)
    }

    /// Depth-first search by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Every descendant (including self) with the given role, in tree order.
    pub fn find_all(&self, role: Role) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_role(role, &mut found);
        found
    }

    fn collect_role<'a>(&'a self, role: Role, found: &mut Vec<&'a Element>) {
        if self.role == role {
            found.push(self);
        }
        for child in &self.children {
            child.collect_role(role, found);
        }
    }

    /// All text in the subtree, space-separated.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.join(" ")
    }

    fn collect_text<'a>(&'a self, parts: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            parts.push(text);
        }
        for child in &self.children {
            child.collect_text(parts);
        }
    }
}
