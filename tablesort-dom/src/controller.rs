use tabledom::{contains_element, find_element, find_element_mut, query_tag, Element, Event, MouseButton};
use tablesort_lib::{resolve_type, sort_order, ColumnType, SortDirection};

use crate::column::ColumnSpec;
use crate::config::SortConfig;
use crate::state::TableSortState;

const CELL_TAGS: [&str; 2] = ["td", "th"];

/// Result of a click that actually sorted a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub table_id: String,
    pub column: usize,
    pub direction: SortDirection,
    /// Type the column was sorted as (override or detected).
    pub column_type: ColumnType,
    /// Number of body rows that were reordered.
    pub rows: usize,
}

#[derive(Debug, Clone)]
struct HeaderBinding {
    id: String,
    sortable: bool,
}

/// One bound table: its header IDs and its sort state.
#[derive(Debug, Clone)]
pub struct SortableTable {
    table_id: String,
    headers: Vec<HeaderBinding>,
    state: TableSortState,
}

impl SortableTable {
    /// Bind a table element.
    ///
    /// Every `th` of the table (nested tables excluded) becomes a column, in
    /// document order. Sortable headers get the sortable class and become
    /// clickable. Returns `None` when the table has no `tbody` or no `th`.
    pub fn bind(table: &mut Element, config: &SortConfig) -> Option<Self> {
        if first_body_id(table).is_none() {
            log::debug!("[tablesort] table {} has no tbody, skipping", table.id);
            return None;
        }

        let header_ids = query_tag(table, "th", Some("table"))
            .into_iter()
            .map(|th| th.id.clone())
            .collect::<Vec<_>>();
        if header_ids.is_empty() {
            log::debug!("[tablesort] table {} has no headers, skipping", table.id);
            return None;
        }

        let mut headers = Vec::with_capacity(header_ids.len());
        for (index, id) in header_ids.into_iter().enumerate() {
            let Some(header) = find_element_mut(table, &id) else {
                continue;
            };
            let spec = ColumnSpec::from_header(index, header, config);
            if spec.sortable {
                header.add_class(config.sortable_class.clone());
                header.clickable = true;
            }
            headers.push(HeaderBinding {
                id,
                sortable: spec.sortable,
            });
        }

        log::debug!(
            "[tablesort] bound table {} with {} columns",
            table.id,
            headers.len()
        );
        Some(Self {
            table_id: table.id.clone(),
            headers,
            state: TableSortState::new(),
        })
    }

    pub fn id(&self) -> &str {
        &self.table_id
    }

    pub fn state(&self) -> &TableSortState {
        &self.state
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn header_id(&self, column: usize) -> Option<&str> {
        self.headers.get(column).map(|h| h.id.as_str())
    }

    pub fn is_sortable(&self, column: usize) -> bool {
        self.headers.get(column).is_some_and(|h| h.sortable)
    }

    /// Column of the sortable header that is or contains `target`.
    pub fn column_for_target(&self, root: &Element, target: &str) -> Option<usize> {
        self.headers.iter().position(|binding| {
            binding.sortable
                && find_element(root, &binding.id).is_some_and(|h| contains_element(h, target))
        })
    }

    /// Sort the table body by `column`, as a click on its header does.
    ///
    /// Returns `None` without touching state or markup when the column is
    /// unknown or opted out, or the body has no rows.
    pub fn sort_by(
        &mut self,
        table: &mut Element,
        column: usize,
        config: &SortConfig,
    ) -> Option<SortOutcome> {
        if !self.is_sortable(column) {
            return None;
        }

        let body_id = first_body_id(table)?;
        let texts = {
            let body = find_element(table, &body_id)?;
            let rows = body.children_with_tag("tr").collect::<Vec<_>>();
            if rows.is_empty() {
                log::debug!("[tablesort] table {} has no rows, ignoring click", self.table_id);
                return None;
            }
            rows.into_iter()
                .map(|row| cell_text(row, column))
                .collect::<Vec<_>>()
        };

        let direction = self.state.activate(column);
        self.update_indicators(table, column, direction, config);

        let type_override = self
            .header_id(column)
            .and_then(|id| find_element(&*table, id))
            .and_then(|header| ColumnSpec::from_header(column, header, config).type_override);
        let column_type = resolve_type(type_override, &texts);
        let order = sort_order(&texts, column_type, direction);

        let body = find_element_mut(table, &body_id)?;
        reorder_rows(body, &order);

        log::debug!(
            "[tablesort] sorted table {} by column {} ({}, {}) rows={}",
            self.table_id,
            column,
            column_type,
            direction,
            order.len()
        );
        Some(SortOutcome {
            table_id: self.table_id.clone(),
            column,
            direction,
            column_type,
            rows: order.len(),
        })
    }

    fn update_indicators(
        &self,
        table: &mut Element,
        column: usize,
        direction: SortDirection,
        config: &SortConfig,
    ) {
        for (index, binding) in self.headers.iter().enumerate() {
            let Some(header) = find_element_mut(table, &binding.id) else {
                continue;
            };
            header.remove_class(&config.ascending_class);
            header.remove_class(&config.descending_class);
            if index == column {
                header.add_class(if direction.is_ascending() {
                    config.ascending_class.clone()
                } else {
                    config.descending_class.clone()
                });
            }
        }
    }
}

/// All bound tables of an element tree.
#[derive(Debug, Clone, Default)]
pub struct SortableTables {
    config: SortConfig,
    tables: Vec<SortableTable>,
}

/// Bind every table in `root` that carries the configured table class.
///
/// Tables without a body or headers are skipped. Call
/// [`SortableTables::attach`] (or dispatch [`Event::Inserted`]) to pick up
/// tables added later.
pub fn init_sortable_tables(root: &mut Element, config: SortConfig) -> SortableTables {
    let mut tables = SortableTables::new(config);
    tables.attach(root);
    tables
}

impl SortableTables {
    pub fn new(config: SortConfig) -> Self {
        Self {
            config,
            tables: Vec::new(),
        }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn tables(&self) -> &[SortableTable] {
        &self.tables
    }

    pub fn table(&self, table_id: &str) -> Option<&SortableTable> {
        self.tables.iter().find(|t| t.table_id == table_id)
    }

    /// Bind matching tables that are not bound yet. Returns how many were
    /// newly bound.
    pub fn attach(&mut self, root: &mut Element) -> usize {
        let mut candidates = Vec::new();
        if self.is_candidate(root) {
            candidates.push(root.id.clone());
        }
        candidates.extend(
            query_tag(root, "table", None)
                .into_iter()
                .filter(|t| self.is_candidate(t))
                .map(|t| t.id.clone()),
        );

        let mut bound = 0;
        for id in candidates {
            if self.table(&id).is_some() {
                continue;
            }
            let Some(table) = find_element_mut(root, &id) else {
                continue;
            };
            if let Some(sortable) = SortableTable::bind(table, &self.config) {
                self.tables.push(sortable);
                bound += 1;
            }
        }
        bound
    }

    fn is_candidate(&self, el: &Element) -> bool {
        el.tag == "table" && el.has_class(&self.config.table_class)
    }

    /// React to an event on the tree.
    ///
    /// Left clicks on (or inside) a sortable header sort its table;
    /// [`Event::Inserted`] binds newly inserted tables. Returns the outcome
    /// of a sort, if one happened.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> Option<SortOutcome> {
        match event {
            Event::Click {
                target: Some(target),
                button: MouseButton::Left,
            } => self.click_header(root, target),
            Event::Inserted { parent } => {
                let bound = self.attach(root);
                log::trace!("[tablesort] insertion under {parent}: bound {bound} new tables");
                None
            }
            _ => None,
        }
    }

    /// Handle a click on the element `target`.
    pub fn click_header(&mut self, root: &mut Element, target: &str) -> Option<SortOutcome> {
        let tree: &Element = root;
        // Innermost table first, for headers containing nested tables.
        let (table_idx, column) = self
            .tables
            .iter()
            .enumerate()
            .rev()
            .find_map(|(idx, t)| t.column_for_target(tree, target).map(|col| (idx, col)))?;

        self.sort_column_at(root, table_idx, column)
    }

    /// Sort a bound table by column index.
    pub fn sort_column(
        &mut self,
        root: &mut Element,
        table_id: &str,
        column: usize,
    ) -> Option<SortOutcome> {
        let table_idx = self.tables.iter().position(|t| t.table_id == table_id)?;
        self.sort_column_at(root, table_idx, column)
    }

    fn sort_column_at(
        &mut self,
        root: &mut Element,
        table_idx: usize,
        column: usize,
    ) -> Option<SortOutcome> {
        let sortable = self.tables.get_mut(table_idx)?;
        let Some(table) = find_element_mut(root, &sortable.table_id) else {
            log::warn!("[tablesort] table {} is no longer in the tree", sortable.table_id);
            return None;
        };
        sortable.sort_by(table, column, &self.config)
    }
}

fn first_body_id(table: &Element) -> Option<String> {
    query_tag(table, "tbody", Some("table"))
        .first()
        .map(|body| body.id.clone())
}

fn cell_text(row: &Element, column: usize) -> String {
    row.child_elements()
        .iter()
        .filter(|cell| CELL_TAGS.contains(&cell.tag.as_str()))
        .nth(column)
        .map(Element::text_content)
        .unwrap_or_default()
}

/// Move the body's `tr` children into `order`, after any other children.
fn reorder_rows(body: &mut Element, order: &[usize]) {
    let Some(children) = body.content.children_mut() else {
        return;
    };

    let (rows, mut rest): (Vec<Element>, Vec<Element>) =
        std::mem::take(children).into_iter().partition(|c| c.tag == "tr");

    let mut slots = rows.into_iter().map(Some).collect::<Vec<_>>();
    rest.extend(order.iter().filter_map(|&idx| slots.get_mut(idx).and_then(Option::take)));
    *children = rest;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_text_skips_non_cells_and_missing() {
        let row = Element::tr()
            .child(Element::th("a"))
            .child(Element::new("script"))
            .child(Element::td(" b "));
        assert_eq!(cell_text(&row, 0), "a");
        assert_eq!(cell_text(&row, 1), " b ");
        assert_eq!(cell_text(&row, 2), "");
    }

    #[test]
    fn test_reorder_rows_keeps_other_children_first() {
        let mut body = Element::tbody()
            .child(Element::tr().id("r0"))
            .child(Element::new("template").id("tpl"))
            .child(Element::tr().id("r1"))
            .child(Element::tr().id("r2"));

        reorder_rows(&mut body, &[2, 0, 1]);
        let ids: Vec<_> = body.child_elements().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["tpl", "r2", "r0", "r1"]);
    }
}
