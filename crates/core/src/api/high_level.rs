//! High-level document API.
//!
//! Provides the main public entry points:
//! - `layout_records()` - group and lay out records as cells
//! - `render_document()` - produce the PDF bytes for a table
//! - `generate_document()` - render and persist the PDF to a path

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::group::{GroupOrder, GroupedTable, group_records};
use crate::layout::{self, Cell, TableParams, table_extent};
use crate::model::{ColumnSpec, Record};
use crate::pdf::{ContentStream, DocumentInfo, PageSize, write_single_page};
use crate::render::{Theme, paint_cells};
use crate::storage::{FsAccess, StorageAccess, persist};

/// Options for document generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentOptions {
    /// Row geometry and label placement.
    pub params: TableParams,

    /// Page size; the table is drawn on a single page of this size.
    pub page: PageSize,

    /// Fonts, colours and border styling.
    pub theme: Theme,

    /// Order of groups down the page.
    pub group_order: GroupOrder,

    /// Whether to FlateDecode-compress the page contents.
    pub compress: bool,

    /// Document title stored in the info dictionary.
    pub title: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            params: TableParams::default(),
            page: PageSize::default(),
            theme: Theme::default(),
            group_order: GroupOrder::default(),
            compress: true,
            title: None,
        }
    }
}

impl DocumentOptions {
    /// Validates every nested setting.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()?;
        self.page.validate()?;
        self.theme.validate()
    }
}

/// A laid-out table: the groups it came from and the cells to draw.
#[derive(Debug, Clone)]
pub struct TableLayout {
    pub groups: GroupedTable,
    pub cells: Vec<Cell>,
    /// Vertical extent from the table origin.
    pub extent: f64,
}

/// Groups records and lays them out as cells.
pub fn layout_records(
    records: &[Record],
    columns: &ColumnSpec,
    options: &DocumentOptions,
) -> Result<TableLayout> {
    options.validate()?;
    let groups = group_records(records.iter().cloned(), options.group_order);
    let cells = layout::render(&groups, columns, &options.params);
    let extent = table_extent(&groups, &options.params);
    Ok(TableLayout {
        groups,
        cells,
        extent,
    })
}

/// Renders the table as a single-page PDF and returns its bytes.
pub fn render_document(
    records: &[Record],
    columns: &ColumnSpec,
    options: &DocumentOptions,
) -> Result<Vec<u8>> {
    let table = layout_records(records, columns, options)?;

    let bottom = options.params.origin.y + table.extent;
    if bottom > options.page.height {
        tracing::warn!(
            bottom,
            page_height = options.page.height,
            "table does not fit on the page; rows past the bottom edge are clipped"
        );
    }

    let mut content = ContentStream::new(options.page.height);
    paint_cells(
        &mut content,
        &table.cells,
        &options.theme,
        options.params.text_inset,
    );

    let info = DocumentInfo {
        title: options.title.clone(),
        ..DocumentInfo::default()
    };
    write_single_page(content.as_bytes(), &options.page, &info, options.compress)
}

/// Renders the table and writes it to `path`, checking filesystem access first.
///
/// Returns the path that was written.
pub fn generate_document(
    records: &[Record],
    columns: &ColumnSpec,
    path: impl AsRef<Path>,
    options: &DocumentOptions,
) -> Result<PathBuf> {
    generate_document_with(records, columns, path, options, &FsAccess)
}

/// Like [`generate_document`] with an explicit storage gate.
///
/// Nothing is rendered when the gate refuses access.
pub fn generate_document_with(
    records: &[Record],
    columns: &ColumnSpec,
    path: impl AsRef<Path>,
    options: &DocumentOptions,
    access: &dyn StorageAccess,
) -> Result<PathBuf> {
    let path = path.as_ref();
    access.check(path)?;
    let bytes = render_document(records, columns, options)?;
    persist(path, &bytes)?;
    Ok(path.to_path_buf())
}
