//! Fixed-column text report over an inventory.

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use stockroom_core::Money;
use stockroom_products::Product;
use thiserror::Error;

use crate::collection::total_value;

const TITLE: &str = "REPORTE DE INVENTARIO - TIENDA EN LÍNEA";
const TITLE_RULE_WIDTH: usize = 40;

const NAME_WIDTH: usize = 20;
const PRICE_WIDTH: usize = 15;
const QUANTITY_WIDTH: usize = 10;
const VALUE_WIDTH: usize = 20;
const TABLE_RULE_WIDTH: usize = 65;
const TOTAL_LABEL_WIDTH: usize = 45;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("cannot create report file {}: {source}", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write report file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Render the report for `products`, in order.
pub fn render_report(products: &[Product]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE_RULE_WIDTH));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<NAME_WIDTH$}{:<PRICE_WIDTH$}{:<QUANTITY_WIDTH$}{:<VALUE_WIDTH$}",
        "PRODUCTO", "PRECIO", "CANTIDAD", "VALOR INVENTARIO"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH));

    for product in products {
        let _ = writeln!(
            out,
            "{:<NAME_WIDTH$}{:<PRICE_WIDTH$}{:<QUANTITY_WIDTH$}{:<VALUE_WIDTH$}",
            product.name(),
            product.price(),
            product.quantity(),
            product.inventory_value()
        );
    }

    let _ = writeln!(out, "{}", "=".repeat(TABLE_RULE_WIDTH));
    let _ = writeln!(out, "{}", total_line(total_value(products)));

    out
}

fn total_line(total: Money) -> String {
    format!(
        "{:<TOTAL_LABEL_WIDTH$}${}",
        "VALOR TOTAL DEL INVENTARIO:", total
    )
}

/// Render the report and write it to `path`, replacing any existing file.
///
/// The report is fully rendered before the file is opened, so a file that
/// cannot be created receives no content at all.
pub fn write_report(products: &[Product], path: impl AsRef<Path>) -> Result<(), ReportError> {
    let path = path.as_ref();
    let rendered = render_report(products);

    let mut file = File::create(path).map_err(|source| ReportError::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(rendered.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|source| ReportError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        path = %path.display(),
        products = products.len(),
        bytes = rendered.len(),
        "inventory report written"
    );
    Ok(())
}
