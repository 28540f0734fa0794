//! The fixed store scenario.
//!
//! Everything here is sequential: each step prints what it did to `out`, and
//! the only branching is on whether a sale went through.

use std::io::Write;

use stockroom_core::{DomainError, Money};
use stockroom_inventory::{Inventory, write_report};
use stockroom_products::Product;

use crate::config::AppConfig;

const BANNER_RULE: &str = "========================================";

/// The five products the store opens with.
pub fn seed_inventory() -> Inventory {
    [
        Product::new("Laptop Gamer", Money::from_cents(120_000), 10),
        Product::new("Smartphone", Money::from_cents(80_000), 25),
        Product::new("Tablet", Money::from_cents(30_000), 15),
        Product::new("Auriculares", Money::from_cents(15_000), 30),
        Product::new("Teclado Mecánico", Money::from_cents(12_000), 20),
    ]
    .into_iter()
    .collect()
}

/// Run the whole scenario, writing progress lines to `out`.
///
/// A report that cannot be written is logged and reported on stderr; the run
/// carries on. Returns the final inventory state.
pub fn run<W: Write>(config: &AppConfig, out: &mut W) -> anyhow::Result<Inventory> {
    let mut inventory = seed_inventory();
    tracing::info!(products = inventory.len(), "inventory seeded");

    writeln!(out, "=== SISTEMA DE GESTIÓN DE TIENDA EN LÍNEA ===")?;
    writeln!(out)?;
    writeln!(out, "Inventario inicial:")?;
    print_inventory(&inventory, out)?;

    writeln!(out)?;
    writeln!(out, "--- SIMULACIÓN DE OPERACIONES ---")?;

    writeln!(out)?;
    writeln!(out, "OPERACIONES DE VENTA:")?;
    sell(&mut inventory, out, 0, 3)?;
    sell(&mut inventory, out, 1, 5)?;

    writeln!(out)?;
    writeln!(out, "OPERACIONES DE REABASTECIMIENTO:")?;
    restock(&mut inventory, out, 2, 10)?;
    restock(&mut inventory, out, 3, 15)?;

    writeln!(out)?;
    writeln!(out, "ACTUALIZACIÓN DE PRECIOS:")?;
    reprice(&mut inventory, out, 0, Money::from_cents(115_000))?;
    reprice(&mut inventory, out, 4, Money::from_cents(11_000))?;

    writeln!(out)?;
    writeln!(out, "Inventario actualizado:")?;
    print_inventory(&inventory, out)?;

    writeln!(out)?;
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "VALOR TOTAL DEL INVENTARIO: ${}", inventory.total_value())?;
    writeln!(out, "{BANNER_RULE}")?;

    generate_report(&inventory, config, out)?;

    writeln!(out)?;
    writeln!(out, "--- OPERACIONES ADICIONALES ---")?;
    sell(&mut inventory, out, 0, 20)?;
    restock(&mut inventory, out, 0, 5)?;

    writeln!(out)?;
    writeln!(out, "Estado final del inventario:")?;
    print_inventory(&inventory, out)?;

    writeln!(out)?;
    writeln!(
        out,
        "VALOR TOTAL FINAL DEL INVENTARIO: ${}",
        inventory.total_value()
    )?;

    Ok(inventory)
}

fn print_inventory<W: Write>(inventory: &Inventory, out: &mut W) -> anyhow::Result<()> {
    for product in inventory {
        writeln!(out, "{}", product.describe())?;
    }
    Ok(())
}

fn sell<W: Write>(
    inventory: &mut Inventory,
    out: &mut W,
    index: usize,
    amount: u32,
) -> anyhow::Result<()> {
    let product = inventory.get_mut(index)?;
    match product.try_sell(amount) {
        Ok(()) => {
            tracing::info!(product = product.name(), amount, "sale completed");
            writeln!(
                out,
                "Venta exitosa: {amount} unidades de {} vendidas.",
                product.name()
            )?;
        }
        Err(DomainError::InsufficientStock {
            requested,
            available,
        }) => {
            tracing::warn!(product = product.name(), requested, available, "sale rejected");
            writeln!(
                out,
                "Venta fallida: stock insuficiente de {} (solicitadas {requested}, disponibles {available}).",
                product.name()
            )?;
        }
        Err(other) => return Err(other.into()),
    }
    Ok(())
}

fn restock<W: Write>(
    inventory: &mut Inventory,
    out: &mut W,
    index: usize,
    amount: u32,
) -> anyhow::Result<()> {
    let product = inventory.get_mut(index)?;
    product.restock(amount)?;
    tracing::info!(product = product.name(), amount, "restock completed");
    writeln!(
        out,
        "Reabastecidas {amount} unidades de {}.",
        product.name()
    )?;
    Ok(())
}

fn reprice<W: Write>(
    inventory: &mut Inventory,
    out: &mut W,
    index: usize,
    price: Money,
) -> anyhow::Result<()> {
    let product = inventory.get_mut(index)?;
    product.reprice_to(price);
    tracing::info!(product = product.name(), price = %price, "price updated");
    writeln!(out, "Precio de {} actualizado a ${price}", product.name())?;
    Ok(())
}

fn generate_report<W: Write>(
    inventory: &Inventory,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    match write_report(inventory.products(), &config.report_path) {
        Ok(()) => {
            writeln!(
                out,
                "Reporte generado exitosamente: {}",
                config.report_path.display()
            )?;
        }
        Err(err) => {
            tracing::error!(error = %err, "inventory report skipped");
            eprintln!("Error al crear el archivo de reporte.");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_five_products_in_order() {
        let inventory = seed_inventory();
        let names: Vec<&str> = inventory.iter().map(Product::name).collect();
        assert_eq!(
            names,
            [
                "Laptop Gamer",
                "Smartphone",
                "Tablet",
                "Auriculares",
                "Teclado Mecánico"
            ]
        );
        assert_eq!(inventory.total_value(), Money::from_cents(4_340_000));
    }

    #[test]
    fn failed_sale_prints_counts_and_keeps_stock() {
        let mut inventory = seed_inventory();
        let mut out = Vec::new();

        sell(&mut inventory, &mut out, 0, 11).unwrap();

        let printed = String::from_utf8(out).unwrap();
        assert_eq!(
            printed,
            "Venta fallida: stock insuficiente de Laptop Gamer (solicitadas 11, disponibles 10).\n"
        );
        assert_eq!(inventory.get(0).map(Product::quantity), Some(10));
    }

    #[test]
    fn unknown_index_aborts_the_step() {
        let mut inventory = seed_inventory();
        let mut out = Vec::new();

        let err = restock(&mut inventory, &mut out, 7, 1).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DomainError>(),
            Some(&DomainError::NotFound(7))
        );
        assert!(out.is_empty());
    }
}
