//! # Walkthrough
//!
//! Scripted customer visits used by the demo binary.
//!
//! 1. List the assortment.
//! 2. Insert 100, look at product 4, buy it, collect change.
//! 3. Insert 20, look at product 3, try to buy it without enough money.

use std::io::{self, Write};
use vend_core::product::format_plain;
use vend_core::{Product, ProductId, VendingMachine};

/// One customer visit
#[derive(Debug, Clone, Copy)]
pub struct Visit {
    pub insert: i32,
    pub product: ProductId,
    pub end_session: bool,
}

/// The two visits of the demo script
pub const SCRIPT: [Visit; 2] = [
    Visit {
        insert: 100,
        product: 4,
        end_session: true,
    },
    Visit {
        insert: 20,
        product: 3,
        end_session: false,
    },
];

/// Print the assortment, then play each visit against `vm`
pub fn run(vm: &mut VendingMachine, visits: &[Visit], out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Assortment:")?;
    for line in vm.list_all() {
        writeln!(out, "  {}", line)?;
    }

    for visit in visits {
        writeln!(out)?;
        play(vm, visit, out)?;
    }
    Ok(())
}

fn play(vm: &mut VendingMachine, visit: &Visit, out: &mut impl Write) -> io::Result<()> {
    vm.add_currency(visit.insert);
    writeln!(out, "Balance: {}", format_plain(vm.balance()))?;
    writeln!(out, "{}", vm.describe(visit.product))?;

    if let Some(product) = vm.purchase(visit.product) {
        writeln!(out, "{}", product.use_item())?;
    }

    if visit.end_session {
        writeln!(out, "Change: {}", format_plain(vm.end_session()))?;
    }
    Ok(())
}
