//! Full customer interactions against a stocked machine.

use std::sync::Arc;
use vend_core::{
    BoxedProduct, CottonCandy, Diagnostic, MintDrops, Product, RecordingSink, Size, Snickers,
    Taco, VendingMachine,
};

fn stocked_machine() -> (VendingMachine, Arc<RecordingSink>) {
    let sink = RecordingSink::shared();
    let products: Vec<BoxedProduct> = vec![
        Box::new(Snickers::new(1, 20.0, "Snickers", Size::Large)),
        Box::new(CottonCandy::new_reporting(
            2,
            50.0,
            "Cotton Candy",
            "Strawberry",
            sink.as_ref(),
        )),
        Box::new(MintDrops::new(3, 30.0, "Mint Drops", 4).unwrap()),
        Box::new(Taco::new(4, 60.0, "Taco")),
    ];
    (VendingMachine::with_sink(products, sink.clone()), sink)
}

#[test]
fn buy_taco_and_collect_change() {
    let (mut vm, sink) = stocked_machine();

    vm.add_currency(100);
    assert_eq!(vm.balance(), 100.0);
    assert_eq!(vm.describe(4), "Taco is not spicy and costs 60.00 SEK.");

    let taco = vm.purchase(4).expect("taco should be affordable");
    assert_eq!(taco.id(), 4);
    assert_eq!(taco.use_item(), "You enjoy the Taco.");
    assert_eq!(vm.balance(), 40.0);

    assert_eq!(vm.end_session(), 40.0);
    assert_eq!(vm.balance(), 0.0);
    assert!(sink.is_empty());
}

#[test]
fn short_balance_keeps_money_in_machine() {
    let (mut vm, sink) = stocked_machine();

    vm.add_currency(20);
    assert!(vm.purchase(3).is_none());
    assert_eq!(vm.balance(), 20.0);

    vm.add_currency(10);
    let mints = vm.purchase(3).expect("30 covers the mints");
    assert_eq!(mints.use_item(), "You feel a intense mint sensation.");
    assert_eq!(vm.balance(), 0.0);
    assert_eq!(vm.end_session(), 0.0);

    assert_eq!(sink.len(), 1);
    assert!(matches!(
        sink.diagnostics()[0],
        Diagnostic::InsufficientFunds { id: 3, .. }
    ));
}

#[test]
fn repeated_purchases_of_same_product() {
    let (mut vm, _) = stocked_machine();

    vm.add_currency(50);
    vm.add_currency(10);
    for _ in 0..3 {
        assert_eq!(vm.purchase(1).map(|p| p.id()), Some(1));
    }
    assert_eq!(vm.balance(), 0.0);
    assert_eq!(vm.session().purchases, 3);
    assert!(vm.purchase(1).is_none());
}

#[test]
fn listing_covers_every_variant() {
    let (vm, _) = stocked_machine();

    assert_eq!(
        vm.list_all(),
        vec![
            "ID: 1, Product: Snickers, Name: \"Snickers\", Size: large, Price: 20.0 SEK",
            "ID: 2, Product: CottonCandy, Name: \"Cotton Candy\", Flavor: Strawberry, Price: 50.0 SEK",
            "ID: 3, Product: MintDrops, Name: \"Mint Drops\", Cooling: Intense, Price: 30.0 SEK",
            "ID: 4, Product: Taco, Name: \"Taco\", Spicy: false, Price: 60.00 SEK",
        ]
    );
}
