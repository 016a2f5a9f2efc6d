//! The suspending driver: same semantics as the sync one, one evaluation in
//! flight at a time.

use crate::int_arb;
use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};
use tosscheck::*;

/// For a pure predicate the async driver must report exactly what the sync
/// driver reports, seed for seed.
pub fn test_async_check_agrees_with_sync() {
    for seed in [4u64, 19, 1001] {
        let sync_report = check(
            int_arb(0, 5000),
            |v| v % 11 != 0,
            CheckConfig::default().with_seed(seed),
        );
        let async_report = futures::executor::block_on(check_async(
            int_arb(0, 5000),
            |v| {
                let v = *v;
                async move { v % 11 != 0 }
            },
            CheckConfig::default().with_seed(seed),
        ));
        assert_eq!(sync_report, async_report, "seed {seed}");
    }
}

/// Returns `Pending` once, waking immediately, so an overlapping evaluation
/// would get a chance to run if the driver ever allowed one.
struct YieldOnce(bool);

impl Future for YieldOnce {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// No two candidate evaluations may overlap: each future is awaited to
/// completion before the next probe is chosen.
pub fn test_async_evaluations_are_sequential() {
    let in_flight = Rc::new(Cell::new(0usize));
    let max_in_flight = Rc::new(Cell::new(0usize));

    let gauge = Rc::clone(&in_flight);
    let high_water = Rc::clone(&max_in_flight);
    let report = futures::executor::block_on(check_async(
        int_arb(0, 1000),
        move |v| {
            let v = *v;
            let gauge = Rc::clone(&gauge);
            let high_water = Rc::clone(&high_water);
            async move {
                gauge.set(gauge.get() + 1);
                high_water.set(high_water.get().max(gauge.get()));
                YieldOnce(false).await;
                gauge.set(gauge.get() - 1);
                v < 900
            }
        },
        CheckConfig::default().with_seed(8).with_num_runs(150),
    ));
    assert!(report.failed);
    assert_eq!(max_in_flight.get(), 1);
}
