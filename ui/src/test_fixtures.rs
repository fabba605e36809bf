//! Builders shared by the unit tests.

use jiff::Timestamp;
use payloads::{AuctionId, Role, responses};
use rust_decimal::Decimal;
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::utils::timer::Scheduler;

pub const START: &str = "2025-03-01T10:00:00Z";
pub const END: &str = "2025-03-03T10:00:00Z";

pub fn ts(s: &str) -> Timestamp {
    s.parse().unwrap()
}

pub fn detail(id: &str) -> responses::AuctionDetail {
    responses::AuctionDetail {
        id: AuctionId::from(id),
        title: "Vintage Film Camera".to_string(),
        description: "Fully working. Comes with a leather case.".to_string(),
        category: None,
        condition: "Used".to_string(),
        starting_bid: Decimal::from(1500),
        current_bid: None,
        image: None,
        start_time: ts(START),
        end_time: ts(END),
        created_by: None,
    }
}

pub fn bidder(username: &str) -> responses::Bidder {
    responses::Bidder {
        user_id: None,
        username: username.to_string(),
        profile_image: None,
        amount: None,
    }
}

pub fn bidder_with_amount(username: &str, amount: i64) -> responses::Bidder {
    responses::Bidder {
        amount: Some(Decimal::from(amount)),
        ..bidder(username)
    }
}

pub fn item_with_bidders(
    id: &str,
    usernames: &[&str],
) -> responses::AuctionItemWithBidders {
    responses::AuctionItemWithBidders {
        auction_item: detail(id),
        bidders: usernames.iter().map(|name| bidder(name)).collect(),
    }
}

pub fn profile(role: Role) -> responses::UserProfile {
    responses::UserProfile {
        id: "u1".to_string(),
        username: "sam".to_string(),
        email: None,
        role,
        profile_image: None,
    }
}

/// A `Scheduler` that only moves when told to.
#[derive(Clone, Default)]
pub struct ManualClock {
    inner: Rc<RefCell<ClockInner>>,
}

#[derive(Default)]
struct ClockInner {
    now: u32,
    tasks: Vec<ClockTask>,
}

struct ClockTask {
    due: u32,
    cancelled: Rc<Cell<bool>>,
    run: Option<Box<dyn FnOnce()>>,
}

pub struct ClockHandle(Rc<Cell<bool>>);

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.0.set(true);
    }
}

impl Scheduler for ManualClock {
    type Handle = ClockHandle;

    fn schedule(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ClockHandle {
        let cancelled = Rc::new(Cell::new(false));
        let mut inner = self.inner.borrow_mut();
        let due = inner.now + millis;
        inner.tasks.push(ClockTask {
            due,
            cancelled: cancelled.clone(),
            run: Some(callback),
        });
        ClockHandle(cancelled)
    }
}

impl ManualClock {
    /// Move time forward and run whatever fell due.
    pub fn advance(&self, millis: u32) {
        let due: Vec<_> = {
            let mut inner = self.inner.borrow_mut();
            inner.now += millis;
            let now = inner.now;
            inner
                .tasks
                .iter_mut()
                .filter(|task| task.due <= now && !task.cancelled.get())
                .filter_map(|task| task.run.take())
                .collect()
        };
        for run in due {
            run();
        }
    }

    /// Callbacks neither run nor cancelled.
    pub fn pending(&self) -> usize {
        self.inner
            .borrow()
            .tasks
            .iter()
            .filter(|task| task.run.is_some() && !task.cancelled.get())
            .count()
    }
}
