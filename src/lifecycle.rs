use crate::error::{Error, Result};
use crate::models::{Order, OrderStatus};

/// A staff action that moves an order forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    StartPreparation,
    Complete,
    MarkPaid,
}

impl Transition {
    /// Last path segment of `PUT /orders/{id}/...`.
    pub fn endpoint(self) -> &'static str {
        match self {
            Transition::StartPreparation => "prepared",
            Transition::Complete => "complete",
            Transition::MarkPaid => "paid",
        }
    }

    pub fn target(self) -> OrderStatus {
        match self {
            Transition::StartPreparation => OrderStatus::InPreparation,
            Transition::Complete => OrderStatus::Completed,
            Transition::MarkPaid => OrderStatus::Paid,
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verb = match self {
            Transition::StartPreparation => "start preparing",
            Transition::Complete => "complete",
            Transition::MarkPaid => "mark as paid",
        };
        f.write_str(verb)
    }
}

impl OrderStatus {
    /// Position in the workflow; also the preparation screen's grouping order.
    pub fn rank(self) -> u8 {
        match self {
            OrderStatus::Open => 0,
            OrderStatus::InPreparation => 1,
            OrderStatus::Completed => 2,
            OrderStatus::Paid => 3,
        }
    }

    pub fn is_open(self) -> bool {
        self == OrderStatus::Open
    }

    /// Applies a staff action. Re-applying the action an order already went
    /// through is accepted as-is; anything that would move it backwards is not.
    pub fn apply(self, transition: Transition) -> Result<OrderStatus> {
        let target = transition.target();
        if self == target {
            return Ok(self);
        }

        let allowed = match transition {
            Transition::StartPreparation => self == OrderStatus::Open,
            Transition::Complete => matches!(self, OrderStatus::Open | OrderStatus::InPreparation),
            Transition::MarkPaid => self != OrderStatus::Paid,
        };

        if allowed {
            Ok(target)
        } else {
            Err(Error::InvalidTransition {
                from: self,
                action: transition,
            })
        }
    }
}

/// The button the preparation screen offers for an order, if any.
pub fn next_action(status: OrderStatus) -> Option<Transition> {
    match status {
        OrderStatus::Open | OrderStatus::InPreparation => Some(Transition::Complete),
        OrderStatus::Completed | OrderStatus::Paid => None,
    }
}

/// Open orders first, then by workflow stage; newest first within a stage.
pub fn sort_for_preparation(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        a.status
            .rank()
            .cmp(&b.status.rank())
            .then_with(|| b.id.cmp(&a.id))
    });
}

pub fn open_orders(orders: &[Order]) -> Vec<&Order> {
    orders.iter().filter(|o| o.status.is_open()).collect()
}
