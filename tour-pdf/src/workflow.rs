//! Workflow grouping
//!
//! Partitions canonical order records into named groups for the listing
//! page. Group order is the first-seen order of workflow tags, which for
//! legacy summaries reproduces the fixed section order (Participant
//! Orders, Host Order, Extra Demo Orders).

use crate::summary::OrderRecord;

/// A named group of orders sharing one workflow tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowGroup {
    pub name: String,
    pub orders: Vec<OrderRecord>,
}

/// Group records by workflow tag, preserving first-seen group order
///
/// A group with zero orders is never emitted.
pub fn group_by_workflow(orders: Vec<OrderRecord>) -> Vec<WorkflowGroup> {
    let mut groups: Vec<WorkflowGroup> = Vec::new();

    for order in orders {
        match groups.iter_mut().find(|g| g.name == order.workflow) {
            Some(group) => group.orders.push(order),
            None => groups.push(WorkflowGroup {
                name: order.workflow.clone(),
                orders: vec![order],
            }),
        }
    }

    groups
}
