/*
 * conditional.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! `@if` / `@else-if` / `@else` chain resolution.
//!
//! A chain starts at an `@if` element and continues through the element
//! siblings directly after it that carry `@else-if` or `@else` (text between
//! them is skipped). Resolving a chain keeps at most one of its elements,
//! with its directive stripped, and detaches the others.

use crate::error::{RenderError, RenderResult};
use crate::expression::evaluate;
use creamy_markup::{Branch, Document, NodeId};
use tracing::trace;

/// Resolve the chain rooted at `id`, if `id` is an `@if` element.
///
/// Elements without a branch directive are left alone. After this returns,
/// `id` may have been detached; check [`Document::parent`].
///
/// # Errors
///
/// An `@else-if` or `@else` element reached here was not consumed by an
/// earlier `@if`, which is a [`RenderError::DanglingElseIf`] or
/// [`RenderError::DanglingElse`].
pub(crate) fn resolve_chain(doc: &mut Document, id: NodeId) -> RenderResult<()> {
    let Some(element) = doc.element_mut(id) else {
        return Ok(());
    };

    let condition = match element.take_branch() {
        None => return Ok(()),
        Some(Branch::If(condition)) => condition,
        Some(Branch::ElseIf(condition)) => {
            return Err(RenderError::DanglingElseIf {
                element: element.name.clone(),
                condition,
            });
        }
        Some(Branch::Else) => {
            return Err(RenderError::DanglingElse {
                element: element.name.clone(),
            });
        }
    };

    if evaluate(&condition) {
        trace!(condition = %condition, "@if selected");
        discard_rest_of_chain(doc, id);
        return Ok(());
    }

    trace!(condition = %condition, "@if rejected");
    let mut next = doc.next_element_sibling(id);
    doc.detach(id);

    while let Some(sibling) = next {
        let following = doc.next_element_sibling(sibling);
        let branch = doc
            .element(sibling)
            .and_then(|e| e.directives.branch.as_ref());

        let (selected, else_if) = match branch {
            Some(Branch::Else) => (true, false),
            Some(Branch::ElseIf(condition)) => (evaluate(condition), true),
            // A plain element or a new @if ends the chain with nothing selected.
            _ => break,
        };

        if selected {
            if let Some(element) = doc.element_mut(sibling) {
                element.take_branch();
            }
            if else_if {
                discard_rest_of_chain(doc, sibling);
            }
            break;
        }

        doc.detach(sibling);
        next = following;
    }

    Ok(())
}

/// Detach the `@else-if` / `@else` elements that directly follow `id`.
fn discard_rest_of_chain(doc: &mut Document, id: NodeId) {
    while let Some(next) = doc.next_element_sibling(id) {
        let continues = doc
            .element(next)
            .and_then(|e| e.directives.branch.as_ref())
            .is_some_and(Branch::continues_chain);
        if !continues {
            break;
        }
        doc.detach(next);
    }
}
